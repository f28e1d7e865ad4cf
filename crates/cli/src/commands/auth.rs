//! Identity commands.
//!
//! Login and registration both take an email and nothing else - the
//! storefront performs no credential verification.

use hvrdcr_market_core::Email;
use hvrdcr_market_storefront::error::Result;
use hvrdcr_market_storefront::state::AppState;
use hvrdcr_market_storefront::stores::IdentityStore;

/// Sign in as `email`.
pub fn login(state: &AppState, email: &str) -> Result<()> {
    let email = Email::parse(email)?;
    let mut store = IdentityStore::open(state.snapshot_store());
    store.login(email.clone());
    println!("Signed in as {email}.");
    Ok(())
}

/// Register `email` and sign in.
pub fn register(state: &AppState, email: &str) -> Result<()> {
    let email = Email::parse(email)?;
    let mut store = IdentityStore::open(state.snapshot_store());
    store.register(email.clone());
    println!("Registered and signed in as {email}.");
    Ok(())
}

/// Sign out.
pub fn logout(state: &AppState) {
    let mut store = IdentityStore::open(state.snapshot_store());
    store.logout();
    println!("Signed out.");
}

/// Show the signed-in identity.
pub fn whoami(state: &AppState) {
    let store = IdentityStore::open(state.snapshot_store());
    match store.current() {
        Some(identity) => println!("Signed in as {}.", identity.email),
        None => println!("Not signed in."),
    }
}

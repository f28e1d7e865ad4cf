//! The checkout command.

use hvrdcr_market_storefront::checkout::CheckoutOutcome;
use hvrdcr_market_storefront::error::Result;
use hvrdcr_market_storefront::state::AppState;
use hvrdcr_market_storefront::stores::{CartStore, IdentityStore};

/// Place the order: email the cart contents and clear the cart on success.
///
/// A send failure propagates with the service's descriptive text; the cart
/// is preserved and the command can simply be run again.
pub async fn place_order(state: &AppState) -> Result<()> {
    let mut cart = CartStore::open(state.snapshot_store());
    let identity = IdentityStore::open(state.snapshot_store());

    match state.checkout().place_order(&mut cart, &identity).await? {
        CheckoutOutcome::LoginRequired => {
            println!("Please sign in before checking out: hvrdcr login <email>");
        }
        CheckoutOutcome::EmptyCart => {
            println!("Your cart is empty - nothing to order.");
        }
        CheckoutOutcome::Placed { total, item_count } => {
            println!(
                "Order placed: {item_count} item(s), {}.",
                total.display_rub()
            );
            println!("The order notification has been sent.");
        }
    }
    Ok(())
}

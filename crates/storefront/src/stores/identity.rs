//! The persisted identity store.

use hvrdcr_market_core::{Email, Identity};

use crate::storage::{IDENTITY_KEY, SnapshotStore};

/// Owner of the session's single optional identity.
///
/// Login and registration both replace the identity wholesale with the
/// supplied email; there is no credential verification in this design.
/// The record is mirrored to the identity snapshot key on every change and
/// removed on logout.
#[derive(Debug)]
pub struct IdentityStore {
    identity: Option<Identity>,
    storage: SnapshotStore,
}

impl IdentityStore {
    /// Open the identity store, restoring a persisted identity when a
    /// valid snapshot exists and starting signed-out otherwise.
    #[must_use]
    pub fn open(storage: SnapshotStore) -> Self {
        let identity = storage.load(IDENTITY_KEY);
        Self { identity, storage }
    }

    /// Sign in as `email`, replacing any current identity.
    pub fn login(&mut self, email: Email) {
        self.identity = Some(Identity::new(email));
        if let Some(identity) = &self.identity {
            self.storage.save(IDENTITY_KEY, identity);
        }
    }

    /// Register `email`. Registration is login: the identity is set
    /// unconditionally.
    pub fn register(&mut self, email: Email) {
        self.login(email);
    }

    /// Sign out and drop the persisted identity.
    pub fn logout(&mut self) {
        self.identity = None;
        self.storage.remove(IDENTITY_KEY);
    }

    /// The current identity, if signed in.
    #[must_use]
    pub const fn current(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }
}

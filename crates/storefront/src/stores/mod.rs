//! Process-wide persisted stores.
//!
//! One instance of each store exists per session. All mutation goes through
//! their operations, which update memory first and then synchronously
//! mirror the full state to the snapshot files - callers never see a
//! partial update, and the next load observes the latest write.

pub mod cart;
pub mod identity;

pub use cart::CartStore;
pub use identity::IdentityStore;

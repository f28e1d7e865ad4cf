//! External service clients.

pub mod emailjs;

pub use emailjs::{EmailJsClient, NotifyError, OrderEmail, OrderNotifier};

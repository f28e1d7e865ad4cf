//! The checkout flow.
//!
//! Checkout reads the cart and identity stores, formats the order summary,
//! invokes the notification collaborator once, and clears the cart only on
//! reported success. A missing identity is a gate (the caller routes to
//! sign-in), not an error; a send failure preserves the cart and is
//! surfaced with the collaborator's descriptive text so the visitor can
//! retry. Retries are independent sends - no order id, no deduplication.

use std::sync::atomic::{AtomicBool, Ordering};

use hvrdcr_market_core::{CartEntry, Price};
use thiserror::Error;

use crate::services::{NotifyError, OrderEmail, OrderNotifier};
use crate::stores::{CartStore, IdentityStore};

/// Errors a checkout attempt can surface.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A submission is already pending; this one is rejected.
    #[error("an order submission is already in progress")]
    InFlight,

    /// The notification send failed; the cart is untouched.
    #[error("could not send the order notification: {0}")]
    Notify(#[from] NotifyError),
}

/// How a checkout attempt resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// No identity is present; route to identity acquisition.
    LoginRequired,
    /// The cart holds nothing to order.
    EmptyCart,
    /// The notification was accepted and the cart has been cleared.
    Placed {
        /// Formatted order total.
        total: Price,
        /// Item count of the order just placed.
        item_count: u64,
    },
}

/// The checkout flow over an injected notifier.
#[derive(Debug)]
pub struct Checkout<N> {
    notifier: N,
    from_name: String,
    in_flight: AtomicBool,
}

impl<N: OrderNotifier> Checkout<N> {
    /// Create a checkout flow sending through `notifier`, labelled with the
    /// configured sender name.
    pub fn new(notifier: N, from_name: impl Into<String>) -> Self {
        Self {
            notifier,
            from_name: from_name.into(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Run one checkout attempt.
    ///
    /// Invokes the notifier exactly once per call that passes the identity
    /// and non-empty-cart gates; the cart is cleared only after the
    /// notifier reports success.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::InFlight`] when a previous attempt has not resolved
    /// yet, and [`CheckoutError::Notify`] when the send fails - in both
    /// cases the cart is left exactly as it was.
    pub async fn place_order(
        &self,
        cart: &mut CartStore,
        identity: &IdentityStore,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        let Some(identity) = identity.current() else {
            return Ok(CheckoutOutcome::LoginRequired);
        };
        if cart.is_empty() {
            return Ok(CheckoutOutcome::EmptyCart);
        }

        let _guard = InFlightGuard::acquire(&self.in_flight).ok_or(CheckoutError::InFlight)?;

        let total = cart.subtotal();
        let item_count = cart.total_item_count();
        let order = OrderEmail {
            from_name: self.from_name.clone(),
            user_email: identity.email.to_string(),
            email: identity.email.to_string(),
            order_details: format_order_lines(cart.entries()),
            total_price: total.display_rub(),
        };

        self.notifier.send_order(&order).await?;

        cart.clear();
        tracing::info!(item_count, "order placed");
        Ok(CheckoutOutcome::Placed { total, item_count })
    }
}

/// Human-readable order summary, one line per entry.
#[must_use]
pub fn format_order_lines(entries: &[CartEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "- {} (x{}): {}",
                entry.product.name(),
                entry.quantity,
                entry.line_total().display_rub()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Releases the in-flight flag on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

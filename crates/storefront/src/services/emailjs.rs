//! EmailJS order notification client.
//!
//! Checkout reports a completed order by sending a transactional email
//! through EmailJS: one POST carrying the service id, the template id, the
//! public client key, and the template's key-value parameters. There is no
//! order-management backend behind it.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use thiserror::Error;

use crate::config::EmailJsConfig;

/// EmailJS REST endpoint.
const SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Fallback when a failed send carries no descriptive text.
const GENERIC_SEND_ERROR: &str = "The notification service reported an unknown error.";

/// Errors that can occur when sending the order notification.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-2xx status. `text` carries the
    /// service's descriptive message when it provided one.
    #[error("notification service error ({status}): {text}")]
    Api { status: u16, text: String },
}

/// Template parameters of one order notification.
///
/// Field names match the EmailJS template bindings; `user_email` and
/// `email` intentionally duplicate the recipient because the template binds
/// both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderEmail {
    pub from_name: String,
    pub user_email: String,
    pub email: String,
    pub order_details: String,
    pub total_price: String,
}

/// The seam between checkout and the outside world.
///
/// Checkout is generic over this trait so the flow's contracts (notifier
/// invoked exactly once per attempt, cart cleared only on reported
/// success) are testable without a network.
pub trait OrderNotifier {
    /// Deliver one order notification. Each call is independent; retrying
    /// after a failure re-sends with no deduplication.
    fn send_order(
        &self,
        order: &OrderEmail,
    ) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// EmailJS-backed [`OrderNotifier`].
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: reqwest::Client,
    service_id: String,
    template_id: String,
    public_key: SecretString,
}

impl EmailJsClient {
    /// Create a client for the configured EmailJS service and template.
    #[must_use]
    pub fn new(config: &EmailJsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
        }
    }
}

impl OrderNotifier for EmailJsClient {
    async fn send_order(&self, order: &OrderEmail) -> Result<(), NotifyError> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: self.public_key.expose_secret(),
            template_params: order,
        };

        let response = self.client.post(SEND_URL).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), "order notification failed");
            let text = if text.is_empty() {
                GENERIC_SEND_ERROR.to_string()
            } else {
                text
            };
            return Err(NotifyError::Api {
                status: status.as_u16(),
                text,
            });
        }

        tracing::info!(recipient = %order.user_email, "order notification sent");
        Ok(())
    }
}

/// POST body of the send call.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    /// EmailJS names the public client key `user_id` on the wire.
    user_id: &'a str,
    template_params: &'a OrderEmail,
}

//! Handing a rendered order to a delivery mechanism.
//!
//! `OrderTransport` is the seam: the browser-based compose link is one
//! implementation, and anything else (an HTTP order endpoint, a queue) can be
//! substituted without touching message rendering or the estimator.

use serde::Serialize;
use tracing::{info, warn};

use super::compose::MailProvider;
use super::message::{render_order, OrderMessage, OrderRequest};
use crate::config::StoreSettings;
use crate::error::{LedPanelsError, Result};

/// Delivers a rendered order message somewhere outside this process.
pub trait OrderTransport {
    fn send(&self, message: &OrderMessage) -> Result<()>;
}

/// Opens a pre-filled webmail compose page in the system browser.
///
/// Success only means the browser was launched; delivery is up to the user.
#[derive(Debug, Clone)]
pub struct BrowserTransport {
    provider: MailProvider,
    recipient: String,
}

impl BrowserTransport {
    pub fn new(provider: MailProvider, recipient: impl Into<String>) -> Self {
        Self {
            provider,
            recipient: recipient.into(),
        }
    }

    pub fn from_settings(settings: &StoreSettings) -> Self {
        Self::new(settings.mail_provider, settings.business_email.clone())
    }

    pub fn compose_url(&self, message: &OrderMessage) -> String {
        self.provider.compose_url(&self.recipient, message)
    }
}

impl OrderTransport for BrowserTransport {
    fn send(&self, message: &OrderMessage) -> Result<()> {
        let url = self.compose_url(message);
        info!("Opening {} compose window", self.provider.display_name());
        open::that(&url).map_err(|e| LedPanelsError::Dispatch(e.to_string()))
    }
}

/// What the user should see after an order handoff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// The transport accepted the message
    Sent,
    /// The transport failed; show `notice` so the user can email directly
    Fallback { notice: String },
}

/// Message shown when the order could not be handed off.
pub fn fallback_notice(business_email: &str) -> String {
    format!("Please email us at {} with your order details.", business_email)
}

/// Render `order` and hand it to `transport`. Failures are not retried.
pub fn dispatch_order(
    transport: &dyn OrderTransport,
    order: &OrderRequest,
    settings: &StoreSettings,
) -> DispatchOutcome {
    let message = render_order(order, &settings.business_name, &settings.currency_symbol);

    match transport.send(&message) {
        Ok(()) => {
            info!("Dispatched order for {}", order.product_name);
            DispatchOutcome::Sent
        }
        Err(e) => {
            warn!("Failed to dispatch order for {}: {}", order.product_name, e);
            DispatchOutcome::Fallback {
                notice: fallback_notice(&settings.business_email),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{ComponentToggles, Dimensions, Estimator};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingTransport {
        sent: RefCell<Vec<OrderMessage>>,
    }

    impl OrderTransport for RecordingTransport {
        fn send(&self, message: &OrderMessage) -> Result<()> {
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    struct FailingTransport;

    impl OrderTransport for FailingTransport {
        fn send(&self, _message: &OrderMessage) -> Result<()> {
            Err(LedPanelsError::Dispatch("no browser available".to_string()))
        }
    }

    fn order() -> OrderRequest {
        let estimate = Estimator::default()
            .estimate(&Dimensions::new(48.0, 36.0), &ComponentToggles::default());
        OrderRequest::new("Studio Pro", &estimate).unwrap()
    }

    #[test]
    fn test_dispatch_sends_rendered_message() {
        let transport = RecordingTransport::default();
        let outcome = dispatch_order(&transport, &order(), &StoreSettings::default());

        assert_eq!(outcome, DispatchOutcome::Sent);
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Custom LED Panel Order - Studio Pro");
    }

    #[test]
    fn test_dispatch_failure_falls_back_once() {
        let settings = StoreSettings {
            business_email: "orders@glowworks.test".to_string(),
            ..StoreSettings::default()
        };
        let outcome = dispatch_order(&FailingTransport, &order(), &settings);

        assert_eq!(
            outcome,
            DispatchOutcome::Fallback {
                notice: "Please email us at orders@glowworks.test with your order details."
                    .to_string()
            }
        );
    }

    #[test]
    fn test_browser_transport_uses_settings() {
        let settings = StoreSettings {
            business_email: "orders@glowworks.test".to_string(),
            mail_provider: MailProvider::Yahoo,
            ..StoreSettings::default()
        };
        let transport = BrowserTransport::from_settings(&settings);
        let message = render_order(&order(), &settings.business_name, &settings.currency_symbol);

        let url = transport.compose_url(&message);
        assert!(url.starts_with("https://compose.mail.yahoo.com/?to=orders%40glowworks.test"));
    }

    #[test]
    fn test_outcome_serialize() {
        let json = serde_json::to_string(&DispatchOutcome::Sent).unwrap();
        assert_eq!(json, r#"{"status":"sent"}"#);
    }
}

use std::cell::RefCell;
use std::path::PathBuf;

use ledpanels::config::StoreSettings;
use ledpanels::estimator::{ComponentToggles, Dimensions, Estimator};
use ledpanels::order::*;
use ledpanels::LedPanelsError;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Captures the compose URL instead of opening a browser.
struct CapturingTransport {
    provider: MailProvider,
    recipient: String,
    urls: RefCell<Vec<String>>,
}

impl OrderTransport for CapturingTransport {
    fn send(&self, message: &OrderMessage) -> ledpanels::Result<()> {
        self.urls
            .borrow_mut()
            .push(self.provider.compose_url(&self.recipient, message));
        Ok(())
    }
}

fn settings() -> StoreSettings {
    StoreSettings::load(&fixture_path("store.toml")).expect("fixture settings should load")
}

#[test]
fn test_full_body_template() {
    let estimate = Estimator::default().estimate(&Dimensions::new(48.0, 36.0), &ComponentToggles::all());
    let order = OrderRequest::new("Studio Pro", &estimate).unwrap();
    let message = render_order(&order, "LED Panels", "$");

    // cost with margin 878.125 and total 933.125 both round half up
    let expected = "Dear LED Panels Team,

I would like to place an order for a custom LED panel with the following specifications:

Product: Studio Pro
Dimensions: 48\" × 36\" (4.0' × 3.0')

Component Breakdown:
- Number of Panels: 12
- Number of Transformers: 3
- Number of Stabilizers: 3
- Wire Length: 41 feet
- Casing Units: 4

Expected Pricing:
- Subtotal: $878.13
- Shipping: $55.00
- Total: $933.13

Please confirm the order and provide next steps.

Best regards,
[Your Name]
[Your Phone Number]
[Your Address]";
    assert_eq!(message.body, expected);
}

#[test]
fn test_unambiguous_totals_in_body() {
    // 24 x 24in: 4 panels, 1 transformer, wire ceil(8 * 1.2) + 8 = 18, casing 2
    // subtotal 80 + 35 + 45 + 90 = 250, with margin 312.5, total 367.5
    let estimate = Estimator::default().estimate(&Dimensions::new(24.0, 24.0), &ComponentToggles::default());
    let order = OrderRequest::new("Office Classic", &estimate).unwrap();
    let message = render_order(&order, "LED Panels", "$");

    assert!(message.body.contains("- Wire Length: 18 feet\n"));
    assert!(message.body.contains("- Subtotal: $312.50\n"));
    assert!(message.body.contains("- Shipping: $55.00\n"));
    assert!(message.body.contains("- Total: $367.50\n"));
}

#[test]
fn test_dispatch_through_configured_provider() {
    let settings = settings();
    assert_eq!(settings.mail_provider, MailProvider::Outlook);

    let transport = CapturingTransport {
        provider: settings.mail_provider,
        recipient: settings.business_email.clone(),
        urls: RefCell::new(vec![]),
    };

    let estimate = Estimator::default().estimate(&Dimensions::new(24.0, 24.0), &ComponentToggles::default());
    let order = OrderRequest::new("Office Classic", &estimate).unwrap();

    let outcome = dispatch_order(&transport, &order, &settings);
    assert_eq!(outcome, DispatchOutcome::Sent);

    let urls = transport.urls.borrow();
    assert_eq!(urls.len(), 1);
    assert!(urls[0].starts_with(
        "https://outlook.live.com/mail/0/deeplink/compose?to=orders%40glowworks.test\
         &subject=Custom%20LED%20Panel%20Order%20-%20Office%20Classic&body="
    ));
    assert!(urls[0].contains("Dear%20Glow%20Works%20Team"));
}

#[test]
fn test_order_without_dimensions_is_rejected() {
    let estimate = Estimator::default().estimate(&Dimensions::parse("", ""), &ComponentToggles::default());
    match OrderRequest::new("Office Classic", &estimate) {
        Err(LedPanelsError::MissingDimensions) => {}
        other => panic!("expected MissingDimensions, got {:?}", other),
    }
}

#[test]
fn test_fallback_links_for_configured_provider() {
    let settings = settings();
    let estimate = Estimator::default().estimate(&Dimensions::new(24.0, 24.0), &ComponentToggles::default());
    let order = OrderRequest::new("Office Classic", &estimate).unwrap();
    let message = render_order(&order, &settings.business_name, &settings.currency_symbol);

    let links = fallback_links(settings.mail_provider, &settings.business_email, &message);
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].name, "Gmail");
    assert!(links[0].url.starts_with("https://mail.google.com/mail/?view=cm&fs=1&to=orders%40glowworks.test&su="));
    assert_eq!(links[1].name, "Yahoo Mail");

    assert_eq!(
        fallback_notice(&settings.business_email),
        "Please email us at orders@glowworks.test with your order details."
    );
}

//! Webmail compose URLs pre-filled with an order message.

use serde::{Deserialize, Serialize};

use super::message::OrderMessage;

/// Webmail services that accept a pre-filled compose link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    Gmail,
    Outlook,
    Yahoo,
}

impl MailProvider {
    pub const ALL: [MailProvider; 3] = [MailProvider::Gmail, MailProvider::Outlook, MailProvider::Yahoo];

    pub fn display_name(&self) -> &'static str {
        match self {
            MailProvider::Gmail => "Gmail",
            MailProvider::Outlook => "Outlook",
            MailProvider::Yahoo => "Yahoo Mail",
        }
    }

    /// Compose URL with recipient, subject and body percent-encoded.
    pub fn compose_url(&self, recipient: &str, message: &OrderMessage) -> String {
        let to = urlencoding::encode(recipient);
        let subject = urlencoding::encode(&message.subject);
        let body = urlencoding::encode(&message.body);

        match self {
            MailProvider::Gmail => format!(
                "https://mail.google.com/mail/?view=cm&fs=1&to={}&su={}&body={}",
                to, subject, body
            ),
            MailProvider::Outlook => format!(
                "https://outlook.live.com/mail/0/deeplink/compose?to={}&subject={}&body={}",
                to, subject, body
            ),
            MailProvider::Yahoo => format!(
                "https://compose.mail.yahoo.com/?to={}&subject={}&body={}",
                to, subject, body
            ),
        }
    }
}

/// A named compose link, for offering alternatives to the primary provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposeLink {
    pub name: String,
    pub url: String,
}

/// Compose links for every provider except `primary`, in a fixed order.
pub fn fallback_links(primary: MailProvider, recipient: &str, message: &OrderMessage) -> Vec<ComposeLink> {
    MailProvider::ALL
        .iter()
        .filter(|p| **p != primary)
        .map(|p| ComposeLink {
            name: p.display_name().to_string(),
            url: p.compose_url(recipient, message),
        })
        .collect()
}

//! Order handoff: turn an estimate into an email the customer sends.
//!
//! - **Message**: `OrderRequest` -> subject and plain-text body (pure)
//! - **Compose**: message -> pre-filled webmail URL per provider
//! - **Dispatch**: message -> `OrderTransport`, with a fallback notice on failure

mod compose;
mod dispatch;
mod message;

pub use compose::{fallback_links, ComposeLink, MailProvider};
pub use dispatch::{dispatch_order, fallback_notice, BrowserTransport, DispatchOutcome, OrderTransport};
pub use message::{render_order, OrderMessage, OrderRequest};

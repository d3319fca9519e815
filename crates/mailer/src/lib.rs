//! Contact email dispatch.
//!
//! Building blocks for relaying validated contact-form submissions:
//!
//! - [`MailConfig`] — SMTP settings resolved once from the environment.
//! - [`Mailer`] — the dispatch capability, either a console sink (testing /
//!   fallback) or a real SMTP transport backed by `lettre`.

pub mod config;
pub mod dispatch;

pub use config::MailConfig;
pub use dispatch::{MailError, Mailer};

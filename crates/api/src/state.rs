use std::sync::Arc;

use portfolio_core::PortfolioProfile;
use portfolio_mailer::Mailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Everything in it
/// is immutable after startup, so concurrent reads need no synchronization.
#[derive(Clone)]
pub struct AppState {
    /// The portfolio profile served by the API and the landing page.
    pub profile: Arc<PortfolioProfile>,
    /// Contact email dispatch capability (console sink or SMTP transport).
    pub mailer: Arc<Mailer>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

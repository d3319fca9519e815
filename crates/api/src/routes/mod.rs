//! Route modules and the `/api` route table.

pub mod contact;
pub mod health;
pub mod home;
pub mod portfolio;

use axum::Router;

use crate::state::AppState;

/// All routes mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(portfolio::router())
        .merge(contact::router())
}

use axum::extract::State;
use axum::{routing::get, Json, Router};

use portfolio_core::PortfolioProfile;

use crate::state::AppState;

/// GET /api/portfolio -- the profile as a plain JSON object. Always 200.
///
/// The profile is immutable after startup, so every response body is
/// byte-for-byte identical regardless of request ordering.
async fn get_portfolio(State(state): State<AppState>) -> Json<PortfolioProfile> {
    Json((*state.profile).clone())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/portfolio", get(get_portfolio))
}

use axum::extract::State;
use axum::response::Html;
use axum::{routing::get, Router};
use chrono::Datelike;

use crate::render;
use crate::state::AppState;

/// GET / -- the rendered portfolio landing page. Always 200.
async fn home(State(state): State<AppState>) -> Html<String> {
    let year = chrono::Utc::now().year();
    Html(render::index_page(&state.profile, year))
}

/// Mount the landing page route (root-level).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}

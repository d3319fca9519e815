//! The contact-form endpoint: validate, then dispatch.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{routing::post, Json, Router};

use portfolio_core::{validate, RawContact};

use crate::response::{ContactAccepted, ContactFailed, ContactRejected};
use crate::state::AppState;

/// POST /api/contact -- receive a JSON contact submission and relay it.
///
/// A missing or malformed JSON body is treated as an empty submission, so
/// the caller gets field-level `Required` errors instead of a framework
/// rejection. Validation failures never reach the mailer.
async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<RawContact>, JsonRejection>,
) -> Response {
    let raw = payload.map(|Json(raw)| raw).unwrap_or_default();

    let contact = match validate(&raw) {
        Ok(contact) => contact,
        Err(errors) => {
            tracing::debug!(fields = ?errors.0.keys(), "Contact submission failed validation");
            return (StatusCode::BAD_REQUEST, Json(ContactRejected::new(errors))).into_response();
        }
    };

    if state.mailer.dispatch(&contact).await {
        tracing::info!(reply_to = %contact.email, "Contact submission dispatched");
        (StatusCode::OK, Json(ContactAccepted::new())).into_response()
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ContactFailed::new()),
        )
            .into_response()
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(submit_contact))
}

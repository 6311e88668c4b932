//! Listing review API: list, edit, approve, reject.
//!
//! Every response is the shared [`Envelope`]; wrong verbs fall back to a
//! 405 envelope per route. The store itself performs no validation, so
//! the edit handler owns the presence checks and price coercion.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post, put};
use axum::Router;
use serde_json::{json, Value};

use desk_core::{ListingStatus, ListingUpdate};

use crate::routes::{method_not_allowed, Envelope};
use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/listings",
            get(list_listings).fallback(method_not_allowed),
        )
        .route(
            "/api/listings/{id}/edit",
            put(edit_listing).fallback(method_not_allowed),
        )
        .route(
            "/api/listings/{id}/approve",
            post(approve_listing).fallback(method_not_allowed),
        )
        .route(
            "/api/listings/{id}/reject",
            post(reject_listing).fallback(method_not_allowed),
        )
}

async fn list_listings(State(state): State<Arc<AppState>>) -> Json<Envelope> {
    let store = state.store.read().await;
    Json(Envelope::data(json!(store.listings())))
}

/// Accepts a JSON number or a numeric string, the shapes the edit form
/// can produce.
fn coerce_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

async fn edit_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: String,
) -> (StatusCode, Json<Envelope>) {
    let Ok(body) = serde_json::from_str::<Value>(&body) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(Envelope::failure("Invalid JSON body")),
        );
    };

    // title, location and price must all be present; price may arrive as
    // a string and is coerced. Negative prices are accepted as-is.
    let (Some(title), Some(location)) = (non_empty_str(&body["title"]), non_empty_str(&body["location"]))
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(Envelope::failure("Missing required fields")),
        );
    };
    let price = match &body["price"] {
        Value::Null => {
            return (
                StatusCode::BAD_REQUEST,
                Json(Envelope::failure("Missing required fields")),
            )
        }
        other => match coerce_price(other) {
            Some(p) => p,
            None => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(Envelope::failure("Price must be a number")),
                )
            }
        },
    };

    let update = ListingUpdate {
        title: Some(title.to_string()),
        location: Some(location.to_string()),
        price: Some(price),
        status: None,
    };

    let mut store = state.store.write().await;
    match store.update(&id, update) {
        Ok(listing) => {
            tracing::info!(id = %listing.id, "listing edited");
            (StatusCode::OK, Json(Envelope::data(json!(listing))))
        }
        Err(e) => {
            tracing::warn!(id = %id, error = %e, "edit failed");
            (
                StatusCode::NOT_FOUND,
                Json(Envelope::failure("Listing not found")),
            )
        }
    }
}

async fn approve_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Envelope>) {
    set_status(state, id, ListingStatus::Approved).await
}

async fn reject_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Envelope>) {
    set_status(state, id, ListingStatus::Rejected).await
}

async fn set_status(
    state: Arc<AppState>,
    id: String,
    status: ListingStatus,
) -> (StatusCode, Json<Envelope>) {
    let mut store = state.store.write().await;
    match store.update(&id, ListingUpdate::status(status)) {
        Ok(listing) => {
            tracing::info!(id = %listing.id, status = listing.status.label(), "status changed");
            (StatusCode::OK, Json(Envelope::data(json!(listing))))
        }
        Err(e) => {
            tracing::warn!(id = %id, error = %e, "status change failed");
            (
                StatusCode::NOT_FOUND,
                Json(Envelope::failure("Listing not found")),
            )
        }
    }
}

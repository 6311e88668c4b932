//! Login endpoint.
//!
//! Placeholder auth: any non-empty email/password pair is accepted and
//! gets the fixed session cookie. There is no user store and no
//! credential verification; the cookie's presence is the whole session.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use axum::Router;
use serde_json::Value;

use crate::routes::{method_not_allowed, Envelope};
use crate::AppState;

pub const AUTH_COOKIE: &str = "authToken";
const AUTH_TOKEN: &str = "token123";
const COOKIE_MAX_AGE_SECS: u32 = 7200;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/auth/login", post(login).fallback(method_not_allowed))
}

fn auth_cookie(production: bool) -> String {
    let mut cookie = format!(
        "{AUTH_COOKIE}={AUTH_TOKEN}; Path=/; HttpOnly; SameSite=Strict; Max-Age={COOKIE_MAX_AGE_SECS}"
    );
    if production {
        cookie.push_str("; Secure");
    }
    cookie
}

async fn login(State(state): State<Arc<AppState>>, body: String) -> Response {
    let Ok(body) = serde_json::from_str::<Value>(&body) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(Envelope::failure("Invalid JSON body")),
        )
            .into_response();
    };

    let email = body["email"].as_str().unwrap_or("");
    let password = body["password"].as_str().unwrap_or("");
    if email.is_empty() || password.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(Envelope::failure("Email and password are required")),
        )
            .into_response();
    }

    tracing::info!(email, "operator login");
    (
        [(header::SET_COOKIE, auth_cookie(state.config.production))],
        Json(Envelope::ok()),
    )
        .into_response()
}

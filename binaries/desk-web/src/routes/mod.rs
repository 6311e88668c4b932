pub mod auth;
pub mod health;
pub mod listings;
pub mod pages;

use axum::http::{header, HeaderMap, StatusCode};
use axum::response::Json;
use serde::Serialize;
use serde_json::Value;

/// Uniform response wrapper for every API operation. Exactly one typed
/// shape crosses the boundary, so clients never reshape payloads.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    /// Success with a payload.
    pub fn data(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Success with no payload (login).
    pub fn ok() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Shared fallback for API routes hit with the wrong verb.
pub async fn method_not_allowed() -> (StatusCode, Json<Envelope>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(Envelope::failure("Method not allowed")),
    )
}

/// Check whether the request carries a non-empty auth cookie.
pub fn has_auth_cookie(headers: &HeaderMap) -> bool {
    let Some(cookie_header) = headers.get(header::COOKIE) else {
        return false;
    };
    let Ok(cookies) = cookie_header.to_str() else {
        return false;
    };
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().strip_prefix("authToken="))
        .any(|value| !value.is_empty())
}

/// HTML-escape a string to prevent XSS in hand-built HTML responses.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn auth_cookie_detected_among_others() {
        let headers = headers_with_cookie("theme=dark; authToken=token123; lang=en");
        assert!(has_auth_cookie(&headers));
    }

    #[test]
    fn empty_auth_cookie_does_not_count() {
        let headers = headers_with_cookie("authToken=");
        assert!(!has_auth_cookie(&headers));
        assert!(!has_auth_cookie(&HeaderMap::new()));
    }

    #[test]
    fn envelope_failure_serializes_message_only() {
        let json = serde_json::to_value(Envelope::failure("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "nope");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn html_escape_covers_markup_chars() {
        assert_eq!(html_escape("<b>\"&'"), "&lt;b&gt;&quot;&amp;&#x27;");
    }
}

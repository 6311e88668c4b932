use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Json};
use axum::routing::get;
use axum::Router;
use serde_json::json;

use crate::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/health", get(api_health))
}

async fn api_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let store = state.store.read().await;
    let (pending, approved, rejected) = store.status_counts();

    Json(json!({
        "listings": store.listings().len(),
        "pending": pending,
        "approved": approved,
        "rejected": rejected,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeskConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn health_reports_status_counts() {
        let app = router().with_state(Arc::new(AppState::new(DeskConfig::default())));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["listings"], 6);
        assert_eq!(body["pending"], 2);
        assert_eq!(body["approved"], 3);
        assert_eq!(body["rejected"], 1);
    }
}

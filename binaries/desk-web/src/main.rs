mod config;
mod routes;

use std::sync::Arc;

use anyhow::Context;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::Router;
use tokio::sync::RwLock;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use config::DeskConfig;
use desk_core::ListingStore;
use routes::Envelope;

pub struct AppState {
    pub store: RwLock<ListingStore>,
    pub config: DeskConfig,
}

impl AppState {
    pub fn new(config: DeskConfig) -> Self {
        Self {
            store: RwLock::new(ListingStore::seeded()),
            config,
        }
    }
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::pages::router())
        .merge(routes::listings::router())
        .merge(routes::auth::router())
        .merge(routes::health::router())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Converts handler panics into the generic 500 envelope instead of
/// letting a raw trace reach the client.
fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Envelope::failure("Internal server error")),
    )
        .into_response()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("desk_web=info,tower_http=info")),
        )
        .init();

    let config = DeskConfig::from_env();
    let state = Arc::new(AppState::new(config.clone()));

    {
        let store = state.store.read().await;
        let (pending, approved, rejected) = store.status_counts();
        tracing::info!(
            listings = store.listings().len(),
            pending,
            approved,
            rejected,
            "listing store seeded"
        );
    }

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(bind = %config.bind, production = config.production, "desk-web listening");
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

use axum::{
    Router,
    routing::{get, post},
};
use tokio::sync::RwLock;

use std::sync::Arc;

use crate::{forecast, health, summary, upload};
use engine::Engine;

/// State shared by every handler.
///
/// Uploads take the write lock, derivations the read lock, so a reader never
/// sees a half-appended snapshot and concurrent uploads keep their order.
#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<RwLock<Engine>>,
}

/// Build the application router around `engine`.
pub fn router(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(RwLock::new(engine)),
    };

    Router::new()
        .route("/health", get(health::get))
        .route("/upload", post(upload::upload))
        .route("/summary", get(summary::get_summary))
        .route("/forecast", get(forecast::get_forecast))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}

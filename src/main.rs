use axum::{
  extract::{State, WebSocketUpgrade},
  http::Method,
  response::IntoResponse,
  routing::get,
  Json, Router,
};
use serde::Serialize;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod game;
mod network;
mod protocol;
mod runtime;
mod shared;
mod transport;

use game::constants::DEFAULT_FRAME_MS;
use network::{NetworkBoundary, SharedRoster};
use runtime::RuntimeConfig;

#[derive(Clone)]
struct AppState {
  roster: Arc<SharedRoster>,
  runtime_config: RuntimeConfig,
}

#[derive(Debug, Serialize)]
struct OkResponse {
  ok: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let frame_ms: u64 = env::var("FRAME_MS")
    .ok()
    .and_then(|value| value.parse().ok())
    .filter(|value| *value > 0)
    .unwrap_or(DEFAULT_FRAME_MS);

  let state = Arc::new(AppState {
    roster: Arc::new(SharedRoster::new()),
    runtime_config: RuntimeConfig::with_frame_interval(Duration::from_millis(frame_ms)),
  });

  let cors = CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET])
    .allow_headers(Any);

  let app: Router = Router::new()
    .route("/api/health", get(health))
    .route("/api/game", get(ws_handler))
    .layer(cors)
    .with_state(state);

  let port: u16 = env::var("PORT")
    .ok()
    .and_then(|value| value.parse().ok())
    .unwrap_or(8787);

  let address = format!("0.0.0.0:{port}");
  tracing::info!(frame_ms, "listening on {address}");

  let listener = tokio::net::TcpListener::bind(&address).await?;
  axum::serve(listener, app).await?;

  Ok(())
}

async fn health() -> impl IntoResponse {
  Json(OkResponse { ok: true })
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  tracing::debug!(players = state.roster.player_count(), "game session upgrade");
  let network: Arc<dyn NetworkBoundary> = state.roster.clone();
  let config = state.runtime_config;
  ws.on_upgrade(move |socket| transport::ws_session::handle_socket(socket, network, config))
}

//! HTTP surface: routing and request handlers over the shared store

use crate::game::{GameState, PaddleSide};
use crate::render;
use crate::store::GameStore;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, warn};
use serde::Deserialize;

/// Entry page, embedded so the binary is self-contained.
const INDEX_HTML: &str = include_str!("../static/index.html");

/// Body of a paddle command. `player` stays a raw string so an unknown
/// identifier drops the command instead of failing the request; only a body
/// that does not parse at all is rejected.
#[derive(Debug, Deserialize)]
pub struct PaddleCommand {
    pub player: String,
    pub pos_y: i32,
}

/// Builds the application router over a store handle.
pub fn router(store: GameStore) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/pause", post(toggle_pause))
        .route("/status", get(status))
        .route("/screen", get(screen))
        .route("/cmd", post(command))
        .with_state(store)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn toggle_pause(State(store): State<GameStore>) -> &'static str {
    if store.toggle_pause().await {
        "Game paused"
    } else {
        "Game resumed"
    }
}

async fn status(State(store): State<GameStore>) -> Json<GameState> {
    Json(store.snapshot().await)
}

async fn screen(State(store): State<GameStore>) -> Response {
    let snapshot = store.snapshot().await;

    // Only the copy above is serialized with the tick driver; rasterizing
    // and encoding run outside the lock.
    let frame = render::render_frame(&snapshot, store.config());
    match render::encode_png(&frame) {
        Ok(png) => ([(header::CONTENT_TYPE, "image/png")], png).into_response(),
        Err(e) => {
            error!("failed to encode frame: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode frame").into_response()
        }
    }
}

async fn command(State(store): State<GameStore>, Json(cmd): Json<PaddleCommand>) -> StatusCode {
    match PaddleSide::from_wire(&cmd.player) {
        Some(side) => store.set_paddle(side, cmd.pos_y).await,
        None => warn!("paddle command for unknown player {:?}", cmd.player),
    }
    StatusCode::OK
}

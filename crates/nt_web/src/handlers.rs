use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
    response::{Html, IntoResponse, Redirect, Response},
};
use std::num::NonZeroUsize;
use std::sync::Arc;
use nt_core::{BoardView, Category};
use tracing::{debug, error};
use crate::AppState;

pub async fn board_page(State(state): State<Arc<AppState>>) -> Response {
    let view = state.board.view().await;
    match state.renderer.render_board(&view) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render board: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn board_json(State(state): State<Arc<AppState>>) -> Json<BoardView> {
    Json(state.board.view().await)
}

pub async fn change_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> Response {
    match category.parse::<Category>() {
        Ok(category) => {
            debug!("🗂️ Category changed to {}", category);
            let _fetch = state.board.on_category_change(category).await;
            Redirect::to("/").into_response()
        }
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}

pub async fn previous_page(State(state): State<Arc<AppState>>) -> Redirect {
    state.board.go_to_previous_page().await;
    Redirect::to("/")
}

pub async fn next_page(State(state): State<Arc<AppState>>) -> Redirect {
    state.board.go_to_next_page().await;
    Redirect::to("/")
}

pub async fn go_to_page(
    State(state): State<Arc<AppState>>,
    Path(page): Path<usize>,
) -> Response {
    match NonZeroUsize::new(page) {
        Some(page) => {
            state.board.go_to_page(page).await;
            Redirect::to("/").into_response()
        }
        None => (StatusCode::BAD_REQUEST, "Pages start at 1").into_response(),
    }
}

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod handlers;
pub mod render;
pub mod state;

pub use state::{AppState, WebConfig};

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/", get(handlers::board_page))
        .route("/api/board", get(handlers::board_json))
        .route("/category/:category", post(handlers::change_category))
        .route("/prev", post(handlers::previous_page))
        .route("/next", post(handlers::next_page))
        .route("/page/:page", post(handlers::go_to_page))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(config: WebConfig, state: AppState) -> nt_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("🚀 Headline board listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(state)).await?;
    Ok(())
}

pub mod prelude {
    pub use nt_core::{Article, ArticleBoard, Category, Result, Error};
    pub use crate::{AppState, WebConfig};
}

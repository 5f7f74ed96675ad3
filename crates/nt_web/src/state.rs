use std::net::SocketAddr;
use nt_core::{ArticleBoard, Category, Result};
use crate::render::Renderer;

pub struct AppState {
    pub board: ArticleBoard,
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(board: ArticleBoard) -> Result<Self> {
        Ok(Self {
            board,
            renderer: Renderer::new()?,
        })
    }

    /// Like `new`, and starts the first fetch the way a page mount does.
    pub async fn mount(board: ArticleBoard, category: Category) -> Result<Self> {
        let state = Self::new(board)?;
        let _fetch = state.board.on_category_change(category).await;
        Ok(state)
    }
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub bind: SocketAddr,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

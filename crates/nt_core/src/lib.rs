pub mod board;
pub mod config;
pub mod error;
pub mod logging;
pub mod pagination;
pub mod source;
pub mod types;

pub use board::{ArticleBoard, BoardView, HeadlineCard, NavButton, PageButton};
pub use config::{BoardOptions, NewsApiConfig};
pub use error::{Error, Result};
pub use source::HeadlineSource;
pub use types::{Article, Category, HeadlinesResponse};

pub mod prelude {
    pub use super::{Article, ArticleBoard, Category, Error, HeadlineSource, Result};
}

//! The article board: owns the fetched headlines for the selected category
//! and the current page, and turns both into a render model.

use std::num::NonZeroUsize;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::config::BoardOptions;
use crate::logging::Logger;
use crate::pagination::{self, PageState};
use crate::source::HeadlineSource;
use crate::types::{Article, Category};
use crate::Result;

/// What the headline card collaborator receives for one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlineCard {
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub url: String,
}

impl From<&Article> for HeadlineCard {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
            image_url: article.image_url.clone(),
            url: article.url.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavButton {
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// Snapshot of everything the board renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub category: Option<Category>,
    pub loading: bool,
    pub current_page: usize,
    pub total_pages: usize,
    pub article_count: usize,
    pub cards: Vec<HeadlineCard>,
    pub prev: NavButton,
    pub pages: Vec<PageButton>,
    pub next: NavButton,
}

#[derive(Debug)]
struct BoardState {
    category: Option<Category>,
    articles: Vec<Article>,
    loading: bool,
    page: PageState,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            category: None,
            articles: Vec::new(),
            loading: true,
            page: PageState::default(),
        }
    }
}

impl BoardState {
    fn total_pages(&self) -> usize {
        pagination::total_pages(self.articles.len())
    }

    fn view(&self) -> BoardView {
        let total_pages = self.total_pages();
        let current = self.page.current();
        BoardView {
            category: self.category,
            loading: self.loading,
            current_page: current.get(),
            total_pages,
            article_count: self.articles.len(),
            cards: pagination::visible_slice(&self.articles, current)
                .iter()
                .map(HeadlineCard::from)
                .collect(),
            prev: NavButton { disabled: self.page.is_first() },
            pages: pagination::page_numbers(self.articles.len())
                .map(|n| PageButton { number: n.get(), active: n == current })
                .collect(),
            next: NavButton { disabled: self.page.is_last(total_pages) },
        }
    }
}

/// Cloning shares the same state; spawned fetches hold a clone.
#[derive(Clone)]
pub struct ArticleBoard {
    source: Arc<dyn HeadlineSource>,
    state: Arc<RwLock<BoardState>>,
    options: BoardOptions,
    logger: Logger,
}

impl ArticleBoard {
    pub fn new(source: Arc<dyn HeadlineSource>) -> Self {
        Self::with_options(source, BoardOptions::default())
    }

    pub fn with_options(source: Arc<dyn HeadlineSource>, options: BoardOptions) -> Self {
        Self {
            source,
            state: Arc::new(RwLock::new(BoardState::default())),
            options,
            logger: Logger::new().with_prefix("[board]".to_string()),
        }
    }

    /// Marks the board as loading for `category` and fetches in the
    /// background. Earlier fetches are not cancelled; whichever finishes
    /// last sets the article list.
    pub async fn on_category_change(&self, category: Category) -> JoinHandle<()> {
        self.begin(category).await;
        let board = self.clone();
        tokio::spawn(async move { board.fetch(category).await.unwrap_or_default() })
    }

    /// Same as [`ArticleBoard::on_category_change`] but waits for the fetch.
    pub async fn load(&self, category: Category) {
        // Already logged by `fetch`; the board keeps its previous articles.
        self.try_load(category).await.unwrap_or_default()
    }

    /// Same as [`ArticleBoard::load`], and hands the fetch error back to the
    /// caller once it has been logged. The board state is updated the same way.
    pub async fn try_load(&self, category: Category) -> Result<()> {
        self.begin(category).await;
        self.fetch(category).await
    }

    async fn begin(&self, category: Category) {
        let mut state = self.state.write().await;
        state.category = Some(category);
        state.loading = true;
        if self.options.reset_page_on_category_change {
            state.page.reset();
        }
    }

    async fn fetch(&self, category: Category) -> Result<()> {
        let logger = self.logger.clone().with_prefix(format!("[{}]", category));
        logger.debug(&format!("fetching headlines from {}", self.source.name()));

        let result = self.source.fetch_headlines(category).await;

        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(articles) => {
                logger.info(&format!("📰 Loaded {} articles", articles.len()));
                state.articles = articles;
                Ok(())
            }
            Err(e) => {
                logger.error(&format!("Error fetching headlines: {}", e));
                Err(e)
            }
        }
    }

    pub async fn go_to_previous_page(&self) {
        self.state.write().await.page.previous();
    }

    pub async fn go_to_next_page(&self) {
        let mut state = self.state.write().await;
        let total = state.total_pages();
        state.page.next(total);
    }

    pub async fn go_to_page(&self, page: NonZeroUsize) {
        self.state.write().await.page.go_to(page);
    }

    pub async fn view(&self) -> BoardView {
        self.state.read().await.view()
    }

    pub async fn articles(&self) -> Vec<Article> {
        self.state.read().await.articles.clone()
    }

    pub async fn current_page(&self) -> NonZeroUsize {
        self.state.read().await.page.current()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn category(&self) -> Option<Category> {
        self.state.read().await.category
    }
}

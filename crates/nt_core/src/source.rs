use async_trait::async_trait;
use crate::types::{Article, Category};
use crate::Result;

#[async_trait]
pub trait HeadlineSource: Send + Sync {
    /// Name used in log lines
    fn name(&self) -> &str;

    /// Fetch the current top headlines for a category
    async fn fetch_headlines(&self, category: Category) -> Result<Vec<Article>>;
}

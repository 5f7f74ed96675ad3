use async_trait::async_trait;
use nt_core::{Article, Category, HeadlineSource, HeadlinesResponse, NewsApiConfig, Result};
use tracing::debug;

/// NewsAPI rejects requests that carry no User-Agent.
const USER_AGENT: &str = concat!("nt/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: reqwest::Client,
    config: NewsApiConfig,
}

impl NewsApiClient {
    pub fn new(config: NewsApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, config })
    }

    fn query<'a>(&'a self, category: &'a Category) -> [(&'static str, &'a str); 3] {
        [
            ("country", self.config.country.as_str()),
            ("category", category.as_str()),
            ("apiKey", self.config.api_key.as_str()),
        ]
    }
}

#[async_trait]
impl HeadlineSource for NewsApiClient {
    fn name(&self) -> &str {
        "newsapi"
    }

    async fn fetch_headlines(&self, category: Category) -> Result<Vec<Article>> {
        debug!(
            "🌐 GET {} country={} category={}",
            self.config.endpoint, self.config.country, category
        );
        let response = self
            .client
            .get(self.config.endpoint.clone())
            .query(&self.query(&category))
            .send()
            .await?;

        // Error payloads come back as JSON too, so the body is parsed
        // whatever the status and the missing `articles` field decides.
        let status = response.status();
        let body = response.text().await?;
        let parsed: HeadlinesResponse = serde_json::from_str(&body)?;
        debug!("🌐 {} with {:?} total results", status, parsed.total_results);
        parsed.into_articles()
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// One headline as returned by the news listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "urlToImage", default)]
    pub image_url: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Entertainment,
    General,
    Health,
    Science,
    Sports,
    Technology,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Business,
        Category::Entertainment,
        Category::General,
        Category::Health,
        Category::Science,
        Category::Sports,
        Category::Technology,
    ];

    /// The value sent as the `category` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Entertainment => "entertainment",
            Category::General => "general",
            Category::Health => "health",
            Category::Science => "science",
            Category::Sports => "sports",
            Category::Technology => "technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| Error::InvalidCategory(s.to_string()))
    }
}

/// Body of a `top-headlines` response. Error payloads carry `code` and
/// `message` instead of `articles`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinesResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Option<Vec<Article>>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl HeadlinesResponse {
    pub fn into_articles(self) -> crate::Result<Vec<Article>> {
        match self.articles {
            Some(articles) => Ok(articles),
            None => Err(Error::Api {
                code: self
                    .code
                    .or(self.status)
                    .unwrap_or_else(|| "unknown".to_string()),
                message: self
                    .message
                    .unwrap_or_else(|| "response has no articles".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_from_wire() {
        let json = r#"{
            "source": {"id": null, "name": "Example"},
            "author": "Someone",
            "title": "Markets rally",
            "description": null,
            "url": "https://example.com/markets",
            "urlToImage": "https://example.com/markets.jpg",
            "publishedAt": "2024-03-01T10:00:00Z",
            "content": null
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.title, "Markets rally");
        assert_eq!(article.description, None);
        assert_eq!(article.image_url.as_deref(), Some("https://example.com/markets.jpg"));
        assert_eq!(article.url, "https://example.com/markets");
    }

    #[test]
    fn test_article_missing_image_field() {
        let json = r#"{"title": "t", "url": "https://example.com"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.image_url, None);
        assert_eq!(article.description, None);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("sports".parse::<Category>().unwrap(), Category::Sports);
        assert_eq!(" Business ".parse::<Category>().unwrap(), Category::Business);
        assert!("weather".parse::<Category>().is_err());
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_error_payload_has_no_articles() {
        let json = r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#;
        let response: HeadlinesResponse = serde_json::from_str(json).unwrap();
        match response.into_articles() {
            Err(Error::Api { code, message }) => {
                assert_eq!(code, "apiKeyInvalid");
                assert_eq!(message, "Your API key is invalid.");
            }
            other => panic!("expected api error, got {:?}", other),
        }
    }

    #[test]
    fn test_ok_payload() {
        let json = r#"{"status":"ok","totalResults":1,"articles":[{"title":"a","url":"u"}]}"#;
        let response: HeadlinesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_results, Some(1));
        assert_eq!(response.into_articles().unwrap().len(), 1);
    }
}

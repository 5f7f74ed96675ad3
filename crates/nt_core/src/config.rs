use url::Url;

use crate::{Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/top-headlines";
pub const DEFAULT_COUNTRY: &str = "us";

pub const API_KEY_VAR: &str = "NEWS_API_KEY";
pub const ENDPOINT_VAR: &str = "NEWS_API_ENDPOINT";
pub const COUNTRY_VAR: &str = "NEWS_API_COUNTRY";

/// Everything the headline client needs to build a request.
#[derive(Debug, Clone)]
pub struct NewsApiConfig {
    pub endpoint: Url,
    pub api_key: String,
    pub country: String,
}

impl NewsApiConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Config("API key must not be empty".to_string()));
        }
        Ok(Self {
            endpoint: parse_endpoint(DEFAULT_ENDPOINT)?,
            api_key,
            country: DEFAULT_COUNTRY.to_string(),
        })
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        self.endpoint = parse_endpoint(endpoint)?;
        Ok(self)
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Builds the config from a variable lookup, usually the process
    /// environment layered under command-line flags. `NEWS_API_KEY` is required.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .ok_or_else(|| Error::Config(format!("{} is not set", API_KEY_VAR)))?;
        let mut config = Self::new(api_key)?;
        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            config = config.with_endpoint(&endpoint)?;
        }
        if let Some(country) = lookup(COUNTRY_VAR) {
            config = config.with_country(country);
        }
        Ok(config)
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    Url::parse(endpoint).map_err(|e| Error::Config(format!("Invalid endpoint {}: {}", endpoint, e)))
}

/// Behavior switches for the article board.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardOptions {
    /// Go back to page 1 whenever the category changes. Off by default, the
    /// board keeps whatever page was selected before.
    pub reset_page_on_category_change: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = NewsApiConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.country, "us");
    }

    #[test]
    fn test_overrides() {
        let config = NewsApiConfig::from_lookup(lookup_from(&[
            (API_KEY_VAR, "secret"),
            (ENDPOINT_VAR, "http://127.0.0.1:9000/v2/top-headlines"),
            (COUNTRY_VAR, "gb"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint.as_str(), "http://127.0.0.1:9000/v2/top-headlines");
        assert_eq!(config.country, "gb");
    }

    #[test]
    fn test_missing_key() {
        let result = NewsApiConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(Error::Config(_))));

        let result = NewsApiConfig::from_lookup(lookup_from(&[(API_KEY_VAR, "  ")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_bad_endpoint() {
        let result = NewsApiConfig::new("secret").unwrap().with_endpoint("not a url");
        assert!(result.is_err());
    }

    #[test]
    fn test_board_options_default_keeps_page() {
        assert!(!BoardOptions::default().reset_page_on_category_change);
    }
}

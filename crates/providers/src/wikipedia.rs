//! Wikipedia REST summary client, used as the description source.

use crate::{format, DescriptionProvider, ProviderError};
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;

#[derive(Clone)]
pub struct WikipediaConfig {
    pub base_url: String,
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            base_url: "https://en.wikipedia.org/api/rest_v1/page/summary".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct WikipediaProvider {
    client: Client,
    cfg: WikipediaConfig,
}

#[derive(Deserialize)]
struct SummaryResponse {
    extract: Option<String>,
}

impl WikipediaProvider {
    pub fn new(cfg: WikipediaConfig, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: crate::http_client(timeout)?,
            cfg,
        })
    }

    fn summary_url(&self, name: &str) -> Result<Url, ProviderError> {
        let title = format::wiki_title(name);
        if title.is_empty() {
            return Err(ProviderError::NotFound);
        }
        let mut url = Url::parse(&self.cfg.base_url)
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ProviderError::RequestFailed("base url cannot be a base".into()))?
            .push(&title);
        Ok(url)
    }
}

#[async_trait::async_trait]
impl DescriptionProvider for WikipediaProvider {
    async fn fetch_description(&self, name: &str) -> Result<String, ProviderError> {
        let url = self.summary_url(name)?;
        let resp = self.client.get(url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound);
        }
        if !resp.status().is_success() {
            return Err(ProviderError::RequestFailed(format!(
                "status {}",
                resp.status()
            )));
        }
        let parsed: SummaryResponse = resp.json().await?;
        match parsed.extract {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(ProviderError::NotFound),
        }
    }
}

//! USDA FoodData Central client: cross-checks that the resolved name is a
//! food the USDA database actually knows about.

use crate::{format, ProviderError, VerificationProvider};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Clone)]
pub struct UsdaConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl UsdaConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            endpoint: "https://api.nal.usda.gov/fdc/v1/foods/search".to_string(),
            api_key,
        }
    }
}

#[derive(Clone)]
pub struct UsdaProvider {
    client: Client,
    cfg: UsdaConfig,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(rename = "totalHits", default)]
    total_hits: u64,
    #[serde(default)]
    foods: Vec<Food>,
}

#[derive(Deserialize)]
struct Food {
    description: String,
}

impl UsdaProvider {
    pub fn new(cfg: UsdaConfig, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: crate::http_client(timeout)?,
            cfg,
        })
    }
}

#[async_trait::async_trait]
impl VerificationProvider for UsdaProvider {
    async fn fetch_verification(&self, name: &str) -> Result<bool, ProviderError> {
        let clean_name = format::strip_code_prefix(name);
        if clean_name.is_empty() {
            return Err(ProviderError::NotFound);
        }
        let resp = self
            .client
            .get(&self.cfg.endpoint)
            .query(&[
                ("api_key", self.cfg.api_key.as_str()),
                ("query", clean_name.as_str()),
                ("dataType", "Foundation,SR Legacy"),
                ("pageSize", "1"),
            ])
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(ProviderError::RequestFailed(format!(
                "status {}",
                resp.status()
            )));
        }
        let parsed: SearchResponse = resp.json().await?;
        if parsed.total_hits == 0 {
            return Ok(false);
        }
        let verified = parsed
            .foods
            .first()
            .map(|f| f.description.to_lowercase().contains(&clean_name.to_lowercase()))
            .unwrap_or(false);
        Ok(verified)
    }
}

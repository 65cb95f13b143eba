//! Open Food Facts client: additive identity resolution and the static
//! additive taxonomy download.

use crate::{format, AdditiveIdentity, IdentityProvider, ProviderError, TaxonomyEntry};
use reqwest::Client;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

#[derive(Clone)]
pub struct OffConfig {
    pub base_url: String,
    pub taxonomy_url: String,
}

impl Default for OffConfig {
    fn default() -> Self {
        Self {
            base_url: "https://world.openfoodfacts.org/api/v2/additive".to_string(),
            taxonomy_url: "https://static.openfoodfacts.org/data/taxonomies/additives.json"
                .to_string(),
        }
    }
}

#[derive(Clone)]
pub struct OffProvider {
    client: Client,
    cfg: OffConfig,
}

#[derive(Deserialize)]
struct AdditiveApiResponse {
    #[serde(default)]
    display_name_translations: HashMap<String, String>,
    #[serde(default)]
    overexposure_risk: Option<OverexposureRisk>,
}

#[derive(Deserialize)]
struct OverexposureRisk {
    risk: Option<String>,
}

#[derive(Deserialize)]
struct TaxonomyNode {
    #[serde(default)]
    name: HashMap<String, String>,
}

impl OffProvider {
    pub fn new(cfg: OffConfig, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: crate::http_client(timeout)?,
            cfg,
        })
    }

    /// Download the full additive taxonomy. Called once at startup to seed
    /// the autocomplete index; entries come back in taxonomy key order.
    pub async fn fetch_taxonomy(&self) -> Result<Vec<TaxonomyEntry>, ProviderError> {
        let resp = self.client.get(&self.cfg.taxonomy_url).send().await?;
        if !resp.status().is_success() {
            return Err(ProviderError::RequestFailed(format!(
                "taxonomy status {}",
                resp.status()
            )));
        }
        let nodes: BTreeMap<String, TaxonomyNode> = resp.json().await?;
        let entries = nodes
            .into_iter()
            .map(|(key, node)| {
                // Keys look like "en:e330".
                let code = key.rsplit(':').next().unwrap_or(&key).to_lowercase();
                TaxonomyEntry {
                    code,
                    name: node.name.get("en").cloned(),
                }
            })
            .collect();
        Ok(entries)
    }
}

#[async_trait::async_trait]
impl IdentityProvider for OffProvider {
    async fn resolve_identity(
        &self,
        code: Option<&str>,
        name: &str,
    ) -> Result<AdditiveIdentity, ProviderError> {
        // The additive endpoint is keyed by code; without one there is
        // nothing to look up here.
        let code = code.ok_or(ProviderError::NotFound)?;
        let clean_code = code.split_whitespace().next().unwrap_or(code);

        let url = format!("{}/{}", self.cfg.base_url, clean_code);
        let resp = self.client.get(&url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::NotFound);
        }
        if !resp.status().is_success() {
            return Err(ProviderError::RequestFailed(format!(
                "status {}",
                resp.status()
            )));
        }
        let parsed: AdditiveApiResponse = resp.json().await?;

        let canonical = parsed
            .display_name_translations
            .get("en")
            .or_else(|| parsed.display_name_translations.get("fr"))
            .cloned()
            .unwrap_or_else(|| format::strip_code_prefix(name));

        Ok(AdditiveIdentity {
            code: Some(clean_code.to_lowercase()),
            name: canonical,
            risk_phrase: parsed.overexposure_risk.and_then(|r| r.risk),
        })
    }
}

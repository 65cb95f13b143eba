//! PubChem client: resolves a compound name to a CID and returns the URL of
//! the 2D structure image.

use crate::{format, ImageryProvider, ProviderError};
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;

const IMAGE_QUERY: &str = "record_type=2d&image_size=300x300";

#[derive(Clone)]
pub struct PubChemConfig {
    pub base_url: String,
}

impl Default for PubChemConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pubchem.ncbi.nlm.nih.gov/rest/pug".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct PubChemProvider {
    client: Client,
    cfg: PubChemConfig,
}

#[derive(Deserialize)]
struct CidResponse {
    #[serde(rename = "IdentifierList", default)]
    identifier_list: Option<IdentifierList>,
}

#[derive(Deserialize)]
struct IdentifierList {
    #[serde(rename = "CID", default)]
    cid: Vec<u64>,
}

impl PubChemProvider {
    pub fn new(cfg: PubChemConfig, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: crate::http_client(timeout)?,
            cfg,
        })
    }

    fn name_url(&self, clean_name: &str, tail: &[&str]) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.cfg.base_url)
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ProviderError::RequestFailed("base url cannot be a base".into()))?;
            segments.extend(["compound", "name", clean_name]);
            segments.extend(tail);
        }
        Ok(url)
    }

    async fn lookup_cid(&self, clean_name: &str) -> Result<Option<u64>, ProviderError> {
        let url = self.name_url(clean_name, &["cids", "JSON"])?;
        let resp = self.client.get(url).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(ProviderError::RequestFailed(format!(
                "status {}",
                resp.status()
            )));
        }
        let parsed: CidResponse = resp.json().await?;
        Ok(parsed
            .identifier_list
            .and_then(|list| list.cid.into_iter().next()))
    }
}

#[async_trait::async_trait]
impl ImageryProvider for PubChemProvider {
    async fn fetch_imagery(&self, name: &str) -> Result<String, ProviderError> {
        let clean_name = format::strip_code_prefix(name);
        if clean_name.is_empty() {
            return Err(ProviderError::NotFound);
        }
        match self.lookup_cid(&clean_name).await? {
            Some(cid) => Ok(format!(
                "{}/compound/cid/{}/PNG?{}",
                self.cfg.base_url, cid, IMAGE_QUERY
            )),
            // No CID: fall back to the name-addressed image endpoint.
            None => {
                let mut url = self.name_url(&clean_name, &["PNG"])?;
                url.set_query(Some(IMAGE_QUERY));
                Ok(url.to_string())
            }
        }
    }
}

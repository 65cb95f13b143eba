//! Provider abstractions for the external food-additive data sources.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub mod format;
pub mod noop;
pub mod off;
pub mod pubchem;
pub mod usda;
pub mod wikipedia;

pub const USER_AGENT: &str = "ToxiScan/1.0";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,
    #[error("not found")]
    NotFound,
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else if e.is_decode() {
            ProviderError::MalformedResponse(e.to_string())
        } else {
            ProviderError::RequestFailed(e.to_string())
        }
    }
}

/// Resolved identity of an additive, produced by the identity provider.
/// `risk_phrase` carries the provider's own risk evaluation when it has one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdditiveIdentity {
    pub code: Option<String>,
    pub name: String,
    pub risk_phrase: Option<String>,
}

/// One entry of the additive taxonomy used for autocomplete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub code: String,
    pub name: Option<String>,
}

#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn resolve_identity(
        &self,
        code: Option<&str>,
        name: &str,
    ) -> Result<AdditiveIdentity, ProviderError>;
}

#[async_trait::async_trait]
pub trait DescriptionProvider: Send + Sync {
    async fn fetch_description(&self, name: &str) -> Result<String, ProviderError>;
}

#[async_trait::async_trait]
pub trait VerificationProvider: Send + Sync {
    async fn fetch_verification(&self, name: &str) -> Result<bool, ProviderError>;
}

#[async_trait::async_trait]
pub trait ImageryProvider: Send + Sync {
    async fn fetch_imagery(&self, name: &str) -> Result<String, ProviderError>;
}

#[derive(Default, Clone)]
pub struct ProviderRegistry {
    identity: HashMap<String, Arc<dyn IdentityProvider>>,
    description: HashMap<String, Arc<dyn DescriptionProvider>>,
    verification: HashMap<String, Arc<dyn VerificationProvider>>,
    imagery: HashMap<String, Arc<dyn ImageryProvider>>,
    pub preferred_identity: Option<String>,
    pub preferred_description: Option<String>,
    pub preferred_verification: Option<String>,
    pub preferred_imagery: Option<String>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(mut self, name: &str, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity.insert(name.to_string(), provider);
        self.preferred_identity
            .get_or_insert_with(|| name.to_string());
        self
    }

    pub fn with_description(mut self, name: &str, provider: Arc<dyn DescriptionProvider>) -> Self {
        self.description.insert(name.to_string(), provider);
        self.preferred_description
            .get_or_insert_with(|| name.to_string());
        self
    }

    pub fn with_verification(
        mut self,
        name: &str,
        provider: Arc<dyn VerificationProvider>,
    ) -> Self {
        self.verification.insert(name.to_string(), provider);
        self.preferred_verification
            .get_or_insert_with(|| name.to_string());
        self
    }

    pub fn with_imagery(mut self, name: &str, provider: Arc<dyn ImageryProvider>) -> Self {
        self.imagery.insert(name.to_string(), provider);
        self.preferred_imagery
            .get_or_insert_with(|| name.to_string());
        self
    }

    pub fn identity(&self, name: Option<&str>) -> Result<Arc<dyn IdentityProvider>, ProviderError> {
        let key = name
            .map(str::to_string)
            .or_else(|| self.preferred_identity.clone())
            .ok_or_else(|| {
                ProviderError::UnknownProvider("no identity provider configured".into())
            })?;
        self.identity
            .get(&key)
            .cloned()
            .ok_or(ProviderError::UnknownProvider(key))
    }

    pub fn description(
        &self,
        name: Option<&str>,
    ) -> Result<Arc<dyn DescriptionProvider>, ProviderError> {
        let key = name
            .map(str::to_string)
            .or_else(|| self.preferred_description.clone())
            .ok_or_else(|| {
                ProviderError::UnknownProvider("no description provider configured".into())
            })?;
        self.description
            .get(&key)
            .cloned()
            .ok_or(ProviderError::UnknownProvider(key))
    }

    pub fn verification(
        &self,
        name: Option<&str>,
    ) -> Result<Arc<dyn VerificationProvider>, ProviderError> {
        let key = name
            .map(str::to_string)
            .or_else(|| self.preferred_verification.clone())
            .ok_or_else(|| {
                ProviderError::UnknownProvider("no verification provider configured".into())
            })?;
        self.verification
            .get(&key)
            .cloned()
            .ok_or(ProviderError::UnknownProvider(key))
    }

    pub fn imagery(&self, name: Option<&str>) -> Result<Arc<dyn ImageryProvider>, ProviderError> {
        let key = name
            .map(str::to_string)
            .or_else(|| self.preferred_imagery.clone())
            .ok_or_else(|| {
                ProviderError::UnknownProvider("no imagery provider configured".into())
            })?;
        self.imagery
            .get(&key)
            .cloned()
            .ok_or(ProviderError::UnknownProvider(key))
    }
}

pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ProviderError::RequestFailed(e.to_string()))
}

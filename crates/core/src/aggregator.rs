//! Drives the provider fan-out and merges the results into one record.
//!
//! Identity resolution is a sequential prerequisite (its output is the
//! canonical name the other calls key on); description, verification and
//! imagery then run concurrently, each with its own timeout. Partial
//! failure is normal; every failure degrades to a sentinel field.

use crate::classifier;
use crate::config::AppConfig;
use crate::models::{Safety, SafetyRecord};
use crate::normalize::{self, NormalizedQuery};
use crate::risk_table::RiskTable;
use crate::taxonomy::Taxonomy;
use anyhow::Context;
use providers::format;
use providers::noop::NoopProvider;
use providers::off::{OffConfig, OffProvider};
use providers::pubchem::{PubChemConfig, PubChemProvider};
use providers::usda::{UsdaConfig, UsdaProvider};
use providers::wikipedia::{WikipediaConfig, WikipediaProvider};
use providers::{AdditiveIdentity, ProviderError, ProviderRegistry};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct Aggregator {
    registry: ProviderRegistry,
    risk_table: RiskTable,
    taxonomy: Taxonomy,
    call_timeout: Duration,
}

impl Aggregator {
    pub fn new(
        registry: ProviderRegistry,
        risk_table: RiskTable,
        taxonomy: Taxonomy,
        call_timeout: Duration,
    ) -> Self {
        Self {
            registry,
            risk_table,
            taxonomy,
            call_timeout,
        }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.taxonomy.suggest(prefix, limit)
    }

    /// Best-effort aggregation. Fails only on an empty query; any provider
    /// failure shows up as sentinel values in the returned record.
    pub async fn aggregate(&self, raw_query: &str) -> anyhow::Result<SafetyRecord> {
        let query = normalize::normalize(raw_query, &self.taxonomy).context("empty query")?;
        debug!(code = ?query.code, name = %query.name, "normalized query");

        let identity = self.resolve_identity(&query).await;
        let name = identity.name.clone();
        debug!(name = %name, "canonical name resolved");

        let (description, verification, imagery) = tokio::join!(
            self.fetch_description(&name),
            self.fetch_verification(&name),
            self.fetch_imagery(&name),
        );

        let description = match description {
            Ok(text) => text,
            Err(e) => {
                debug!(error = %e, "description unavailable");
                String::new()
            }
        };
        let verified = verification.unwrap_or_else(|e| {
            debug!(error = %e, "verification unavailable");
            false
        });
        let image_url = imagery.unwrap_or_else(|e| {
            debug!(error = %e, "imagery unavailable");
            String::new()
        });

        // Priority-ordered fallback: curated table, then the identity
        // provider's own evaluation, then the keyword scan.
        let safety = self
            .risk_table
            .lookup(identity.code.as_deref(), &identity.name)
            .or_else(|| {
                identity
                    .risk_phrase
                    .as_deref()
                    .and_then(map_risk_phrase)
            })
            .or_else(|| classifier::scan_safety(&description))
            .unwrap_or(Safety::Unknown);

        let origin = classifier::classify_origin(&description);

        let dosage = classifier::extract_dosage(&description)
            .or_else(|| identity.risk_phrase.clone())
            .unwrap_or_else(|| "unknown".to_string());

        Ok(SafetyRecord {
            e_number: identity
                .code
                .as_deref()
                .map(str::to_uppercase)
                .unwrap_or_else(|| "Unknown".to_string()),
            name: format::title_case(&identity.name),
            safety,
            origin,
            description,
            dosage,
            verified,
            image_url,
        })
    }

    async fn resolve_identity(&self, query: &NormalizedQuery) -> AdditiveIdentity {
        let attempt = match self.registry.identity(None) {
            Ok(provider) => {
                self.bounded(provider.resolve_identity(query.code.as_deref(), &query.name))
                    .await
            }
            Err(e) => Err(e),
        };
        match attempt {
            Ok(identity) => identity,
            Err(e) => {
                // Degraded identity: the normalized query stands in for the
                // resolved code and name, and confidence is low.
                warn!(error = %e, query = %query.name, "identity resolution failed, using raw query");
                AdditiveIdentity {
                    code: query.code.clone(),
                    name: query.name.clone(),
                    risk_phrase: None,
                }
            }
        }
    }

    async fn fetch_description(&self, name: &str) -> Result<String, ProviderError> {
        let provider = self.registry.description(None)?;
        self.bounded(provider.fetch_description(name)).await
    }

    async fn fetch_verification(&self, name: &str) -> Result<bool, ProviderError> {
        let provider = self.registry.verification(None)?;
        self.bounded(provider.fetch_verification(name)).await
    }

    async fn fetch_imagery(&self, name: &str) -> Result<String, ProviderError> {
        let provider = self.registry.imagery(None)?;
        self.bounded(provider.fetch_imagery(name)).await
    }

    // One call attempt per provider per request; on timeout the call is
    // abandoned, never retried.
    async fn bounded<T>(
        &self,
        fut: impl Future<Output = Result<T, ProviderError>>,
    ) -> Result<T, ProviderError> {
        match tokio::time::timeout(self.call_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout),
        }
    }
}

fn map_risk_phrase(phrase: &str) -> Option<Safety> {
    let phrase = phrase.to_lowercase();
    if phrase.is_empty() {
        None
    } else if phrase.contains("high") {
        Some(Safety::HighRisk)
    } else if phrase.contains("moderate") || phrase.contains("caution") {
        Some(Safety::Caution)
    } else if phrase.contains("no risk") || phrase.contains("low") {
        Some(Safety::Safe)
    } else {
        None
    }
}

pub fn build_registry(config: &AppConfig) -> anyhow::Result<ProviderRegistry> {
    let timeout = Duration::from_secs(config.aggregator.request_timeout_secs);

    let off = OffProvider::new(
        OffConfig {
            base_url: config.providers.off_url.clone(),
            taxonomy_url: config.providers.taxonomy_url.clone(),
        },
        timeout,
    )?;
    let wikipedia = WikipediaProvider::new(
        WikipediaConfig {
            base_url: config.providers.wikipedia_url.clone(),
        },
        timeout,
    )?;
    let pubchem = PubChemProvider::new(
        PubChemConfig {
            base_url: config.providers.pubchem_url.clone(),
        },
        timeout,
    )?;

    let mut reg = ProviderRegistry::new()
        .with_identity("openfoodfacts", Arc::new(off))
        .with_description("wikipedia", Arc::new(wikipedia))
        .with_imagery("pubchem", Arc::new(pubchem))
        .with_verification("noop", Arc::new(NoopProvider));

    let api_key = config
        .providers
        .usda_api_key
        .clone()
        .or_else(|| std::env::var("USDA_API_KEY").ok());
    if let Some(key) = api_key {
        let usda = UsdaProvider::new(
            UsdaConfig {
                endpoint: config.providers.usda_url.clone(),
                api_key: key,
            },
            timeout,
        )?;
        reg = reg.with_verification("usda", Arc::new(usda));
        reg.preferred_verification = Some("usda".to_string());
    } else {
        debug!("USDA_API_KEY not set, verification disabled");
    }

    Ok(reg)
}

/// Fetch the additive taxonomy once at startup. Failure degrades to an
/// empty index (autocomplete returns nothing, normalization still works).
pub async fn load_taxonomy(config: &AppConfig) -> Taxonomy {
    let timeout = Duration::from_secs(config.aggregator.request_timeout_secs);
    let off = match OffProvider::new(
        OffConfig {
            base_url: config.providers.off_url.clone(),
            taxonomy_url: config.providers.taxonomy_url.clone(),
        },
        timeout,
    ) {
        Ok(provider) => provider,
        Err(e) => {
            warn!(error = %e, "could not build taxonomy client");
            return Taxonomy::default();
        }
    };
    match off.fetch_taxonomy().await {
        Ok(entries) => {
            let taxonomy = Taxonomy::from_entries(entries);
            info!(entries = taxonomy.len(), "additive taxonomy loaded");
            taxonomy
        }
        Err(e) => {
            warn!(error = %e, "taxonomy failed to load, autocomplete disabled");
            Taxonomy::default()
        }
    }
}

pub fn build_risk_table(config: &AppConfig) -> anyhow::Result<RiskTable> {
    let table = RiskTable::default();
    match &config.risk_table.path {
        Some(path) => table.with_overrides_from(std::path::Path::new(path)),
        None => Ok(table),
    }
}

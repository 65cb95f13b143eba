use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub providers: ProviderConfig,
    pub aggregator: AggregatorConfig,
    pub autocomplete: AutocompleteConfig,
    pub risk_table: RiskTableConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub off_url: String,
    pub taxonomy_url: String,
    pub wikipedia_url: String,
    pub pubchem_url: String,
    pub usda_url: String,
    pub usda_api_key: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            off_url: "https://world.openfoodfacts.org/api/v2/additive".to_string(),
            taxonomy_url: "https://static.openfoodfacts.org/data/taxonomies/additives.json"
                .to_string(),
            wikipedia_url: "https://en.wikipedia.org/api/rest_v1/page/summary".to_string(),
            pubchem_url: "https://pubchem.ncbi.nlm.nih.gov/rest/pug".to_string(),
            usda_url: "https://api.nal.usda.gov/fdc/v1/foods/search".to_string(),
            usda_api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Per-call bound in seconds; a provider exceeding it is abandoned.
    pub request_timeout_secs: u64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    pub limit: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self { limit: 10 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskTableConfig {
    /// Optional TOML file layered over the compiled-in risk table.
    pub path: Option<String>,
}

pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}

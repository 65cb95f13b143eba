use additive_core::aggregator::{self, Aggregator};
use additive_core::config;
use additive_core::config::AppConfig;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze { query, json } => run_analyze(cfg, &query, json).await,
        Commands::Suggest {
            prefix,
            limit,
            json,
        } => run_suggest(cfg, &prefix, limit, json).await,
    }
}

#[derive(Parser)]
#[command(name = "toxiscan")]
#[command(about = "Food additive safety checker", long_about = None)]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate safety, origin and dosage data for one additive
    Analyze {
        /// E-number or additive name, e.g. "E330" or "citric acid"
        query: String,
        /// Output the JSON record
        #[arg(long)]
        json: bool,
    },
    /// Autocomplete known additive codes and names
    Suggest {
        /// Text to match against the taxonomy
        prefix: String,
        /// Maximum number of suggestions (default from config)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

async fn build_aggregator(cfg: &AppConfig) -> Result<Aggregator> {
    let registry = aggregator::build_registry(cfg)?;
    let risk_table = aggregator::build_risk_table(cfg)?;
    let taxonomy = aggregator::load_taxonomy(cfg).await;
    Ok(Aggregator::new(
        registry,
        risk_table,
        taxonomy,
        Duration::from_secs(cfg.aggregator.request_timeout_secs),
    ))
}

async fn run_analyze(cfg: AppConfig, query: &str, json: bool) -> Result<()> {
    let agg = build_aggregator(&cfg).await?;
    let record = agg.aggregate(query).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{} ({})", record.name, record.e_number);
        println!("safety: {}", record.safety.as_str());
        println!("origin: {}", record.origin.as_str());
        println!("dosage: {}", record.dosage);
        if record.verified {
            println!("verified: matched in USDA FoodData Central");
        }
        if !record.image_url.is_empty() {
            println!("structure: {}", record.image_url);
        }
        if !record.description.is_empty() {
            println!("\n{}", record.description);
        }
    }
    Ok(())
}

async fn run_suggest(cfg: AppConfig, prefix: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let taxonomy = aggregator::load_taxonomy(&cfg).await;
    let limit = limit.unwrap_or(cfg.autocomplete.limit);
    let matches = taxonomy.suggest(prefix, limit);
    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        for entry in &matches {
            println!("{}", entry);
        }
    }
    Ok(())
}

//! Basket Mining CLI
//!
//! # Usage
//!
//! ```bash
//! # One configured pass (preset defaults)
//! cargo run --bin bench-basket --release -- run --input baskets.json --preset balanced
//!
//! # Versioned YAML config
//! cargo run --bin bench-basket --release -- run --input baskets.json --config basket.yaml
//!
//! # Apriori vs FP-Growth
//! RUST_LOG=basket_mining=debug cargo run --bin bench-basket -- compare --input baskets.json
//!
//! # Quantity table exported from a dataframe
//! cargo run --bin bench-basket -- run --input quantities.json --coerce
//! ```
//!
//! Input is `{ "columns": [...], "rows": [[true, false, ...], ...] }`. With
//! `--coerce` the "Unnamed: 0" index column is dropped and cells are read as
//! quantities (non-zero = present, blank or text = absent).

use basket_mining::application::{
    compare_miners, MinerComparison, MiningInput, MiningUseCase, MiningUseCaseImpl,
};
use basket_mining::config::{Algorithm, MiningConfig, Preset};
use basket_mining::{FrequentItemset, RawTable, TransactionStore};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bench-basket")]
#[command(about = "Frequent itemset and association rule mining", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mine itemsets and rules with the configured algorithm
    Run {
        #[command(flatten)]
        source: SourceArgs,

        /// Print only the first N itemsets and rules
        #[arg(long)]
        top: Option<usize>,
    },

    /// Run both miners and compare their output
    Compare {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Transaction table (JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// YAML configuration (version 1)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preset used when no config file is given
    #[arg(short, long, default_value = "balanced")]
    preset: String,

    /// Override minimum support
    #[arg(long)]
    min_support: Option<f64>,

    /// Override algorithm (apriori, fpgrowth)
    #[arg(long)]
    algorithm: Option<String>,

    /// Read cells as quantities instead of strict booleans
    #[arg(long)]
    coerce: bool,
}

#[derive(Serialize)]
struct LabelledItemset {
    items: Vec<String>,
    support: f64,
}

#[derive(Serialize)]
struct LabelledRule {
    antecedent: Vec<String>,
    consequent: Vec<String>,
    support: f64,
    confidence: f64,
    lift: f64,
    leverage: f64,
    conviction: f64,
}

#[derive(Serialize)]
struct RunReport<'a> {
    stats: &'a basket_mining::MiningStats,
    itemsets: Vec<LabelledItemset>,
    rules: Vec<LabelledRule>,
}

/// One rank of the top-itemset lists, both miners side by side
#[derive(Serialize)]
struct TopRow {
    apriori: Option<LabelledItemset>,
    fpgrowth: Option<LabelledItemset>,
}

#[derive(Serialize)]
struct CompareReport<'a> {
    #[serde(flatten)]
    comparison: &'a MinerComparison,
    top_itemsets: Vec<TopRow>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { source, top } => run(source, top)?,
        Commands::Compare { source } => compare(source)?,
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn load(source: &SourceArgs) -> Result<(TransactionStore, MiningConfig), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(&source.input)?;
    let mut table = RawTable::from_json_str(&content)?;
    if source.coerce {
        table = table.coerce()?;
    }
    let store = table.into_store()?;

    let mut config = match &source.config {
        Some(path) => MiningConfig::from_yaml(path)?,
        None => MiningConfig::preset(Preset::from_str(&source.preset)?),
    };
    if let Some(min_support) = source.min_support {
        config = config.min_support(min_support);
    }
    if let Some(algorithm) = &source.algorithm {
        config = config.algorithm(Algorithm::from_str(algorithm)?);
    }

    Ok((store, config))
}

fn run(source: SourceArgs, top: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let (store, config) = load(&source)?;
    let output = MiningUseCaseImpl::new().run(MiningInput {
        store: &store,
        config: &config,
    })?;

    let limit = top.unwrap_or(usize::MAX);
    let itemsets = output
        .itemsets
        .top(limit)
        .iter()
        .map(|record| labelled(&store, record))
        .collect();
    let rules = output
        .rules
        .iter()
        .take(limit)
        .map(|rule| LabelledRule {
            antecedent: owned_labels(&store, &rule.antecedent),
            consequent: owned_labels(&store, &rule.consequent),
            support: rule.support,
            confidence: rule.confidence,
            lift: rule.lift,
            leverage: rule.leverage,
            conviction: rule.conviction,
        })
        .collect();

    let report = RunReport {
        stats: &output.stats,
        itemsets,
        rules,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn compare(source: SourceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (store, config) = load(&source)?;
    let comparison = compare_miners(&store, &config)?;

    let (apriori, fpgrowth) = (&comparison.apriori.top_itemsets, &comparison.fpgrowth.top_itemsets);
    let top_itemsets = (0..apriori.len().max(fpgrowth.len()))
        .map(|rank| TopRow {
            apriori: apriori.get(rank).map(|record| labelled(&store, record)),
            fpgrowth: fpgrowth.get(rank).map(|record| labelled(&store, record)),
        })
        .collect();

    let report = CompareReport {
        comparison: &comparison,
        top_itemsets,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(speedup) = comparison.speedup() {
        eprintln!("fpgrowth speedup over apriori: {:.2}x", speedup);
    }
    Ok(())
}

fn labelled(store: &TransactionStore, record: &FrequentItemset) -> LabelledItemset {
    LabelledItemset {
        items: owned_labels(store, &record.itemset),
        support: record.support,
    }
}

fn owned_labels(store: &TransactionStore, itemset: &basket_mining::Itemset) -> Vec<String> {
    store.labels(itemset).into_iter().map(str::to_string).collect()
}

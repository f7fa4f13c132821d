use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use econ_core::calculations::CompositionView;
use econ_core::calculations::common::{round_to_tenth, round_to_won_ties_up};
use econ_core::{EngineConfig, WizardState};
use econ_data::{CostItemLoader, ScenarioFile, write_report};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Unit economics calculator for a single product.
///
/// Reads a scenario (product, channel, loan, engine settings) and a cost
/// items CSV, prints margin, monthly profit and break-even, and writes the
/// `unit-economics.csv` report.
#[derive(Debug, Parser)]
#[command(name = "unit-economics")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML scenario file with [engine], [product], [channel] and [loan] tables
    #[arg(short, long)]
    scenario: Option<PathBuf>,

    /// CSV file with columns category,id,name,amount
    #[arg(short, long, conflicts_with = "sample")]
    items: Option<PathBuf>,

    /// Directory the report is written to
    #[arg(short, long, default_value = ".")]
    out: PathBuf,

    /// Use the built-in sample product and costs; a scenario's [product] table is ignored
    #[arg(long, default_value_t = false)]
    sample: bool,

    /// Override the assumed monthly sales volume
    #[arg(long)]
    monthly_volume: Option<Decimal>,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── inputs ──────────────────────────────────────────────────────────────────

fn build_state(cli: &Cli) -> Result<(EngineConfig, WizardState)> {
    let scenario = match &cli.scenario {
        Some(path) => ScenarioFile::load(path)
            .with_context(|| format!("Failed to load scenario: {}", path.display()))?,
        None => ScenarioFile::default(),
    };

    if cli.sample {
        debug!("using the built-in sample scenario");
        return Ok(scenario.into_sample_state());
    }

    let costs = match &cli.items {
        Some(path) => CostItemLoader::load_from_file(path)
            .with_context(|| format!("Failed to load cost items: {}", path.display()))?,
        None => {
            warn!("no cost items given; all cost totals are 0");
            Default::default()
        }
    };

    Ok(scenario.into_state(costs))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let (mut config, state) = build_state(&cli)?;
    if let Some(volume) = cli.monthly_volume {
        config.monthly_volume = volume;
    }
    config.validate().context("Invalid engine settings")?;

    if !state.product_ready() {
        warn!("product name or target price missing; margin is reported as 0");
    }

    let metrics = state.metrics(&config);
    info!(
        "{} @ {}원, {}개/월",
        state.pricing.product_name, state.pricing.target_price, config.monthly_volume
    );
    info!("마진율: {}%", round_to_tenth(metrics.margin_percent));
    info!("월 예상 순이익: {}원", round_to_won_ties_up(metrics.monthly_profit));
    if metrics.is_breakeven_reachable() {
        info!("손익분기점: {}개", metrics.breakeven_units);
    } else {
        warn!("판매가가 변동비보다 낮아 손익분기점에 도달할 수 없습니다");
    }
    if let Some(message) = state.advisory(&config).message() {
        info!("{}", message);
    }

    for share in state.composition(&config, CompositionView::All) {
        debug!("{}: {}원 ({}%)", share.label, share.amount, round_to_tenth(share.percent));
    }

    let path = write_report(&cli.out, &state.export(&config))
        .with_context(|| format!("Failed to write report to: {}", cli.out.display()))?;
    info!("report written to {}", path.display());

    Ok(())
}

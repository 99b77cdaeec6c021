/// Correlation Report
///
/// Loads already fetched price samples from a JSON file, builds the
/// correlation matrix plus per-symbol statistics, and prints the report as
/// JSON on stdout. Logs go to stderr.
///
/// Usage: `correlation-report <prices.json>` (or set PRICES_PATH)
use std::error::Error;

use asset_correlation::{
    CorrelationReport, EngineConfig, StaticSource, Symbol, error::CorrelationError, gather_series,
};
use tracing::info;

/// Get tickers from TICKERS env var (default: every symbol in the input file)
fn get_tickers(source: &StaticSource) -> Vec<Symbol> {
    match std::env::var("TICKERS") {
        Ok(tickers) => tickers
            .split(',')
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .map(Symbol::from)
            .collect(),
        Err(_) => source.symbols(),
    }
}

/// Input path from the first argument, falling back to PRICES_PATH
fn get_prices_path() -> Result<String, CorrelationError> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PRICES_PATH").ok())
        .ok_or_else(|| CorrelationError::InvalidConfig {
            key: "PRICES_PATH".to_string(),
            value: String::new(),
            reason: "pass a prices JSON file as the first argument or set PRICES_PATH".to_string(),
        })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logging();

    let config = EngineConfig::from_env()?;
    let path = get_prices_path()?;

    let json = std::fs::read_to_string(&path).map_err(CorrelationError::from)?;
    let source = StaticSource::from_json(&json).map_err(CorrelationError::from)?;
    let tickers = get_tickers(&source);

    info!(
        %path,
        tickers = tickers.len(),
        bucket_secs = config.bucket_width.num_seconds(),
        "building correlation report"
    );

    let series = gather_series(&source, &tickers).await;
    let report = CorrelationReport::build(&series, &config);

    if let Some((a, b, value)) = report.strongest_pairs().first() {
        info!(%a, %b, correlation = value, "strongest pair");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

// Command-line recommendation runner
//
// Usage: recommend [PATH]
// Reads one request object (or an array of requests) from PATH or stdin
// and prints the recommendation as pretty JSON.

use std::io::Read;

use anyhow::{bail, Context};
use serde_json::Value;
use sizing_engine::config::DEFAULT_LOG_FILTER;
use sizing_engine::recommender::BatchOutcome;
use sizing_engine::SizeRecommendationEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some("-") | None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path)),
    }
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() > 1 {
        bail!("Usage: recommend [PATH]");
    }

    let raw = read_input(args.first().map(String::as_str))?;
    let body: Value = serde_json::from_str(&raw).context("Input is not valid JSON")?;
    let engine = SizeRecommendationEngine::new();

    let output = match body {
        Value::Array(requests) => {
            tracing::info!("Processing {} requests", requests.len());
            let results: Vec<BatchOutcome> = engine
                .recommend_batch(&requests)
                .into_iter()
                .map(BatchOutcome::from)
                .collect();
            serde_json::to_string_pretty(&results)?
        }
        single => {
            let rec = engine.recommend_value(&single).context("Invalid recommendation request")?;
            serde_json::to_string_pretty(&rec)?
        }
    };

    println!("{}", output);
    Ok(())
}

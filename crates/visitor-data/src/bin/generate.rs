//! Prints generated dashboard data as JSON.
//!
//! Run with:
//! ```
//! cargo run -p visitor-data --bin generate -- Saturday
//! ```
//!
//! The day filter comes from the first argument or `VISITORS_DAY`; without one,
//! every day is printed. Logs go to stderr.

use std::env;

use tracing_subscriber::EnvFilter;
use visitor_data::builders::DashboardBuilder;
use visitor_data::config::{DAY_VAR, GeneratorConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GeneratorConfig::from_env()?;
    let day_filter = env::args().nth(1).or_else(|| env::var(DAY_VAR).ok());

    let data = DashboardBuilder::from_config(config)
        .with_metrics(true)
        .build()?;

    let output = match day_filter {
        Some(day) => serde_json::to_string_pretty(&data.view_by_name(&day)?)?,
        None => serde_json::to_string_pretty(&data.views()?)?,
    };
    println!("{output}");

    if let Some(metrics) = &data.metrics {
        tracing::info!("Generation completed!");
        tracing::info!("  Age samples: {}", metrics.age_sample_count);
        tracing::info!("  Hourly rows: {}", metrics.hourly_row_count);
        tracing::info!("  Time: {} ms", metrics.generation_time_ms);
    }

    Ok(())
}

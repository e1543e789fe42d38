//! Example: Compare the age distribution under each override policy.
//!
//! Builds the same seeded dataset three times and logs one day's age-group
//! counts as simulated, with additive offsets, and with replaced literals.
//!
//! Run with:
//! ```
//! cargo run -p visitor-data --example compare_policies -- Sunday
//! ```

use tracing_subscriber::EnvFilter;
use visitor_data::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let day: Day = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Saturday".to_string())
        .parse()?;

    for policy in [
        OverridePolicy::Disabled,
        OverridePolicy::Add,
        OverridePolicy::Replace,
    ] {
        let view = DashboardBuilder::new()
            .with_override_policy(policy)
            .build()?
            .view(day)?;

        let counts: Vec<String> = view
            .age_groups
            .iter()
            .map(|c| format!("{}={}", c.age_group, c.count))
            .collect();
        let total: u32 = view.age_groups.iter().map(|c| c.count).sum();

        tracing::info!("{day} [{policy:?}] total={total}: {}", counts.join(", "));
    }

    Ok(())
}

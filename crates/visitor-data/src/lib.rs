//! Synthetic visitor data for the analytics dashboard.
//!
//! Generates the three tables the dashboard renders: the per-day summary,
//! age-group counts derived from simulated visitor ages, and hourly traffic
//! restricted to each day's display window. Fixed override values are merged
//! into the generated counts according to an [`config::OverridePolicy`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use visitor_data::prelude::*;
//!
//! let data = DashboardBuilder::new()
//!     .with_seed(42)
//!     .with_override_policy(OverridePolicy::Add)
//!     .build()?;
//!
//! let sunday = data.view_by_name("Sunday")?;
//! ```

pub mod builders;
pub mod config;
pub mod error;
pub mod generators;
pub mod overrides;
pub mod seeding;

pub use error::GenerateError;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{DashboardBuilder, DashboardData, DashboardMetrics, DayView};
    pub use crate::config::{
        AgeSampleSpec, GeneratorConfig, NoiseConfig, OverridePolicy, SeedStrategy,
    };
    pub use crate::error::GenerateError;
    pub use crate::generators::{
        AgeGenerator, HourlyGenerator, bucket_ages, build_day_summary, restrict_to_display_window,
    };
    pub use crate::overrides::{OverridePlan, OverrideTable};
    pub use visitors::{
        AgeGroup, AgeGroupCount, AgeSample, Day, DaySummary, HourOfDay, HourlySample,
    };
}

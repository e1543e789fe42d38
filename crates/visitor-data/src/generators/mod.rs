//! Table generators.
//!
//! - [`summary`]: the fixed one-row-per-day summary table
//! - [`AgeGenerator`]: simulated visitor ages and age-group bucketing
//! - [`HourlyGenerator`]: noisy hourly traffic, display windows and gender series

pub mod age;
pub mod hourly;
pub mod summary;

pub use age::{AgeGenerator, bucket_ages};
pub use hourly::{HourlyGenerator, display_window, restrict_to_display_window, sample_genders};
pub use summary::{build_day_summary, summary_for};

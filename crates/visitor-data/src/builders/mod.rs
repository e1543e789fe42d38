//! Builders for assembling dashboard datasets.

mod dashboard;

pub use dashboard::{DashboardBuilder, DashboardData, DashboardMetrics, DayView};

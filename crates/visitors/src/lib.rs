//! Domain model for the visitor analytics dashboard.
//!
//! Holds the closed set of event days, the age bins and 12-hour labels used on
//! chart axes, the table row types handed to the renderer, and the KPI views
//! derived from the day summary.

pub mod errors;
pub mod kpis;
pub mod models;

pub use errors::VisitorError;
pub use kpis::{DayKpis, GenderShare, SummaryRow, gender_breakdown};
pub use models::{
    AgeGroup, AgeGroupCount, AgeSample, Day, DaySummary, Gender, HourOfDay, HourlySample,
};

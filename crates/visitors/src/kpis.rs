//! Presentation-side views derived from the day summary.
//!
//! These are the shapes the dashboard renderer consumes for the KPI cards,
//! the gender donut chart and the summary table widget.

use serde::{Deserialize, Serialize};

use crate::models::{Day, DaySummary, Gender};

/// Figures shown on the KPI cards for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayKpis {
    pub day: Day,
    pub total_visitors: u32,
    pub male_percentage: u8,
    pub female_percentage: u8,
    pub average_age: String,
}

impl From<&DaySummary> for DayKpis {
    fn from(summary: &DaySummary) -> Self {
        Self {
            day: summary.day,
            total_visitors: summary.total_visitors,
            male_percentage: summary.male_percentage,
            female_percentage: summary.female_percentage,
            average_age: summary.average_age.clone(),
        }
    }
}

/// One slice of the gender chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderShare {
    pub gender: Gender,
    pub percentage: u8,
}

/// Male and female shares for a day, in that order.
///
/// Percentages are passed through untouched; see
/// [`DaySummary::gender_split_is_complete`].
pub fn gender_breakdown(summary: &DaySummary) -> [GenderShare; 2] {
    [
        GenderShare {
            gender: Gender::Male,
            percentage: summary.male_percentage,
        },
        GenderShare {
            gender: Gender::Female,
            percentage: summary.female_percentage,
        },
    ]
}

/// Summary row formatted for the data table widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// `YYYY-MM-DD`
    pub date: String,
    pub day: Day,
    pub total_visitors: u32,
    /// e.g. `"18%"`
    pub male_percentage: String,
    pub female_percentage: String,
    pub average_age: String,
}

impl From<&DaySummary> for SummaryRow {
    fn from(summary: &DaySummary) -> Self {
        Self {
            date: summary.date.to_string(),
            day: summary.day,
            total_visitors: summary.total_visitors,
            male_percentage: format!("{}%", summary.male_percentage),
            female_percentage: format!("{}%", summary.female_percentage),
            average_age: summary.average_age.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn sunday() -> DaySummary {
        DaySummary {
            date: date!(2025 - 02 - 23),
            day: Day::Sunday,
            total_visitors: 15000,
            male_percentage: 22,
            female_percentage: 78,
            average_age: "20-30".to_string(),
        }
    }

    #[test]
    fn test_kpis_mirror_summary() {
        let kpis = DayKpis::from(&sunday());
        assert_eq!(kpis.day, Day::Sunday);
        assert_eq!(kpis.total_visitors, 15000);
        assert_eq!(kpis.male_percentage, 22);
        assert_eq!(kpis.female_percentage, 78);
        assert_eq!(kpis.average_age, "20-30");
    }

    #[test]
    fn test_gender_breakdown_order() {
        let shares = gender_breakdown(&sunday());
        assert_eq!(shares[0].gender, Gender::Male);
        assert_eq!(shares[0].percentage, 22);
        assert_eq!(shares[1].gender, Gender::Female);
        assert_eq!(shares[1].percentage, 78);
    }

    #[test]
    fn test_gender_breakdown_keeps_incomplete_split() {
        let mut summary = sunday();
        summary.male_percentage = 30;
        let shares = gender_breakdown(&summary);
        assert_eq!(shares[0].percentage + shares[1].percentage, 108);
    }

    #[test]
    fn test_summary_row_formatting() {
        let row = SummaryRow::from(&sunday());
        assert_eq!(row.date, "2025-02-23");
        assert_eq!(row.male_percentage, "22%");
        assert_eq!(row.female_percentage, "78%");
    }
}

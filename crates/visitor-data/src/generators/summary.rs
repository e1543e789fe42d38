//! Day summary table.

use time::macros::date;
use visitors::{Day, DaySummary};

/// Builds the fixed one-row-per-day summary table, Saturday first.
pub fn build_day_summary() -> Vec<DaySummary> {
    Day::ALL.into_iter().map(summary_for).collect()
}

/// Returns the summary row for a single day.
pub fn summary_for(day: Day) -> DaySummary {
    let (date, total_visitors, male_percentage, female_percentage) = match day {
        Day::Saturday => (date!(2025 - 02 - 22), 10_500, 18, 82),
        Day::Sunday => (date!(2025 - 02 - 23), 15_000, 22, 78),
    };

    DaySummary {
        date,
        day,
        total_visitors,
        male_percentage,
        female_percentage,
        average_age: "20-30".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    #[test]
    fn test_one_row_per_day() {
        let rows = build_day_summary();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].day, Day::Saturday);
        assert_eq!(rows[1].day, Day::Sunday);
    }

    #[test]
    fn test_saturday_row() {
        let row = summary_for(Day::Saturday);
        assert_eq!(row.date.year(), 2025);
        assert_eq!(row.date.month(), Month::February);
        assert_eq!(row.date.day(), 22);
        assert_eq!(row.total_visitors, 10_500);
        assert_eq!(row.male_percentage, 18);
        assert_eq!(row.female_percentage, 82);
        assert_eq!(row.average_age, "20-30");
    }

    #[test]
    fn test_sunday_row() {
        let row = summary_for(Day::Sunday);
        assert_eq!(row.date.day(), 23);
        assert_eq!(row.total_visitors, 15_000);
        assert_eq!(row.male_percentage, 22);
        assert_eq!(row.female_percentage, 78);
    }

    #[test]
    fn test_dates_serialize_as_iso() {
        let json = serde_json::to_value(summary_for(Day::Saturday)).unwrap();
        assert_eq!(json["date"], "2025-02-22");
    }
}

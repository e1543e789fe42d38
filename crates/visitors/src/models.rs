use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::errors::VisitorError;

/// Event day. The dashboard only ever knows about these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Saturday,
    Sunday,
}

impl Day {
    /// All days, in generation order.
    pub const ALL: [Day; 2] = [Day::Saturday, Day::Sunday];

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Position of the day in [`Day::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Day::Saturday => 0,
            Day::Sunday => 1,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = VisitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Day::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| VisitorError::UnknownDay(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Age bins used by the age distribution chart.
///
/// Bins are half-open `[lo, hi)` except [`AgeGroup::SixtyPlus`], which also
/// takes the clamp ceiling of 100 so every clamped age lands in exactly one bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "0-10")]
    UnderTen,
    #[serde(rename = "10-20")]
    Teens,
    #[serde(rename = "20-30")]
    Twenties,
    #[serde(rename = "30-40")]
    Thirties,
    #[serde(rename = "40-50")]
    Forties,
    #[serde(rename = "50-60")]
    Fifties,
    #[serde(rename = "60+")]
    SixtyPlus,
}

impl AgeGroup {
    /// All bins, in chart order.
    pub const ALL: [AgeGroup; 7] = [
        AgeGroup::UnderTen,
        AgeGroup::Teens,
        AgeGroup::Twenties,
        AgeGroup::Thirties,
        AgeGroup::Forties,
        AgeGroup::Fifties,
        AgeGroup::SixtyPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::UnderTen => "0-10",
            AgeGroup::Teens => "10-20",
            AgeGroup::Twenties => "20-30",
            AgeGroup::Thirties => "30-40",
            AgeGroup::Forties => "40-50",
            AgeGroup::Fifties => "50-60",
            AgeGroup::SixtyPlus => "60+",
        }
    }

    /// Returns the bin an age falls into.
    pub fn for_age(age: f64) -> Self {
        match age {
            a if a < 10.0 => AgeGroup::UnderTen,
            a if a < 20.0 => AgeGroup::Teens,
            a if a < 30.0 => AgeGroup::Twenties,
            a if a < 40.0 => AgeGroup::Thirties,
            a if a < 50.0 => AgeGroup::Forties,
            a if a < 60.0 => AgeGroup::Fifties,
            _ => AgeGroup::SixtyPlus,
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeGroup {
    type Err = VisitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AgeGroup::ALL
            .into_iter()
            .find(|group| group.label() == trimmed)
            .ok_or_else(|| VisitorError::UnknownAgeGroup(s.to_string()))
    }
}

/// Hour of the day (0-23), labelled in 12-hour form: `"12 AM"`, `"1 AM"`, ... `"11 PM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HourOfDay(u8);

impl HourOfDay {
    pub const COUNT: usize = 24;

    pub fn new(hour: u8) -> Result<Self, VisitorError> {
        if usize::from(hour) < Self::COUNT {
            Ok(Self(hour))
        } else {
            Err(VisitorError::InvalidHour(hour))
        }
    }

    /// All 24 hours, midnight first.
    pub fn all() -> impl Iterator<Item = HourOfDay> {
        (0..Self::COUNT as u8).map(HourOfDay)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn label(self) -> String {
        let clock = match self.0 % 12 {
            0 => 12,
            h => h,
        };
        let suffix = if self.0 < 12 { "AM" } else { "PM" };
        format!("{clock} {suffix}")
    }
}

impl fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for HourOfDay {
    type Err = VisitorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || VisitorError::UnknownHourLabel(s.to_string());

        let (clock, suffix) = s.trim().split_once(' ').ok_or_else(unknown)?;
        let clock: u8 = clock.parse().map_err(|_| unknown())?;
        if !(1..=12).contains(&clock) {
            return Err(unknown());
        }

        let offset = if suffix.eq_ignore_ascii_case("AM") {
            0
        } else if suffix.eq_ignore_ascii_case("PM") {
            12
        } else {
            return Err(unknown());
        };

        Ok(Self(clock % 12 + offset))
    }
}

impl TryFrom<String> for HourOfDay {
    type Error = VisitorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HourOfDay> for String {
    fn from(hour: HourOfDay) -> Self {
        hour.label()
    }
}

/// One row of the day summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: Date,
    pub day: Day,
    pub total_visitors: u32,
    pub male_percentage: u8,
    pub female_percentage: u8,
    /// Display label such as `"20-30"`.
    pub average_age: String,
}

impl DaySummary {
    /// Whether the male and female percentages add up to 100.
    ///
    /// The figures are published as-is, so a row failing this check is kept.
    pub fn gender_split_is_complete(&self) -> bool {
        u16::from(self.male_percentage) + u16::from(self.female_percentage) == 100
    }
}

/// A single simulated visitor age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeSample {
    pub day: Day,
    pub age: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGroupCount {
    pub age_group: AgeGroup,
    pub count: u32,
}

/// Visitor count for one hour of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlySample {
    pub day: Day,
    pub hour: HourOfDay,
    pub visitor_count: u32,
    /// Series the row is plotted under when the chart is split by gender.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gender: Option<Gender>,
}

//! Hourly visitor traffic.
//!
//! Each day has a fixed 24-hour baseline shape. A generated pattern adds
//! clamped Gaussian noise to the baseline; the resulting table is then cut
//! down to the hours shown on the dashboard for that day.

use std::ops::RangeInclusive;

use rand::Rng;
use rand_distr::{Distribution, Normal};
use visitors::{Day, Gender, HourOfDay, HourlySample};

use crate::config::NoiseConfig;
use crate::error::GenerateError;

/// Saturday traffic builds through the afternoon and peaks in the evening.
pub const SATURDAY_BASELINE: [u32; HourOfDay::COUNT] = [
    50, 30, 20, 10, 10, 20, 50, 100, 200, 300, 400, 500, // 12 AM - 11 AM
    600, 700, 800, 900, 1000, 1200, 1100, 900, 700, 500, 300, 150, // 12 PM - 11 PM
];

/// Sunday traffic peaks mid-morning and tails off through the evening.
pub const SUNDAY_BASELINE: [u32; HourOfDay::COUNT] = [
    100, 150, 200, 300, 400, 600, 800, 1000, 1200, 1100, 900, 700, // 12 AM - 11 AM
    600, 500, 400, 300, 200, 150, 100, 80, 60, 50, 40, 30, // 12 PM - 11 PM
];

pub fn baseline(day: Day) -> &'static [u32; HourOfDay::COUNT] {
    match day {
        Day::Saturday => &SATURDAY_BASELINE,
        Day::Sunday => &SUNDAY_BASELINE,
    }
}

/// Hours (0-23, inclusive) shown on the dashboard for a day.
pub fn display_window(day: Day) -> RangeInclusive<u8> {
    match day {
        // 4 PM - 8 PM
        Day::Saturday => 16..=20,
        // 1 PM - 9 PM
        Day::Sunday => 13..=21,
    }
}

/// Generates noisy hourly visitor counts.
pub struct HourlyGenerator {
    noise: NoiseConfig,
}

impl HourlyGenerator {
    /// Creates a generator with the default noise (std 50, clamped to ±100).
    pub fn new() -> Self {
        Self {
            noise: NoiseConfig::default(),
        }
    }

    pub fn with_noise(noise: NoiseConfig) -> Self {
        Self { noise }
    }

    /// Returns 24 visitor counts: `max(0, baseline + noise)` truncated to an integer.
    ///
    /// All 24 noise values are drawn before any are applied.
    pub fn generate_hourly_pattern(
        &self,
        day: Day,
        rng: &mut impl Rng,
    ) -> Result<[u32; HourOfDay::COUNT], GenerateError> {
        let clamp = self.noise.clamp;
        if !clamp.is_finite() || clamp < 0.0 {
            return Err(GenerateError::InvalidParameter {
                name: "noise clamp",
                reason: format!("{clamp} must be a finite, non-negative bound"),
            });
        }

        let normal = Normal::new(0.0, self.noise.std_dev)?;
        let noise: [f64; HourOfDay::COUNT] =
            std::array::from_fn(|_| normal.sample(rng).clamp(-clamp, clamp));

        let base = baseline(day);
        Ok(std::array::from_fn(|hour| {
            (f64::from(base[hour]) + noise[hour]).max(0.0) as u32
        }))
    }

    /// Expands a pattern into one table row per hour, midnight first.
    ///
    /// `genders`, when given, supplies the series of each row by hour index.
    pub fn hourly_table(
        day: Day,
        pattern: &[u32; HourOfDay::COUNT],
        genders: Option<&[Gender]>,
    ) -> Vec<HourlySample> {
        HourOfDay::all()
            .zip(pattern.iter())
            .enumerate()
            .map(|(index, (hour, &visitor_count))| HourlySample {
                day,
                hour,
                visitor_count,
                gender: genders.and_then(|g| g.get(index).copied()),
            })
            .collect()
    }
}

impl Default for HourlyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Picks a gender series for each hour with a fair coin.
pub fn sample_genders(rng: &mut impl Rng) -> Vec<Gender> {
    (0..HourOfDay::COUNT)
        .map(|_| {
            if rng.gen_bool(0.5) {
                Gender::Male
            } else {
                Gender::Female
            }
        })
        .collect()
}

/// Keeps only `day`'s rows that fall inside its display window.
///
/// Rows outside the window are dropped, not zeroed.
pub fn restrict_to_display_window(table: Vec<HourlySample>, day: Day) -> Vec<HourlySample> {
    let window = display_window(day);
    table
        .into_iter()
        .filter(|row| row.day == day && window.contains(&row.hour.get()))
        .collect()
}

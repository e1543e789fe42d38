//! Fluent builder that produces every table the dashboard renders.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};
use visitors::{
    AgeGroupCount, AgeSample, Day, DayKpis, DaySummary, GenderShare, HourOfDay, HourlySample,
    SummaryRow, gender_breakdown,
};

use crate::config::{AgeSampleSpec, GeneratorConfig, NoiseConfig, OverridePolicy, SeedStrategy};
use crate::error::GenerateError;
use crate::generators::{
    AgeGenerator, HourlyGenerator, bucket_ages, build_day_summary, restrict_to_display_window,
    sample_genders,
};
use crate::overrides::OverridePlan;
use crate::seeding::{RngPlan, Stream};

/// Everything generated by one build, for all days.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub summaries: Vec<DaySummary>,
    /// Raw simulated ages, Saturday's before Sunday's.
    pub age_samples: Vec<AgeSample>,
    /// Age-group counts per day after overrides.
    pub age_groups: BTreeMap<Day, Vec<AgeGroupCount>>,
    /// Hourly rows inside each day's display window, after overrides.
    pub hourly: Vec<HourlySample>,
    pub override_policy: OverridePolicy,
    /// Populated when metrics tracking is enabled.
    pub metrics: Option<DashboardMetrics>,
}

/// Counts and timing from a build.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    pub generation_time_ms: u64,
    pub age_sample_count: usize,
    pub hourly_row_count: usize,
}

/// The tables for a single selected day.
#[derive(Debug, Clone, Serialize)]
pub struct DayView {
    pub day: Day,
    pub kpis: DayKpis,
    pub summary: SummaryRow,
    pub gender_breakdown: [GenderShare; 2],
    pub age_groups: Vec<AgeGroupCount>,
    pub hourly: Vec<HourlySample>,
}

impl DashboardData {
    pub fn summary(&self, day: Day) -> Option<&DaySummary> {
        self.summaries.iter().find(|s| s.day == day)
    }

    pub fn age_samples_for(&self, day: Day) -> impl Iterator<Item = &AgeSample> {
        self.age_samples.iter().filter(move |s| s.day == day)
    }

    pub fn hourly_for(&self, day: Day) -> impl Iterator<Item = &HourlySample> {
        self.hourly.iter().filter(move |s| s.day == day)
    }

    /// Filters every table down to one day.
    pub fn view(&self, day: Day) -> Result<DayView, GenerateError> {
        let summary = self.summary(day).ok_or(GenerateError::MissingDay(day))?;
        let age_groups = self
            .age_groups
            .get(&day)
            .cloned()
            .ok_or(GenerateError::MissingDay(day))?;

        Ok(DayView {
            day,
            kpis: DayKpis::from(summary),
            summary: SummaryRow::from(summary),
            gender_breakdown: gender_breakdown(summary),
            age_groups,
            hourly: self.hourly_for(day).copied().collect(),
        })
    }

    /// Like [`DashboardData::view`], for a day filter given as text.
    ///
    /// Values outside the day enumeration are rejected.
    pub fn view_by_name(&self, day: &str) -> Result<DayView, GenerateError> {
        self.view(day.parse()?)
    }

    /// One view per day, Saturday first.
    pub fn views(&self) -> Result<Vec<DayView>, GenerateError> {
        Day::ALL.into_iter().map(|day| self.view(day)).collect()
    }
}

/// Builder for the dashboard tables.
///
/// # Example
///
/// ```rust,ignore
/// let data = DashboardBuilder::new()
///     .with_seed(42)
///     .with_override_policy(OverridePolicy::Replace)
///     .build()?;
/// let saturday = data.view(Day::Saturday)?;
/// ```
pub struct DashboardBuilder {
    config: GeneratorConfig,
    track_metrics: bool,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Creates a builder with the default event configuration.
    pub fn new() -> Self {
        Self::from_config(GeneratorConfig::default())
    }

    pub fn from_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            track_metrics: false,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Sets the base random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_seed_strategy(mut self, strategy: SeedStrategy) -> Self {
        self.config.seed_strategy = strategy;
        self
    }

    pub fn with_override_policy(mut self, policy: OverridePolicy) -> Self {
        self.config.override_policy = policy;
        self
    }

    /// Sets how many ages are simulated for a day and their mean.
    pub fn with_age_samples(mut self, day: Day, count: usize, mean: f64) -> Self {
        let spec = AgeSampleSpec { count, mean };
        match day {
            Day::Saturday => self.config.saturday_ages = spec,
            Day::Sunday => self.config.sunday_ages = spec,
        }
        self
    }

    pub fn with_age_std_dev(mut self, std_dev: f64) -> Self {
        self.config.age_std_dev = std_dev;
        self
    }

    pub fn with_hourly_noise(mut self, noise: NoiseConfig) -> Self {
        self.config.hourly_noise = noise;
        self
    }

    /// Enables or disables the gender series on hourly rows.
    pub fn with_gender_split(mut self, enabled: bool) -> Self {
        self.config.split_by_gender = enabled;
        self
    }

    /// Enables metrics tracking.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.track_metrics = enabled;
        self
    }

    /// Generates all tables from a freshly seeded random state.
    ///
    /// Draws happen in a fixed order (ages, then hourly noise, then gender
    /// series, each Saturday before Sunday), which is what makes
    /// [`SeedStrategy::Sequential`] reproducible.
    pub fn build(&self) -> Result<DashboardData, GenerateError> {
        let start_time = self.track_metrics.then(Instant::now);
        let config = &self.config;

        info!(
            seed = config.seed,
            seed_strategy = ?config.seed_strategy,
            override_policy = ?config.override_policy,
            "Generating dashboard data"
        );

        let summaries = build_day_summary();
        for summary in summaries.iter().filter(|s| !s.gender_split_is_complete()) {
            warn!(
                day = %summary.day,
                male = summary.male_percentage,
                female = summary.female_percentage,
                "Gender percentages do not add up to 100"
            );
        }

        let mut rngs = RngPlan::new(config.seed_strategy, config.seed);

        let age_gen = AgeGenerator::with_std_dev(config.age_std_dev);
        let mut age_samples = Vec::new();
        for day in Day::ALL {
            let spec = config.age_spec(day);
            let mut rng = rngs.rng_for(day, Stream::Ages);
            let samples = age_gen.generate(day, spec.count, spec.mean, &mut rng)?;
            debug!(%day, count = samples.len(), mean = spec.mean, "Simulated visitor ages");
            age_samples.extend(samples);
        }

        let hourly_gen = HourlyGenerator::with_noise(config.hourly_noise);
        let mut patterns = Vec::with_capacity(Day::ALL.len());
        for day in Day::ALL {
            let mut rng = rngs.rng_for(day, Stream::Hourly);
            patterns.push((day, hourly_gen.generate_hourly_pattern(day, &mut rng)?));
        }

        let overrides = OverridePlan::for_policy(config.override_policy);

        let mut hourly = Vec::new();
        for (day, pattern) in &patterns {
            let genders = if config.split_by_gender {
                let mut rng = rngs.rng_for(*day, Stream::Gender);
                Some(sample_genders(&mut rng))
            } else {
                None
            };

            let table = HourlyGenerator::hourly_table(*day, pattern, genders.as_deref());
            let windowed = restrict_to_display_window(table, *day);
            debug!(
                day = %day,
                shown = windowed.len(),
                hidden = HourOfDay::COUNT - windowed.len(),
                "Restricted hourly traffic to display window"
            );
            hourly.extend(overrides.apply_hardcoded_overrides(windowed, *day));
        }

        let age_groups: BTreeMap<Day, Vec<AgeGroupCount>> = Day::ALL
            .into_iter()
            .map(|day| {
                let counts = bucket_ages(&age_samples, day);
                (day, overrides.apply_hardcoded_overrides(counts, day))
            })
            .collect();

        let metrics = start_time.map(|start| DashboardMetrics {
            generation_time_ms: start.elapsed().as_millis() as u64,
            age_sample_count: age_samples.len(),
            hourly_row_count: hourly.len(),
        });

        info!(
            age_samples = age_samples.len(),
            hourly_rows = hourly.len(),
            "Dashboard data ready"
        );

        Ok(DashboardData {
            summaries,
            age_samples,
            age_groups,
            hourly,
            override_policy: config.override_policy,
            metrics,
        })
    }
}

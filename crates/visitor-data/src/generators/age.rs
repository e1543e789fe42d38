//! Simulated visitor ages and age-group bucketing.

use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};
use visitors::{AgeGroup, AgeGroupCount, AgeSample, Day};

use crate::error::GenerateError;
use crate::seeding::{Stream, derive_seed};

/// Standard deviation of simulated ages.
pub const AGE_STD_DEV: f64 = 5.0;
/// Youngest simulated age.
pub const MIN_AGE: f64 = 0.0;
/// Oldest simulated age.
pub const MAX_AGE: f64 = 100.0;

/// Draws visitor ages from a normal distribution around a day-specific mean.
pub struct AgeGenerator {
    std_dev: f64,
}

impl AgeGenerator {
    /// Creates a generator with the default standard deviation of 5 years.
    pub fn new() -> Self {
        Self {
            std_dev: AGE_STD_DEV,
        }
    }

    pub fn with_std_dev(std_dev: f64) -> Self {
        Self { std_dev }
    }

    /// Draws `count` ages around `mean`, clamped to `[0, 100]`.
    pub fn generate(
        &self,
        day: Day,
        count: usize,
        mean: f64,
        rng: &mut impl Rng,
    ) -> Result<Vec<AgeSample>, GenerateError> {
        if count == 0 {
            return Err(GenerateError::InvalidParameter {
                name: "count",
                reason: format!("{day} needs at least one age sample"),
            });
        }
        if !mean.is_finite() {
            return Err(GenerateError::InvalidParameter {
                name: "mean",
                reason: format!("{mean} is not a finite age"),
            });
        }

        let normal = Normal::new(mean, self.std_dev)?;

        Ok((0..count)
            .map(|_| AgeSample {
                day,
                age: normal.sample(rng).clamp(MIN_AGE, MAX_AGE),
            })
            .collect())
    }

    /// Draws ages from a generator seeded with the day's sub-seed of `seed`.
    ///
    /// Matches what a per-day seeded build produces for the same day.
    pub fn generate_seeded(
        &self,
        day: Day,
        count: usize,
        mean: f64,
        seed: u64,
    ) -> Result<Vec<AgeSample>, GenerateError> {
        let mut rng = StdRng::seed_from_u64(derive_seed(seed, day, Stream::Ages));
        self.generate(day, count, mean, &mut rng)
    }
}

impl Default for AgeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts one day's samples per age group.
///
/// Returns one row per group in chart order, including empty groups.
pub fn bucket_ages(samples: &[AgeSample], day: Day) -> Vec<AgeGroupCount> {
    let mut counts = AgeGroup::ALL.map(|_| 0u32);
    for sample in samples.iter().filter(|s| s.day == day) {
        let group = AgeGroup::for_age(sample.age);
        counts[group as usize] += 1;
    }

    AgeGroup::ALL
        .into_iter()
        .zip(counts)
        .map(|(age_group, count)| AgeGroupCount { age_group, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean_age(samples: &[AgeSample]) -> f64 {
        samples.iter().map(|s| s.age).sum::<f64>() / samples.len() as f64
    }

    #[test]
    fn test_ages_are_clamped() {
        // A wide spread forces plenty of draws outside [0, 100].
        let age_gen = AgeGenerator::with_std_dev(80.0);
        let mut rng = StdRng::seed_from_u64(7);
        let samples = age_gen.generate(Day::Saturday, 5000, 50.0, &mut rng).unwrap();

        assert!(samples.iter().all(|s| (MIN_AGE..=MAX_AGE).contains(&s.age)));
        assert!(samples.iter().any(|s| s.age == MIN_AGE));
        assert!(samples.iter().any(|s| s.age == MAX_AGE));
    }

    #[test]
    fn test_same_seed_same_samples() {
        let age_gen = AgeGenerator::new();
        let first = age_gen.generate_seeded(Day::Sunday, 1500, 27.0, 42).unwrap();
        let second = age_gen.generate_seeded(Day::Sunday, 1500, 27.0, 42).unwrap();

        let first_bits: Vec<u64> = first.iter().map(|s| s.age.to_bits()).collect();
        let second_bits: Vec<u64> = second.iter().map(|s| s.age.to_bits()).collect();
        assert_eq!(first_bits, second_bits);
    }

    #[test]
    fn test_sample_mean_near_target() {
        let age_gen = AgeGenerator::new();
        let samples = age_gen.generate_seeded(Day::Saturday, 1000, 25.0, 42).unwrap();

        assert_eq!(samples.len(), 1000);
        let mean = mean_age(&samples);
        assert!((mean - 25.0).abs() < 1.0, "Mean {mean} should be near 25");
        assert!(samples.iter().all(|s| s.day == Day::Saturday));
    }

    #[test]
    fn test_invalid_parameters() {
        let age_gen = AgeGenerator::new();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(matches!(
            age_gen.generate(Day::Saturday, 0, 25.0, &mut rng),
            Err(GenerateError::InvalidParameter { name: "count", .. })
        ));
        assert!(matches!(
            age_gen.generate(Day::Saturday, 10, f64::NAN, &mut rng),
            Err(GenerateError::InvalidParameter { name: "mean", .. })
        ));
        assert!(matches!(
            AgeGenerator::with_std_dev(-1.0).generate(Day::Saturday, 10, 25.0, &mut rng),
            Err(GenerateError::Distribution(_))
        ));
    }

    #[test]
    fn test_bucketing_is_exhaustive() {
        let age_gen = AgeGenerator::with_std_dev(40.0);
        let samples = age_gen.generate_seeded(Day::Sunday, 3000, 40.0, 3).unwrap();
        let counts = bucket_ages(&samples, Day::Sunday);

        let groups: Vec<AgeGroup> = counts.iter().map(|c| c.age_group).collect();
        assert_eq!(groups, AgeGroup::ALL.to_vec());

        let total: u32 = counts.iter().map(|c| c.count).sum();
        assert_eq!(total as usize, samples.len());
    }

    #[test]
    fn test_bucketing_filters_by_day() {
        let samples = vec![
            AgeSample {
                day: Day::Saturday,
                age: 5.0,
            },
            AgeSample {
                day: Day::Sunday,
                age: 65.0,
            },
            AgeSample {
                day: Day::Saturday,
                age: 100.0,
            },
        ];

        let counts = bucket_ages(&samples, Day::Saturday);
        assert_eq!(counts[0].count, 1);
        assert_eq!(counts[6].count, 1);
        assert_eq!(counts.iter().map(|c| c.count).sum::<u32>(), 2);
    }
}

//! Configuration types for visitor data generation.

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use visitors::Day;

/// Base seed override.
pub const SEED_VAR: &str = "VISITORS_SEED";
/// `per-day` or `sequential`.
pub const SEED_STRATEGY_VAR: &str = "VISITORS_SEED_STRATEGY";
/// `add`, `replace` or `disabled`.
pub const OVERRIDE_POLICY_VAR: &str = "VISITORS_OVERRIDE_POLICY";
/// Path to a JSON file holding a [`GeneratorConfig`].
pub const CONFIG_PATH_VAR: &str = "VISITORS_CONFIG";
/// Day filter used by the `generate` binary.
pub const DAY_VAR: &str = "VISITORS_DAY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// How random streams are seeded across days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedStrategy {
    /// Every (day, stream) pair gets its own generator seeded from a derived
    /// sub-seed. Days can be generated in any order.
    #[default]
    PerDay,
    /// One generator shared by every draw. Output depends on draw order:
    /// Saturday ages, Sunday ages, Saturday noise, Sunday noise, then genders.
    Sequential,
}

impl FromStr for SeedStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-day" | "per_day" | "perday" => Ok(Self::PerDay),
            "sequential" => Ok(Self::Sequential),
            _ => Err(ConfigError::InvalidValue {
                key: SEED_STRATEGY_VAR,
                value: s.to_string(),
            }),
        }
    }
}

/// How the fixed override constants are merged into generated counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverridePolicy {
    /// Add fixed offsets on top of the sampled counts.
    #[default]
    Add,
    /// Replace counts with fixed literals.
    Replace,
    /// Leave the simulated counts untouched.
    Disabled,
}

impl FromStr for OverridePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "replace" => Ok(Self::Replace),
            "disabled" | "none" => Ok(Self::Disabled),
            _ => Err(ConfigError::InvalidValue {
                key: OVERRIDE_POLICY_VAR,
                value: s.to_string(),
            }),
        }
    }
}

/// Number of simulated visitors and the centre of their age distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeSampleSpec {
    pub count: usize,
    pub mean: f64,
}

/// Gaussian noise added to the hourly baselines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Standard deviation of the noise.
    pub std_dev: f64,
    /// Noise is clamped to `[-clamp, clamp]`.
    pub clamp: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            std_dev: 50.0,
            clamp: 100.0,
        }
    }
}

/// Configuration for a dashboard build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base random seed.
    pub seed: u64,

    pub seed_strategy: SeedStrategy,

    pub override_policy: OverridePolicy,

    /// Saturday age sample parameters.
    pub saturday_ages: AgeSampleSpec,

    /// Sunday age sample parameters.
    pub sunday_ages: AgeSampleSpec,

    /// Standard deviation of simulated ages, shared by both days.
    pub age_std_dev: f64,

    pub hourly_noise: NoiseConfig,

    /// Tag each hourly row with a randomly chosen gender series.
    pub split_by_gender: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            seed_strategy: SeedStrategy::default(),
            override_policy: OverridePolicy::default(),
            saturday_ages: AgeSampleSpec {
                count: 1000,
                mean: 25.0,
            },
            sunday_ages: AgeSampleSpec {
                count: 1500,
                mean: 27.0,
            },
            age_std_dev: 5.0,
            hourly_noise: NoiseConfig::default(),
            split_by_gender: true,
        }
    }
}

impl GeneratorConfig {
    /// Age sample parameters for a day.
    pub fn age_spec(&self, day: Day) -> AgeSampleSpec {
        match day {
            Day::Saturday => self.saturday_ages,
            Day::Sunday => self.sunday_ages,
        }
    }

    /// Loads a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from a variable lookup.
    ///
    /// Starts from the file named by [`CONFIG_PATH_VAR`] (or the defaults),
    /// then applies [`SEED_VAR`], [`SEED_STRATEGY_VAR`] and [`OVERRIDE_POLICY_VAR`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };

        if let Some(value) = lookup(SEED_VAR) {
            config.seed = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    key: SEED_VAR,
                    value: value.clone(),
                })?;
        }

        if let Some(value) = lookup(SEED_STRATEGY_VAR) {
            config.seed_strategy = value.parse()?;
        }

        if let Some(value) = lookup(OVERRIDE_POLICY_VAR) {
            config.override_policy = value.parse()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_event_constants() {
        let config = GeneratorConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.age_spec(Day::Saturday).count, 1000);
        assert_eq!(config.age_spec(Day::Sunday).count, 1500);
        assert_eq!(config.age_spec(Day::Saturday).mean, 25.0);
        assert_eq!(config.age_spec(Day::Sunday).mean, 27.0);
        assert_eq!(config.age_std_dev, 5.0);
        assert_eq!(config.hourly_noise, NoiseConfig::default());
        assert_eq!(config.override_policy, OverridePolicy::Add);
        assert_eq!(config.seed_strategy, SeedStrategy::PerDay);
    }

    #[test]
    fn test_env_overrides() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            (SEED_VAR, "7"),
            (SEED_STRATEGY_VAR, "sequential"),
            (OVERRIDE_POLICY_VAR, "Replace"),
        ]))
        .unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.seed_strategy, SeedStrategy::Sequential);
        assert_eq!(config.override_policy, OverridePolicy::Replace);
    }

    #[test]
    fn test_invalid_env_values_are_rejected() {
        let err = GeneratorConfig::from_lookup(lookup_from(&[(SEED_VAR, "forty-two")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: SEED_VAR, .. }));

        let err = GeneratorConfig::from_lookup(lookup_from(&[(OVERRIDE_POLICY_VAR, "merge")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                key: OVERRIDE_POLICY_VAR,
                ..
            }
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{"seed": 9, "override_policy": "disabled"}"#).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.override_policy, OverridePolicy::Disabled);
        assert_eq!(config.sunday_ages.count, 1500);
        assert!(config.split_by_gender);
    }

    #[test]
    fn test_seed_strategy_serde_names() {
        let json = serde_json::to_string(&SeedStrategy::PerDay).unwrap();
        assert_eq!(json, "\"per-day\"");
        assert_eq!("per-day".parse::<SeedStrategy>().unwrap(), SeedStrategy::PerDay);
    }

    #[test]
    fn test_missing_config_file() {
        let err = GeneratorConfig::from_lookup(lookup_from(&[(
            CONFIG_PATH_VAR,
            "/nonexistent/visitors.json",
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

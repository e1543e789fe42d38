//! Fixed overrides merged into generated counts.
//!
//! The dashboard shows curated numbers for some buckets instead of the
//! simulated ones. An [`OverrideTable`] maps `(day, bucket)` to a literal and
//! an [`OverridePolicy`] decides whether the literal replaces or is added to
//! the generated count.

use std::collections::BTreeMap;

use visitors::{AgeGroup, AgeGroupCount, Day, HourOfDay, HourlySample};

use crate::config::OverridePolicy;
use crate::generators::hourly::display_window;

/// Offsets added to every day's age-group counts under [`OverridePolicy::Add`].
pub const ADDITIVE_AGE_OFFSETS: [(AgeGroup, u32); 4] = [
    (AgeGroup::UnderTen, 150),
    (AgeGroup::Thirties, 390),
    (AgeGroup::Forties, 345),
    (AgeGroup::Fifties, 300),
];

/// Saturday age-group counts under [`OverridePolicy::Replace`], in chart order.
pub const SATURDAY_AGE_REPLACEMENTS: [u32; 7] = [1200, 1800, 4200, 1650, 900, 500, 250];

/// Sunday age-group counts under [`OverridePolicy::Replace`], in chart order.
pub const SUNDAY_AGE_REPLACEMENTS: [u32; 7] = [1500, 2600, 5900, 2500, 1400, 750, 350];

/// Saturday visitor counts for 4 PM - 8 PM under [`OverridePolicy::Replace`].
pub const SATURDAY_HOURLY_REPLACEMENTS: [u32; 5] = [950, 1400, 1850, 1600, 1200];

/// Sunday visitor counts for 1 PM - 9 PM under [`OverridePolicy::Replace`].
pub const SUNDAY_HOURLY_REPLACEMENTS: [u32; 9] =
    [1100, 1350, 1700, 2100, 2300, 2000, 1650, 1200, 800];

/// A table row with a bucket key and an overridable count.
pub trait CountRow {
    type Key: Copy + Ord;

    fn key(&self) -> Self::Key;

    fn count_mut(&mut self) -> &mut u32;

    /// The overrides that apply to rows of this kind.
    fn overrides_in(plan: &OverridePlan) -> &OverrideTable<Self::Key>;
}

impl CountRow for AgeGroupCount {
    type Key = AgeGroup;

    fn key(&self) -> AgeGroup {
        self.age_group
    }

    fn count_mut(&mut self) -> &mut u32 {
        &mut self.count
    }

    fn overrides_in(plan: &OverridePlan) -> &OverrideTable<AgeGroup> {
        &plan.age_groups
    }
}

impl CountRow for HourlySample {
    type Key = HourOfDay;

    fn key(&self) -> HourOfDay {
        self.hour
    }

    fn count_mut(&mut self) -> &mut u32 {
        &mut self.visitor_count
    }

    fn overrides_in(plan: &OverridePlan) -> &OverrideTable<HourOfDay> {
        &plan.hourly
    }
}

/// Literal values keyed by `(day, bucket)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideTable<K> {
    entries: BTreeMap<(Day, K), u32>,
}

impl<K: Copy + Ord> OverrideTable<K> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, day: Day, key: K, value: u32) {
        self.entries.insert((day, key), value);
    }

    pub fn with(mut self, day: Day, key: K, value: u32) -> Self {
        self.insert(day, key, value);
        self
    }

    pub fn get(&self, day: Day, key: K) -> Option<u32> {
        self.entries.get(&(day, key)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges this table into `day`'s rows.
    ///
    /// Rows without an entry are left alone; entries without a row are ignored.
    pub fn apply<R: CountRow<Key = K>>(
        &self,
        policy: OverridePolicy,
        day: Day,
        mut rows: Vec<R>,
    ) -> Vec<R> {
        if policy == OverridePolicy::Disabled {
            return rows;
        }

        for row in &mut rows {
            let Some(value) = self.get(day, row.key()) else {
                continue;
            };
            let count = row.count_mut();
            *count = match policy {
                OverridePolicy::Replace => value,
                OverridePolicy::Add => count.saturating_add(value),
                OverridePolicy::Disabled => *count,
            };
        }
        rows
    }
}

impl<K: Copy + Ord> Default for OverrideTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Overrides for every table, together with the policy used to merge them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverridePlan {
    pub policy: OverridePolicy,
    pub age_groups: OverrideTable<AgeGroup>,
    pub hourly: OverrideTable<HourOfDay>,
}

impl OverridePlan {
    /// Builds the fixed overrides that belong to a policy.
    ///
    /// - `Add`: [`ADDITIVE_AGE_OFFSETS`] on both days, hourly rows untouched.
    /// - `Replace`: per-day literals for every age group and every displayed hour.
    /// - `Disabled`: no entries.
    pub fn for_policy(policy: OverridePolicy) -> Self {
        let mut age_groups = OverrideTable::new();
        let mut hourly = OverrideTable::new();

        match policy {
            OverridePolicy::Add => {
                for day in Day::ALL {
                    for (group, offset) in ADDITIVE_AGE_OFFSETS {
                        age_groups.insert(day, group, offset);
                    }
                }
            }
            OverridePolicy::Replace => {
                for day in Day::ALL {
                    let (age_values, hourly_values) = match day {
                        Day::Saturday => (
                            SATURDAY_AGE_REPLACEMENTS.as_slice(),
                            SATURDAY_HOURLY_REPLACEMENTS.as_slice(),
                        ),
                        Day::Sunday => (
                            SUNDAY_AGE_REPLACEMENTS.as_slice(),
                            SUNDAY_HOURLY_REPLACEMENTS.as_slice(),
                        ),
                    };

                    for (group, &value) in AgeGroup::ALL.into_iter().zip(age_values) {
                        age_groups.insert(day, group, value);
                    }

                    let window = display_window(day);
                    let shown = HourOfDay::all().filter(|hour| window.contains(&hour.get()));
                    for (hour, &value) in shown.zip(hourly_values) {
                        hourly.insert(day, hour, value);
                    }
                }
            }
            OverridePolicy::Disabled => {}
        }

        Self {
            policy,
            age_groups,
            hourly,
        }
    }

    /// Applies the overrides for `day` to an age-group or hourly table.
    pub fn apply_hardcoded_overrides<R: CountRow>(&self, table: Vec<R>, day: Day) -> Vec<R> {
        R::overrides_in(self).apply(self.policy, day, table)
    }
}

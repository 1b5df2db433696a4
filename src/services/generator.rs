//! Synthetic activity generator
//!
//! Produces one year of weighted-random daily activity ending today. The
//! weighting favours weekdays and the January / summer months so the
//! resulting heatmap looks like plausible usage.

use std::ops::RangeInclusive;

use chrono::{Datelike, Months, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{ActivityDay, ActivityLevel};

/// Activity chance on Monday through Friday
pub const WEEKDAY_BASE_CHANCE: f64 = 0.4;
/// Activity chance on Saturday and Sunday
pub const WEEKEND_BASE_CHANCE: f64 = 0.2;
/// Extra chance added in seasonal months
pub const SEASONAL_BOOST: f64 = 0.2;
/// Months (1-based) that receive the seasonal boost
pub const SEASONAL_MONTHS: [u32; 4] = [1, 6, 7, 8];

/// Threshold factors, checked highest tier first
pub const MAX_TIER_FACTOR: f64 = 0.5;
pub const HIGH_TIER_FACTOR: f64 = 0.7;
pub const MEDIUM_TIER_FACTOR: f64 = 0.9;
pub const LOW_TIER_FACTOR: f64 = 1.0;

/// Count ranges per tier
pub const MAX_TIER_COUNTS: RangeInclusive<u32> = 8..=17;
pub const HIGH_TIER_COUNTS: RangeInclusive<u32> = 5..=9;
pub const MEDIUM_TIER_COUNTS: RangeInclusive<u32> = 2..=4;
pub const LOW_TIER_COUNTS: RangeInclusive<u32> = 1..=1;

/// Months covered by one generated calendar
const SPAN_MONTHS: u32 = 12;

/// Count range a level draws from. Level 0 is always zero.
pub fn tier_counts(level: ActivityLevel) -> RangeInclusive<u32> {
    match level {
        ActivityLevel::None => 0..=0,
        ActivityLevel::Low => LOW_TIER_COUNTS,
        ActivityLevel::Medium => MEDIUM_TIER_COUNTS,
        ActivityLevel::High => HIGH_TIER_COUNTS,
        ActivityLevel::Max => MAX_TIER_COUNTS,
    }
}

/// Chance of any activity on `date`
pub fn activity_chance(date: NaiveDate) -> f64 {
    let base = match date.weekday() {
        Weekday::Sat | Weekday::Sun => WEEKEND_BASE_CHANCE,
        _ => WEEKDAY_BASE_CHANCE,
    };
    let boost = if SEASONAL_MONTHS.contains(&date.month()) {
        SEASONAL_BOOST
    } else {
        0.0
    };
    base + boost
}

/// Map a uniform draw in [0, 1) to a level. First matching tier wins.
pub fn classify(r: f64, chance: f64) -> ActivityLevel {
    if r > 1.0 - chance * MAX_TIER_FACTOR {
        ActivityLevel::Max
    } else if r > 1.0 - chance * HIGH_TIER_FACTOR {
        ActivityLevel::High
    } else if r > 1.0 - chance * MEDIUM_TIER_FACTOR {
        ActivityLevel::Medium
    } else if r > 1.0 - chance * LOW_TIER_FACTOR {
        ActivityLevel::Low
    } else {
        ActivityLevel::None
    }
}

/// First day of the calendar ending on `today`.
/// Feb 29 clamps to Feb 28 of the previous year.
pub fn year_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(SPAN_MONTHS))
        .unwrap_or(NaiveDate::MIN)
}

/// Weighted-random activity generator over an injectable random source
pub struct ActivityGenerator<R: Rng = StdRng> {
    rng: R,
}

impl ActivityGenerator<StdRng> {
    /// Reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> ActivityGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Use `provided` as-is when present, otherwise generate a year ending `today`
    pub fn resolve(&mut self, provided: Option<Vec<ActivityDay>>, today: NaiveDate) -> Vec<ActivityDay> {
        match provided {
            Some(days) => days,
            None => self.generate(today),
        }
    }

    /// One entry per day from a year ago through `today`, oldest first
    pub fn generate(&mut self, today: NaiveDate) -> Vec<ActivityDay> {
        let start = year_start(today);
        let days: Vec<ActivityDay> = start
            .iter_days()
            .take_while(|date| *date <= today)
            .map(|date| self.day(date))
            .collect();

        tracing::debug!(
            start = %start,
            end = %today,
            days = days.len(),
            "generated synthetic activity"
        );
        days
    }

    fn day(&mut self, date: NaiveDate) -> ActivityDay {
        let r: f64 = self.rng.gen();
        let level = classify(r, activity_chance(date));
        let count = match level {
            ActivityLevel::None => 0,
            other => self.rng.gen_range(tier_counts(other)),
        };
        ActivityDay::new(date, count, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ========== activity_chance tests ==========

    #[test]
    fn test_chance_weekday_off_season() {
        // 2024-03-13 is a Wednesday
        assert!((activity_chance(date(2024, 3, 13)) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_chance_weekend_off_season() {
        // 2024-03-16 is a Saturday, 2024-03-17 a Sunday
        assert!((activity_chance(date(2024, 3, 16)) - 0.2).abs() < 1e-9);
        assert!((activity_chance(date(2024, 3, 17)) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_chance_seasonal_months() {
        // 2024-01-10 Wednesday, 2024-07-13 Saturday
        assert!((activity_chance(date(2024, 1, 10)) - 0.6).abs() < 1e-9);
        assert!((activity_chance(date(2024, 7, 13)) - 0.4).abs() < 1e-9);
        // December gets no boost
        assert!((activity_chance(date(2024, 12, 11)) - 0.4).abs() < 1e-9);
    }

    // ========== classify tests ==========

    #[test]
    fn test_classify_ladder_weekday() {
        // chance 0.4: thresholds 0.8, 0.72, 0.64, 0.6
        let chance = 0.4;
        assert_eq!(classify(0.95, chance), ActivityLevel::Max);
        assert_eq!(classify(0.81, chance), ActivityLevel::Max);
        assert_eq!(classify(0.75, chance), ActivityLevel::High);
        assert_eq!(classify(0.70, chance), ActivityLevel::Medium);
        assert_eq!(classify(0.62, chance), ActivityLevel::Low);
        assert_eq!(classify(0.59, chance), ActivityLevel::None);
        assert_eq!(classify(0.0, chance), ActivityLevel::None);
    }

    #[test]
    fn test_classify_boundaries_are_exclusive() {
        // r must be strictly greater than the threshold
        assert_eq!(classify(0.5, 1.0), ActivityLevel::High);
        assert_eq!(classify(0.0, 1.0), ActivityLevel::None);
    }

    #[test]
    fn test_classify_zero_chance_never_active() {
        assert_eq!(classify(0.999, 0.0), ActivityLevel::None);
    }

    // ========== year_start tests ==========

    #[test]
    fn test_year_start_regular() {
        assert_eq!(year_start(date(2024, 3, 15)), date(2023, 3, 15));
    }

    #[test]
    fn test_year_start_leap_day_clamps() {
        assert_eq!(year_start(date(2024, 2, 29)), date(2023, 2, 28));
    }

    // ========== generate tests ==========

    #[test]
    fn test_generate_length_spanning_leap_day() {
        let mut generator = ActivityGenerator::seeded(7);
        let days = generator.generate(date(2024, 3, 15));
        // 2023-03-15 ..= 2024-03-15 includes 2024-02-29
        assert_eq!(days.len(), 367);
        assert_eq!(days.first().unwrap().date, date(2023, 3, 15));
        assert_eq!(days.last().unwrap().date, date(2024, 3, 15));
    }

    #[test]
    fn test_generate_length_without_leap_day() {
        let mut generator = ActivityGenerator::seeded(7);
        let days = generator.generate(date(2023, 6, 1));
        assert_eq!(days.len(), 366);
    }

    #[test]
    fn test_generate_is_chronological_and_contiguous() {
        let mut generator = ActivityGenerator::seeded(42);
        let days = generator.generate(date(2024, 3, 15));
        for pair in days.windows(2) {
            assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
        }
    }

    #[test]
    fn test_generate_levels_match_counts() {
        let mut generator = ActivityGenerator::seeded(42);
        for day in generator.generate(date(2024, 3, 15)) {
            assert!(day.is_consistent(), "inconsistent day {:?}", day);
            assert!(day.level.as_u8() <= 4);
            assert!(
                tier_counts(day.level).contains(&day.count),
                "count {} outside tier {:?}",
                day.count,
                day.level
            );
        }
    }

    #[test]
    fn test_generate_same_seed_same_output() {
        let today = date(2024, 3, 15);
        let a = ActivityGenerator::seeded(99).generate(today);
        let b = ActivityGenerator::seeded(99).generate(today);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_produces_some_activity() {
        let mut generator = ActivityGenerator::seeded(3);
        let days = generator.generate(date(2024, 3, 15));
        let active = days.iter().filter(|d| d.count > 0).count();
        // Expected rate is roughly 35-45%; allow a wide margin
        assert!(active > 60 && active < 300, "active days: {}", active);
    }

    // ========== resolve tests ==========

    #[test]
    fn test_resolve_passes_through_provided_days() {
        let provided = vec![ActivityDay::new(date(2024, 1, 3), 2, ActivityLevel::Medium)];
        let mut generator = ActivityGenerator::seeded(1);
        let days = generator.resolve(Some(provided.clone()), date(2024, 3, 15));
        assert_eq!(days, provided);
    }

    #[test]
    fn test_resolve_generates_when_missing() {
        let mut generator = ActivityGenerator::seeded(1);
        let days = generator.resolve(None, date(2023, 6, 1));
        assert_eq!(days.len(), 366);
    }
}

//! Contribution summary over a day sequence

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{ActivityDay, ActivityLevel};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivitySummary {
    pub total_contributions: u64,
    pub active_days: u32,
    pub busiest_day: Option<(NaiveDate, u32)>,
    pub longest_streak: u32,
    /// Streak ending on the last day of the sequence
    pub current_streak: u32,
    /// Days per level, indexed by level 0..=4
    pub level_histogram: [u32; 5],
}

impl ActivitySummary {
    pub fn from_days(days: &[ActivityDay]) -> Self {
        let mut summary = Self::default();
        let mut streak = 0u32;
        let mut prev_active: Option<NaiveDate> = None;

        for day in days {
            summary.level_histogram[day.level.as_u8() as usize] += 1;

            if day.count == 0 {
                streak = 0;
                continue;
            }

            summary.total_contributions = summary
                .total_contributions
                .saturating_add(day.count as u64);
            summary.active_days += 1;

            // Ties keep the earliest day
            match summary.busiest_day {
                Some((_, max)) if day.count <= max => {}
                _ => summary.busiest_day = Some((day.date, day.count)),
            }

            streak = match prev_active {
                Some(prev) if prev.succ_opt() == Some(day.date) => streak + 1,
                _ => 1,
            };
            prev_active = Some(day.date);
            summary.longest_streak = summary.longest_streak.max(streak);
        }

        summary.current_streak = streak;
        summary
    }

    /// Days at `level`
    pub fn days_at(&self, level: ActivityLevel) -> u32 {
        self.level_histogram[level.as_u8() as usize]
    }
}

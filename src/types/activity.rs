//! Activity calendar types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display intensity tier for one day of activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ActivityLevel {
    /// No activity (level 0)
    #[default]
    None,
    /// Level 1
    Low,
    /// Level 2
    Medium,
    /// Level 3
    High,
    /// Level 4, highest tier
    Max,
}

impl ActivityLevel {
    /// All levels in ascending order
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::None,
        ActivityLevel::Low,
        ActivityLevel::Medium,
        ActivityLevel::High,
        ActivityLevel::Max,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Max => 4,
        }
    }

    /// Shade character for plain-text grids
    pub fn to_char(self) -> char {
        match self {
            Self::None => '·',
            Self::Low => '░',
            Self::Medium => '▒',
            Self::High => '▓',
            Self::Max => '█',
        }
    }
}

impl From<ActivityLevel> for u8 {
    fn from(level: ActivityLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for ActivityLevel {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::from_u8(value).ok_or_else(|| format!("activity level {} out of range 0-4", value))
    }
}

/// One calendar day of recorded actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDay {
    pub date: NaiveDate,
    pub count: u32,
    pub level: ActivityLevel,
}

impl ActivityDay {
    pub fn new(date: NaiveDate, count: u32, level: ActivityLevel) -> Self {
        Self { date, count, level }
    }

    /// Zero-activity day used to pad partial weeks
    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, 0, ActivityLevel::None)
    }

    /// `level == 0` exactly when `count == 0`
    pub fn is_consistent(&self) -> bool {
        (self.level == ActivityLevel::None) == (self.count == 0)
    }
}

/// A slot in the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridCell {
    pub day: ActivityDay,
    /// Padding cell outside the real day range
    pub placeholder: bool,
}

impl GridCell {
    pub fn real(day: ActivityDay) -> Self {
        Self {
            day,
            placeholder: false,
        }
    }

    pub fn placeholder(stamp: NaiveDate) -> Self {
        Self {
            day: ActivityDay::empty(stamp),
            placeholder: true,
        }
    }
}

/// Days per week column
pub const DAYS_PER_WEEK: usize = 7;

/// One calendar week, Sunday (0) through Saturday (6)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekColumn {
    cells: [GridCell; DAYS_PER_WEEK],
}

impl WeekColumn {
    pub fn new(cells: [GridCell; DAYS_PER_WEEK]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[GridCell; DAYS_PER_WEEK] {
        &self.cells
    }

    /// Cell for weekday row 0 (Sunday) .. 6 (Saturday)
    pub fn get(&self, row: usize) -> Option<&GridCell> {
        self.cells.get(row)
    }

    /// Iterator over non-placeholder days
    pub fn real_days(&self) -> impl Iterator<Item = &ActivityDay> {
        self.cells
            .iter()
            .filter(|cell| !cell.placeholder)
            .map(|cell| &cell.day)
    }
}

/// Month header entry for the calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    pub name: &'static str,
    pub year: i32,
    pub month: u32,
    /// Index of the month's first day in the flat day sequence
    pub day_index: usize,
}

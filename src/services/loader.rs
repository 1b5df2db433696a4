//! Load a recorded day sequence from JSON
//!
//! The file holds an array of `{ "date": "YYYY-MM-DD", "count": n, "level": 0-4 }`
//! objects, oldest first.

use std::fs;
use std::path::Path;

use crate::types::{ActivityDay, ArenaError, Result};

/// Read and validate activity days from `path`
pub fn load_days(path: &Path) -> Result<Vec<ActivityDay>> {
    let content = fs::read_to_string(path)?;
    let days = parse_days(&content)?;
    tracing::debug!(path = %path.display(), days = days.len(), "loaded activity file");
    Ok(days)
}

/// Parse and validate activity days from a JSON string
pub fn parse_days(content: &str) -> Result<Vec<ActivityDay>> {
    let days: Vec<ActivityDay> = serde_json::from_str(content)?;
    validate(&days)?;
    Ok(days)
}

/// Every day must be level/count consistent, and each date must be the day
/// after the previous one. The grid places days slot by slot, so a missing
/// day would shift every later day into the wrong weekday row.
pub fn validate(days: &[ActivityDay]) -> Result<()> {
    for day in days {
        if !day.is_consistent() {
            return Err(ArenaError::InvalidDay {
                date: day.date.to_string(),
                reason: format!("level {} with count {}", day.level.as_u8(), day.count),
            });
        }
    }

    for pair in days.windows(2) {
        let (prev, day) = (pair[0].date, pair[1].date);
        if day <= prev {
            return Err(ArenaError::InvalidDay {
                date: day.to_string(),
                reason: format!("not after previous day {}", prev),
            });
        }
        if prev.succ_opt() != Some(day) {
            return Err(ArenaError::InvalidDay {
                date: day.to_string(),
                reason: format!("missing days after {}", prev),
            });
        }
    }

    Ok(())
}

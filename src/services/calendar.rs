//! Calendar grid layout: week columns and month header labels

use chrono::{Datelike, NaiveDate};

use crate::services::summary::ActivitySummary;
use crate::types::{ActivityDay, GridCell, MonthLabel, WeekColumn, DAYS_PER_WEEK};

/// Upper bound on month labels shown above the grid
pub const MAX_MONTH_LABELS: usize = 12;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Three-letter name for a 1-based month
pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES
        .get(month.wrapping_sub(1) as usize)
        .copied()
        .unwrap_or("")
}

/// Lay out `days` as week columns (rows = Sunday..Saturday).
///
/// The first column is padded so the first day lands in its weekday row,
/// and the last column is padded to a full week. Days are placed in input
/// order without gap filling. Padding cells carry `stamp` as their date.
pub fn bucket_weeks(days: &[ActivityDay], stamp: NaiveDate) -> Vec<WeekColumn> {
    let Some(first) = days.first() else {
        return Vec::new();
    };

    let lead = first.date.weekday().num_days_from_sunday() as usize;
    let cells: Vec<GridCell> = std::iter::repeat(GridCell::placeholder(stamp))
        .take(lead)
        .chain(days.iter().copied().map(GridCell::real))
        .collect();

    let weeks: Vec<WeekColumn> = cells
        .chunks(DAYS_PER_WEEK)
        .map(|chunk| {
            let mut week = [GridCell::placeholder(stamp); DAYS_PER_WEEK];
            week[..chunk.len()].copy_from_slice(chunk);
            WeekColumn::new(week)
        })
        .collect();

    tracing::debug!(days = days.len(), weeks = weeks.len(), lead, "bucketed weeks");
    weeks
}

/// One label per (year, month) change along `days`, thinned to at most
/// [`MAX_MONTH_LABELS`] by keeping every `ceil(n / 12)`-th label.
///
/// Thinning is a display-density heuristic: it drops real months.
pub fn month_labels(days: &[ActivityDay]) -> Vec<MonthLabel> {
    let mut labels = Vec::new();
    let mut last: Option<(i32, u32)> = None;

    for (day_index, day) in days.iter().enumerate() {
        let key = (day.date.year(), day.date.month());
        if last != Some(key) {
            labels.push(MonthLabel {
                name: month_name(key.1),
                year: key.0,
                month: key.1,
                day_index,
            });
            last = Some(key);
        }
    }

    if labels.len() <= MAX_MONTH_LABELS {
        return labels;
    }

    let stride = labels.len().div_ceil(MAX_MONTH_LABELS);
    labels.into_iter().step_by(stride).collect()
}

/// Column holding the day at `day_index`, given the leading padding of the first week
pub fn column_of(days: &[ActivityDay], day_index: usize) -> Option<usize> {
    let first = days.first()?;
    if day_index >= days.len() {
        return None;
    }
    let lead = first.date.weekday().num_days_from_sunday() as usize;
    Some((lead + day_index) / DAYS_PER_WEEK)
}

/// Everything the calendar widget needs, computed once per input
#[derive(Debug, Clone)]
pub struct CalendarModel {
    pub days: Vec<ActivityDay>,
    pub weeks: Vec<WeekColumn>,
    pub months: Vec<MonthLabel>,
    pub summary: ActivitySummary,
}

impl CalendarModel {
    pub fn build(days: Vec<ActivityDay>, stamp: NaiveDate) -> Self {
        let weeks = bucket_weeks(&days, stamp);
        let months = month_labels(&days);
        let summary = ActivitySummary::from_days(&days);
        Self {
            days,
            weeks,
            months,
            summary,
        }
    }

    /// Month labels paired with the week column they start in
    pub fn month_columns(&self) -> Vec<(usize, &MonthLabel)> {
        self.months
            .iter()
            .filter_map(|label| column_of(&self.days, label.day_index).map(|col| (col, label)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::generator::ActivityGenerator;
    use crate::types::ActivityLevel;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn span(start: NaiveDate, end: NaiveDate) -> Vec<ActivityDay> {
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(ActivityDay::empty)
            .collect()
    }

    fn stamp() -> NaiveDate {
        date(2024, 6, 1)
    }

    // ========== bucket_weeks tests ==========

    #[test]
    fn test_bucket_empty_input() {
        assert!(bucket_weeks(&[], stamp()).is_empty());
    }

    #[test]
    fn test_bucket_single_wednesday() {
        // 2024-03-13 is a Wednesday
        let day = ActivityDay::new(date(2024, 3, 13), 4, ActivityLevel::Medium);
        let weeks = bucket_weeks(&[day], stamp());

        assert_eq!(weeks.len(), 1);
        let cells = weeks[0].cells();
        for row in [0, 1, 2, 4, 5, 6] {
            assert!(cells[row].placeholder, "row {} should be padding", row);
        }
        assert!(!cells[3].placeholder);
        assert_eq!(cells[3].day, day);
        assert_eq!(weeks[0].real_days().count(), 1);
    }

    #[test]
    fn test_bucket_placeholders_stamped_with_generation_date() {
        let day = ActivityDay::empty(date(2024, 3, 13));
        let weeks = bucket_weeks(&[day], stamp());
        let cell = weeks[0].get(0).unwrap();
        assert_eq!(cell.day, ActivityDay::empty(stamp()));
    }

    #[test]
    fn test_bucket_sunday_start_has_no_lead() {
        // 2024-03-10 is a Sunday; one full week
        let days = span(date(2024, 3, 10), date(2024, 3, 16));
        let weeks = bucket_weeks(&days, stamp());
        assert_eq!(weeks.len(), 1);
        assert!(weeks[0].cells().iter().all(|c| !c.placeholder));
    }

    #[test]
    fn test_bucket_full_year_invariants() {
        let days = ActivityGenerator::seeded(5).generate(date(2024, 3, 15));
        let weeks = bucket_weeks(&days, stamp());

        let real: usize = weeks.iter().map(|w| w.real_days().count()).sum();
        assert_eq!(real, days.len());

        // First real day sits at its weekday row
        let lead = days[0].date.weekday().num_days_from_sunday() as usize;
        assert_eq!(weeks[0].get(lead).unwrap().day, days[0]);
        assert_eq!(weeks[0].real_days().count(), DAYS_PER_WEEK - lead);

        // Real days keep their order across columns
        let flattened: Vec<ActivityDay> = weeks.iter().flat_map(|w| w.real_days().copied()).collect();
        assert_eq!(flattened, days);
    }

    #[test]
    fn test_bucket_does_not_mutate_input() {
        let days = span(date(2024, 3, 13), date(2024, 3, 20));
        let before = days.clone();
        let _ = bucket_weeks(&days, stamp());
        assert_eq!(days, before);
    }

    // ========== month_labels tests ==========

    #[test]
    fn test_month_labels_empty() {
        assert!(month_labels(&[]).is_empty());
    }

    #[test]
    fn test_month_labels_three_months() {
        let days = span(date(2024, 1, 15), date(2024, 3, 10));
        let labels = month_labels(&days);
        let names: Vec<_> = labels.iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["Jan", "Feb", "Mar"]);
        assert_eq!(labels[0].day_index, 0);
        assert_eq!(labels[1].day_index, 17);
    }

    #[test]
    fn test_month_labels_twenty_four_months_thinned() {
        let days = span(date(2022, 1, 1), date(2023, 12, 31));
        let labels = month_labels(&days);
        assert!(labels.len() <= MAX_MONTH_LABELS);
        // stride 2 from index 0 keeps odd months
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0].name, "Jan");
        assert_eq!(labels[1].name, "Mar");
        assert_eq!(labels[11].name, "Nov");
        assert_eq!(labels[11].year, 2023);
    }

    #[test]
    fn test_month_labels_thirteen_months_drops_alternates() {
        // A generated year touches 13 months
        let days = span(date(2023, 3, 15), date(2024, 3, 15));
        let labels = month_labels(&days);
        assert_eq!(labels.len(), 7);
        assert_eq!(labels.first().unwrap().name, "Mar");
        assert_eq!(labels.last().unwrap().name, "Mar");
        assert_eq!(labels.last().unwrap().year, 2024);
    }

    #[test]
    fn test_month_labels_same_month_different_year() {
        let days = vec![
            ActivityDay::empty(date(2023, 5, 30)),
            ActivityDay::empty(date(2024, 5, 2)),
        ];
        assert_eq!(month_labels(&days).len(), 2);
    }

    #[test]
    fn test_month_name_bounds() {
        assert_eq!(month_name(1), "Jan");
        assert_eq!(month_name(12), "Dec");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
    }

    // ========== column_of / CalendarModel tests ==========

    #[test]
    fn test_column_of_accounts_for_lead() {
        // Wednesday start: lead 3, so index 4 (Sunday) opens column 1
        let days = span(date(2024, 3, 13), date(2024, 3, 30));
        assert_eq!(column_of(&days, 0), Some(0));
        assert_eq!(column_of(&days, 3), Some(0));
        assert_eq!(column_of(&days, 4), Some(1));
        assert_eq!(column_of(&days, 100), None);
        assert_eq!(column_of(&[], 0), None);
    }

    #[test]
    fn test_calendar_model_build() {
        let days = ActivityGenerator::seeded(11).generate(date(2023, 6, 1));
        let model = CalendarModel::build(days.clone(), stamp());
        assert_eq!(model.days, days);
        assert_eq!(model.weeks, bucket_weeks(&days, stamp()));
        assert_eq!(model.months, month_labels(&days));
        assert_eq!(model.month_columns().len(), model.months.len());
        assert_eq!(model.month_columns()[0].0, 0);
    }
}

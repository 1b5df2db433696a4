//! Plain-text and JSON renderings of the calendar for non-interactive output

use serde::Serialize;

use crate::format::format_number;
use crate::services::{ActivitySummary, CalendarModel};
use crate::types::{ActivityDay, Result, DAYS_PER_WEEK};

const WEEKDAYS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Text column width of one week
const TEXT_CELL_WIDTH: usize = 2;
const TEXT_LABEL_WIDTH: usize = 4;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// One line per day: date, weekday, level, count
pub fn days_text(days: &[ActivityDay]) -> String {
    days.iter()
        .map(|day| {
            format!(
                "{}  {}  level {}  {:>2}",
                day.date,
                day.date.format("%a"),
                day.level.as_u8(),
                day.count
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Month header plus 7 weekday rows of shade characters. Padding cells are blank.
pub fn grid_text(model: &CalendarModel) -> String {
    let width = TEXT_LABEL_WIDTH + model.weeks.len() * TEXT_CELL_WIDTH;

    // Room for a label starting in the last column
    let mut header = vec![' '; width + 3];
    let mut next_free = 0;
    for (col, label) in model.month_columns() {
        let x = TEXT_LABEL_WIDTH + col * TEXT_CELL_WIDTH;
        if x < next_free || x + label.name.len() > header.len() {
            continue;
        }
        for (i, ch) in label.name.chars().enumerate() {
            header[x + i] = ch;
        }
        next_free = x + label.name.len() + 1;
    }

    let mut lines = vec![header.into_iter().collect::<String>().trim_end().to_string()];
    for (row, weekday) in WEEKDAYS.iter().enumerate() {
        let mut line = format!("{:<width$}", weekday, width = TEXT_LABEL_WIDTH);
        for week in &model.weeks {
            let ch = match week.get(row) {
                Some(cell) if !cell.placeholder => cell.day.level.to_char(),
                _ => ' ',
            };
            line.push(ch);
            line.push(' ');
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Month labels separated by spaces, e.g. "Mar May Jul Sep Nov Jan Mar"
pub fn months_text(model: &CalendarModel) -> String {
    model
        .months
        .iter()
        .map(|label| label.name)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn summary_text(summary: &ActivitySummary) -> String {
    let busiest = summary
        .busiest_day
        .map(|(date, count)| format!("{} ({})", date, count))
        .unwrap_or_else(|| "N/A".to_string());

    [
        format!(
            "{} contributions in the last year",
            format_number(summary.total_contributions)
        ),
        format!("Active days:    {}", summary.active_days),
        format!("Busiest day:    {}", busiest),
        format!("Longest streak: {}", summary.longest_streak),
        format!("Current streak: {}", summary.current_streak),
    ]
    .join("\n")
}

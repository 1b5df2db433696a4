//! Contribution calendar heatmap widget
//!
//! Week columns run left to right, weekday rows Sunday..Saturday top to
//! bottom, with month labels above the column each month starts in.

use std::ops::Range;

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::services::CalendarModel;
use crate::tui::theme::Theme;
use crate::types::DAYS_PER_WEEK;

/// Cell dimensions
pub const CELL_WIDTH: u16 = 3; // 2 chars content + 1 gap
pub const LABEL_WIDTH: u16 = 4; // "Mon " prefix

/// Rows above the grid (month labels)
pub const HEADER_ROWS: u16 = 1;
/// Total widget height
pub const HEATMAP_HEIGHT: u16 = HEADER_ROWS + DAYS_PER_WEEK as u16;

const CELL: &str = "██";

/// Row labels; GitHub-style, only alternate weekdays are named
const ROW_LABELS: [&str; DAYS_PER_WEEK] = ["", "Mon", "", "Wed", "", "Fri", ""];

/// Selected grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPos {
    pub col: usize,
    pub row: usize,
}

/// Columns that fit in `width`
pub fn weeks_for_width(width: u16) -> usize {
    (width.saturating_sub(LABEL_WIDTH) / CELL_WIDTH) as usize
}

/// Window of `visible` columns out of `total`, anchored to the most recent
/// weeks but shifted left far enough to keep `selected` in view
pub fn visible_columns(total: usize, visible: usize, selected: Option<usize>) -> Range<usize> {
    if total <= visible {
        return 0..total;
    }
    let mut start = total - visible;
    if let Some(col) = selected {
        if col < start {
            start = col;
        }
    }
    start..start + visible
}

pub struct Heatmap<'a> {
    model: &'a CalendarModel,
    theme: Theme,
    selected: Option<GridPos>,
}

impl<'a> Heatmap<'a> {
    pub fn new(model: &'a CalendarModel, theme: Theme) -> Self {
        Self {
            model,
            theme,
            selected: None,
        }
    }

    pub fn with_selected(mut self, selected: Option<GridPos>) -> Self {
        self.selected = selected;
        self
    }

    /// Width actually drawn for `area`, used to center the grid
    pub fn drawn_width(&self, area_width: u16) -> u16 {
        let cols = self.model.weeks.len().min(weeks_for_width(area_width)) as u16;
        LABEL_WIDTH + cols * CELL_WIDTH
    }

    fn render_month_labels(&self, buf: &mut Buffer, start_x: u16, y: u16, window: &Range<usize>, max_x: u16) {
        let style = Style::default().fg(self.theme.muted());
        let mut next_free = start_x;

        for (col, label) in self.model.month_columns() {
            if !window.contains(&col) {
                continue;
            }
            let x = start_x + (col - window.start) as u16 * CELL_WIDTH;
            // Labels of months starting in adjacent columns would overlap
            if x < next_free || x + label.name.len() as u16 > max_x {
                continue;
            }
            buf.set_string(x, y, label.name, style);
            next_free = x + label.name.len() as u16 + 1;
        }
    }

    fn render_row(&self, buf: &mut Buffer, area_x: u16, y: u16, row: usize, window: &Range<usize>) {
        buf.set_string(area_x, y, ROW_LABELS[row], Style::default().fg(self.theme.muted()));

        let start_x = area_x + LABEL_WIDTH;
        for col in window.clone() {
            let Some(cell) = self.model.weeks[col].get(row) else {
                continue;
            };
            if cell.placeholder {
                continue;
            }

            let x = start_x + (col - window.start) as u16 * CELL_WIDTH;
            let mut style = Style::default().fg(self.theme.heatmap_color(cell.day.level));
            if self.selected == Some(GridPos { col, row }) {
                style = style.bg(self.theme.accent());
            }
            buf.set_string(x, y, CELL, style);
        }
    }
}

impl Widget for Heatmap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < HEATMAP_HEIGHT || area.width < LABEL_WIDTH + CELL_WIDTH {
            return;
        }

        let visible = weeks_for_width(area.width);
        let window = visible_columns(
            self.model.weeks.len(),
            visible,
            self.selected.map(|pos| pos.col),
        );

        let x_offset = area.width.saturating_sub(self.drawn_width(area.width)) / 2;
        let area_x = area.x + x_offset;

        self.render_month_labels(
            buf,
            area_x + LABEL_WIDTH,
            area.y,
            &window,
            area.x + area.width,
        );

        for row in 0..DAYS_PER_WEEK {
            let y = area.y + HEADER_ROWS + row as u16;
            self.render_row(buf, area_x, y, row, &window);
        }
    }
}

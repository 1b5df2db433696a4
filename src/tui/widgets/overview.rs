//! Calendar view: headline, heatmap, legend and selected-day detail

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::heatmap::{GridPos, Heatmap, HEATMAP_HEIGHT};
use super::legend::Legend;
use super::tabs::{Tab, TabBar};
use crate::format::format_number;
use crate::services::CalendarModel;
use crate::tui::theme::Theme;
use crate::types::{ActivityDay, GridCell};

/// Tooltip text for a day, e.g. "3 contributions on Wed, Mar 13 2024"
pub fn describe_day(day: &ActivityDay) -> String {
    let when = day.date.format("%a, %b %-d %Y");
    match day.count {
        0 => format!("No contributions on {}", when),
        1 => format!("1 contribution on {}", when),
        n => format!("{} contributions on {}", format_number(n as u64), when),
    }
}

/// Detail line for a grid cell. Padding cells have none.
pub fn describe_cell(cell: &GridCell) -> Option<String> {
    (!cell.placeholder).then(|| describe_day(&cell.day))
}

/// Maximum content width (53 weeks * 3-char cells + 4 label = 163, plus padding)
const MAX_CONTENT_WIDTH: u16 = 170;

/// Calendar overview widget
pub struct Overview<'a> {
    model: &'a CalendarModel,
    selected: Option<GridPos>,
    theme: Theme,
}

impl<'a> Overview<'a> {
    pub fn new(model: &'a CalendarModel, selected: Option<GridPos>, theme: Theme) -> Self {
        Self {
            model,
            selected,
            theme,
        }
    }

    fn selected_cell(&self) -> Option<&GridCell> {
        let pos = self.selected?;
        self.model.weeks.get(pos.col)?.get(pos.row)
    }
}

impl Widget for Overview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content_width = area.width.min(MAX_CONTENT_WIDTH);
        let x_offset = (area.width.saturating_sub(content_width)) / 2;
        let centered_area = Rect {
            x: area.x + x_offset,
            y: area.y,
            width: content_width,
            height: area.height,
        };

        let chunks = Layout::vertical([
            Constraint::Length(1),              // 0: Top padding
            Constraint::Length(1),              // 1: TabBar
            Constraint::Length(1),              // 2: Separator
            Constraint::Length(1),              // 3: Headline
            Constraint::Length(1),              // 4: Blank
            Constraint::Length(HEATMAP_HEIGHT), // 5: Heatmap
            Constraint::Length(1),              // 6: Legend
            Constraint::Length(1),              // 7: Selected day
            Constraint::Fill(1),                // 8: Remaining
            Constraint::Length(1),              // 9: Separator
            Constraint::Length(1),              // 10: Keybindings
        ])
        .split(centered_area);

        TabBar::new(Tab::Calendar, self.theme).render(chunks[1], buf);
        self.render_separator(chunks[2], buf);
        self.render_headline(chunks[3], buf);

        let heatmap = Heatmap::new(self.model, self.theme).with_selected(self.selected);
        let grid_width = heatmap.drawn_width(chunks[5].width);
        heatmap.render(chunks[5], buf);

        self.render_legend(chunks[6], buf, grid_width);
        self.render_detail(chunks[7], buf);
        self.render_separator(chunks[9], buf);
        self.render_keybindings(chunks[10], buf);
    }
}

impl Overview<'_> {
    fn render_separator(&self, area: Rect, buf: &mut Buffer) {
        let line = "─".repeat(area.width as usize);
        buf.set_string(area.x, area.y, &line, Style::default().fg(self.theme.muted()));
    }

    fn render_headline(&self, area: Rect, buf: &mut Buffer) {
        let total = format_number(self.model.summary.total_contributions);
        let headline = Paragraph::new(Line::from(vec![
            Span::styled(
                total,
                Style::default()
                    .fg(self.theme.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " contributions in the last year",
                Style::default().fg(self.theme.text()),
            ),
        ]))
        .alignment(Alignment::Center);

        headline.render(area, buf);
    }

    /// Legend right-aligned under the grid
    fn render_legend(&self, area: Rect, buf: &mut Buffer, grid_width: u16) {
        let legend_width = Legend::min_width();
        if area.width < legend_width {
            return;
        }
        let grid_x = area.x + area.width.saturating_sub(grid_width) / 2;
        let grid_end = grid_x + grid_width;
        let legend_x = grid_end.saturating_sub(legend_width).max(area.x);

        let legend_area = Rect {
            x: legend_x,
            y: area.y,
            width: legend_width,
            height: 1,
        };
        Legend::new(self.theme).render(legend_area, buf);
    }

    fn render_detail(&self, area: Rect, buf: &mut Buffer) {
        let Some(text) = self.selected_cell().and_then(describe_cell) else {
            return;
        };
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(self.theme.date()),
        )))
        .alignment(Alignment::Center)
        .render(area, buf);
    }

    fn render_keybindings(&self, area: Rect, buf: &mut Buffer) {
        let bindings = Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(self.theme.accent())),
            Span::styled(": Switch view", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("←↑↓→", Style::default().fg(self.theme.accent())),
            Span::styled(": Select", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("r", Style::default().fg(self.theme.accent())),
            Span::styled(": Regenerate", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("?", Style::default().fg(self.theme.accent())),
            Span::styled(": Help", Style::default().fg(self.theme.muted())),
            Span::raw("  "),
            Span::styled("q", Style::default().fg(self.theme.accent())),
            Span::styled(": Quit", Style::default().fg(self.theme.muted())),
        ]))
        .alignment(Alignment::Center);

        bindings.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivityLevel;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    // ========== describe tests ==========

    #[test]
    fn test_describe_day_counts() {
        let d = date(2024, 3, 13);
        assert_eq!(
            describe_day(&ActivityDay::empty(d)),
            "No contributions on Wed, Mar 13 2024"
        );
        assert_eq!(
            describe_day(&ActivityDay::new(d, 1, ActivityLevel::Low)),
            "1 contribution on Wed, Mar 13 2024"
        );
        assert_eq!(
            describe_day(&ActivityDay::new(d, 12, ActivityLevel::Max)),
            "12 contributions on Wed, Mar 13 2024"
        );
    }

    #[test]
    fn test_describe_placeholder_is_none() {
        assert!(describe_cell(&GridCell::placeholder(date(2024, 6, 1))).is_none());
    }

    // ========== render tests ==========

    #[test]
    fn test_overview_renders_headline_and_detail() {
        let days = vec![
            ActivityDay::new(date(2024, 3, 12), 2, ActivityLevel::Medium),
            ActivityDay::new(date(2024, 3, 13), 9, ActivityLevel::Max),
        ];
        let model = CalendarModel::build(days, date(2024, 6, 1));
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        Overview::new(&model, Some(GridPos { col: 0, row: 3 }), Theme::Dark)
            .render(area, &mut buf);

        assert!(row_text(&buf, 3).contains("11 contributions in the last year"));
        // Detail row: padding, tabs, sep, headline, blank, 8 heatmap rows, legend
        assert!(row_text(&buf, 14).contains("9 contributions on Wed, Mar 13 2024"));
        assert!(row_text(&buf, 13).contains("Less"));
    }
}

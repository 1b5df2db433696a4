//! Stats view widget - displays the contribution summary in a card grid

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::tabs::{Tab, TabBar};
use crate::format::format_number;
use crate::services::ActivitySummary;
use crate::tui::theme::Theme;
use crate::types::ActivityLevel;

/// Maximum content width for Stats view (consistent with the calendar view)
const MAX_CONTENT_WIDTH: u16 = 170;

/// Card dimensions
const CARD_WIDTH: u16 = 28;
const CARD_HEIGHT: u16 = 5;

/// Fixed number of columns for balanced 2x3 grid
const FIXED_COLS: usize = 3;
const CARD_COUNT: usize = 6;

/// Calculate number of cards per row based on available width (max 3 for balanced grid)
fn cards_per_row(width: u16) -> usize {
    let usable_width = width.saturating_sub(4); // padding
    let cards = (usable_width / (CARD_WIDTH + 2)) as usize; // +2 for spacing
    cards.clamp(1, FIXED_COLS)
}

fn plural_days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}

/// Stats view widget
pub struct StatsView<'a> {
    summary: &'a ActivitySummary,
    theme: Theme,
}

impl<'a> StatsView<'a> {
    pub fn new(summary: &'a ActivitySummary, theme: Theme) -> Self {
        Self { summary, theme }
    }
}

impl Widget for StatsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let content_width = area.width.min(MAX_CONTENT_WIDTH);
        let x_offset = (area.width.saturating_sub(content_width)) / 2;
        let centered_area = Rect {
            x: area.x + x_offset,
            y: area.y,
            width: content_width,
            height: area.height,
        };

        let cols = cards_per_row(centered_area.width);
        let rows = CARD_COUNT.div_ceil(cols);
        let grid_height = (rows as u16) * (CARD_HEIGHT + 1); // +1 for spacing

        let chunks = Layout::vertical([
            Constraint::Length(1),           // Top padding
            Constraint::Length(1),           // Tabs
            Constraint::Length(1),           // Separator
            Constraint::Length(1),           // Title
            Constraint::Length(1),           // Blank
            Constraint::Length(grid_height), // Card grid
            Constraint::Length(1),           // Separator
            Constraint::Length(1),           // Keybindings
            Constraint::Min(0),              // Remaining space
        ])
        .split(centered_area);

        TabBar::new(Tab::Stats, self.theme).render(chunks[1], buf);
        self.render_separator(chunks[2], buf);
        self.render_title(chunks[3], buf);
        self.render_card_grid(chunks[5], buf, cols);
        self.render_separator(chunks[6], buf);
        self.render_keybindings(chunks[7], buf);
    }
}

impl StatsView<'_> {
    fn render_separator(&self, area: Rect, buf: &mut Buffer) {
        let line = "─".repeat(area.width as usize);
        buf.set_string(area.x, area.y, &line, Style::default().fg(self.theme.muted()));
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer) {
        let title = Paragraph::new(Line::from(Span::styled(
            "Contribution Statistics",
            Style::default()
                .fg(self.theme.text())
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        title.render(area, buf);
    }

    fn render_card_grid(&self, area: Rect, buf: &mut Buffer, cols: usize) {
        let cards = self.build_cards();

        let total_cards_width = (cols as u16) * CARD_WIDTH + ((cols - 1) as u16) * 2; // 2 = spacing
        let start_x = area.x + (area.width.saturating_sub(total_cards_width)) / 2;

        for (i, card) in cards.iter().enumerate() {
            let row = i / cols;
            let col = i % cols;

            let card_x = start_x + (col as u16) * (CARD_WIDTH + 2);
            let card_y = area.y + (row as u16) * (CARD_HEIGHT + 1);

            if card_y + CARD_HEIGHT > area.y + area.height {
                continue;
            }

            let card_area = Rect {
                x: card_x,
                y: card_y,
                width: CARD_WIDTH.min(area.width),
                height: CARD_HEIGHT,
            };

            self.render_card(card_area, buf, card);
        }
    }

    fn build_cards(&self) -> Vec<StatCard> {
        let max_color = self.theme.heatmap_color(ActivityLevel::Max);
        vec![
            StatCard {
                title: "Contributions".to_string(),
                value: format_number(self.summary.total_contributions),
                value_color: self.theme.accent(),
                border_color: self.theme.accent(),
            },
            StatCard {
                title: "Active Days".to_string(),
                value: self.summary.active_days.to_string(),
                value_color: self.theme.text(),
                border_color: self.theme.muted(),
            },
            StatCard {
                title: "Busiest Day".to_string(),
                value: self
                    .summary
                    .busiest_day
                    .map(|(date, count)| format!("{} ({})", date.format("%m/%d"), count))
                    .unwrap_or_else(|| "N/A".to_string()),
                value_color: self.theme.date(),
                border_color: self.theme.date(),
            },
            StatCard {
                title: "Longest Streak".to_string(),
                value: plural_days(self.summary.longest_streak),
                value_color: max_color,
                border_color: max_color,
            },
            StatCard {
                title: "Current Streak".to_string(),
                value: plural_days(self.summary.current_streak),
                value_color: max_color,
                border_color: max_color,
            },
            StatCard {
                title: "Max-Level Days".to_string(),
                value: self.summary.days_at(ActivityLevel::Max).to_string(),
                value_color: self.theme.text(),
                border_color: self.theme.muted(),
            },
        ]
    }

    fn render_card(&self, area: Rect, buf: &mut Buffer, card: &StatCard) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(card.border_color));
        block.render(area, buf);

        // Title on line 1 inside the border
        if area.height > 2 {
            let title_x = area.x + (area.width.saturating_sub(card.title.len() as u16)) / 2;
            buf.set_string(
                title_x,
                area.y + 1,
                &card.title,
                Style::default().fg(card.border_color),
            );
        }

        // Value on line 3
        if area.height > 3 {
            let value_x = area.x + (area.width.saturating_sub(card.value.len() as u16)) / 2;
            buf.set_string(
                value_x,
                area.y + 3,
                &card.value,
                Style::default()
                    .fg(card.value_color)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }

    fn render_keybindings(&self, area: Rect, buf: &mut Buffer) {
        let bindings = Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(self.theme.accent())),
            Span::styled(": Switch view", Style::default().fg(self.theme.muted())),
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

/// Internal card representation
struct StatCard {
    title: String,
    value: String,
    value_color: Color,
    border_color: Color,
}

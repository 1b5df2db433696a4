//! Heatmap legend: "Less ██ ██ ██ ██ ██ More"

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::tui::theme::Theme;
use crate::types::ActivityLevel;

const LESS: &str = "Less ";
const MORE: &str = " More";
const SWATCH: &str = "██";
const SWATCH_WIDTH: u16 = 3; // 2 blocks + 1 gap

pub struct Legend {
    theme: Theme,
}

impl Legend {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Width needed to draw the full legend
    pub fn min_width() -> u16 {
        LESS.len() as u16 + ActivityLevel::ALL.len() as u16 * SWATCH_WIDTH - 1 + MORE.len() as u16
    }
}

impl Widget for Legend {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < Self::min_width() || area.height == 0 {
            return;
        }

        let muted = Style::default().fg(self.theme.muted());
        let mut x = area.x;
        buf.set_string(x, area.y, LESS, muted);
        x += LESS.len() as u16;

        for level in ActivityLevel::ALL {
            let style = Style::default().fg(self.theme.heatmap_color(level));
            buf.set_string(x, area.y, SWATCH, style);
            x += SWATCH_WIDTH;
        }

        buf.set_string(x - 1, area.y, MORE, muted);
    }
}

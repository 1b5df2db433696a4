//! Application state and event loop

use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget, DefaultTerminal, Frame};

use crate::services::{ActivityGenerator, CalendarModel};
use crate::types::{ActivityDay, DAYS_PER_WEEK};

use super::theme::Theme;
use super::widgets::{
    heatmap::GridPos,
    help::HelpPopup,
    overview::Overview,
    stats::StatsView,
    tabs::Tab,
};

/// Where the calendar's days come from
pub enum DaySource {
    /// Synthetic activity; can be regenerated
    Generated(ActivityGenerator),
    /// Recorded activity loaded from a file
    Provided(Vec<ActivityDay>),
}

/// Main application
pub struct App {
    source: DaySource,
    model: CalendarModel,
    today: NaiveDate,
    /// Date stamped on padding cells
    stamp: NaiveDate,
    theme: Theme,
    current_tab: Tab,
    selected: Option<GridPos>,
    show_help: bool,
    should_quit: bool,
}

/// Grid position of the most recent day
fn last_day_pos(model: &CalendarModel) -> Option<GridPos> {
    let first = model.days.first()?;
    let lead = first.date.weekday().num_days_from_sunday() as usize;
    let slot = lead + model.days.len() - 1;
    Some(GridPos {
        col: slot / DAYS_PER_WEEK,
        row: slot % DAYS_PER_WEEK,
    })
}

impl App {
    pub fn new(mut source: DaySource, today: NaiveDate, stamp: NaiveDate, theme: Theme) -> Self {
        let days = match &mut source {
            DaySource::Generated(generator) => generator.generate(today),
            DaySource::Provided(days) => days.clone(),
        };
        let model = CalendarModel::build(days, stamp);
        let selected = last_day_pos(&model);

        Self {
            source,
            model,
            today,
            stamp,
            theme,
            current_tab: Tab::default(),
            selected,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn model(&self) -> &CalendarModel {
        &self.model
    }

    pub fn selected(&self) -> Option<GridPos> {
        self.selected
    }

    /// Handle keyboard events
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
            }
            KeyCode::Tab => {
                self.current_tab = self.current_tab.next();
            }
            KeyCode::BackTab => {
                self.current_tab = self.current_tab.prev();
            }
            KeyCode::Char(c @ '1'..='2') => {
                if let Some(tab) = Tab::from_number(c as u8 - b'0') {
                    self.current_tab = tab;
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.regenerate(),
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(0, 1),
            _ => {}
        }
    }

    /// Draw a fresh set of synthetic days. Recorded data is left alone.
    fn regenerate(&mut self) {
        let DaySource::Generated(generator) = &mut self.source else {
            return;
        };
        let days = generator.generate(self.today);
        self.model = CalendarModel::build(days, self.stamp);
        self.selected = last_day_pos(&self.model);
        tracing::debug!(weeks = self.model.weeks.len(), "regenerated calendar");
    }

    /// Move the selection within the grid, clamping at the edges
    fn move_selection(&mut self, d_col: isize, d_row: isize) {
        if self.current_tab != Tab::Calendar {
            return;
        }
        let Some(pos) = self.selected else {
            return;
        };
        let max_col = self.model.weeks.len().saturating_sub(1) as isize;
        let max_row = (DAYS_PER_WEEK - 1) as isize;

        self.selected = Some(GridPos {
            col: (pos.col as isize + d_col).clamp(0, max_col) as usize,
            row: (pos.row as isize + d_row).clamp(0, max_row) as usize,
        });
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Draw the application
    pub fn draw(&self, frame: &mut Frame) {
        frame.render_widget(self, frame.area());
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.current_tab {
            Tab::Calendar => {
                Overview::new(&self.model, self.selected, self.theme).render(area, buf);
            }
            Tab::Stats => {
                StatsView::new(&self.model.summary, self.theme).render(area, buf);
            }
        }

        if self.show_help {
            let popup_area = HelpPopup::centered_area(area);
            HelpPopup::new(self.theme).render(popup_area, buf);
        }
    }
}

/// Run the TUI application
pub fn run(app: App) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, app);
    ratatui::restore();
    result
}

fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        if app.should_quit() {
            break;
        }

        if event::poll(Duration::from_millis(250))? {
            app.handle_event(event::read()?);
        }
    }

    Ok(())
}

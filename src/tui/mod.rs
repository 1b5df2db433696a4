//! Terminal UI for the activity calendar

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::{run, App, DaySource};
pub use theme::Theme;

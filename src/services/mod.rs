//! Activity generation, layout and summary services

pub mod calendar;
pub mod generator;
pub mod loader;
pub mod summary;

pub use calendar::{bucket_weeks, month_labels, CalendarModel, MAX_MONTH_LABELS};
pub use generator::ActivityGenerator;
pub use loader::load_days;
pub use summary::ActivitySummary;

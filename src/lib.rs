//! CAD Arena contribution calendar: synthetic activity generation,
//! week-grid layout, month headers and a terminal heatmap.

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod services;
pub mod tui;
pub mod types;

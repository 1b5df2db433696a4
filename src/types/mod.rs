//! Type definitions for cadarena

mod activity;
mod error;

pub use activity::*;
pub use error::*;

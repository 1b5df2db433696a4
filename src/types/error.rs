use thiserror::Error;

/// cadarena error types
#[derive(Error, Debug)]
pub enum ArenaError {
    /// Failed to parse JSON input
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// Activity record violates a day invariant
    #[error("invalid day {date}: {reason}")]
    InvalidDay { date: String, reason: String },
}

impl From<serde_json::Error> for ArenaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Result type alias for cadarena
pub type Result<T> = std::result::Result<T, ArenaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArenaError::Parse("invalid json".into());
        assert_eq!(err.to_string(), "parse error: invalid json");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ArenaError = io_err.into();
        assert!(err.to_string().contains("io error"));
    }

    #[test]
    fn test_invalid_day_display() {
        let err = ArenaError::InvalidDay {
            date: "2024-03-13".into(),
            reason: "level 0 with count 4".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid day 2024-03-13: level 0 with count 4"
        );
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ArenaError = serde_err.into();
        assert!(err.to_string().starts_with("parse error"));
    }
}

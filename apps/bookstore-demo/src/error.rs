//! # Demo Error Types
//!
//! ```text
//! ConfigError ─┐
//! CoreError ───┼──► DemoError ──► main() ──► stderr, non-zero exit
//! fmt::Error ──┘
//! ```

use thiserror::Error;

use bookstore_core::CoreError;

use crate::config::ConfigError;

/// Anything that stops the demo from finishing.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Failed to write demo output")]
    Format(#[from] std::fmt::Error),
}

/// Convenience type alias for Results with DemoError.
pub type DemoResult<T> = Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::BookId;

    #[test]
    fn test_core_error_is_transparent() {
        let err: DemoError = CoreError::BookNotFound(BookId::from_index(1)).into();
        assert_eq!(err.to_string(), "Book not found: #1");
    }

    #[test]
    fn test_config_error_message() {
        let err: DemoError = ConfigError::InvalidValue("BOOKSTORE_LOG".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for BOOKSTORE_LOG"
        );
    }
}

//! # Error Types
//!
//! Domain-specific error types for bookstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bookstore-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog lookups, serialization                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  bookstore-demo errors (app crate)                                     │
//! │  ├── ConfigError      - Bad environment values                         │
//! │  └── DemoError        - What main() reports                            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DemoError → stderr                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Selling a book that is already sold is NOT an error. It is reported as
//! [`PurchaseOutcome::Unavailable`](crate::customer::PurchaseOutcome).

use thiserror::Error;

use crate::catalog::BookId;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A `BookId` was not issued by the catalog it was used with.
    ///
    /// ## When This Occurs
    /// - Id taken from one catalog and used against another
    /// - Id fabricated by hand
    #[error("Book not found: {0}")]
    BookNotFound(BookId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Report could not be rendered as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only produced by the validating constructors and `check_*` functions.
/// `Book::new` accepts anything.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., ISBN of the wrong length).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

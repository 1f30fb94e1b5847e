//! # bookstore-core: Pure Domain Logic for the Bookstore
//!
//! Books, customers, the purchase flow, and the inventory report, as plain
//! data types and pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstore Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 bookstore-demo (binary)                         │   │
//! │  │    config ──► logging ──► demo script ──► stdout               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookstore-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐          │   │
//! │  │   │  types   │ │ catalog  │ │ customer │ │  report  │          │   │
//! │  │   │  Book    │ │ Catalog  │ │ Customer │ │ BookRep. │          │   │
//! │  │   │  Avail.  │ │ BookId   │ │ Outcome  │ │ format_* │          │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘          │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PRINTING • NO ENV • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Book` and its `Availability` state
//! - [`catalog`] - `Catalog` arena that owns books, addressed by `BookId`
//! - [`customer`] - `Customer`, purchase records, `PurchaseOutcome`
//! - [`money`] - Money type with integer arithmetic
//! - [`report`] - Price formatting and the inventory report
//! - [`validation`] - ISBN shape checks and book field rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstore_core::{Book, Catalog, Customer, Money};
//!
//! let mut catalog = Catalog::new();
//! let id = catalog.add(Book::new("Rust", "Ferris", Money::from_major(42), "978-0-00-000000-0"));
//!
//! let mut alice = Customer::new("Alice", "alice@example.com");
//! let outcome = alice.buy_book(&mut catalog, id).unwrap();
//! assert!(outcome.is_success());
//!
//! // Second sale of the same copy fails without touching state
//! let mut bob = Customer::new("Bob", "bob@example.com");
//! assert!(!bob.buy_book(&mut catalog, id).unwrap().is_success());
//! assert_eq!(bob.purchase_count(), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod customer;
pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{BookId, Catalog};
pub use customer::{Customer, PurchaseOutcome, PurchaseRecord};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use report::{format_price, generate_book_report, BookReport};
pub use types::{Availability, Book};
pub use validation::validate_isbn;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol prefixed to every rendered price.
pub const CURRENCY_SYMBOL: &str = "$";

/// Accepted ISBN lengths after hyphens and spaces are removed (ISBN-10, ISBN-13).
pub const ISBN_LENGTHS: [usize; 2] = [10, 13];

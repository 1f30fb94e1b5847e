//! # Domain Types
//!
//! The sellable item of the bookstore and its availability state.
//!
//! ## Availability State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │         sell() → true                                                   │
//! │   ┌───────────┐ ───────────────► ┌───────────┐                         │
//! │   │ Available │                  │   Sold    │ ── sell() → false       │
//! │   └───────────┘ ◄─────────────── └───────────┘    (no change)          │
//! │     ▲   │          restock()                                            │
//! │     └───┘ restock() (no-op)                                             │
//! │                                                                         │
//! │   Initial state: Available                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{check_isbn, validate_author, validate_price, validate_title};

// =============================================================================
// Availability
// =============================================================================

/// Whether a book can still be sold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// In stock.
    #[default]
    Available,
    /// Sold, waiting for restock.
    Sold,
}

impl Availability {
    /// Tag shown next to each book in the inventory report.
    pub const fn label(&self) -> &'static str {
        match self {
            Availability::Available => "可售",
            Availability::Sold => "已售",
        }
    }
}

// =============================================================================
// Book
// =============================================================================

/// A sellable book.
///
/// ## Constructors
/// - [`Book::new`] performs **no validation**. Empty titles, negative prices
///   and malformed ISBNs are all accepted as-is.
/// - [`Book::try_new`] checks every field first.
///
/// Availability is private so it can only move through [`Book::sell`] and
/// [`Book::restock`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Serialized as integer cents under `price_cents`.
    #[serde(rename = "price_cents")]
    pub price: Money,
    /// Not unique: two books may share an ISBN.
    pub isbn: String,
    availability: Availability,
}

impl Book {
    /// Creates an available book without validating anything.
    ///
    /// ```rust
    /// use bookstore_core::{Book, Money};
    ///
    /// let book = Book::new("", "", Money::from_cents(-1), "nope");
    /// assert!(book.is_available());
    /// ```
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        price: Money,
        isbn: impl Into<String>,
    ) -> Self {
        Book {
            title: title.into(),
            author: author.into(),
            price,
            isbn: isbn.into(),
            availability: Availability::Available,
        }
    }

    /// Creates an available book after validating title, author, price and ISBN.
    ///
    /// ```rust
    /// use bookstore_core::{Book, Money};
    ///
    /// assert!(Book::try_new("Rust", "Ferris", Money::from_major(30), "978-123-456-789-0").is_ok());
    /// assert!(Book::try_new("Rust", "Ferris", Money::from_major(-1), "978-123-456-789-0").is_err());
    /// ```
    pub fn try_new(
        title: impl Into<String>,
        author: impl Into<String>,
        price: Money,
        isbn: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let book = Book::new(title, author, price, isbn);

        validate_title(&book.title)?;
        validate_author(&book.author)?;
        validate_price(book.price)?;
        check_isbn(&book.isbn)?;

        Ok(book)
    }

    /// Current availability state.
    #[inline]
    pub fn availability(&self) -> Availability {
        self.availability
    }

    /// `true` while the book has not been sold (or has been restocked).
    #[inline]
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// Marks the book sold.
    ///
    /// Returns `false` and leaves state untouched if it was already sold.
    pub fn sell(&mut self) -> bool {
        match self.availability {
            Availability::Available => {
                self.availability = Availability::Sold;
                true
            }
            Availability::Sold => false,
        }
    }

    /// Puts the book back in stock. Idempotent.
    pub fn restock(&mut self) {
        self.availability = Availability::Available;
    }
}

/// `《title》 by author - $price` with the price as a plain number.
impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "《{}》 by {} - {}{}",
            self.title,
            self.author,
            crate::CURRENCY_SYMBOL,
            self.price.to_plain_string()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book::new("Python 程式設計", "張三", Money::from_major(580), "978-123-456-789-0")
    }

    #[test]
    fn test_new_book_is_available() {
        let book = sample_book();
        assert!(book.is_available());
        assert_eq!(book.availability(), Availability::Available);
    }

    #[test]
    fn test_sell_once() {
        let mut book = sample_book();
        assert!(book.sell());
        assert!(!book.is_available());
    }

    #[test]
    fn test_second_sell_fails_without_change() {
        let mut book = sample_book();
        assert!(book.sell());
        assert!(!book.sell());
        assert_eq!(book.availability(), Availability::Sold);
    }

    #[test]
    fn test_restock_allows_selling_again() {
        let mut book = sample_book();
        book.sell();
        book.restock();
        assert!(book.is_available());
        assert!(book.sell());
    }

    #[test]
    fn test_restock_is_idempotent() {
        let mut book = sample_book();
        book.restock();
        book.restock();
        assert!(book.is_available());
    }

    #[test]
    fn test_display() {
        assert_eq!(sample_book().to_string(), "《Python 程式設計》 by 張三 - $580");

        let book = Book::new("Cheap", "Anon", Money::from_cents(1050), "x");
        assert_eq!(book.to_string(), "《Cheap》 by Anon - $10.5");
    }

    #[test]
    fn test_new_accepts_anything() {
        let book = Book::new("", "", Money::from_major(-10), "123");
        assert!(book.is_available());
        assert!(book.price.is_negative());
    }

    #[test]
    fn test_try_new_rejects_bad_fields() {
        let isbn = "978-123-456-789-0";

        assert!(matches!(
            Book::try_new("  ", "A", Money::from_major(1), isbn),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            Book::try_new("T", "", Money::from_major(1), isbn),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            Book::try_new("T", "A", Money::from_cents(-1), isbn),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            Book::try_new("T", "A", Money::from_major(1), "123"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_try_new_accepts_free_book() {
        let book = Book::try_new("Free", "A", Money::zero(), "0-306-40615-2").unwrap();
        assert!(book.is_available());
    }

    #[test]
    fn test_availability_labels() {
        assert_eq!(Availability::Available.label(), "可售");
        assert_eq!(Availability::Sold.label(), "已售");
        assert_eq!(Availability::default(), Availability::Available);
    }

    #[test]
    fn test_serialized_price_is_labeled_cents() {
        let mut book = sample_book();
        book.sell();

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["price_cents"], 58000);
        assert!(value.get("price").is_none());
        assert_eq!(value["availability"], "sold");

        let back: Book = serde_json::from_value(value).unwrap();
        assert_eq!(back, book);
    }
}

//! # Report Module
//!
//! Price formatting and the inventory report. Everything here reads books,
//! nothing mutates them.
//!
//! ## Inventory Report Layout
//! ```text
//! === 書店庫存報告 ===
//! 總書籍數量: 3
//! 可售書籍: 2
//! 已售書籍: 1
//!
//! 詳細清單:
//! - 《Python 程式設計》 by 張三 - $580 [已售]
//! - 《資料結構與演算法》 by 李四 - $720 [可售]
//! - 《機器學習入門》 by 王五 - $650 [可售]
//! ```

use serde::Serialize;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Book;

/// Renders a price with the currency symbol and exactly two decimals.
///
/// No locale handling; negative prices print as `$-5.50`.
///
/// ```rust
/// use bookstore_core::{format_price, Money};
///
/// assert_eq!(format_price(Money::from_major(580)), "$580.00");
/// assert_eq!(format_price(Money::from_cents(1099)), "$10.99");
/// ```
pub fn format_price(price: Money) -> String {
    price.to_string()
}

// =============================================================================
// Book Report
// =============================================================================

/// Inventory counts plus the books they were computed from, in input order.
///
/// Serializable so the same snapshot can be rendered as text or JSON.
#[derive(Debug, Clone, Serialize)]
pub struct BookReport<'a> {
    pub total: usize,
    pub available: usize,
    pub sold: usize,
    pub books: Vec<&'a Book>,
}

impl<'a> BookReport<'a> {
    /// Counts books by availability. `sold` is `total - available`.
    pub fn from_books<I>(books: I) -> Self
    where
        I: IntoIterator<Item = &'a Book>,
    {
        let books: Vec<&'a Book> = books.into_iter().collect();
        let total = books.len();
        let available = books.iter().filter(|book| book.is_available()).count();

        BookReport {
            total,
            available,
            sold: total - available,
            books,
        }
    }

    /// Renders the text report: header counts, then one tagged line per book.
    pub fn to_text(&self) -> String {
        let mut report = format!(
            "=== 書店庫存報告 ===\n\
             總書籍數量: {}\n\
             可售書籍: {}\n\
             已售書籍: {}\n\
             \n\
             詳細清單:\n",
            self.total, self.available, self.sold
        );

        for book in &self.books {
            report.push_str(&format!("- {} [{}]\n", book, book.availability().label()));
        }

        report
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds the text inventory report for `books`, in the order given.
///
/// ```rust
/// use bookstore_core::{generate_book_report, Book, Money};
///
/// let mut sold = Book::new("A", "X", Money::from_major(1), "1234567890");
/// sold.sell();
/// let books = vec![sold, Book::new("B", "Y", Money::from_major(2), "1234567890")];
///
/// let report = generate_book_report(&books);
/// assert!(report.contains("總書籍數量: 2"));
/// assert!(report.contains("- 《A》 by X - $1 [已售]"));
/// ```
pub fn generate_book_report<'a, I>(books: I) -> String
where
    I: IntoIterator<Item = &'a Book>,
{
    BookReport::from_books(books).to_text()
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # Customer
//!
//! A shopper and the ordered list of books they managed to buy.
//!
//! ## Purchase Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  customer.buy_book(&mut catalog, id)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  catalog.get_mut(id)? ── unknown id ──► Err(BookNotFound)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  book.sell()                                                            │
//! │       │                                                                 │
//! │       ├── true  ──► push PurchaseRecord ──► Ok(Purchased("..."))       │
//! │       │                                                                 │
//! │       └── false ──► no change          ──► Ok(Unavailable("..."))      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An out-of-stock book is a normal outcome, not an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{BookId, Catalog};
use crate::error::CoreResult;
use crate::money::Money;

// =============================================================================
// Purchase Outcome
// =============================================================================

/// Result of a purchase attempt, with the message to show the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "message")]
pub enum PurchaseOutcome {
    /// The book was sold and added to the customer's history.
    Purchased(String),
    /// The book was already sold. Nothing changed.
    Unavailable(String),
}

impl PurchaseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PurchaseOutcome::Purchased(_))
    }

    pub fn message(&self) -> &str {
        match self {
            PurchaseOutcome::Purchased(message) | PurchaseOutcome::Unavailable(message) => message,
        }
    }
}

impl fmt::Display for PurchaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// =============================================================================
// Purchase Record
// =============================================================================

/// One successful purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub book_id: BookId,
    pub purchased_at: DateTime<Utc>,
}

// =============================================================================
// Customer
// =============================================================================

/// A shopper.
///
/// ## Invariants
/// - `purchases` only grows, and only through [`Customer::buy_book`]
/// - Every record refers to a book whose `sell()` succeeded for this customer
/// - The same book may appear twice if it was restocked and bought again
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    purchases: Vec<PurchaseRecord>,
}

impl Customer {
    /// Creates a customer with an empty purchase history.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Customer {
            name: name.into(),
            email: email.into(),
            purchases: Vec::new(),
        }
    }

    /// Tries to buy a book from the catalog.
    ///
    /// ## Returns
    /// - `Ok(Purchased)` with `"{name} 成功購買了 {title}"`; history grows by one
    /// - `Ok(Unavailable)` with `"抱歉，{title} 目前缺貨"`; nothing changes
    /// - `Err(BookNotFound)` if `id` did not come from `catalog`
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_core::{Book, Catalog, Customer, Money};
    ///
    /// let mut catalog = Catalog::new();
    /// let id = catalog.add(Book::new("機器學習入門", "王五", Money::from_major(650), "978-555-666-777-8"));
    ///
    /// let mut ming = Customer::new("小明", "xiaoming@email.com");
    /// let outcome = ming.buy_book(&mut catalog, id).unwrap();
    /// assert_eq!(outcome.message(), "小明 成功購買了 機器學習入門");
    /// ```
    pub fn buy_book(&mut self, catalog: &mut Catalog, id: BookId) -> CoreResult<PurchaseOutcome> {
        let book = catalog.get_mut(id)?;

        if book.sell() {
            self.purchases.push(PurchaseRecord {
                book_id: id,
                purchased_at: Utc::now(),
            });
            Ok(PurchaseOutcome::Purchased(format!(
                "{} 成功購買了 {}",
                self.name, book.title
            )))
        } else {
            Ok(PurchaseOutcome::Unavailable(format!(
                "抱歉，{} 目前缺貨",
                book.title
            )))
        }
    }

    /// Renders the purchase history.
    ///
    /// Empty history gives `"{name} 還沒有購買任何書籍"`. Otherwise a header
    /// line followed by `- {book}` per purchase, oldest first, each line
    /// ending in a newline.
    pub fn get_purchase_history(&self, catalog: &Catalog) -> CoreResult<String> {
        if self.purchases.is_empty() {
            return Ok(format!("{} 還沒有購買任何書籍", self.name));
        }

        let mut history = format!("{} 的購買記錄：\n", self.name);
        for record in &self.purchases {
            let book = catalog.get(record.book_id)?;
            history.push_str(&format!("- {}\n", book));
        }
        Ok(history)
    }

    /// Ids of purchased books, oldest first.
    pub fn purchased_books(&self) -> impl Iterator<Item = BookId> + '_ {
        self.purchases.iter().map(|record| record.book_id)
    }

    pub fn purchases(&self) -> &[PurchaseRecord] {
        &self.purchases
    }

    pub fn purchase_count(&self) -> usize {
        self.purchases.len()
    }

    /// Sum of the current prices of every purchased book.
    pub fn total_spent(&self, catalog: &Catalog) -> CoreResult<Money> {
        self.purchased_books()
            .map(|id| catalog.get(id).map(|book| book.price))
            .sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::types::Book;

    fn store() -> (Catalog, BookId, BookId) {
        let mut catalog = Catalog::new();
        let python = catalog.add(Book::new(
            "Python 程式設計",
            "張三",
            Money::from_major(580),
            "978-123-456-789-0",
        ));
        let algo = catalog.add(Book::new(
            "資料結構與演算法",
            "李四",
            Money::from_major(720),
            "978-987-654-321-0",
        ));
        (catalog, python, algo)
    }

    #[test]
    fn test_new_customer_has_no_purchases() {
        let customer = Customer::new("小明", "xiaoming@email.com");
        assert_eq!(customer.purchase_count(), 0);
        assert_eq!(customer.email, "xiaoming@email.com");
    }

    #[test]
    fn test_buy_available_book() {
        let (mut catalog, python, _) = store();
        let mut customer = Customer::new("小明", "xiaoming@email.com");

        let outcome = customer.buy_book(&mut catalog, python).unwrap();

        assert!(outcome.is_success());
        assert_eq!(outcome.to_string(), "小明 成功購買了 Python 程式設計");
        assert_eq!(customer.purchase_count(), 1);
        assert!(!catalog.get(python).unwrap().is_available());
    }

    #[test]
    fn test_buy_sold_book_changes_nothing() {
        let (mut catalog, python, _) = store();
        let mut ming = Customer::new("小明", "xiaoming@email.com");
        let mut hua = Customer::new("小華", "xiaohua@email.com");

        ming.buy_book(&mut catalog, python).unwrap();
        let outcome = hua.buy_book(&mut catalog, python).unwrap();

        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), "抱歉，Python 程式設計 目前缺貨");
        assert_eq!(hua.purchase_count(), 0);
        assert_eq!(ming.purchase_count(), 1);
    }

    #[test]
    fn test_buy_unknown_book() {
        let (mut catalog, _, _) = store();
        let mut customer = Customer::new("小明", "xiaoming@email.com");

        let err = customer
            .buy_book(&mut catalog, BookId::from_index(99))
            .unwrap_err();

        assert!(matches!(err, CoreError::BookNotFound(_)));
        assert_eq!(customer.purchase_count(), 0);
    }

    #[test]
    fn test_rebuy_after_restock_records_duplicate() {
        let (mut catalog, python, _) = store();
        let mut customer = Customer::new("小明", "xiaoming@email.com");

        customer.buy_book(&mut catalog, python).unwrap();
        catalog.restock(python).unwrap();
        let outcome = customer.buy_book(&mut catalog, python).unwrap();

        assert!(outcome.is_success());
        let ids: Vec<BookId> = customer.purchased_books().collect();
        assert_eq!(ids, vec![python, python]);
    }

    #[test]
    fn test_history_empty() {
        let (catalog, _, _) = store();
        let customer = Customer::new("小華", "xiaohua@email.com");

        assert_eq!(
            customer.get_purchase_history(&catalog).unwrap(),
            "小華 還沒有購買任何書籍"
        );
    }

    #[test]
    fn test_history_single_purchase() {
        let (mut catalog, python, _) = store();
        let mut customer = Customer::new("小明", "xiaoming@email.com");
        customer.buy_book(&mut catalog, python).unwrap();

        let history = customer.get_purchase_history(&catalog).unwrap();

        assert_eq!(
            history,
            "小明 的購買記錄：\n- 《Python 程式設計》 by 張三 - $580\n"
        );
        assert_eq!(history.lines().filter(|l| l.starts_with("- ")).count(), 1);
    }

    #[test]
    fn test_history_keeps_purchase_order() {
        let (mut catalog, python, algo) = store();
        let mut customer = Customer::new("小明", "xiaoming@email.com");
        customer.buy_book(&mut catalog, algo).unwrap();
        customer.buy_book(&mut catalog, python).unwrap();

        let history = customer.get_purchase_history(&catalog).unwrap();
        let lines: Vec<&str> = history.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("資料結構與演算法"));
        assert!(lines[2].contains("Python 程式設計"));
    }

    #[test]
    fn test_total_spent() {
        let (mut catalog, python, algo) = store();
        let mut customer = Customer::new("小明", "xiaoming@email.com");
        assert!(customer.total_spent(&catalog).unwrap().is_zero());

        customer.buy_book(&mut catalog, python).unwrap();
        customer.buy_book(&mut catalog, algo).unwrap();

        assert_eq!(customer.total_spent(&catalog).unwrap(), Money::from_major(1300));
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = PurchaseOutcome::Unavailable("sold out".to_string());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["message"], "sold out");
    }
}

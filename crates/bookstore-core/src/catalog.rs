//! # Catalog
//!
//! Owns every book in the store. Customers never hold a `Book` directly,
//! only the `BookId` the catalog handed out.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog { books: Vec<Book> }                                           │
//! │     [0] 《Python 程式設計》   ◄──── BookId(0) ──── Customer 小明          │
//! │     [1] 《資料結構與演算法》 ◄──── BookId(1) ──── Customer 小華          │
//! │     [2] 《機器學習入門》     ◄──── BookId(2) ──── Customer 小明          │
//! │                                                                         │
//! │  Mutation (sell/restock) goes through &mut Catalog.                     │
//! │  Reading a history goes through &Catalog.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Books are never removed, so an id stays valid for the catalog's lifetime.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::types::Book;

// =============================================================================
// Book Id
// =============================================================================

/// Handle to a book inside a [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookId(usize);

impl BookId {
    /// Wraps a raw index. Only meaningful for the catalog that issued it.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        BookId(index)
    }

    /// Position of the book in its catalog.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Arena of books, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a book and returns its id. Duplicate ISBNs are allowed.
    pub fn add(&mut self, book: Book) -> BookId {
        self.books.push(book);
        BookId(self.books.len() - 1)
    }

    /// Looks up a book.
    pub fn get(&self, id: BookId) -> CoreResult<&Book> {
        self.books.get(id.0).ok_or(CoreError::BookNotFound(id))
    }

    /// Looks up a book for mutation.
    pub fn get_mut(&mut self, id: BookId) -> CoreResult<&mut Book> {
        self.books.get_mut(id.0).ok_or(CoreError::BookNotFound(id))
    }

    /// Marks a book available again. See [`Book::restock`].
    pub fn restock(&mut self, id: BookId) -> CoreResult<()> {
        self.get_mut(id)?.restock();
        Ok(())
    }

    /// All books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Ids paired with their books, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (BookId, &Book)> {
        self.books.iter().enumerate().map(|(i, book)| (BookId(i), book))
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn book(title: &str) -> Book {
        Book::new(title, "Author", Money::from_major(100), "978-123-456-789-0")
    }

    #[test]
    fn test_add_issues_sequential_ids() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        let a = catalog.add(book("A"));
        let b = catalog.add(book("B"));

        assert_eq!(a.index(), 0);
        assert_eq!(b.index(), 1);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(b).unwrap().title, "B");
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let catalog = Catalog::new();
        let err = catalog.get(BookId::from_index(3)).unwrap_err();
        assert!(matches!(err, CoreError::BookNotFound(id) if id.index() == 3));
    }

    #[test]
    fn test_restock_through_catalog() {
        let mut catalog = Catalog::new();
        let id = catalog.add(book("A"));

        assert!(catalog.get_mut(id).unwrap().sell());
        assert!(!catalog.get(id).unwrap().is_available());

        catalog.restock(id).unwrap();
        assert!(catalog.get(id).unwrap().is_available());
    }

    #[test]
    fn test_duplicate_isbn_allowed() {
        let mut catalog = Catalog::new();
        catalog.add(book("A"));
        catalog.add(book("A"));
        assert_eq!(catalog.books()[0].isbn, catalog.books()[1].isbn);
    }

    #[test]
    fn test_iter_pairs_ids_with_books() {
        let mut catalog = Catalog::new();
        catalog.add(book("A"));
        catalog.add(book("B"));

        let titles: Vec<(usize, &str)> = catalog
            .iter()
            .map(|(id, book)| (id.index(), book.title.as_str()))
            .collect();
        assert_eq!(titles, vec![(0, "A"), (1, "B")]);
    }
}

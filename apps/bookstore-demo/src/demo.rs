//! # Demo Script
//!
//! Builds the sample store and walks it through a fixed sequence of steps,
//! collecting everything that should reach stdout into one `String`.
//!
//! ## Steps
//! ```text
//! 1. Create books          ──► list each book with its id logged
//! 2. Check book details    ──► ISBN validity + formatted price
//! 3. Purchases             ──► three sales, then one sold-out attempt
//! 4. Purchase histories    ──► one block per customer
//! 5. Restock               ──► one book goes back on the shelf
//! 6. Inventory report      ──► text or JSON (BOOKSTORE_REPORT_FORMAT)
//! ```

use std::fmt::Write;

use bookstore_core::{
    format_price, validate_isbn, Book, BookId, BookReport, Catalog, Customer, Money,
};
use tracing::{debug, info};

use crate::config::{DemoConfig, ReportFormat};
use crate::error::DemoResult;

/// Sample books: (title, author, price in whole dollars, isbn).
const SAMPLE_BOOKS: &[(&str, &str, i64, &str)] = &[
    ("Python 程式設計", "張三", 580, "978-123-456-789-0"),
    ("資料結構與演算法", "李四", 720, "978-987-654-321-0"),
    ("機器學習入門", "王五", 650, "978-555-666-777-8"),
];

/// Sample customers: (name, email).
const SAMPLE_CUSTOMERS: &[(&str, &str)] = &[
    ("小明", "xiaoming@email.com"),
    ("小華", "xiaohua@email.com"),
];

/// Purchases as (customer index, book index), in order.
/// The last one targets a book that is already sold.
const PURCHASES: &[(usize, usize)] = &[(0, 0), (1, 1), (0, 2), (1, 0)];

/// Book put back on the shelf after the purchases.
const RESTOCKED_BOOK: usize = 2;

const TITLE: &str = "=== Rust Struct, Module, Crate 示例 ===";

/// Section headings, in print order.
const HEADINGS: [&str; 6] = [
    "1. 創建書籍物件 (Struct 使用)",
    "2. 使用工具模組函數 (Module 使用)",
    "3. 顧客購買流程 (Struct 互動)",
    "4. 購買記錄",
    "5. 補貨 (Catalog 操作)",
    "6. 庫存報告 (Crate 功能整合)",
];

/// Runs the demo and returns the text to print.
pub fn render(config: &DemoConfig) -> DemoResult<String> {
    let mut out = String::new();

    writeln!(out, "{}", TITLE)?;
    writeln!(out)?;

    // Step 1: books
    writeln!(out, "{}", HEADINGS[0])?;
    let mut catalog = Catalog::new();
    let book_ids: Vec<BookId> = SAMPLE_BOOKS
        .iter()
        .map(|(title, author, price, isbn)| {
            catalog.add(Book::new(*title, *author, Money::from_major(*price), *isbn))
        })
        .collect();
    for (id, book) in catalog.iter() {
        debug!(book_id = %id, isbn = %book.isbn, "Book created");
        writeln!(out, "  {}", book)?;
    }
    writeln!(out)?;
    debug!(books = catalog.len(), "Sample books created");

    // Step 2: helper functions
    writeln!(out, "{}", HEADINGS[1])?;
    for book in catalog.books() {
        let isbn_status = if validate_isbn(&book.isbn) { "有效" } else { "無效" };
        writeln!(
            out,
            "  {}: ISBN {}, 價格 {}",
            book.title,
            isbn_status,
            format_price(book.price)
        )?;
    }
    writeln!(out)?;

    // Step 3: purchases
    writeln!(out, "{}", HEADINGS[2])?;
    let mut customers: Vec<Customer> = SAMPLE_CUSTOMERS
        .iter()
        .map(|(name, email)| Customer::new(*name, *email))
        .collect();
    for &(customer_idx, book_idx) in PURCHASES {
        let customer = &mut customers[customer_idx];
        let outcome = customer.buy_book(&mut catalog, book_ids[book_idx])?;

        if outcome.is_success() {
            debug!(customer = %customer.name, book = book_idx, "Purchase completed");
        } else {
            info!(customer = %customer.name, book = book_idx, "Book already sold");
        }
        writeln!(out, "  {}", outcome)?;
    }
    writeln!(out)?;

    // Step 4: histories
    writeln!(out, "{}", HEADINGS[3])?;
    for customer in &customers {
        writeln!(out, "{}", customer.get_purchase_history(&catalog)?)?;
        let total_spent = customer.total_spent(&catalog)?;
        let last_purchase = customer.purchases().last().map(|record| record.purchased_at);
        debug!(
            customer = %customer.name,
            purchases = customer.purchase_count(),
            total_spent = %total_spent,
            last_purchase = ?last_purchase,
            "History rendered"
        );
    }

    // Step 5: restock
    writeln!(out, "{}", HEADINGS[4])?;
    let restocked = book_ids[RESTOCKED_BOOK];
    catalog.restock(restocked)?;
    writeln!(out, "  已補貨: {}", catalog.get(restocked)?.title)?;
    writeln!(out)?;

    // Step 6: report
    writeln!(out, "{}", HEADINGS[5])?;
    let report = BookReport::from_books(catalog.books());
    match config.report_format {
        ReportFormat::Text => out.push_str(&report.to_text()),
        ReportFormat::Json => writeln!(out, "{}", report.to_json()?)?,
    }
    info!(
        total = report.total,
        available = report.available,
        sold = report.sold,
        "Inventory report generated"
    );

    Ok(out)
}

//! # Validation Module
//!
//! Input validation for books.
//!
//! ## ISBN Shape Check
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "978-123-456-789-0"                                                   │
//! │       │                                                                 │
//! │       ▼  strip '-' and ' '                                              │
//! │  "9781234567890"                                                        │
//! │       │                                                                 │
//! │       ├── length not 10 or 13?          → invalid                      │
//! │       │                                                                 │
//! │       ├── any of chars[..len-1] not a digit? → invalid                 │
//! │       │                                                                 │
//! │       └── last char: NOT checked (room for a check character like 'X') │
//! │                                                                         │
//! │  No checksum is computed. This is a shape check only.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bookstore_core::validation::{check_isbn, validate_isbn};
//!
//! assert!(validate_isbn("978-123-456-789-0"));
//! assert!(!validate_isbn("123"));
//! assert!(check_isbn("123").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::ISBN_LENGTHS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// ISBN
// =============================================================================

/// Returns `true` when the ISBN has a plausible shape.
///
/// Same rule as [`check_isbn`], without the reason.
pub fn validate_isbn(isbn: &str) -> bool {
    check_isbn(isbn).is_ok()
}

/// Checks the shape of an ISBN-10 or ISBN-13.
///
/// ## Rules
/// - Hyphens and spaces are ignored
/// - Exactly 10 or 13 characters must remain
/// - Every character except the last must be a digit (see [`is_digit`])
/// - The last character is accepted unchecked
///
/// ## Example
/// ```rust
/// use bookstore_core::validation::check_isbn;
///
/// assert!(check_isbn("0-306-40615-X").is_ok());
/// assert!(check_isbn("１２３４５６７８９X").is_ok());
/// assert!(check_isbn("978 123 456 789 ?").is_ok());
/// assert!(check_isbn("A23456789X").is_err());
/// ```
pub fn check_isbn(isbn: &str) -> ValidationResult<()> {
    let cleaned: Vec<char> = isbn.chars().filter(|c| *c != '-' && *c != ' ').collect();

    if !ISBN_LENGTHS.contains(&cleaned.len()) {
        return Err(ValidationError::InvalidFormat {
            field: "isbn".to_string(),
            reason: format!(
                "must have 10 or 13 characters without hyphens and spaces, got {}",
                cleaned.len()
            ),
        });
    }

    if let Some((_, body)) = cleaned.split_last() {
        if !body.iter().copied().all(is_digit) {
            return Err(ValidationError::InvalidFormat {
                field: "isbn".to_string(),
                reason: "all characters except the last must be digits".to_string(),
            });
        }
    }

    Ok(())
}

/// Decimal digits (`Nd`) as runs of ten, followed by the other characters
/// whose Unicode numeric type is Digit (superscripts, subscripts, circled).
const DIGIT_RANGES: &[(u32, u32)] = &[
    // Nd
    (0x0030, 0x0039), (0x0660, 0x0669), (0x06F0, 0x06F9), (0x07C0, 0x07C9),
    (0x0966, 0x096F), (0x09E6, 0x09EF), (0x0A66, 0x0A6F), (0x0AE6, 0x0AEF),
    (0x0B66, 0x0B6F), (0x0BE6, 0x0BEF), (0x0C66, 0x0C6F), (0x0CE6, 0x0CEF),
    (0x0D66, 0x0D6F), (0x0DE6, 0x0DEF), (0x0E50, 0x0E59), (0x0ED0, 0x0ED9),
    (0x0F20, 0x0F29), (0x1040, 0x1049), (0x1090, 0x1099), (0x17E0, 0x17E9),
    (0x1810, 0x1819), (0x1946, 0x194F), (0x19D0, 0x19D9), (0x1A80, 0x1A89),
    (0x1A90, 0x1A99), (0x1B50, 0x1B59), (0x1BB0, 0x1BB9), (0x1C40, 0x1C49),
    (0x1C50, 0x1C59), (0xA620, 0xA629), (0xA8D0, 0xA8D9), (0xA900, 0xA909),
    (0xA9D0, 0xA9D9), (0xA9F0, 0xA9F9), (0xAA50, 0xAA59), (0xABF0, 0xABF9),
    (0xFF10, 0xFF19), (0x104A0, 0x104A9), (0x10D30, 0x10D39), (0x11066, 0x1106F),
    (0x110F0, 0x110F9), (0x11136, 0x1113F), (0x111D0, 0x111D9), (0x112F0, 0x112F9),
    (0x11450, 0x11459), (0x114D0, 0x114D9), (0x11650, 0x11659), (0x116C0, 0x116C9),
    (0x11730, 0x11739), (0x118E0, 0x118E9), (0x11950, 0x11959), (0x11C50, 0x11C59),
    (0x11D50, 0x11D59), (0x11DA0, 0x11DA9), (0x11F50, 0x11F59), (0x16A60, 0x16A69),
    (0x16AC0, 0x16AC9), (0x16B50, 0x16B59), (0x1D7CE, 0x1D7FF), (0x1E140, 0x1E149),
    (0x1E2F0, 0x1E2F9), (0x1E4F0, 0x1E4F9), (0x1E950, 0x1E959), (0x1FBF0, 0x1FBF9),
    // Other digits
    (0x00B2, 0x00B3), (0x00B9, 0x00B9), (0x2070, 0x2070), (0x2074, 0x2079),
    (0x2080, 0x2089), (0x2460, 0x2468), (0x2474, 0x247C), (0x2488, 0x2490),
    (0x24EA, 0x24EA), (0x24F5, 0x24FD), (0x24FF, 0x24FF), (0x2776, 0x277E),
    (0x2780, 0x2788), (0x278A, 0x2792), (0x1369, 0x1371), (0x19DA, 0x19DA),
    (0x10A40, 0x10A43), (0x10E60, 0x10E68), (0x11052, 0x1105A), (0x1F100, 0x1F10A),
];

/// Returns `true` for any Unicode digit: ASCII `0-9`, other scripts'
/// decimal digits (`٣`, `１`) and digit-valued marks like `²` or `①`.
///
/// Fractions (`½`) and numerals (`Ⅻ`) are not digits.
///
/// ```rust
/// use bookstore_core::validation::is_digit;
///
/// assert!(is_digit('7'));
/// assert!(is_digit('٣'));
/// assert!(!is_digit('½'));
/// ```
pub fn is_digit(c: char) -> bool {
    let code = u32::from(c);
    c.is_numeric() && DIGIT_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&code))
}

// =============================================================================
// Book Fields
// =============================================================================

/// Validates a book title.
///
/// ## Rules
/// - Must not be empty or whitespace
pub fn validate_title(title: &str) -> ValidationResult<()> {
    require_non_blank("title", title)
}

/// Validates an author name.
///
/// ## Rules
/// - Must not be empty or whitespace
pub fn validate_author(author: &str) -> ValidationResult<()> {
    require_non_blank("author", author)
}

/// Validates a book price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free books)
///
/// ## Example
/// ```rust
/// use bookstore_core::money::Money;
/// use bookstore_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_major(580)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

fn require_non_blank(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_isbn_accepts_hyphenated_isbn13() {
        assert!(validate_isbn("978-123-456-789-0"));
        assert!(validate_isbn("978-987-654-321-0"));
        assert!(validate_isbn("978-555-666-777-8"));
    }

    #[test]
    fn test_validate_isbn_rejects_wrong_length() {
        assert!(!validate_isbn("123"));
        assert!(!validate_isbn(""));
        assert!(!validate_isbn("---"));
        assert!(!validate_isbn("12345678901"));
    }

    #[test]
    fn test_validate_isbn_rejects_non_digit_body() {
        assert!(!validate_isbn("A234567890"));
        assert!(!validate_isbn("12345678X0"));
        assert!(!validate_isbn("1B3456789012X"));
    }

    #[test]
    fn test_validate_isbn_last_character_unchecked() {
        assert!(validate_isbn("123456789X"));
        assert!(validate_isbn("123456789012Z"));
        assert!(validate_isbn("978-123-456-789-#"));
    }

    #[test]
    fn test_validate_isbn_accepts_unicode_digits() {
        assert!(validate_isbn("１２３４５６７８９X"));
        assert!(validate_isbn("٩٧٨-٠٣٠٦-٤٠٦١٥-٧"));
        assert!(validate_isbn("¹²³456789X"));
    }

    #[test]
    fn test_validate_isbn_rejects_numerals_and_fractions() {
        assert!(!validate_isbn("½23456789X"));
        assert!(!validate_isbn("Ⅻ23456789X"));
        assert!(!validate_isbn("⑩23456789X"));
    }

    #[test]
    fn test_is_digit() {
        assert!(is_digit('0'));
        assert!(is_digit('９'));
        assert!(is_digit('①'));
        assert!(!is_digit('a'));
        assert!(!is_digit('-'));
    }

    #[test]
    fn test_validate_isbn_ignores_spaces() {
        assert!(validate_isbn("0 306 40615 2"));
    }

    #[test]
    fn test_check_isbn_reports_reason() {
        let err = check_isbn("123").unwrap_err();
        assert!(err.to_string().contains("got 3"));

        let err = check_isbn("12345X7890").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat {
                field: "isbn".to_string(),
                reason: "all characters except the last must be digits".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_title_and_author() {
        assert!(validate_title("機器學習入門").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_author("王五").is_ok());
        assert!(validate_author("   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_major(650)).is_ok());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }
}

//! Utility functions shared by the translators.
//!
//! - **Dates**: RFC 1123 formatting with a numeric zone, as RSS 2.0 expects
//!
//! # Examples
//!
//! ```
//! use chrono::DateTime;
//! use syndicate::util::format_rfc1123z;
//!
//! let time = DateTime::parse_from_rfc3339("2006-01-02T15:04:05-07:00").unwrap();
//! assert_eq!(format_rfc1123z(&time), "Mon, 02 Jan 2006 15:04:05 -0700");
//! ```

mod date;

pub use date::{format_first, format_rfc1123z, RFC1123Z};

/// Returns `None` for empty strings so callers can chain `Option` combinators.
pub fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

//! Display formatting and sanitization
//!
//! Everything that turns record fields into display strings lives here, so the
//! renderer never touches raw text directly.

use chrono::{DateTime, Utc};

/// Initials for an avatar badge.
///
/// Uppercased first letter of each whitespace-separated word, at most two.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Escape text for insertion into markup
pub fn escape(text: &str) -> String {
    v_htmlescape::escape(text).to_string()
}

/// Format a salary with thousands separators, e.g. `$90,000`
pub fn salary(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Format a submission time for display
pub fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

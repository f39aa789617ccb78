//! Display formatting used by the HTML templates and the admin CLI.

use chrono::{DateTime, Datelike, Utc};

use crate::domain::fixtures::DEFAULT_THUMBNAIL;

/// Formats a count with comma thousands separators, e.g. `1250` → `1,250`.
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a timestamp as a Japanese long date, e.g. `2025年6月1日`.
pub fn ja_date(at: &DateTime<Utc>) -> String {
    format!("{}年{}月{}日", at.year(), at.month(), at.day())
}

/// CSS modifier for a rank badge.
pub fn rank_badge(rank: usize) -> &'static str {
    match rank {
        1 => "gold",
        2 => "silver",
        3 => "bronze",
        _ => "blue",
    }
}

/// Returns the thumbnail URL, or the default image when it is blank.
pub fn thumbnail_or_default(thumbnail: &str) -> &str {
    if thumbnail.trim().is_empty() {
        DEFAULT_THUMBNAIL
    } else {
        thumbnail
    }
}

//! Number, duration and label formatting shared by every panel.

use crate::consts::cli_consts::display::ABBREVIATION_THRESHOLD;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Abbreviates values above 1000 as thousands with one decimal ("1.5K").
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    if value > ABBREVIATION_THRESHOLD {
        format!("{:.1}K", value / 1000.0)
    } else if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn format_count(value: u64) -> String {
    format_number(value as f64)
}

/// Rounds a percentage to an integer, e.g. `97.6` to "98%".
pub fn format_percent(value: f64) -> String {
    if !value.is_finite() {
        return "0%".to_string();
    }
    format!("{}%", value.round() as i64)
}

/// Appends a plural "s" when `count` is greater than one.
pub fn pluralize(count: u64, word: &str) -> String {
    if count > 1 {
        format!("{}s", word)
    } else {
        word.to_string()
    }
}

/// Shortens long wallet addresses to their first and last characters.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 14 {
        return address.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

/// Accepts RFC 3339 and the naive ISO forms the backend emits (read as UTC).
pub fn parse_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    let trimmed = timestamp.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
}

/// Relative age of a timestamp: "À l'instant", "N min", "N h" or "N j".
///
/// Unparseable timestamps render as an empty string.
pub fn format_time_ago(timestamp: &str, now: DateTime<Utc>) -> String {
    let Some(at) = parse_timestamp(timestamp) else {
        return String::new();
    };
    let seconds = (now - at).num_seconds();
    if seconds < 60 {
        return "À l'instant".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} h", hours);
    }
    format!("{} j", hours / 24)
}

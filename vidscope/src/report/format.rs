//! Locale-style rendering of counts, dates, and transcript lines.
//!
//! Numbers follow `en-US` grouping (`1,234,567`, at most three fraction
//! digits). Dates render as `YYYY-MM-DD` in UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use vidscope_core::TranscriptLine;

/// Placeholder for values that are present but cannot be formatted.
pub const NOT_AVAILABLE: &str = "N/A";

const MAX_FRACTION_DIGITS: usize = 3;

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Group an integer by thousands: `1234567` -> `"1,234,567"`.
#[must_use]
pub fn group_thousands(n: i128) -> String {
    let grouped = group_digits(&n.unsigned_abs().to_string());
    if n < 0 { format!("-{grouped}") } else { grouped }
}

fn format_decimal(f: f64) -> Option<String> {
    if !f.is_finite() {
        return None;
    }
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, f.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let mut out = String::new();
    if f < 0.0 && (int_part != "0" || !frac.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    Some(out)
}

fn format_number_str(s: &str) -> Option<String> {
    let s = s.trim();
    if let Ok(i) = s.parse::<i128>() {
        return Some(group_thousands(i));
    }
    s.parse::<f64>().ok().and_then(format_decimal)
}

/// Render an upstream count.
///
/// Absent, `null`, `false`, and empty-string counts render as `"0"`.
/// Numbers and numeric strings are grouped; anything else is `"N/A"`.
#[must_use]
pub fn format_count(value: Option<&Value>) -> String {
    let rendered = match value {
        None | Some(Value::Null | Value::Bool(false)) => Some("0".to_string()),
        Some(Value::String(s)) if s.is_empty() => Some("0".to_string()),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(|i| group_thousands(i128::from(i)))
            .or_else(|| n.as_u64().map(|u| group_thousands(i128::from(u))))
            .or_else(|| n.as_f64().and_then(format_decimal)),
        Some(Value::String(s)) => format_number_str(s),
        Some(_) => None,
    };
    rendered.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Render a publication date as `YYYY-MM-DD`.
///
/// Accepts RFC 3339 timestamps, naive timestamps, plain dates, and integer
/// Unix epoch seconds. Missing or unparseable values render as `"N/A"`.
#[must_use]
pub fn format_date(value: Option<&Value>) -> String {
    let date = match value {
        Some(Value::String(s)) => parse_date(s),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
            .map(|dt| dt.date_naive()),
        _ => None,
    };
    date.map_or_else(
        || NOT_AVAILABLE.to_string(),
        |d| d.format("%Y-%m-%d").to_string(),
    )
}

/// Render one transcript fragment as `(S.SSs) text`.
#[must_use]
pub fn transcript_line(line: &TranscriptLine) -> String {
    format!("({:.2}s) {}", line.start / 1000.0, line.text)
}

/// Render transcript fragments joined by newlines, in the given order.
#[must_use]
pub fn transcript_text(lines: &[TranscriptLine]) -> String {
    lines
        .iter()
        .map(transcript_line)
        .collect::<Vec<_>>()
        .join("\n")
}

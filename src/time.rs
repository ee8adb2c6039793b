//! Parsing and formatting of times
//!
//! Times are plain seconds. Elapsed times are shown as `[h:]m:ss`, times of
//! day as `HH:MM:SS`. Unrecognised input parses to `None`, which callers treat
//! as a missed split rather than an error.

use crate::types::TimeValue;

/// Shown in place of a missing time.
pub const MISSING_TIME_PLACEHOLDER: &str = "-----";

/// Shown in place of a time that data repair rejected.
pub const DUBIOUS_TIME_PLACEHOLDER: &str = "???";

/// Format an elapsed time as `[-][h:]m:ss`.
pub fn format_time(time: TimeValue) -> String {
    format_time_with_precision(time, 0)
}

/// Format an elapsed time with `precision` decimal places on the seconds.
///
/// Fractions are truncated, not rounded, so `59.99` never displays as `1:00`.
pub fn format_time_with_precision(time: TimeValue, precision: usize) -> String {
    let seconds = match time {
        TimeValue::Missing => return MISSING_TIME_PLACEHOLDER.to_string(),
        TimeValue::Dubious => return DUBIOUS_TIME_PLACEHOLDER.to_string(),
        TimeValue::Known(seconds) => seconds,
    };

    let (prefix, seconds) = if seconds < 0.0 { ("-", -seconds) } else { ("", seconds) };

    let scale = 10f64.powi(precision as i32);
    // Small epsilon so that e.g. 0.3 * 10 does not truncate to 2.
    let units = (seconds * scale + 1e-6).floor() as u64;
    let scale_units = scale as u64;
    let whole_seconds = units / scale_units;
    let fraction = units % scale_units;

    let hours = whole_seconds / 3600;
    let mins = (whole_seconds / 60) % 60;
    let secs = whole_seconds % 60;

    let mut formatted = String::from(prefix);
    if hours > 0 {
        formatted.push_str(&format!("{hours}:{mins:02}:"));
    } else {
        formatted.push_str(&format!("{mins}:"));
    }
    formatted.push_str(&format!("{secs:02}"));
    if precision > 0 {
        formatted.push_str(&format!(".{fraction:0precision$}"));
    }
    formatted
}

/// Format a number of seconds since midnight as `HH:MM:SS`.
///
/// Times past midnight wrap around to the next day.
pub fn format_time_of_day(seconds_since_midnight: f64) -> String {
    let whole = seconds_since_midnight.floor() as i64;
    let hours = whole.div_euclid(3600).rem_euclid(24);
    let mins = whole.div_euclid(60).rem_euclid(60);
    let secs = whole.rem_euclid(60);
    format!("{hours:02}:{mins:02}:{secs:02}")
}

/// Parse an elapsed time of the form `[h:]m:ss[.fff]`.
///
/// A comma is accepted as decimal separator. Returns `None` for anything that
/// does not look like a time.
pub fn parse_time(text: &str) -> Option<f64> {
    let normalized = text.trim().replace(',', ".");
    let (sign, unsigned) = match normalized.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, normalized.as_str()),
    };
    let parts: Vec<&str> = unsigned.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }

    let (seconds_part, leading) = parts.split_last()?;
    if !leading.iter().all(|part| is_unsigned_integer(part)) || !is_seconds_field(seconds_part) {
        return None;
    }

    let mut total = 0.0;
    for part in &parts {
        total = total * 60.0 + part.parse::<f64>().ok()?;
    }
    Some(sign * total)
}

/// Parse a time of day of the form `HH:MM[:SS]` into seconds since midnight.
pub fn parse_time_of_day(text: &str) -> Option<f64> {
    let parts: Vec<&str> = text.trim().split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }
    if !parts.iter().all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())) {
        return None;
    }
    if parts[1..].iter().any(|part| part.len() != 2) || parts[0].len() > 2 {
        return None;
    }

    let mut total = 0u32;
    for part in &parts {
        total = total * 60 + part.parse::<u32>().ok()?;
    }
    if parts.len() == 2 {
        total *= 60;
    }
    Some(f64::from(total))
}

fn is_unsigned_integer(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

fn is_seconds_field(part: &str) -> bool {
    let (whole, fraction) = match part.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (part, None),
    };
    let whole_ok = whole.len() == 2 && whole.bytes().all(|b| b.is_ascii_digit());
    let fraction_ok = fraction.is_none_or(|fraction| {
        (1..=10).contains(&fraction.len()) && fraction.bytes().all(|b| b.is_ascii_digit())
    });
    whole_ok && fraction_ok
}

//! Numeric helpers shared by the calculators and widgets.
//!
//! The assessment figures are presented the way a browser would present them:
//! integer parsing follows `parseInt`, rounding follows `Math.round`, and
//! display follows the en-US number locale.

use assessment_sdk::ResultKind;

/// Parses the leading integer of `text`.
///
/// Leading whitespace is skipped, one optional sign is accepted, and the
/// longest run of ASCII digits that follows is taken; trailing garbage is
/// ignored. Returns `None` when there are no digits at all.
#[must_use]
pub fn parse_integer(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: f64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Rounds half-way values towards positive infinity.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// en-US rendering: thousands separated by `,`, at most three fraction digits.
#[must_use]
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    let sign = if value.is_sign_negative() && !is_zero {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// Display string of a result's raw value.
#[must_use]
pub fn format_metric(kind: ResultKind, value: f64) -> String {
    match kind {
        ResultKind::Money => format!("${}", format_number(value)),
        ResultKind::Hours => format!("{} hours", format_number(value)),
    }
}

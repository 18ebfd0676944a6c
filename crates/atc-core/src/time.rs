//! Time codec: human time input to minutes past midnight and back.
//!
//! Tablets in the tower often expose a numeric keyboard without `:`, so the
//! parser accepts `HH:MM`, `HH.MM`, `HH MM`, and bare `HHMM` forms.

use std::sync::LazyLock;

use regex::Regex;

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: i32 = 1440;

/// Pre-compiled pattern for separated time input (`7:05`, `07.35`, `07 35`).
static SEPARATED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]?\d|2[0-3])[:.\s]([0-5]\d)$").unwrap());

/// Pre-compiled pattern for compact four-digit input (`0735`).
static COMPACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3])([0-5]\d)$").unwrap());

/// Pre-compiled pattern for "exactly four digits" used by [`normalize_time`].
static FOUR_DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}$").unwrap());

/// Parses a human time string into minutes past local midnight.
///
/// Accepts `H:MM`, `HH:MM`, `H.MM`, `HH.MM`, `H MM`, `HH MM`, and exactly
/// four digits `HHMM`, with hour 0-23 and minute 0-59. Anything else
/// (including `2400` and empty input) yields `None`; an unparsable time is
/// the one recoverable condition in this engine and is never an error.
pub fn parse_time(input: &str) -> Option<i32> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    let caps = SEPARATED_RE.captures(s).or_else(|| COMPACT_RE.captures(s))?;
    let hour: i32 = caps[1].parse().ok()?;
    let minute: i32 = caps[2].parse().ok()?;
    Some(hour * 60 + minute)
}

/// Normalizes raw time input for display and editing.
///
/// Exactly four digits gain a separator (`0735` becomes `07:35`); everything
/// else passes through trimmed. This is a convenience applied before
/// parsing, not a validation step: `9999` still normalizes to `99:99`.
#[must_use]
pub fn normalize_time(input: &str) -> String {
    let s = input.trim();
    if FOUR_DIGIT_RE.is_match(s) {
        format!("{}:{}", &s[..2], &s[2..])
    } else {
        s.to_string()
    }
}

/// Formats minutes past midnight as `HH:MM`.
///
/// The value is reduced modulo 1440 first, so negative and overflowing
/// inputs wrap into the day.
#[must_use]
pub fn format_minutes(minutes: i32) -> String {
    let m = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", m / 60, m % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_separated_forms() {
        assert_eq!(parse_time("07:35"), Some(455));
        assert_eq!(parse_time("7:05"), Some(425));
        assert_eq!(parse_time("07.35"), Some(455));
        assert_eq!(parse_time("07 35"), Some(455));
        assert_eq!(parse_time("23:59"), Some(1439));
        assert_eq!(parse_time("0:00"), Some(0));
    }

    #[test]
    fn parses_compact_form() {
        assert_eq!(parse_time("0735"), Some(455));
        assert_eq!(parse_time("0000"), Some(0));
        assert_eq!(parse_time("2359"), Some(1439));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert_eq!(parse_time("2400"), None);
        assert_eq!(parse_time("24:00"), None);
        assert_eq!(parse_time("12:60"), None);
        assert_eq!(parse_time("ab"), None);
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("   "), None);
        assert_eq!(parse_time("123"), None);
        assert_eq!(parse_time("12345"), None);
    }

    #[test]
    fn whitespace_is_trimmed_before_parsing() {
        assert_eq!(parse_time(" 07:35 "), Some(455));
    }

    #[test]
    fn normalize_inserts_separator_for_four_digits() {
        assert_eq!(normalize_time("0735"), "07:35");
        assert_eq!(normalize_time(" 0735 "), "07:35");
    }

    #[test]
    fn normalize_passes_other_input_through() {
        assert_eq!(normalize_time("7:5"), "7:5");
        assert_eq!(normalize_time("07:35"), "07:35");
        assert_eq!(normalize_time("073"), "073");
        assert_eq!(normalize_time("ab"), "ab");
    }

    #[test]
    fn format_pads_and_wraps() {
        assert_eq!(format_minutes(455), "07:35");
        assert_eq!(format_minutes(0), "00:00");
        assert_eq!(format_minutes(1439), "23:59");
        assert_eq!(format_minutes(1440), "00:00");
        assert_eq!(format_minutes(-10), "23:50");
    }

    #[test]
    fn format_parse_roundtrip_over_full_day() {
        for m in 0..MINUTES_PER_DAY {
            assert_eq!(parse_time(&format_minutes(m)), Some(m), "minute {m}");
        }
    }
}

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::FormatError;

static FREE_FORM_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([0-9]{1,2}):([0-9]{2})(\s*(AM|PM))?$")
        .expect("time pattern compiles")
});

static STORAGE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$")
        .expect("storage time pattern compiles")
});

/// Normalizes `H:MM` or `H:MM AM/PM` into 24-hour `HH:MM`.
pub fn parse_event_time(raw: &str) -> Result<String, FormatError> {
    let pattern_error = || FormatError::Pattern {
        input: raw.to_string(),
    };

    let caps = FREE_FORM_TIME_RE
        .captures(raw.trim())
        .ok_or_else(pattern_error)?;

    let mut hours = caps[1].parse::<u32>().map_err(|_| pattern_error())?;
    let minutes = caps[2].parse::<u32>().map_err(|_| pattern_error())?;

    if let Some(period) = caps.get(4) {
        let period = period.as_str().to_ascii_uppercase();
        if period == "PM" && hours < 12 {
            hours += 12;
        }
        if period == "AM" && hours == 12 {
            hours = 0;
        }
    }

    if hours > 23 || minutes > 59 {
        return Err(FormatError::OutOfRange {
            input: raw.to_string(),
        });
    }

    Ok(format!("{:02}:{:02}", hours, minutes))
}

/// Shape check applied to the stored `time` field. Only already-24-hour
/// values pass; this does not run the normalizer.
pub fn is_storage_time(value: &str) -> bool {
    STORAGE_TIME_RE.is_match(value)
}

/// Presentation form `DD.MM.YYYY`.
pub fn format_display_date(date: NaiveDate) -> String {
    format!("{:02}.{:02}.{}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_event_time_meridiem() {
        assert_eq!(parse_event_time("2:15 PM").unwrap(), "14:15");
        assert_eq!(parse_event_time("12:00 AM").unwrap(), "00:00");
        assert_eq!(parse_event_time("12:30 pm").unwrap(), "12:30");
        assert_eq!(parse_event_time("9:00AM").unwrap(), "09:00");
        assert_eq!(parse_event_time("  6:00   pm ").unwrap(), "18:00");
    }

    #[test]
    fn test_parse_event_time_24_hour() {
        assert_eq!(parse_event_time("9:05").unwrap(), "09:05");
        assert_eq!(parse_event_time("23:59").unwrap(), "23:59");
        assert_eq!(parse_event_time("00:00").unwrap(), "00:00");
        assert_eq!(parse_event_time("13:00 PM").unwrap(), "13:00");
    }

    #[test]
    fn test_parse_event_time_out_of_range() {
        assert_eq!(
            parse_event_time("25:00"),
            Err(FormatError::OutOfRange {
                input: "25:00".to_string()
            })
        );
        assert!(matches!(
            parse_event_time("10:60"),
            Err(FormatError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_event_time("11:75 PM"),
            Err(FormatError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_event_time_bad_pattern() {
        for raw in ["", "9", "9:5", "123:00", "9:00 XM", "nine o'clock", "9.30"] {
            assert!(
                matches!(
                    parse_event_time(raw),
                    Err(FormatError::Pattern { .. })
                ),
                "{raw} should not parse"
            );
        }
    }

    #[test]
    fn test_is_storage_time() {
        assert!(is_storage_time("09:00"));
        assert!(is_storage_time("9:00"));
        assert!(is_storage_time("23:59"));
        assert!(!is_storage_time("24:00"));
        assert!(!is_storage_time("9:00 AM"));
        assert!(!is_storage_time("09:60"));
    }

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

        assert_eq!(format_display_date(date), "01.02.2025");
    }
}

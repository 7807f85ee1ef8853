use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};

/// Storage and display format for day-granularity date keys, e.g. "2025-07-04".
const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Parses a day-granularity date key.
///
/// A key names a calendar day and nothing more. Parsing goes through
/// `NaiveDate`, which carries no time-of-day and no offset, so "2025-07-04"
/// is July 4 for every observer. Anything that is not a strict `YYYY-MM-DD`
/// string is rejected.
pub fn parse_date_key(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_KEY_FORMAT)
        .map_err(|_| anyhow!("Invalid date '{}' (expected YYYY-MM-DD)", input))
}

pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// The current calendar day in the user's local timezone.
///
/// Services default to this. The calculators always take the day as a
/// parameter so tests can pin it.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_key() {
        let date = parse_date_key("2025-07-04").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());

        // Whitespace around the key is tolerated
        assert_eq!(parse_date_key(" 2025-07-04 ").unwrap(), date);
    }

    #[test]
    fn test_parse_date_key_rejects_garbage() {
        assert!(parse_date_key("").is_err());
        assert!(parse_date_key("July 4, 2025").is_err());
        assert!(parse_date_key("2025-13-01").is_err());
        assert!(parse_date_key("2025-02-30").is_err());
        // Full timestamps are not date keys
        assert!(parse_date_key("2025-07-04T00:00:00Z").is_err());
    }

    #[test]
    fn test_date_key_round_trip() {
        // Parse -> format must never shift the day
        for key in ["2025-07-01", "2025-06-30", "2024-02-29", "1999-12-31"] {
            let date = parse_date_key(key).unwrap();
            assert_eq!(format_date_key(date), key);
        }
    }
}

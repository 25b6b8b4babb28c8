pub mod calc;
mod consts;
mod prelude;
mod types;

pub use calc::{
    calendar_from_julian_date, day_fraction, julian_date, julian_date_from_unix_seconds,
    modified_julian_date,
};
pub use consts::*;
pub use types::{JulianDate, ModifiedJulianDate};

use chrono::{NaiveDateTime, Timelike};
use tracing::{debug, warn};

/// Error type for Julian Date conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Input does not match the date/time pattern or names an impossible instant.
    #[error("Invalid timestamp '{input}': {reason}")]
    InvalidTimestamp { input: String, reason: String },

    /// Julian Date has no Gregorian calendar instant.
    #[error("Julian date {0} is outside the supported Gregorian range")]
    OutOfRange(f64),
}

/// Parses a `YYYY-MM-DD` date and `HH:MM:SS` time into a UTC calendar instant.
///
/// # Errors
/// Returns `ConversionError::InvalidTimestamp` if either part is malformed,
/// the date does not exist (e.g. `2024-02-30`), or the time is a leap second.
pub fn parse_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, ConversionError> {
    parse_with(date, time, TIME_FORMAT)
}

/// Like [`parse_timestamp`] but also accepts fractional seconds
/// (`HH:MM:SS.ffffff`).
///
/// # Errors
/// Same conditions as [`parse_timestamp`].
pub fn parse_timestamp_extended(date: &str, time: &str) -> Result<NaiveDateTime, ConversionError> {
    parse_with(date, time, TIME_FORMAT_EXTENDED)
}

/// chrono's `%Y` accepts signed years of any width and skips padding;
/// the fixed pattern wants a bare four-digit year.
fn check_shape(date: &str, time: &str) -> Result<(), &'static str> {
    if date.chars().chain(time.chars()).any(char::is_whitespace) {
        return Err("whitespace is not allowed");
    }
    let year_digits = date.bytes().take_while(u8::is_ascii_digit).count();
    if year_digits != YEAR_DIGITS || date.as_bytes().get(YEAR_DIGITS) != Some(&DATE_SEPARATOR) {
        return Err("year must be written as four digits");
    }
    if !time.starts_with(|c: char| c.is_ascii_digit()) {
        return Err("time must start with a digit");
    }
    Ok(())
}

fn parse_with(date: &str, time: &str, time_format: &str) -> Result<NaiveDateTime, ConversionError> {
    let input = format!("{date}{DATE_TIME_SEPARATOR}{time}");
    if let Err(reason) = check_shape(date, time) {
        return Err(ConversionError::InvalidTimestamp {
            input,
            reason: reason.to_owned(),
        });
    }
    let pattern = format!("{DATE_FORMAT}{DATE_TIME_SEPARATOR}{time_format}");

    let timestamp = match NaiveDateTime::parse_from_str(&input, &pattern) {
        Ok(timestamp) => timestamp,
        Err(e) => {
            return Err(ConversionError::InvalidTimestamp {
                input,
                reason: e.to_string(),
            });
        },
    };

    // chrono stores second 60 as 59 plus an extra second of nanoseconds
    if timestamp.nanosecond() >= 1_000_000_000 {
        return Err(ConversionError::InvalidTimestamp {
            input,
            reason: "leap seconds are not supported".to_owned(),
        });
    }

    Ok(timestamp)
}

/// Computes (JD, MJD) for an already parsed UTC instant.
pub fn convert_timestamp(timestamp: &NaiveDateTime) -> (JulianDate, ModifiedJulianDate) {
    let jd = julian_date(timestamp);
    let mjd = modified_julian_date(jd);

    if jd.get() < GREGORIAN_REFORM_JD {
        warn!(%timestamp, "timestamp precedes the Gregorian reform, result is proleptic");
    }
    debug!(%timestamp, %jd, %mjd, "converted timestamp");

    (jd, mjd)
}

/// Converts a `YYYY-MM-DD` date and `HH:MM:SS` UTC time into (JD, MJD).
///
/// # Errors
/// Returns `ConversionError::InvalidTimestamp` if the strings do not form a
/// real calendar instant.
pub fn convert(date: &str, time: &str) -> Result<(JulianDate, ModifiedJulianDate), ConversionError> {
    let timestamp = parse_timestamp(date, time)?;
    Ok(convert_timestamp(&timestamp))
}

/// Like [`convert`] but the time may carry fractional seconds.
///
/// # Errors
/// Returns `ConversionError::InvalidTimestamp` if the strings do not form a
/// real calendar instant.
pub fn convert_extended(
    date: &str,
    time: &str,
) -> Result<(JulianDate, ModifiedJulianDate), ConversionError> {
    let timestamp = parse_timestamp_extended(date, time)?;
    Ok(convert_timestamp(&timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_convert_j2000() {
        let (jd, mjd) = convert("2000-01-01", "12:00:00").unwrap();
        assert_eq!(jd.get(), 2_451_545.0);
        assert_eq!(mjd.get(), 51_544.5);
    }

    #[test]
    fn test_convert_midnight() {
        let (jd, mjd) = convert("2024-10-26", "00:00:00").unwrap();
        assert_eq!(jd.to_string(), "2460609.500000");
        assert_eq!(mjd.to_string(), "60609.000000");
    }

    #[test]
    fn test_convert_precise_time() {
        let (jd, mjd) = convert("2024-03-15", "06:30:15").unwrap();
        assert_eq!(jd.to_string(), "2460384.771007");
        assert_eq!(mjd.to_string(), "60384.271007");
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2024-03-15", "06:30:15").unwrap();
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(6, 30, 15)
            .unwrap();
        assert_eq!(ts, expected);
    }

    #[test]
    fn test_invalid_month() {
        let result = convert("2024-13-01", "00:00:00");
        assert!(matches!(result, Err(ConversionError::InvalidTimestamp { .. })));
    }

    #[test]
    fn test_invalid_day() {
        let result = convert("2024-02-30", "00:00:00");
        assert!(matches!(result, Err(ConversionError::InvalidTimestamp { .. })));

        // 2023 is not a leap year
        let result = convert("2023-02-29", "00:00:00");
        assert!(matches!(result, Err(ConversionError::InvalidTimestamp { .. })));

        assert!(convert("2024-02-29", "00:00:00").is_ok());
    }

    #[test]
    fn test_invalid_time() {
        for time in ["24:00:00", "12:60:00", "12:00:61", "noon", ""] {
            let result = convert("2024-03-15", time);
            assert!(
                matches!(result, Err(ConversionError::InvalidTimestamp { .. })),
                "time {time:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_malformed_input() {
        for date in [
            "not-a-date",
            "",
            "2024/03/15",
            "15-03-2024",
            " 2024-03-15",
            "2024-03-15 ",
            "+2024-03-15",
            "-0001-03-01",
            "12024-03-15",
            "999-03-15",
        ] {
            let result = convert(date, "00:00:00");
            assert!(
                matches!(result, Err(ConversionError::InvalidTimestamp { .. })),
                "date {date:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_padded_or_signed_time_rejected() {
        for time in [" 06:30:15", "+06:30:15", "06: 30:15"] {
            let result = convert("2024-03-15", time);
            assert!(
                matches!(result, Err(ConversionError::InvalidTimestamp { .. })),
                "time {time:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_single_digit_month_and_day_accepted() {
        assert_eq!(
            convert("2024-3-5", "06:30:15").unwrap(),
            convert("2024-03-05", "06:30:15").unwrap()
        );
        assert!(convert("0999-03-15", "00:00:00").is_ok());
    }

    #[test]
    fn test_leap_second_rejected() {
        let result = convert("2016-12-31", "23:59:60");
        match result {
            Err(ConversionError::InvalidTimestamp { input, reason }) => {
                assert_eq!(input, "2016-12-31 23:59:60");
                assert!(reason.contains("leap second"));
            },
            other => panic!("expected InvalidTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn test_strict_format_rejects_fraction() {
        let result = convert("2024-03-15", "06:30:15.5");
        assert!(matches!(result, Err(ConversionError::InvalidTimestamp { .. })));
    }

    #[test]
    fn test_extended_format() {
        let (whole, _) = convert_extended("2024-03-15", "06:30:15").unwrap();
        let (strict, _) = convert("2024-03-15", "06:30:15").unwrap();
        assert_eq!(whole, strict);

        let (half, _) = convert_extended("2024-03-15", "06:30:15.5").unwrap();
        assert!(half > whole);

        let ts = parse_timestamp_extended("2024-10-26", "23:59:59.999999").unwrap();
        assert_eq!(ts.nanosecond(), 999_999_000);
        assert!(day_fraction(&ts) < 1.0);
    }

    #[test]
    fn test_error_message() {
        let err = convert("2024-13-01", "00:00:00").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid timestamp '2024-13-01 00:00:00'"), "{message}");

        let err = ConversionError::OutOfRange(1.5);
        assert_eq!(
            err.to_string(),
            "Julian date 1.5 is outside the supported Gregorian range"
        );
    }

    #[test]
    fn test_convert_timestamp_matches_convert() {
        let ts = parse_timestamp("1999-12-31", "23:59:59").unwrap();
        assert_eq!(convert_timestamp(&ts), convert("1999-12-31", "23:59:59").unwrap());
    }

    #[test]
    fn test_pre_gregorian_is_still_computed() {
        let (jd, mjd) = convert("1000-06-01", "00:00:00").unwrap();
        assert!(jd.get() < GREGORIAN_REFORM_JD);
        assert_eq!(mjd.get(), jd.get() - MJD_OFFSET);
    }
}

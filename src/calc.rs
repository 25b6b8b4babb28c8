//! Julian Date arithmetic.
//!
//! All functions here are pure. Inputs are chrono values, which are valid
//! calendar instants by construction, so nothing is re-validated. The
//! Gregorian correction term is applied unconditionally; instants before
//! 1582-10-15 are computed on the proleptic Gregorian calendar.

use crate::ConversionError;
use crate::consts::{
    DAYS_PER_GREGORIAN_CENTURY, DAYS_PER_JULIAN_YEAR, EPOCH_ADJUSTMENT, FEBRUARY,
    GREGORIAN_CENTURY_ORIGIN, GREGORIAN_REFORM_JD, HOURS_PER_DAY, INVERSE_DAY_SHIFT,
    INVERSE_YEAR_SHIFT, JD_OF_UNIX_EPOCH, MICROSECONDS_PER_DAY, MICROSECONDS_PER_HOUR,
    MINUTES_PER_HOUR, MJD_OFFSET, MONTH_TERM, MONTHS_PER_YEAR, SECONDS_PER_DAY,
    SECONDS_PER_HOUR, YEAR_OFFSET,
};
use crate::types::{JulianDate, ModifiedJulianDate};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use tracing::trace;

/// Largest sub-second value chrono reports outside of a leap second
const MAX_NANOSECOND: u32 = 999_999_999;

/// Fraction of the UT day elapsed at `timestamp`, in `[0, 1)`.
///
/// Resolution is one microsecond. A leap second (which chrono encodes as
/// nanoseconds past 1e9) collapses onto the last microsecond of its minute.
pub fn day_fraction(timestamp: &NaiveDateTime) -> f64 {
    let microsecond = timestamp.nanosecond().min(MAX_NANOSECOND) / 1_000;
    let hours = f64::from(timestamp.hour())
        + f64::from(timestamp.minute()) / MINUTES_PER_HOUR
        + f64::from(timestamp.second()) / SECONDS_PER_HOUR
        + f64::from(microsecond) / MICROSECONDS_PER_HOUR;
    hours / HOURS_PER_DAY
}

/// Julian Date of a UTC calendar instant.
pub fn julian_date(timestamp: &NaiveDateTime) -> JulianDate {
    // January and February are months 13 and 14 of the previous year
    let (year, month) = if timestamp.month() <= FEBRUARY {
        (timestamp.year() - 1, timestamp.month() + MONTHS_PER_YEAR)
    } else {
        (timestamp.year(), timestamp.month())
    };

    // Floor division: div_euclid rounds toward -inf for a positive divisor
    let century = year.div_euclid(100);
    let correction = 2 - century + century.div_euclid(4);

    let midnight = (DAYS_PER_JULIAN_YEAR * f64::from(year + YEAR_OFFSET)).floor()
        + (MONTH_TERM * f64::from(month + 1)).floor()
        + f64::from(timestamp.day())
        + f64::from(correction)
        - EPOCH_ADJUSTMENT;
    let fraction = day_fraction(timestamp);

    trace!(year, month, correction, midnight, fraction, "julian date terms");
    JulianDate::new(midnight + fraction)
}

/// `JD - 2400000.5`
#[inline]
pub fn modified_julian_date(jd: JulianDate) -> ModifiedJulianDate {
    ModifiedJulianDate::new(jd.get() - MJD_OFFSET)
}

/// Julian Date of a Unix timestamp given in (possibly fractional) seconds.
/// Leap seconds are not counted, matching Unix time itself.
pub fn julian_date_from_unix_seconds(seconds: f64) -> JulianDate {
    JulianDate::new(JD_OF_UNIX_EPOCH + seconds / SECONDS_PER_DAY)
}

/// Calendar instant (UTC) of a Julian Date, rounded to the microsecond.
///
/// This is the inverse of [`julian_date`]. Only the Gregorian era is
/// supported.
///
/// # Errors
/// Returns `ConversionError::OutOfRange` if `jd` is not finite, precedes
/// the Gregorian reform (JD 2299160.5), or lies beyond chrono's range.
pub fn calendar_from_julian_date(jd: JulianDate) -> Result<NaiveDateTime, ConversionError> {
    let value = jd.get();
    if !value.is_finite() || value < GREGORIAN_REFORM_JD {
        return Err(ConversionError::OutOfRange(value));
    }

    let shifted = value + 0.5;
    let whole = shifted.floor();
    let fraction = shifted - whole;

    let alpha = ((whole - GREGORIAN_CENTURY_ORIGIN) / DAYS_PER_GREGORIAN_CENTURY).floor();
    let a = whole + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + INVERSE_DAY_SHIFT;
    let c = ((b - INVERSE_YEAR_SHIFT) / DAYS_PER_JULIAN_YEAR).floor();
    let d = (DAYS_PER_JULIAN_YEAR * c).floor();
    let e = ((b - d) / MONTH_TERM).floor();

    let day = b - d - (MONTH_TERM * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > f64::from(FEBRUARY) {
        c - f64::from(YEAR_OFFSET)
    } else {
        c - f64::from(YEAR_OFFSET - 1)
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let midnight = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or(ConversionError::OutOfRange(value))?;

    // A fraction that rounds up to a full day rolls over to the next midnight
    #[allow(clippy::cast_possible_truncation)]
    let micros = (fraction * MICROSECONDS_PER_DAY).round() as i64;
    midnight
        .checked_add_signed(Duration::microseconds(micros))
        .ok_or(ConversionError::OutOfRange(value))
}

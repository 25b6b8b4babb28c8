use crate::calc;
use crate::consts::MJD_OFFSET;
use crate::prelude::*;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Decimal places used when no precision is given to the formatter
const DISPLAY_PRECISION: usize = 6;

/// Days (and fractions of a day) since 4713 BC January 1, 12:00 UT.
///
/// Formats with six decimal places unless a precision is requested,
/// e.g. `format!("{jd:.2}")`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, From, Into)]
#[serde(transparent)]
pub struct JulianDate(f64);

impl JulianDate {
    pub const fn new(days: f64) -> Self {
        Self(days)
    }

    /// Returns the day count as f64
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Shifts the epoch to 1858-11-17 00:00 UT
    #[inline]
    pub fn to_modified(self) -> ModifiedJulianDate {
        calc::modified_julian_date(self)
    }
}

impl From<NaiveDateTime> for JulianDate {
    fn from(timestamp: NaiveDateTime) -> Self {
        calc::julian_date(&timestamp)
    }
}

impl From<DateTime<Utc>> for JulianDate {
    fn from(timestamp: DateTime<Utc>) -> Self {
        calc::julian_date(&timestamp.naive_utc())
    }
}

impl From<ModifiedJulianDate> for JulianDate {
    fn from(mjd: ModifiedJulianDate) -> Self {
        Self(mjd.get() + MJD_OFFSET)
    }
}

impl fmt::Display for JulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DISPLAY_PRECISION);
        write!(f, "{:.*}", precision, self.0)
    }
}

/// Days since 1858-11-17 00:00 UT, i.e. `JD - 2400000.5`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize, From, Into)]
#[serde(transparent)]
pub struct ModifiedJulianDate(f64);

impl ModifiedJulianDate {
    pub const fn new(days: f64) -> Self {
        Self(days)
    }

    /// Returns the day count as f64
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn to_julian(self) -> JulianDate {
        JulianDate::from(self)
    }
}

impl From<JulianDate> for ModifiedJulianDate {
    fn from(jd: JulianDate) -> Self {
        calc::modified_julian_date(jd)
    }
}

impl fmt::Display for ModifiedJulianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DISPLAY_PRECISION);
        write!(f, "{:.*}", precision, self.0)
    }
}

/// Offset between Julian Date and Modified Julian Date, in days
pub const MJD_OFFSET: f64 = 2_400_000.5;

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC)
pub const JD_OF_UNIX_EPOCH: f64 = 2_440_587.5;

/// Julian Date of the first Gregorian day (1582-10-15 00:00 UT).
/// The calendar correction term is only meaningful from here on.
pub const GREGORIAN_REFORM_JD: f64 = 2_299_160.5;

/// Month number for February; January and February count as months 13 and 14
/// of the preceding year in the JD formula
pub(crate) const FEBRUARY: u32 = 2;
/// Months added when shifting January/February into the previous year
pub(crate) const MONTHS_PER_YEAR: u32 = 12;

/// Mean Julian year in days
pub(crate) const DAYS_PER_JULIAN_YEAR: f64 = 365.25;
/// Mean month length used by the Meeus month term
pub(crate) const MONTH_TERM: f64 = 30.6001;
/// Year offset that keeps `year + YEAR_OFFSET` positive back to 4716 BC
pub(crate) const YEAR_OFFSET: i32 = 4716;
/// Constant folding the 4713 BC noon epoch into the midnight day number
pub(crate) const EPOCH_ADJUSTMENT: f64 = 1524.5;

// Inverse (Meeus) terms: Gregorian century count and the day shift it starts from
pub(crate) const GREGORIAN_CENTURY_ORIGIN: f64 = 1_867_216.25;
pub(crate) const DAYS_PER_GREGORIAN_CENTURY: f64 = 36_524.25;
pub(crate) const INVERSE_DAY_SHIFT: f64 = 1524.0;
pub(crate) const INVERSE_YEAR_SHIFT: f64 = 122.1;

pub const HOURS_PER_DAY: f64 = 24.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const MICROSECONDS_PER_HOUR: f64 = 3_600_000_000.0;
pub const MICROSECONDS_PER_DAY: f64 = 86_400_000_000.0;

/// Digits required in the year of a date string
pub const YEAR_DIGITS: usize = 4;
/// Separator between year, month and day
pub(crate) const DATE_SEPARATOR: u8 = b'-';

/// Date input pattern (`YYYY-MM-DD`)
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Time input pattern (`HH:MM:SS`)
pub const TIME_FORMAT: &str = "%H:%M:%S";
/// Time input pattern with optional fractional seconds (`HH:MM:SS[.ffffff]`)
pub const TIME_FORMAT_EXTENDED: &str = "%H:%M:%S%.f";
/// Separator placed between the date and time strings before parsing
pub const DATE_TIME_SEPARATOR: char = ' ';

mod consts;
mod error;
mod gregorian;
mod ordinal;
mod prelude;
mod types;
mod week;

pub use consts::*;
pub use error::{DateError, Field};
pub use gregorian::{GregorianDate, gregorian_days_in_month};
pub use ordinal::{
    DAYS_IN_4_YEARS, DAYS_IN_100_YEARS, DAYS_IN_400_YEARS, days_before_month, days_before_year,
    from_day_of_year, from_ordinal, to_ordinal,
};
pub use types::{
    Day, Month, Year, days_in_month, days_in_year, is_gregorian_leap_year, is_leap_year,
};
pub use week::{IsoWeekDate, Weekday};

use crate::prelude::*;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::{debug, trace};

/// A day in the Bangla (Bangabdo) solar calendar.
///
/// Every value is a real calendar day: the day is checked against the
/// length of its month in its year, so Falgun 30 only exists in leap
/// years. Values are immutable; `replace` returns a new validated date.
#[derive(Debug, Clone, Copy, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct BanglaDate {
    year: Year,
    month: Month,
    day: Day,
    /// `year << 16 | month << 8 | day`, packed once at construction. Orders
    /// like the `(year, month, day)` triple and feeds `Hash`.
    key: u32,
}

impl BanglaDate {
    /// Boishakh 1, 0001
    pub const MIN: Self = Self::from_typed(Year::MIN, Month::BOISHAKH, Day::FIRST);
    /// Choitro 30, 9999
    pub const MAX: Self = Self::from_typed(Year::MAX, Month::CHOITRO, Day::LAST_OF_CHOITRO);

    const fn from_typed(year: Year, month: Month, day: Day) -> Self {
        let key = ((year.get() as u32) << 16) | ((month.get() as u32) << 8) | day.get() as u32;
        Self {
            year,
            month,
            day,
            key,
        }
    }

    /// Creates a date, validating year, then month, then day.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` naming the first invalid field and its bound.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self::from_typed(year, month, day))
    }

    /// Validates fields given as wider integers, as decoded from external input.
    fn from_fields(year: i64, month: i64, day: i64) -> Result<Self, DateError> {
        let year = u16::try_from(year)
            .map_err(|_| DateError::out_of_range(Field::Year, year, MIN_YEAR, MAX_YEAR))?;
        let year = Year::new(year)?;
        let month = u8::try_from(month)
            .map_err(|_| DateError::out_of_range(Field::Month, month, 1, MAX_MONTH))?;
        let month = Month::new(month)?;
        let max_day = days_in_month(i64::from(year.get()), month.get());
        let day = u8::try_from(day)
            .map_err(|_| DateError::out_of_range(Field::Day, day, MIN_DAY, max_day))?;
        let day = Day::new(day, year, month)?;
        Ok(Self::from_typed(year, month, day))
    }

    /// Decodes an ordinal; Boishakh 1, 0001 is day 1.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if `ordinal` is outside `1..=MAX_ORDINAL`.
    pub fn from_ordinal(ordinal: u32) -> Result<Self, DateError> {
        let (year, month, day) = ordinal::from_ordinal(ordinal)?;
        Self::new(year, month, day)
    }

    /// Converts a proleptic Gregorian date.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the Gregorian fields are invalid or
    /// the date falls before Boishakh 1, 0001 (Gregorian 0594-04-14).
    pub fn from_gregorian(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::from_gregorian_date(GregorianDate::new(year, month, day)?)
    }

    /// Converts an already validated Gregorian date.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the date falls before Boishakh 1, 0001.
    pub fn from_gregorian_date(gregorian: GregorianDate) -> Result<Self, DateError> {
        let (year, month, day) = gregorian.to_bangla_fields();
        let date = Self::from_fields(year, month.into(), day.into())?;
        trace!(%gregorian, bangla = %date, "converted gregorian date");
        Ok(date)
    }

    /// The same day in the proleptic Gregorian calendar.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` for dates after Gregorian 9999-12-31
    /// (Ashwin 16, 9406 and later).
    pub fn to_gregorian(&self) -> Result<GregorianDate, DateError> {
        GregorianDate::from_ordinal(gregorian::bangla_to_gregorian_ordinal(self.to_ordinal()))
    }

    /// Returns a new date with the given fields replaced, re-validating the
    /// whole triple.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the resulting date is invalid.
    pub fn replace(
        &self,
        year: Option<u16>,
        month: Option<u8>,
        day: Option<u8>,
    ) -> Result<Self, DateError> {
        Self::new(
            year.unwrap_or_else(|| self.year()),
            month.unwrap_or_else(|| self.month()),
            day.unwrap_or_else(|| self.day()),
        )
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Whether this date's year has a 30-day Falgun
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Ordinal day number; Boishakh 1, 0001 is 1.
    pub const fn to_ordinal(&self) -> u32 {
        ordinal::to_ordinal(self.year(), self.month(), self.day())
    }

    /// 1-based day within the year
    pub const fn day_of_year(&self) -> u16 {
        days_before_month(self.year() as i64, self.month()) + self.day() as u16
    }

    pub const fn weekday(&self) -> Weekday {
        Weekday::from_ordinal(self.to_ordinal() as i64)
    }

    /// Monday is 0, Sunday is 6
    pub const fn weekday_number(&self) -> u8 {
        self.weekday().num_days_from_monday()
    }

    /// Monday is 1, Sunday is 7
    pub const fn iso_weekday(&self) -> u8 {
        self.weekday().number_from_monday()
    }

    pub fn iso_calendar(&self) -> IsoWeekDate {
        week::iso_week_date(self.year(), self.month(), self.day())
    }

    /// `YYYY-MM-DD`
    pub fn isoformat(&self) -> String {
        self.to_string()
    }

    /// C `ctime()` style rendering, e.g. `"Sun Bois  1 00:00:00 1426"`.
    pub fn ctime(&self) -> String {
        format!(
            "{} {} {:2} 00:00:00 {:04}",
            self.weekday(),
            self.month.abbreviation(),
            self.day(),
            self.year()
        )
    }

    /// Versioned binary state: `[version, year_hi, year_lo, month, day]`.
    pub const fn to_bytes(&self) -> [u8; STATE_LEN] {
        let [year_hi, year_lo] = self.year().to_be_bytes();
        [STATE_VERSION, year_hi, year_lo, self.month(), self.day()]
    }

    /// Decodes the output of [`BanglaDate::to_bytes`].
    ///
    /// # Errors
    /// Returns `DateError::TypeMismatch` for a slice of the wrong length,
    /// `DateError::UnsupportedVersion` for an unknown version, and
    /// `DateError::OutOfRange` for invalid fields.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DateError> {
        let Ok([version, year_hi, year_lo, month, day]) = <[u8; STATE_LEN]>::try_from(bytes) else {
            debug!(len = bytes.len(), "rejected binary date state");
            return Err(DateError::TypeMismatch {
                expected: "5-byte date state",
                found: format!("{} bytes", bytes.len()),
            });
        };
        if version != STATE_VERSION {
            debug!(version, "rejected binary date state");
            return Err(DateError::UnsupportedVersion(version));
        }
        Self::new(u16::from_be_bytes([year_hi, year_lo]), month, day)
    }
}

/// Splits a strict `YYYY-MM-DD` string into its numeric fields.
pub(crate) fn parse_iso_fields(s: &str) -> Result<(u16, u8, u8), DateError> {
    let invalid = || {
        debug!(input = s, "rejected isoformat string");
        DateError::InvalidFormat(s.to_owned())
    };

    let bytes = s.as_bytes();
    if bytes.len() != ISO_DATE_LEN {
        return Err(invalid());
    }
    let separator = DATE_SEPARATOR as u8;
    let well_formed = bytes.iter().enumerate().all(|(i, &b)| match i {
        4 | 7 => b == separator,
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return Err(invalid());
    }

    // All ASCII digits from here, so the numeric parses cannot fail
    let year = s[0..4].parse::<u16>().map_err(|_| invalid())?;
    let month = s[5..7].parse::<u8>().map_err(|_| invalid())?;
    let day = s[8..10].parse::<u8>().map_err(|_| invalid())?;
    Ok((year, month, day))
}

impl FromStr for BanglaDate {
    type Err = DateError;

    /// Parses exactly `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_iso_fields(s)?;
        Self::new(year, month, day)
    }
}

impl PartialEq for BanglaDate {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for BanglaDate {}

impl Hash for BanglaDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for BanglaDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BanglaDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl TryFrom<(u16, u8, u8)> for BanglaDate {
    type Error = DateError;

    fn try_from((year, month, day): (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl TryFrom<(i64, i64, i64)> for BanglaDate {
    type Error = DateError;

    fn try_from((year, month, day): (i64, i64, i64)) -> Result<Self, Self::Error> {
        Self::from_fields(year, month, day)
    }
}

impl TryFrom<GregorianDate> for BanglaDate {
    type Error = DateError;

    fn try_from(gregorian: GregorianDate) -> Result<Self, Self::Error> {
        Self::from_gregorian_date(gregorian)
    }
}

impl From<BanglaDate> for (u16, u8, u8) {
    fn from(date: BanglaDate) -> Self {
        (date.year(), date.month(), date.day())
    }
}

impl serde::Serialize for BanglaDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BanglaDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

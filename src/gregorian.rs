//! Proleptic Gregorian dates and the bridge into the Bangla calendar.
//!
//! The revised Bangla calendar starts every year on 14 April. From there
//! each Gregorian month overlaps exactly two Bangla months, and the
//! turnover day inside each Gregorian month is fixed except around the
//! leap day, which both calendars place in February.

use crate::consts::{
    BANGLA_DAY_AT_FEBRUARY_END_LEAP, BANGLA_DAY_AT_GREGORIAN_MONTH_END,
    BANGLA_DAY_AT_GREGORIAN_MONTH_START, BANGLA_DAY_AT_MARCH_START_LEAP, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_DAY_AT_BANGLA_MONTH_END, GREGORIAN_DAYS_IN_MONTH,
    GREGORIAN_ORDINAL_OFFSET, LEAP_YEAR_OFFSET, MARCH, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
    NEW_YEAR_GREGORIAN_DAY, NEW_YEAR_GREGORIAN_MONTH, NEW_YEAR_OFFSET,
};
use crate::error::{DateError, Field};
use crate::ordinal::{gregorian_days_before_year, split_cycle_ordinal};
use crate::prelude::*;
use crate::types::{is_gregorian_leap_year, is_leap_year};
use std::str::FromStr;

/// A validated date in the proleptic Gregorian calendar, years 1..=9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year:04}-{month:02}-{day:02}")]
pub struct GregorianDate {
    year: u16,
    month: u8,
    day: u8,
}

/// Number of days in Gregorian `month` of `year`.
pub const fn gregorian_days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

const fn gregorian_days_before_month(year: i64, month: u8) -> i64 {
    let mut days = 0;
    let mut m = 1;
    while m < month {
        days += gregorian_days_in_month(year, m) as i64;
        m += 1;
    }
    days
}

impl GregorianDate {
    /// Creates a new Gregorian date, validating year, month and day in that order.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` naming the first invalid field.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::out_of_range(Field::GregorianYear, year, MIN_YEAR, MAX_YEAR));
        }
        if !(1..=MAX_MONTH).contains(&month) {
            return Err(DateError::out_of_range(Field::GregorianMonth, month, 1, MAX_MONTH));
        }
        let max_day = gregorian_days_in_month(i64::from(year), month);
        if !(MIN_DAY..=max_day).contains(&day) {
            return Err(DateError::out_of_range(Field::GregorianDay, day, MIN_DAY, max_day));
        }
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        is_gregorian_leap_year(self.year as i64)
    }

    /// Proleptic Gregorian ordinal; January 1 of year 1 is day 1.
    pub const fn to_ordinal(&self) -> u32 {
        let year = self.year as i64;
        (gregorian_days_before_year(year) + gregorian_days_before_month(year, self.month))
            as u32
            + self.day as u32
    }

    /// Inverse of [`GregorianDate::to_ordinal`].
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the ordinal falls outside years 1..=9999.
    pub fn from_ordinal(ordinal: u32) -> Result<Self, DateError> {
        let (year, day_of_year) = split_cycle_ordinal(i64::from(ordinal));
        let year = u16::try_from(year)
            .ok()
            .filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
            .ok_or_else(|| DateError::out_of_range(Field::GregorianYear, year, MIN_YEAR, MAX_YEAR))?;

        let mut remaining = day_of_year;
        let mut month = 1;
        loop {
            let len = i64::from(gregorian_days_in_month(i64::from(year), month));
            if remaining <= len || month == MAX_MONTH {
                break;
            }
            remaining -= len;
            month += 1;
        }
        let day = u8::try_from(remaining)
            .map_err(|_| DateError::out_of_range(Field::GregorianDay, remaining, MIN_DAY, 31))?;
        Self::new(year, month, day)
    }

    /// Bangla `(year, month, day)` of this date, before range validation.
    ///
    /// The Bangla year can be 0 or negative for dates before 0594-04-14.
    pub(crate) fn to_bangla_fields(self) -> (i64, u8, u8) {
        let Self { year, month, day } = self;
        let before_new_year = month < NEW_YEAR_GREGORIAN_MONTH
            || (month == NEW_YEAR_GREGORIAN_MONTH && day < NEW_YEAR_GREGORIAN_DAY);
        let offset = if before_new_year { LEAP_YEAR_OFFSET } else { NEW_YEAR_OFFSET };
        let bangla_year = i64::from(year) - i64::from(offset);

        // The February/March overrides follow the Bangla year that started
        // last April, whose Falgun holds this February.
        let leap = is_leap_year(i64::from(year) - i64::from(LEAP_YEAR_OFFSET));
        let index = usize::from(month);

        if day <= GREGORIAN_DAY_AT_BANGLA_MONTH_END[index] {
            let start = if month == MARCH && leap {
                BANGLA_DAY_AT_MARCH_START_LEAP
            } else {
                BANGLA_DAY_AT_GREGORIAN_MONTH_START[index]
            };
            (bangla_year, wrap_month(month + 8), day + (start - 1))
        } else {
            let end = if month == FEBRUARY && leap {
                BANGLA_DAY_AT_FEBRUARY_END_LEAP
            } else {
                BANGLA_DAY_AT_GREGORIAN_MONTH_END[index]
            };
            let month_len = gregorian_days_in_month(i64::from(year), month);
            (bangla_year, wrap_month(month + 9), day - (month_len - end))
        }
    }
}

/// Maps `1..=24` onto `1..=12`.
const fn wrap_month(month: u8) -> u8 {
    match month % MAX_MONTH {
        0 => MAX_MONTH,
        m => m,
    }
}

/// Gregorian ordinal of the day with Bangla ordinal `ordinal`.
pub(crate) const fn bangla_to_gregorian_ordinal(ordinal: u32) -> u32 {
    ordinal + GREGORIAN_ORDINAL_OFFSET
}

impl FromStr for GregorianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = crate::parse_iso_fields(s)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

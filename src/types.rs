use crate::consts::{
    CENTURY_CYCLE, CHOITRO, DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, FALGUN, FALGUN_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, LEAP_YEAR_OFFSET, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
    MONTH_ABBREVIATIONS, MONTH_NAMES,
};
use crate::error::{DateError, Field};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A Bangla (Bangabdo) year in `MIN_YEAR..=MAX_YEAR`.
/// Backed by `NonZeroU16`, so year 0 never validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    pub const MIN: Self = Self(NonZeroU16::MIN);
    pub const MAX: Self = match NonZeroU16::new(MAX_YEAR) {
        Some(year) => Self(year),
        None => unreachable!(),
    };

    /// Creates a new Year, validating that it's in `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, DateError> {
        let out_of_range = || DateError::out_of_range(Field::Year, value, MIN_YEAR, MAX_YEAR);
        let non_zero = NonZeroU16::new(value).ok_or_else(out_of_range)?;
        if value > MAX_YEAR {
            return Err(out_of_range());
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether Falgun has 30 days in this year
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0.get() as i64)
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Bangla month, Boishakh (1) through Choitro (12).
/// Backed by `NonZeroU8`, so 0 never validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub const BOISHAKH: Self = Self(NonZeroU8::MIN);
    pub const CHOITRO: Self = match NonZeroU8::new(MAX_MONTH) {
        Some(month) => Self(month),
        None => unreachable!(),
    };

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let out_of_range = || DateError::out_of_range(Field::Month, value, 1, MAX_MONTH);
        let non_zero = NonZeroU8::new(value).ok_or_else(out_of_range)?;
        if value > MAX_MONTH {
            return Err(out_of_range());
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Full romanized name, e.g. "Boishakh"
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize]
    }

    /// Four-letter abbreviation, e.g. "Bois"
    pub const fn abbreviation(self) -> &'static str {
        MONTH_ABBREVIATIONS[self.0.get() as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of a Bangla month. `Day::new` checks it against the month's length
/// in the given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    pub const FIRST: Self = Self(NonZeroU8::MIN);
    pub(crate) const LAST_OF_CHOITRO: Self =
        match NonZeroU8::new(DAYS_IN_MONTH[CHOITRO as usize]) {
            Some(day) => Self(day),
            None => unreachable!(),
        };

    /// Creates a new Day, validating it against the length of `month` in `year`
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, DateError> {
        let max_day = days_in_month(i64::from(year.get()), month.get());
        let out_of_range = || DateError::out_of_range(Field::Day, value, MIN_DAY, max_day);
        let non_zero = NonZeroU8::new(value).ok_or_else(out_of_range)?;
        if value > max_day {
            return Err(out_of_range());
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without year/month context the longest month is the only bound
        let max_day = DAYS_IN_MONTH[1];
        let out_of_range = || DateError::out_of_range(Field::Day, value, MIN_DAY, max_day);
        let non_zero = NonZeroU8::new(value).ok_or_else(out_of_range)?;
        if value > max_day {
            return Err(out_of_range());
        }
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Proleptic Gregorian leap rule.
pub const fn is_gregorian_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Whether Bangla `year` is a leap year, i.e. Falgun has 30 days.
///
/// Falgun of year `y` contains February of Gregorian year `y + 594`, so the
/// Gregorian rule is applied to that year.
pub const fn is_leap_year(year: i64) -> bool {
    is_gregorian_leap_year(year + LEAP_YEAR_OFFSET as i64)
}

/// Number of days in `month` of Bangla `year`. Only Falgun varies.
pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FALGUN && is_leap_year(year) {
        FALGUN_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Number of days in Bangla `year`: 365 or 366.
pub const fn days_in_year(year: i64) -> u16 {
    DAYS_IN_COMMON_YEAR + is_leap_year(year) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(1426).is_ok());
        assert!(Year::new(9999).is_ok());
    }

    #[test]
    fn test_year_new_invalid_zero() {
        let result = Year::new(0);
        assert!(matches!(
            result,
            Err(DateError::OutOfRange {
                field: Field::Year,
                value: 0,
                min: 1,
                max: 9999
            })
        ));
    }

    #[test]
    fn test_year_new_invalid_too_large() {
        let result = Year::new(10000);
        assert!(matches!(
            result,
            Err(DateError::OutOfRange {
                field: Field::Year,
                value: 10000,
                ..
            })
        ));
    }

    #[test]
    fn test_year_bounds_consts() {
        assert_eq!(Year::MIN.get(), MIN_YEAR);
        assert_eq!(Year::MAX.get(), MAX_YEAR);
    }

    #[test]
    fn test_year_try_from_and_into() {
        let year: Year = 1426.try_into().unwrap();
        assert_eq!(year.get(), 1426);
        let value: u16 = year.into();
        assert_eq!(value, 1426);

        let result: Result<Year, _> = 0.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(1426).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "1426");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        let result: Result<Year, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(
            Month::new(0),
            Err(DateError::OutOfRange {
                field: Field::Month,
                value: 0,
                min: 1,
                max: 12
            })
        ));
        assert!(matches!(
            Month::new(13),
            Err(DateError::OutOfRange {
                field: Field::Month,
                value: 13,
                ..
            })
        ));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(Month::BOISHAKH.name(), "Boishakh");
        assert_eq!(Month::BOISHAKH.abbreviation(), "Bois");
        assert_eq!(Month::CHOITRO.name(), "Choitro");
        assert_eq!(Month::CHOITRO.abbreviation(), "Choi");
        assert_eq!(Month::new(11).unwrap().name(), "Falgun");
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);

        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new_valid() {
        let month = |m| Month::new(m).unwrap();
        let leap = Year::new(1426).unwrap();
        let common = Year::new(1427).unwrap();

        // Boishakh - 31 days
        assert!(Day::new(31, common, month(1)).is_ok());
        assert!(Day::new(32, common, month(1)).is_err());

        // Kartik - 30 days
        assert!(Day::new(30, common, month(7)).is_ok());
        assert!(Day::new(31, common, month(7)).is_err());

        // Falgun common year - 29 days
        assert!(Day::new(29, common, month(11)).is_ok());
        assert!(Day::new(30, common, month(11)).is_err());

        // Falgun leap year - 30 days
        assert!(Day::new(30, leap, month(11)).is_ok());
        assert!(Day::new(31, leap, month(11)).is_err());

        // Choitro is never adjusted
        assert!(Day::new(30, leap, month(12)).is_ok());
        assert!(Day::new(31, leap, month(12)).is_err());
    }

    #[test]
    fn test_day_invalid_cites_month_length() {
        let result = Day::new(30, Year::new(1427).unwrap(), Month::new(11).unwrap());
        assert_eq!(
            result,
            Err(DateError::OutOfRange {
                field: Field::Day,
                value: 30,
                min: 1,
                max: 29
            })
        );

        let result = Day::new(0, Year::new(1427).unwrap(), Month::new(1).unwrap());
        assert!(matches!(result, Err(DateError::OutOfRange { value: 0, .. })));
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Day, _> = 32.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_day_serde() {
        let day = Day::new(15, Year::new(1426).unwrap(), Month::new(8).unwrap()).unwrap();
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, "15");

        let parsed: Day = serde_json::from_str(&json).unwrap();
        assert_eq!(day, parsed);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i64,
            is_leap: bool,
        }

        let cases = [
            TestCase { year: 1406, is_leap: true },
            TestCase { year: 1422, is_leap: true },
            TestCase { year: 1306, is_leap: false },
            TestCase { year: 1426, is_leap: true },
            TestCase { year: 1427, is_leap: false },
            // 2100 is a Gregorian century without a leap day
            TestCase { year: 1506, is_leap: false },
            // 2400 is divisible by 400
            TestCase { year: 1806, is_leap: true },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Bangla year {}: expected {}",
                case.year,
                if case.is_leap { "leap year" } else { "not leap year" }
            );
        }
    }

    #[test]
    fn test_is_gregorian_leap_year() {
        assert!(is_gregorian_leap_year(2000));
        assert!(is_gregorian_leap_year(2020));
        assert!(!is_gregorian_leap_year(1900));
        assert!(!is_gregorian_leap_year(2019));
    }

    #[test]
    fn test_days_in_month_table() {
        let expected = [0, 31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 29, 30];
        for month in 1..=12 {
            assert_eq!(
                days_in_month(1427, month),
                expected[month as usize],
                "Month {month} has incorrect day count"
            );
        }
        assert_eq!(days_in_month(1426, 11), 30);
        assert_eq!(days_in_month(1426, 12), 30);
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(1426), 366);
        assert_eq!(days_in_year(1427), 365);
        let total: u16 = (1..=12).map(|m| u16::from(days_in_month(1427, m))).sum();
        assert_eq!(total, 365);
    }
}

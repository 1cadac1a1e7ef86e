//! Ordinal day numbering: Boishakh 1 of year 1 is day 1, and every later
//! day counts up by one with no gaps through Choitro 30, 9999.

use crate::consts::{
    BOISHAKH, CHOITRO, DAYS_BEFORE_MONTH, DAYS_IN_COMMON_YEAR, FALGUN,
    GREGORIAN_LEAP_YEARS_BEFORE_EPOCH, LEAP_YEAR_OFFSET, MAX_MONTH, MAX_ORDINAL, MAX_YEAR,
};
use crate::error::{DateError, Field};
use crate::types::{days_in_month, days_in_year, is_leap_year};

const COMMON_YEAR: i64 = DAYS_IN_COMMON_YEAR as i64;

/// Leap years among Gregorian years `1..=year`.
pub(crate) const fn gregorian_leap_years_through(year: i64) -> i64 {
    year / 4 - year / 100 + year / 400
}

/// Days before January 1 of proleptic Gregorian `year`.
pub(crate) const fn gregorian_days_before_year(year: i64) -> i64 {
    let y = year - 1;
    y * COMMON_YEAR + gregorian_leap_years_through(y)
}

/// Number of days before Boishakh 1 of Bangla `year`.
///
/// The leap days counted are those of Gregorian years `595..=year + 593`,
/// which is the leap count through the shifted year minus the 144 leap
/// years at or before 594.
pub const fn days_before_year(year: i64) -> i64 {
    let y = year - 1;
    y * COMMON_YEAR + gregorian_leap_years_through(y + LEAP_YEAR_OFFSET as i64)
        - GREGORIAN_LEAP_YEARS_BEFORE_EPOCH
}

/// Number of days in `year` before the first day of `month`. Only Choitro
/// sits after the leap day.
pub const fn days_before_month(year: i64, month: u8) -> u16 {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    DAYS_BEFORE_MONTH[month as usize] + (month > FALGUN && is_leap_year(year)) as u16
}

/// Days in 400 years
pub const DAYS_IN_400_YEARS: i64 = days_before_year(401);
/// Days in 100 years
pub const DAYS_IN_100_YEARS: i64 = days_before_year(101);
/// Days in 4 years
pub const DAYS_IN_4_YEARS: i64 = days_before_year(5);

// A 4-year cycle has one leap day over four common years.
const _: () = assert!(DAYS_IN_4_YEARS == 4 * COMMON_YEAR + 1);
// A 400-year cycle gains one leap day over four 100-year cycles...
const _: () = assert!(DAYS_IN_400_YEARS == 4 * DAYS_IN_100_YEARS + 1);
// ...and a 100-year cycle loses one against twenty-five 4-year cycles.
const _: () = assert!(DAYS_IN_100_YEARS == 25 * DAYS_IN_4_YEARS - 1);
// The epoch constant is the Gregorian leap count through the offset year.
const _: () = assert!(
    GREGORIAN_LEAP_YEARS_BEFORE_EPOCH == gregorian_leap_years_through(LEAP_YEAR_OFFSET as i64)
);
const _: () = assert!(
    MAX_ORDINAL as i64
        == days_before_year(MAX_YEAR as i64)
            + days_before_month(MAX_YEAR as i64, CHOITRO) as i64
            + days_in_month(MAX_YEAR as i64, CHOITRO) as i64
);

/// Days between the start of the Gregorian cycle count and Boishakh 1, 0001.
///
/// Bangla year `y` is exactly as long as Gregorian year `y + 594`, so after
/// this shift Bangla year 1 sits where Gregorian year 595 starts and the
/// 400/100/4-year cycles line up with Bangla years.
const CYCLE_SHIFT: i64 = gregorian_days_before_year(LEAP_YEAR_OFFSET as i64 + 1);

/// Ordinal of a triple without range checks. Used directly by the week
/// calculations, which step one year outside the valid range.
pub(crate) const fn ymd_to_ordinal(year: i64, month: u8, day: u8) -> i64 {
    days_before_year(year) + days_before_month(year, month) as i64 + day as i64
}

/// Ordinal of a validated `(year, month, day)` triple.
pub const fn to_ordinal(year: u16, month: u8, day: u8) -> u32 {
    debug_assert!(day != 0 && day <= days_in_month(year as i64, month));
    ymd_to_ordinal(year as i64, month, day) as u32
}

/// Splits a day count (day 1 is January 1 of year 1 in the 400-year cycle
/// layout) into a cycle year and its 1-based day of year.
pub(crate) const fn split_cycle_ordinal(ordinal: i64) -> (i64, i64) {
    let n = ordinal - 1;
    let (n400, n) = (n.div_euclid(DAYS_IN_400_YEARS), n.rem_euclid(DAYS_IN_400_YEARS));
    let (n100, n) = (n / DAYS_IN_100_YEARS, n % DAYS_IN_100_YEARS);
    let (n4, n) = (n / DAYS_IN_4_YEARS, n % DAYS_IN_4_YEARS);
    let (n1, n) = (n / COMMON_YEAR, n % COMMON_YEAR);

    let year = n400 * 400 + n100 * 100 + n4 * 4 + n1 + 1;
    // The last day of a 4-year or 400-year cycle is the leap day that the
    // divisions above carry into a fifth year or a fifth century.
    if n1 == 4 || n100 == 4 {
        return (year - 1, COMMON_YEAR + 1);
    }
    (year, n + 1)
}

/// Month and day for the `day_of_year`th day of a validated `year`.
fn month_day(year: i64, day_of_year: u16) -> (u8, u8) {
    let month = (BOISHAKH..=MAX_MONTH)
        .rev()
        .find(|&month| day_of_year > days_before_month(year, month))
        .unwrap_or(BOISHAKH);
    // At most 31
    #[allow(clippy::cast_possible_truncation)]
    let day = (day_of_year - days_before_month(year, month)) as u8;
    (month, day)
}

/// Month and day for the `day_of_year`th day of `year`.
///
/// # Errors
/// Returns `DateError::OutOfRange` if `day_of_year` is 0 or past the end of
/// the year.
pub fn from_day_of_year(year: u16, day_of_year: u16) -> Result<(u8, u8), DateError> {
    let year_len = days_in_year(i64::from(year));
    if !(1..=year_len).contains(&day_of_year) {
        return Err(DateError::out_of_range(Field::DayOfYear, day_of_year, 1, year_len));
    }
    Ok(month_day(i64::from(year), day_of_year))
}

/// Decodes an ordinal back into its `(year, month, day)` triple.
///
/// # Errors
/// Returns `DateError::OutOfRange` if `ordinal` is outside `1..=MAX_ORDINAL`.
pub fn from_ordinal(ordinal: u32) -> Result<(u16, u8, u8), DateError> {
    let out_of_range = || DateError::out_of_range(Field::Ordinal, ordinal, 1, MAX_ORDINAL);
    if !(1..=MAX_ORDINAL).contains(&ordinal) {
        return Err(out_of_range());
    }

    let (cycle_year, day_of_year) = split_cycle_ordinal(i64::from(ordinal) + CYCLE_SHIFT);
    let year =
        u16::try_from(cycle_year - i64::from(LEAP_YEAR_OFFSET)).map_err(|_| out_of_range())?;
    let day_of_year = u16::try_from(day_of_year).map_err(|_| out_of_range())?;
    let (month, day) = month_day(i64::from(year), day_of_year);
    Ok((year, month, day))
}

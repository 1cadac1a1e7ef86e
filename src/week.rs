//! Weekdays and ISO-8601 style week numbering on top of the ordinal count.
//! Ordinal 1 is a Monday.

use crate::consts::{BOISHAKH, MIN_DAY};
use crate::ordinal::ymd_to_ordinal;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

const DAYS_IN_WEEK: i64 = 7;

/// Day of the week.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Weekday {
    #[display(fmt = "Mon")]
    Monday,
    #[display(fmt = "Tue")]
    Tuesday,
    #[display(fmt = "Wed")]
    Wednesday,
    #[display(fmt = "Thu")]
    Thursday,
    #[display(fmt = "Fri")]
    Friday,
    #[display(fmt = "Sat")]
    Saturday,
    #[display(fmt = "Sun")]
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Weekday of the day numbered `ordinal`.
    pub(crate) const fn from_ordinal(ordinal: i64) -> Self {
        Self::ALL[(ordinal + 6).rem_euclid(DAYS_IN_WEEK) as usize]
    }

    /// Monday is 0, Sunday is 6.
    pub const fn num_days_from_monday(self) -> u8 {
        self as u8
    }

    /// Monday is 1, Sunday is 7.
    pub const fn number_from_monday(self) -> u8 {
        self as u8 + 1
    }
}

/// Position of a date in the ISO week calendar.
///
/// Week 1 is the Monday-to-Sunday week holding the year's first Thursday, so
/// the first days of Boishakh may belong to the last week of the previous
/// year and the last days of Choitro to week 1 of the next. `year` can
/// therefore be 0 or 10000 at the edges of the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IsoWeekDate {
    pub year: i32,
    pub week: u8,
    pub weekday: Weekday,
}

/// Ordinal of the Monday that starts week 1 of `year`.
fn week1_monday(year: i64) -> i64 {
    let first_day = ymd_to_ordinal(year, BOISHAKH, MIN_DAY);
    let first_weekday = Weekday::from_ordinal(first_day);
    let mut monday = first_day - i64::from(first_weekday.num_days_from_monday());
    if first_weekday > Weekday::Thursday {
        monday += DAYS_IN_WEEK;
    }
    monday
}

/// ISO week date of the validated `(year, month, day)` triple.
// Years stay within 0..=10000 and weeks within 0..=52
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn iso_week_date(year: u16, month: u8, day: u8) -> IsoWeekDate {
    let mut year = i64::from(year);
    let ordinal = ymd_to_ordinal(year, month, day);

    let mut monday = week1_monday(year);
    let mut week = (ordinal - monday).div_euclid(DAYS_IN_WEEK);
    if week < 0 {
        year -= 1;
        monday = week1_monday(year);
        week = (ordinal - monday).div_euclid(DAYS_IN_WEEK);
    } else if week >= 52 && ordinal >= week1_monday(year + 1) {
        year += 1;
        week = 0;
    }

    IsoWeekDate {
        year: year as i32,
        week: week as u8 + 1,
        weekday: Weekday::from_ordinal(ordinal),
    }
}

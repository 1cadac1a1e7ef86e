/// Minimum valid Bangla year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid Bangla year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (Choitro)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Boishakh, the first month of the year
pub const BOISHAKH: u8 = 1;
/// Month number for Falgun, the month that takes the leap day
pub const FALGUN: u8 = 11;
/// Month number for Choitro, the last month of the year
pub const CHOITRO: u8 = 12;

/// Days in Falgun for leap years
pub const FALGUN_DAYS_LEAP: u8 = 30;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;

/// Days in each Bangla month (index 0 is unused, months are 1-indexed)
/// Falgun shows 29 days (non-leap default, adjusted by the leap check)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Boishakh
    31, // Joishtho
    31, // Asharh
    31, // Shrabon
    31, // Bhadro
    31, // Ashwin
    30, // Kartik
    30, // Ogrohayon
    30, // Poush
    30, // Magh
    29, // Falgun (non-leap, adjusted by is_leap_year check)
    30, // Choitro
];

/// Days in the year before the first day of each month, for a common year.
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] = {
    let mut table = [0u16; 13];
    let mut month = 2;
    while month <= MAX_MONTH as usize {
        table[month] = table[month - 1] + DAYS_IN_MONTH[month - 1] as u16;
        month += 1;
    }
    table
};

/// Short month names, as printed by `ctime`
pub const MONTH_ABBREVIATIONS: [&str; 13] = [
    "", "Bois", "Jyoi", "Asha", "Shra", "Bhad", "Ashs", "Kart", "Ogro", "Pous", "Magh", "Falg",
    "Choi",
];

/// Full month names in their common romanization
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "Boishakh",
    "Joishtho",
    "Asharh",
    "Shrabon",
    "Bhadro",
    "Ashwin",
    "Kartik",
    "Ogrohayon",
    "Poush",
    "Magh",
    "Falgun",
    "Choitro",
];

/// Bangla year `y` takes its leap day from February of Gregorian year
/// `y + LEAP_YEAR_OFFSET`, the Gregorian year in which it ends.
pub const LEAP_YEAR_OFFSET: u16 = 594;

/// On and after Pohela Boishakh, the Bangla year is the Gregorian year
/// minus this offset; before it, minus `LEAP_YEAR_OFFSET`.
pub const NEW_YEAR_OFFSET: u16 = 593;

/// Gregorian leap years in `1..=LEAP_YEAR_OFFSET`. Subtracted so that
/// Bangla year 1 starts with no leap days behind it.
pub const GREGORIAN_LEAP_YEARS_BEFORE_EPOCH: i64 = 144;

/// Gregorian month of Pohela Boishakh (Bangla New Year)
pub const NEW_YEAR_GREGORIAN_MONTH: u8 = 4;
/// Gregorian day of Pohela Boishakh (Bangla New Year)
pub const NEW_YEAR_GREGORIAN_DAY: u8 = 14;

/// Ordinal of Choitro 30, 9999, the last representable date
pub const MAX_ORDINAL: u32 = 3_652_060;

/// Gregorian ordinal (0001-01-01 is 1) of the day before Boishakh 1, 0001.
/// Boishakh 1, 0001 falls on Gregorian 0594-04-14.
pub const GREGORIAN_ORDINAL_OFFSET: u32 = 216_692;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for March
pub const MARCH: u8 = 3;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each Gregorian month (index 0 unused, February non-leap)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Per Gregorian month, the last Gregorian day that still belongs to the
/// Bangla month already running when the Gregorian month starts.
pub(crate) const GREGORIAN_DAY_AT_BANGLA_MONTH_END: [u8; 13] =
    [0, 14, 13, 14, 13, 14, 14, 15, 15, 15, 16, 15, 15];

/// Per Gregorian month, the Bangla day of month on the Gregorian 1st.
/// March reads 17 in a leap year.
pub(crate) const BANGLA_DAY_AT_GREGORIAN_MONTH_START: [u8; 13] =
    [0, 17, 18, 16, 18, 18, 18, 17, 17, 17, 16, 16, 16];

/// Per Gregorian month, the Bangla day of month on the Gregorian last day.
/// February reads 16 in a leap year.
pub(crate) const BANGLA_DAY_AT_GREGORIAN_MONTH_END: [u8; 13] =
    [0, 17, 15, 17, 17, 17, 16, 16, 16, 15, 15, 15, 16];

/// Leap override of `BANGLA_DAY_AT_GREGORIAN_MONTH_START` for March
pub(crate) const BANGLA_DAY_AT_MARCH_START_LEAP: u8 = 17;
/// Leap override of `BANGLA_DAY_AT_GREGORIAN_MONTH_END` for February
pub(crate) const BANGLA_DAY_AT_FEBRUARY_END_LEAP: u8 = 16;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Length of a `YYYY-MM-DD` string
pub(crate) const ISO_DATE_LEN: usize = 10;

/// Version tag of the binary date state
pub const STATE_VERSION: u8 = 1;
/// Length in bytes of the binary date state
pub const STATE_LEN: usize = 5;

//! Error types for the bangla_date crate.

use crate::prelude::*;

/// The date component a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "ordinal")]
    Ordinal,
    #[display(fmt = "day of year")]
    DayOfYear,
    #[display(fmt = "gregorian year")]
    GregorianYear,
    #[display(fmt = "gregorian month")]
    GregorianMonth,
    #[display(fmt = "gregorian day")]
    GregorianDay,
}

/// Error type for all fallible operations in the bangla_date crate.
///
/// Every error is raised at the point of construction or parsing; no
/// value is ever left partially validated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A field lies outside its valid bound. For days, `max` is the length
    /// of the month in that particular year.
    #[error("{field} must be in {min}..={max}, got {value}")]
    OutOfRange {
        field: Field,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Input text is not a `YYYY-MM-DD` date.
    #[error("Invalid isoformat string: {0:?}")]
    InvalidFormat(String),

    /// Binary date state written by an unknown encoder version.
    #[error("unsupported date state version {0}")]
    UnsupportedVersion(u8),

    /// Input has the wrong shape for the requested conversion.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
}

impl DateError {
    pub(crate) fn out_of_range(
        field: Field,
        value: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Returns the offending field for range errors.
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::OutOfRange { field, .. } => Some(*field),
            Self::InvalidFormat(_) | Self::UnsupportedVersion(_) | Self::TypeMismatch { .. } => {
                None
            }
        }
    }
}

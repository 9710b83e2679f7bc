use std::fmt;

/// Result type for contribgrid-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A calendar date string did not match `YYYY-MM-DD`
    InvalidDate { input: String, reason: String },

    /// An encoded `yyyymm` label did not hold a valid month
    InvalidYearMonth(i32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDate { input, reason } => {
                write!(f, "Invalid date '{}': {}", input, reason)
            }
            Error::InvalidYearMonth(value) => write!(f, "Invalid year-month label: {}", value),
        }
    }
}

impl std::error::Error for Error {}

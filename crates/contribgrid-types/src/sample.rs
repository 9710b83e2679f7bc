use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Wire format of calendar dates (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Activity recorded on a single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionSample {
    pub date: NaiveDate,
    pub count: u32,
}

impl ContributionSample {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }

    /// Build a sample from an ISO 8601 calendar date string.
    pub fn parse(date: &str, count: u32) -> Result<Self> {
        let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| Error::InvalidDate {
            input: date.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(parsed, count))
    }
}

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Calendar month identity used to label and index month buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based month (January = 1)
    pub month: u32,
}

impl YearMonth {
    /// Returns `None` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Signed number of months from `origin` to `self`.
    ///
    /// `(self.year - origin.year) * 12 + (self.month - origin.month)`
    pub fn months_since(&self, origin: YearMonth) -> i64 {
        (i64::from(self.year) - i64::from(origin.year)) * 12 + i64::from(self.month)
            - i64::from(origin.month)
    }

    /// The month `n` months after `self`.
    pub fn plus_months(&self, n: u32) -> Self {
        let zero_based = i64::from(self.month - 1) + i64::from(n);
        Self {
            year: self.year + (zero_based / 12) as i32,
            month: (zero_based % 12) as u32 + 1,
        }
    }

    /// Compact integer form `yyyymm` (e.g. May 2023 → `202305`).
    pub fn encode(&self) -> i32 {
        self.year * 100 + self.month as i32
    }

    pub fn decode(value: i32) -> Result<Self> {
        let month = value.rem_euclid(100) as u32;
        let year = value.div_euclid(100);
        Self::new(year, month).ok_or(Error::InvalidYearMonth(value))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Date range covered by one fetch: `[anchor, today]`, inclusive.
///
/// The anchor is recomputed per fetch, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    pub anchor: NaiveDate,
    pub today: NaiveDate,
}

impl FetchWindow {
    /// Window of the trailing year ending on `today`.
    ///
    /// A leap day anchors on the last day of February of the previous year.
    pub fn trailing_year(today: NaiveDate) -> Self {
        let anchor = today.checked_sub_months(Months::new(12)).unwrap_or(today);
        Self { anchor, today }
    }

    pub fn anchor_month(&self) -> YearMonth {
        YearMonth::of(self.anchor)
    }

    /// RFC 3339 start instant sent as the query's `from` bound.
    pub fn from_timestamp(&self) -> String {
        format!("{}T00:00:00Z", self.anchor.format("%Y-%m-%d"))
    }

    /// RFC 3339 end instant sent as the query's `to` bound.
    pub fn to_timestamp(&self) -> String {
        format!("{}T23:59:59Z", self.today.format("%Y-%m-%d"))
    }
}

pub mod calendar;
pub mod error;
pub mod grid;
pub mod sample;

pub use calendar::{FetchWindow, YearMonth};
pub use error::{Error, Result};
pub use grid::{ContributionGrid, DAYS, MonthBucket, ROWS};
pub use sample::{ContributionSample, DATE_FORMAT};

use serde::{Deserialize, Serialize};

use crate::YearMonth;

/// Number of month buckets in the trailing window.
///
/// The anchor month and the current month are both partial, so a trailing
/// year touches 13 calendar months.
pub const ROWS: usize = 13;

/// Number of day columns (longest month).
pub const DAYS: usize = 31;

/// One grid row: the contribution counts of a single calendar month.
///
/// `None` is the no-data sentinel; `Some(0)` is a recorded day without
/// contributions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub label: YearMonth,
    days: Vec<Option<u32>>,
}

impl MonthBucket {
    pub fn new(label: YearMonth) -> Self {
        Self {
            label,
            days: vec![None; DAYS],
        }
    }

    /// Count recorded for the 1-based `day`, `None` when absent or out of range.
    pub fn day(&self, day: u32) -> Option<u32> {
        let idx = (day as usize).checked_sub(1)?;
        self.days.get(idx).copied().flatten()
    }

    /// Cells in day order (index 0 is day 1).
    pub fn days(&self) -> &[Option<u32>] {
        &self.days
    }

    fn set(&mut self, day: u32, count: u32) -> bool {
        match (day as usize)
            .checked_sub(1)
            .and_then(|idx| self.days.get_mut(idx))
        {
            Some(cell) => {
                *cell = Some(count);
                true
            }
            None => false,
        }
    }
}

/// Fixed `ROWS × DAYS` calendar of daily counts, row 0 being the anchor month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionGrid {
    buckets: Vec<MonthBucket>,
}

impl ContributionGrid {
    /// Grid with every cell set to the no-data sentinel and consecutive
    /// month labels starting at `origin`.
    pub fn empty(origin: YearMonth) -> Self {
        let buckets = (0..ROWS as u32)
            .map(|offset| MonthBucket::new(origin.plus_months(offset)))
            .collect();
        Self { buckets }
    }

    pub fn origin(&self) -> YearMonth {
        self.buckets[0].label
    }

    pub fn buckets(&self) -> &[MonthBucket] {
        &self.buckets
    }

    pub fn bucket(&self, month_index: usize) -> Option<&MonthBucket> {
        self.buckets.get(month_index)
    }

    /// Count stored at `(month_index, day)` where `day` is 1-based.
    pub fn get(&self, month_index: usize, day: u32) -> Option<u32> {
        self.bucket(month_index).and_then(|b| b.day(day))
    }

    /// Overwrite one cell. Returns `false` when the position is outside the grid.
    pub fn set(&mut self, month_index: usize, day: u32, count: u32) -> bool {
        self.buckets
            .get_mut(month_index)
            .is_some_and(|b| b.set(day, count))
    }

    /// Number of cells holding a recorded count (including zero counts).
    pub fn recorded_days(&self) -> usize {
        self.buckets
            .iter()
            .flat_map(|b| b.days.iter())
            .filter(|cell| cell.is_some())
            .count()
    }

    pub fn total(&self) -> u64 {
        self.buckets
            .iter()
            .flat_map(|b| b.days.iter())
            .filter_map(|cell| cell.map(u64::from))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn may_2023() -> YearMonth {
        YearMonth::new(2023, 5).unwrap()
    }

    #[test]
    fn test_empty_grid_shape_and_labels() {
        let grid = ContributionGrid::empty(may_2023());
        assert_eq!(grid.buckets().len(), ROWS);
        assert_eq!(grid.origin(), may_2023());
        assert_eq!(grid.bucket(12).unwrap().label, YearMonth::new(2024, 5).unwrap());
        assert!(grid.buckets().iter().all(|b| b.days().len() == DAYS));
        assert_eq!(grid.recorded_days(), 0);
    }

    #[test]
    fn test_sentinel_distinct_from_zero() {
        let mut grid = ContributionGrid::empty(may_2023());
        assert!(grid.set(0, 3, 0));
        assert_eq!(grid.get(0, 3), Some(0));
        assert_eq!(grid.get(0, 4), None);
        assert_eq!(grid.recorded_days(), 1);
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let mut grid = ContributionGrid::empty(may_2023());
        assert!(!grid.set(ROWS, 1, 1));
        assert!(!grid.set(0, 0, 1));
        assert!(!grid.set(0, DAYS as u32 + 1, 1));
        assert_eq!(grid.recorded_days(), 0);
    }

    #[test]
    fn test_total_sums_recorded_counts() {
        let mut grid = ContributionGrid::empty(may_2023());
        grid.set(0, 1, 3);
        grid.set(5, 31, 7);
        grid.set(12, 15, 0);
        assert_eq!(grid.total(), 10);
    }
}

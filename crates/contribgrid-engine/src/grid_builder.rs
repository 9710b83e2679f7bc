use chrono::{Datelike, NaiveDate};
use contribgrid_types::{ContributionGrid, ContributionSample, ROWS, YearMonth};

/// Where a sample lands relative to the window anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Inside the window: row `month_index`, 1-based `day` column.
    Cell { month_index: usize, day: u32 },
    /// Month offset outside `[0, ROWS)`; the sample is not displayed.
    OutsideWindow { month_offset: i64 },
}

/// Compute the grid position of `date` for a window anchored at `anchor`.
pub fn place(date: NaiveDate, anchor: NaiveDate) -> Placement {
    let month_offset = YearMonth::of(date).months_since(YearMonth::of(anchor));
    if (0..ROWS as i64).contains(&month_offset) {
        Placement::Cell {
            month_index: month_offset as usize,
            day: date.day(),
        }
    } else {
        Placement::OutsideWindow { month_offset }
    }
}

/// Fold samples into a fresh grid whose row 0 is the anchor's month.
///
/// Samples outside the window are dropped silently. When two samples share a
/// date the later one in `samples` wins.
pub fn build_grid(samples: &[ContributionSample], anchor: NaiveDate) -> ContributionGrid {
    let mut grid = ContributionGrid::empty(YearMonth::of(anchor));

    for sample in samples {
        if let Placement::Cell { month_index, day } = place(sample.date, anchor) {
            grid.set(month_index, day, sample.count);
        }
    }

    grid
}

//! Fixed-width text layout of a contribution grid.
//!
//! Row 0 is the day-number header; every following row is one month bucket.
//! Each cell is padded to a fixed width and terminated by `|`, so all rows of
//! a grid have the same width regardless of the counts they hold.

use contribgrid_types::{ContributionGrid, DAYS, MonthBucket};

/// Width of the month label cell (`YYYY-MM`).
pub const LABEL_WIDTH: usize = 7;

/// Width of one day cell.
pub const CELL_WIDTH: usize = 3;

pub const CELL_SEPARATOR: &str = "|";

/// Rendered in place of a day with no recorded sample.
pub const NO_DATA_GLYPH: &str = "✗";

/// Rendered for counts too wide for a day cell.
pub const OVERFLOW_TEXT: &str = "1k+";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Empty label cell of the header row
    Corner,
    DayHeader,
    Label,
    Count(u32),
    NoData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutCell {
    pub kind: CellKind,
    /// Padded cell content, without the separator
    pub text: String,
}

impl LayoutCell {
    fn corner() -> Self {
        Self {
            kind: CellKind::Corner,
            text: " ".repeat(LABEL_WIDTH),
        }
    }

    fn day_header(day: usize) -> Self {
        Self {
            kind: CellKind::DayHeader,
            text: format!("{:>width$}", day, width = CELL_WIDTH),
        }
    }

    fn label(bucket: &MonthBucket) -> Self {
        Self {
            kind: CellKind::Label,
            text: format!("{:<width$}", bucket.label.to_string(), width = LABEL_WIDTH),
        }
    }

    fn day(value: Option<u32>) -> Self {
        match value {
            Some(count) => Self {
                kind: CellKind::Count(count),
                text: format!("{:>width$}", format_count(count), width = CELL_WIDTH),
            },
            None => Self {
                kind: CellKind::NoData,
                text: format!("{:>width$}", NO_DATA_GLYPH, width = CELL_WIDTH),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRow {
    pub cells: Vec<LayoutCell>,
}

impl LayoutRow {
    pub fn to_text(&self) -> String {
        self.cells
            .iter()
            .map(|cell| format!("{}{}", cell.text, CELL_SEPARATOR))
            .collect()
    }
}

fn format_count(count: u32) -> String {
    if count >= 1000 {
        OVERFLOW_TEXT.to_string()
    } else {
        count.to_string()
    }
}

fn header_row() -> LayoutRow {
    let mut cells = Vec::with_capacity(DAYS + 1);
    cells.push(LayoutCell::corner());
    cells.extend((1..=DAYS).map(LayoutCell::day_header));
    LayoutRow { cells }
}

fn bucket_row(bucket: &MonthBucket) -> LayoutRow {
    let mut cells = Vec::with_capacity(DAYS + 1);
    cells.push(LayoutCell::label(bucket));
    cells.extend(bucket.days().iter().copied().map(LayoutCell::day));
    LayoutRow { cells }
}

/// Header row followed by one row per month bucket, oldest first.
pub fn layout(grid: &ContributionGrid) -> Vec<LayoutRow> {
    std::iter::once(header_row())
        .chain(grid.buckets().iter().map(bucket_row))
        .collect()
}

pub fn layout_text(grid: &ContributionGrid) -> Vec<String> {
    layout(grid).iter().map(LayoutRow::to_text).collect()
}

//! Contribution grid widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::layout::{CELL_SEPARATOR, CellKind, LayoutRow};

use super::{ACCENT, DIM, MUTED};

pub struct GridView<'a> {
    rows: &'a [LayoutRow],
}

impl<'a> GridView<'a> {
    pub fn new(rows: &'a [LayoutRow]) -> Self {
        Self { rows }
    }
}

fn cell_style(kind: CellKind) -> Style {
    match kind {
        CellKind::Corner | CellKind::DayHeader => Style::default().fg(MUTED),
        CellKind::Label => Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        CellKind::Count(0) => Style::default().fg(DIM),
        CellKind::Count(_) => Style::default().fg(ACCENT),
        CellKind::NoData => Style::default().fg(DIM),
    }
}

fn styled_line(row: &LayoutRow) -> Line<'_> {
    let separator = Style::default().fg(DIM);
    let spans: Vec<Span> = row
        .cells
        .iter()
        .flat_map(|cell| {
            [
                Span::styled(cell.text.as_str(), cell_style(cell.kind)),
                Span::styled(CELL_SEPARATOR, separator),
            ]
        })
        .collect();
    Line::from(spans)
}

impl<'a> Widget for GridView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self.rows.iter().map(styled_line).collect();
        Paragraph::new(lines).render(area, buf);
    }
}

//! Status bar with the current phase message and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusViewModel;

use super::{ACCENT, DIM, status_level_to_color};

pub struct StatusBarView<'a> {
    model: &'a StatusViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = status_level_to_color(self.model.level);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DIM));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(inner);

        Paragraph::new(Span::styled(
            self.model.message.as_str(),
            Style::default().fg(color),
        ))
        .render(chunks[0], buf);

        let help_line = Line::from(vec![
            Span::styled("[enter]", Style::default().fg(ACCENT)),
            Span::raw(" fetch "),
            Span::styled("[esc]", Style::default().fg(ACCENT)),
            Span::raw(" quit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}

//! Title, input line and subject line.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::ScreenViewModel;

use super::{ACCENT, DIM, MUTED};

/// Rows the input view occupies.
pub const INPUT_VIEW_HEIGHT: u16 = 5;

pub struct InputView<'a> {
    model: &'a ScreenViewModel,
}

impl<'a> InputView<'a> {
    pub fn new(model: &'a ScreenViewModel) -> Self {
        Self { model }
    }

    /// Terminal cursor position at the end of the typed text, if editable.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.model.input.enabled {
            return None;
        }
        let typed = self.model.input.text.chars().count() as u16;
        let x = area.x.saturating_add(1).saturating_add(typed);
        let max_x = area.x + area.width.saturating_sub(2);
        Some(Position::new(x.min(max_x), area.y + 2))
    }
}

impl<'a> Widget for InputView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input box
            Constraint::Length(1), // Subject
        ])
        .split(area);

        let title = Line::from(vec![
            Span::styled(
                self.model.title,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(self.model.input.hint, Style::default().fg(DIM)),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let input = &self.model.input;
        let border = if input.enabled { MUTED } else { DIM };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let content = if input.text.is_empty() {
            Span::styled(input.placeholder, Style::default().fg(DIM))
        } else {
            Span::styled(input.text.as_str(), Style::default().fg(ACCENT))
        };
        Paragraph::new(Line::from(content))
            .block(block)
            .render(chunks[1], buf);

        if let Some(subject) = &self.model.subject {
            Paragraph::new(Span::styled(subject.as_str(), Style::default().fg(MUTED)))
                .render(chunks[2], buf);
        }
    }
}

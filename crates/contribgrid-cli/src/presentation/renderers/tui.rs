//! TUI renderer
//!
//! Owns the terminal for the lifetime of the session. Each tick it draws the
//! screen built from the controller's state, forwards at most one key press,
//! then folds whatever fetch completions have arrived.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use contribgrid_runtime::{AppEvent, Controller, Flow, InputEvent};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Paragraph,
};

use crate::presentation::view_models::{ScreenViewModel, build_screen};
use crate::presentation::views::input::INPUT_VIEW_HEIGHT;
use crate::presentation::views::{DIM, GridView, InputView, StatusBarView};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Translate a terminal key event into application input.
///
/// Only presses count; releases and repeats reported by some terminals are
/// dropped.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if control => Some(InputEvent::Quit),
        KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Enter => Some(InputEvent::Submit),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Char(_) if control || key.modifiers.contains(KeyModifiers::ALT) => None,
        KeyCode::Char(c) => Some(InputEvent::Char(c)),
        _ => None,
    }
}

/// Draw one frame of `screen`.
pub fn draw(f: &mut Frame, screen: &ScreenViewModel) {
    let chunks = Layout::vertical([
        Constraint::Length(INPUT_VIEW_HEIGHT),
        Constraint::Min(0),    // Grid
        Constraint::Length(3), // Status bar
    ])
    .split(f.area());

    let input_view = InputView::new(screen);
    let cursor = input_view.cursor_position(chunks[0]);
    f.render_widget(input_view, chunks[0]);
    if let Some(position) = cursor {
        f.set_cursor_position(position);
    }

    match &screen.grid {
        Some(rows) => f.render_widget(GridView::new(rows), chunks[1]),
        None => f.render_widget(
            Paragraph::new("No contributions loaded yet").style(Style::default().fg(DIM)),
            chunks[1],
        ),
    }

    f.render_widget(StatusBarView::new(&screen.status), chunks[2]);
}

pub struct TuiRenderer {
    controller: Controller,
}

impl TuiRenderer {
    pub fn new(controller: Controller) -> Self {
        Self { controller }
    }

    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            let screen = build_screen(self.controller.state());
            terminal.draw(|f| draw(f, &screen))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(input) = map_key(key) {
                        if self.controller.dispatch(AppEvent::Input(input)) == Flow::Quit {
                            break;
                        }
                    }
                }
            }

            if self.controller.drain_completions() == Flow::Quit {
                break;
            }
        }

        tracing::debug!("event loop finished");
        Ok(())
    }
}

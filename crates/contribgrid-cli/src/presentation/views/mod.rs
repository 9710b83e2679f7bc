//! Ratatui widgets
//!
//! Each view borrows a view model and maps it to widgets. No formatting of
//! domain values happens here; colors are chosen from cell kinds and status
//! levels.

pub mod grid;
pub mod input;
pub mod status_bar;

pub use grid::GridView;
pub use input::InputView;
pub use status_bar::StatusBarView;

use ratatui::style::Color;

use crate::presentation::view_models::StatusLevel;

pub(crate) const DIM: Color = Color::Rgb(0x55, 0x55, 0x55);
pub(crate) const MUTED: Color = Color::Rgb(0xAA, 0xAA, 0xAA);
pub(crate) const ACCENT: Color = Color::Rgb(0x5A, 0xAB, 0xE8);

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => MUTED,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}

//! Presentation layer
//!
//! - `layout`: grid to fixed-width text rows (pure)
//! - `view_models`: `AppState` to screen data (pure)
//! - `views`: ratatui widgets over view models
//! - `renderers`: terminal setup and the event loop

pub mod layout;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use layout::{CellKind, LayoutCell, LayoutRow, layout, layout_text};
pub use renderers::TuiRenderer;
pub use view_models::{ScreenViewModel, StatusLevel, build_screen};

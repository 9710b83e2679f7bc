pub mod tui;

pub use tui::{TuiRenderer, draw, map_key};

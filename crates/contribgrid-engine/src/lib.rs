// Engine module - pure calendar bucketing
// This layer sits between decoded samples (types) and the runtime state machine

mod grid_builder;

pub use grid_builder::{Placement, build_grid, place};

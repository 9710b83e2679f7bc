pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod state;

pub use config::{CONFIG_ENV_VAR, Config, Settings, TOKEN_ENV_VAR, resolve_config_path};
pub use controller::{Controller, Flow};
pub use error::{Error, Result};
pub use fetch::{FetchTask, local_today};
pub use state::{
    AppEvent, AppState, Command, FetchError, FetchOutcome, InputEvent, MAX_INPUT_CHARS, Phase,
    update,
};

use std::sync::Arc;

use anyhow::Result;
use contribgrid_runtime::{
    AppEvent, Config, Controller, Flow, InputEvent, TOKEN_ENV_VAR, resolve_config_path,
};

use crate::args::Cli;
use crate::logging;
use crate::presentation::TuiRenderer;

/// Resolve credentials, then hand the terminal to the TUI.
///
/// Every configuration failure is returned before the terminal is touched.
pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_file.as_deref(), cli.log_level)?;

    // A missing .env is fine; variables already set in the environment win
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;
    let settings = config.resolve(std::env::var(TOKEN_ENV_VAR).ok(), cli.api_url)?;
    tracing::info!(
        config = %config_path.display(),
        api_url = %settings.api_url,
        timeout_secs = settings.timeout.as_secs(),
        "configuration loaded"
    );

    let client = settings.client()?;
    let mut controller = Controller::new(Arc::new(client));

    if let Some(user) = cli.user {
        if submit_initial(&mut controller, &user) == Flow::Quit {
            return Ok(());
        }
    }

    TuiRenderer::new(controller).run()
}

/// Type `user` into the input line and submit it.
fn submit_initial(controller: &mut Controller, user: &str) -> Flow {
    for c in user.chars() {
        controller.dispatch(AppEvent::Input(InputEvent::Char(c)));
    }
    controller.dispatch(AppEvent::Input(InputEvent::Submit))
}

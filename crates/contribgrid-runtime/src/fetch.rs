use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use chrono::NaiveDate;
use contribgrid_engine::build_grid;
use contribgrid_providers::{ContributionSource, ErrorKind};
use contribgrid_types::FetchWindow;

use crate::state::{AppEvent, FetchError, FetchOutcome};

/// One contribution fetch for one identifier.
///
/// Produces exactly one `FetchCompleted` message and never touches `AppState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTask {
    login: String,
}

impl FetchTask {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    /// Fetch the trailing year ending on `today` and bucket it.
    pub fn run(&self, source: &dyn ContributionSource, today: NaiveDate) -> FetchOutcome {
        let window = FetchWindow::trailing_year(today);
        tracing::info!(
            source = source.id(),
            login = %self.login,
            anchor = %window.anchor,
            "fetch started"
        );

        match source.fetch_samples(&self.login, &window) {
            Ok(samples) => {
                let grid = build_grid(&samples, window.anchor);
                tracing::info!(
                    login = %self.login,
                    samples = samples.len(),
                    recorded = grid.recorded_days(),
                    "fetch finished"
                );
                Ok(grid)
            }
            Err(err) => {
                tracing::warn!(login = %self.login, error = %err, "fetch failed");
                Err(FetchError::from(err))
            }
        }
    }

    /// Run on a worker thread and post the outcome to `tx`.
    ///
    /// `today` is read on the worker so every fetch anchors on its own start.
    /// A panicking source still yields exactly one (failed) completion.
    pub fn spawn(
        self,
        source: Arc<dyn ContributionSource>,
        tx: Sender<AppEvent>,
        today: fn() -> NaiveDate,
    ) -> JoinHandle<()> {
        thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                self.run(source.as_ref(), today())
            }));

            let outcome = result.unwrap_or_else(|payload| {
                let message = panic_message(&*payload);
                tracing::error!(login = %self.login, panic = %message, "fetch worker panicked");
                Err(FetchError::new(
                    ErrorKind::Transport,
                    format!("fetch worker panicked: {}", message),
                ))
            });
            // Receiver gone means the UI has quit
            let _ = tx.send(AppEvent::FetchCompleted(outcome));
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Local calendar date.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

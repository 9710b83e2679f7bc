use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use chrono::NaiveDate;
use contribgrid_providers::ContributionSource;

use crate::fetch::{FetchTask, local_today};
use crate::state::{AppEvent, AppState, Command, update};

/// Whether the event loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Single consumer of application events.
///
/// Folds events through [`update`], executes the resulting commands and owns
/// the completion channel fetch workers post to.
pub struct Controller {
    state: AppState,
    source: Arc<dyn ContributionSource>,
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
    today: fn() -> NaiveDate,
}

impl Controller {
    pub fn new(source: Arc<dyn ContributionSource>) -> Self {
        Self::with_clock(source, local_today)
    }

    pub fn with_clock(source: Arc<dyn ContributionSource>, today: fn() -> NaiveDate) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            state: AppState::new(),
            source,
            tx,
            rx,
            today,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, event: AppEvent) -> Flow {
        let previous = self.state.phase;
        let (next, command) = update(std::mem::take(&mut self.state), event);
        self.state = next;

        if self.state.phase != previous {
            tracing::debug!(from = ?previous, to = ?self.state.phase, "phase changed");
        }

        match command {
            Some(Command::Fetch(login)) => {
                FetchTask::new(login).spawn(Arc::clone(&self.source), self.tx.clone(), self.today);
                Flow::Continue
            }
            Some(Command::Quit) => Flow::Quit,
            None => Flow::Continue,
        }
    }

    /// Fold every completion that has already arrived, without blocking.
    pub fn drain_completions(&mut self) -> Flow {
        while let Ok(event) = self.rx.try_recv() {
            if self.dispatch(event) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }

    /// Block up to `timeout` for the next completion and fold it.
    ///
    /// Returns `false` when nothing arrived in time.
    pub fn wait_for_completion(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => {
                self.dispatch(event);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }
}

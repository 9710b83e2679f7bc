//! Application state machine.
//!
//! `update` is a pure reducer: it consumes the current state and one event and
//! returns the next state plus at most one command for the caller to execute.

use contribgrid_providers::ErrorKind;
use contribgrid_types::ContributionGrid;

/// Longest identifier the input line accepts.
pub const MAX_INPUT_CHARS: usize = 156;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingInput,
    Fetching,
    Displaying,
    Failed,
}

/// Failure reported by a fetch, kept cloneable so state stays a plain value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<contribgrid_providers::Error> for FetchError {
    fn from(err: contribgrid_providers::Error) -> Self {
        Self::new(err.kind(), err.to_string())
    }
}

pub type FetchOutcome = Result<ContributionGrid, FetchError>;

/// Terminal-independent key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Backspace,
    Submit,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Input(InputEvent),
    FetchCompleted(FetchOutcome),
}

/// Work the reducer asks the caller to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch(String),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub input: String,
    pub submitted: String,
    /// Last successfully fetched grid; `None` until the first success.
    pub grid: Option<ContributionGrid>,
    pub last_error: Option<FetchError>,
    pub phase: Phase,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the input line currently accepts edits and submits.
    pub fn accepts_input(&self) -> bool {
        self.phase != Phase::Fetching
    }
}

pub fn update(state: AppState, event: AppEvent) -> (AppState, Option<Command>) {
    match event {
        AppEvent::Input(input) => on_input(state, input),
        AppEvent::FetchCompleted(outcome) => (on_fetch_completed(state, outcome), None),
    }
}

fn on_input(mut state: AppState, input: InputEvent) -> (AppState, Option<Command>) {
    match input {
        InputEvent::Quit => (state, Some(Command::Quit)),
        _ if !state.accepts_input() => (state, None),
        InputEvent::Char(c) => {
            if !c.is_control() && state.input.chars().count() < MAX_INPUT_CHARS {
                state.input.push(c);
            }
            (state, None)
        }
        InputEvent::Backspace => {
            state.input.pop();
            (state, None)
        }
        InputEvent::Submit => {
            let identifier = state.input.trim();
            if identifier.is_empty() {
                return (state, None);
            }
            let identifier = identifier.to_string();
            let next = AppState {
                input: String::new(),
                submitted: identifier.clone(),
                phase: Phase::Fetching,
                ..state
            };
            (next, Some(Command::Fetch(identifier)))
        }
    }
}

fn on_fetch_completed(state: AppState, outcome: FetchOutcome) -> AppState {
    if state.phase != Phase::Fetching {
        return state;
    }

    match outcome {
        Ok(grid) => AppState {
            grid: Some(grid),
            last_error: None,
            phase: Phase::Displaying,
            ..state
        },
        Err(err) => AppState {
            last_error: Some(err),
            phase: Phase::Failed,
            ..state
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contribgrid_types::YearMonth;

    fn grid(month: u32) -> ContributionGrid {
        let mut grid = ContributionGrid::empty(YearMonth::new(2023, month).unwrap());
        grid.set(0, 1, month);
        grid
    }

    fn type_text(mut state: AppState, text: &str) -> AppState {
        for c in text.chars() {
            let (next, cmd) = update(state, AppEvent::Input(InputEvent::Char(c)));
            assert_eq!(cmd, None);
            state = next;
        }
        state
    }

    fn submit(state: AppState) -> (AppState, Option<Command>) {
        update(state, AppEvent::Input(InputEvent::Submit))
    }

    fn fetching(login: &str) -> AppState {
        let (state, _) = submit(type_text(AppState::new(), login));
        state
    }

    #[test]
    fn test_typing_edits_buffer_without_phase_change() {
        let state = type_text(AppState::new(), "octocatx");
        let (state, cmd) = update(state, AppEvent::Input(InputEvent::Backspace));

        assert_eq!(cmd, None);
        assert_eq!(state.input, "octocat");
        assert_eq!(state.phase, Phase::AwaitingInput);
    }

    #[test]
    fn test_backspace_on_empty_buffer() {
        let (state, cmd) = update(AppState::new(), AppEvent::Input(InputEvent::Backspace));
        assert_eq!(cmd, None);
        assert_eq!(state, AppState::new());
    }

    #[test]
    fn test_input_is_capped() {
        let long = "a".repeat(MAX_INPUT_CHARS + 10);
        let state = type_text(AppState::new(), &long);
        assert_eq!(state.input.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_control_characters_ignored() {
        let state = type_text(AppState::new(), "a\tb\u{7}");
        assert_eq!(state.input, "ab");
    }

    #[test]
    fn test_empty_submit_is_noop() {
        let (state, cmd) = submit(AppState::new());
        assert_eq!(cmd, None);
        assert_eq!(state.phase, Phase::AwaitingInput);

        let (state, cmd) = submit(type_text(AppState::new(), "   "));
        assert_eq!(cmd, None);
        assert_eq!(state.phase, Phase::AwaitingInput);
        assert_eq!(state.input, "   ");
    }

    #[test]
    fn test_submit_starts_fetch() {
        let (state, cmd) = submit(type_text(AppState::new(), " octocat "));

        assert_eq!(cmd, Some(Command::Fetch("octocat".to_string())));
        assert_eq!(state.phase, Phase::Fetching);
        assert_eq!(state.submitted, "octocat");
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_input_and_submit_suppressed_while_fetching() {
        let state = fetching("octocat");

        let (state, cmd) = update(state, AppEvent::Input(InputEvent::Char('x')));
        assert_eq!(cmd, None);
        assert!(state.input.is_empty());

        let (state, cmd) = submit(state);
        assert_eq!(cmd, None);
        assert_eq!(state.phase, Phase::Fetching);
        assert_eq!(state.submitted, "octocat");
    }

    #[test]
    fn test_success_installs_grid() {
        let mut state = fetching("octocat");
        state.last_error = Some(FetchError::new(ErrorKind::Transport, "earlier"));

        let (state, cmd) = update(state, AppEvent::FetchCompleted(Ok(grid(5))));

        assert_eq!(cmd, None);
        assert_eq!(state.phase, Phase::Displaying);
        assert_eq!(state.grid, Some(grid(5)));
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn test_failure_keeps_previous_grid() {
        let (state, _) = update(fetching("octocat"), AppEvent::FetchCompleted(Ok(grid(5))));
        let (state, cmd) = submit(type_text(state, "ghost"));
        assert_eq!(cmd, Some(Command::Fetch("ghost".to_string())));

        let err = FetchError::new(ErrorKind::Decode, "Parse error: Invalid date 'x'");
        let (state, cmd) = update(state, AppEvent::FetchCompleted(Err(err.clone())));

        assert_eq!(cmd, None);
        assert_eq!(state.phase, Phase::Failed);
        assert_eq!(state.last_error, Some(err));
        assert_eq!(state.grid, Some(grid(5)));
    }

    #[test]
    fn test_completion_ignored_when_not_fetching() {
        let idle = AppState::new();
        let (state, cmd) = update(idle.clone(), AppEvent::FetchCompleted(Ok(grid(5))));
        assert_eq!(cmd, None);
        assert_eq!(state, idle);

        let (displaying, _) = update(fetching("a"), AppEvent::FetchCompleted(Ok(grid(5))));
        let stale = FetchError::new(ErrorKind::Transport, "late");
        let (state, _) = update(displaying.clone(), AppEvent::FetchCompleted(Err(stale)));
        assert_eq!(state, displaying);
    }

    #[test]
    fn test_resubmit_after_failure() {
        let err = FetchError::new(ErrorKind::Transport, "connection refused");
        let (failed, _) = update(fetching("octocat"), AppEvent::FetchCompleted(Err(err)));
        assert!(failed.accepts_input());

        let (state, cmd) = submit(type_text(failed, "octocat"));
        assert_eq!(cmd, Some(Command::Fetch("octocat".to_string())));
        assert_eq!(state.phase, Phase::Fetching);
        assert!(state.last_error.is_some());
    }

    #[test]
    fn test_quit_from_every_phase() {
        let err = FetchError::new(ErrorKind::Response, "nope");
        let (failed, _) = update(fetching("a"), AppEvent::FetchCompleted(Err(err)));
        let (displaying, _) = update(fetching("b"), AppEvent::FetchCompleted(Ok(grid(1))));

        for state in [AppState::new(), fetching("c"), displaying, failed] {
            let before = state.clone();
            let (after, cmd) = update(state, AppEvent::Input(InputEvent::Quit));
            assert_eq!(cmd, Some(Command::Quit));
            assert_eq!(after, before);
        }
    }
}

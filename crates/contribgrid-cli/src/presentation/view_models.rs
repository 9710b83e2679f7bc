//! Screen view models
//!
//! `build_screen` is the only place that turns `AppState` into display text.
//! Views receive the result and only map it to widgets.

use contribgrid_runtime::{AppState, MAX_INPUT_CHARS, Phase};

use super::layout::{LayoutRow, layout};

pub const TITLE: &str = "GitHub Contributions";
pub const PLACEHOLDER: &str = "Enter GitHub username";
pub const QUIT_HINT: &str = "(ctrl+c to escape)";
pub const SUBJECT_PREFIX: &str = "Contributions for : ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputViewModel {
    pub text: String,
    pub placeholder: &'static str,
    pub hint: &'static str,
    pub enabled: bool,
    pub max_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusViewModel {
    pub message: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenViewModel {
    pub title: &'static str,
    pub input: InputViewModel,
    /// "Contributions for : <user>" once something has been submitted
    pub subject: Option<String>,
    pub status: StatusViewModel,
    /// Header plus one row per month; `None` before the first success
    pub grid: Option<Vec<LayoutRow>>,
}

pub fn build_screen(state: &AppState) -> ScreenViewModel {
    let subject = (!state.submitted.is_empty())
        .then(|| format!("{}{}", SUBJECT_PREFIX, state.submitted));

    ScreenViewModel {
        title: TITLE,
        input: InputViewModel {
            text: state.input.clone(),
            placeholder: PLACEHOLDER,
            hint: QUIT_HINT,
            enabled: state.accepts_input(),
            max_chars: MAX_INPUT_CHARS,
        },
        subject,
        status: build_status(state),
        grid: state.grid.as_ref().map(layout),
    }
}

fn build_status(state: &AppState) -> StatusViewModel {
    match state.phase {
        Phase::AwaitingInput => StatusViewModel {
            message: "Type a GitHub username and press Enter".to_string(),
            level: StatusLevel::Info,
        },
        Phase::Fetching => StatusViewModel {
            message: format!("Fetching contributions for {}…", state.submitted),
            level: StatusLevel::Warning,
        },
        Phase::Displaying => {
            let (days, total) = state
                .grid
                .as_ref()
                .map(|grid| (grid.recorded_days(), grid.total()))
                .unwrap_or_default();
            StatusViewModel {
                message: format!(
                    "{} {} across {} {}",
                    total,
                    plural(total, "contribution", "contributions"),
                    days,
                    plural(days as u64, "day", "days"),
                ),
                level: StatusLevel::Success,
            }
        }
        Phase::Failed => StatusViewModel {
            message: match &state.last_error {
                Some(err) => format!("Error: {}", err),
                None => "Error: fetch failed".to_string(),
            },
            level: StatusLevel::Error,
        },
    }
}

fn plural(n: u64, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contribgrid_providers::ErrorKind;
    use contribgrid_runtime::FetchError;
    use contribgrid_types::{ContributionGrid, YearMonth};

    fn grid() -> ContributionGrid {
        let mut grid = ContributionGrid::empty(YearMonth::new(2023, 5).unwrap());
        grid.set(0, 20, 3);
        grid.set(1, 1, 4);
        grid
    }

    #[test]
    fn test_initial_screen() {
        let screen = build_screen(&AppState::new());

        assert_eq!(screen.title, "GitHub Contributions");
        assert_eq!(screen.input.placeholder, "Enter GitHub username");
        assert!(screen.input.enabled);
        assert_eq!(screen.subject, None);
        assert_eq!(screen.grid, None);
        assert_eq!(screen.status.level, StatusLevel::Info);
    }

    #[test]
    fn test_fetching_disables_input() {
        let state = AppState {
            submitted: "octocat".to_string(),
            phase: Phase::Fetching,
            ..AppState::new()
        };
        let screen = build_screen(&state);

        assert!(!screen.input.enabled);
        assert_eq!(screen.subject.as_deref(), Some("Contributions for : octocat"));
        assert_eq!(screen.status.message, "Fetching contributions for octocat…");
    }

    #[test]
    fn test_displaying_reports_totals() {
        let state = AppState {
            submitted: "octocat".to_string(),
            grid: Some(grid()),
            phase: Phase::Displaying,
            ..AppState::new()
        };
        let screen = build_screen(&state);

        assert_eq!(screen.status.message, "7 contributions across 2 days");
        assert_eq!(screen.status.level, StatusLevel::Success);
        assert_eq!(screen.grid.map(|rows| rows.len()), Some(14));
    }

    #[test]
    fn test_displaying_singular_units() {
        let mut single = ContributionGrid::empty(YearMonth::new(2023, 5).unwrap());
        single.set(0, 20, 1);
        let state = AppState {
            submitted: "octocat".to_string(),
            grid: Some(single),
            phase: Phase::Displaying,
            ..AppState::new()
        };

        assert_eq!(
            build_screen(&state).status.message,
            "1 contribution across 1 day"
        );
    }

    #[test]
    fn test_failed_keeps_previous_grid() {
        let state = AppState {
            submitted: "ghost".to_string(),
            grid: Some(grid()),
            last_error: Some(FetchError::new(
                ErrorKind::Response,
                "User not found: ghost",
            )),
            phase: Phase::Failed,
            ..AppState::new()
        };
        let screen = build_screen(&state);

        assert!(screen.input.enabled);
        assert_eq!(screen.status.message, "Error: User not found: ghost");
        assert_eq!(screen.status.level, StatusLevel::Error);
        assert!(screen.grid.is_some());
    }
}

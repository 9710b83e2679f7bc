use contribgrid_types::{ContributionSample, FetchWindow};

use crate::Result;

/// Source of daily contribution counts
///
/// Responsibilities:
/// - Issue exactly one request for `login` covering `window`
/// - Decode the response into a flat sample list
///
/// Implementations block the calling thread; callers run them off the UI loop.
pub trait ContributionSource: Send + Sync {
    /// Short identifier used in logs (e.g., "github")
    fn id(&self) -> &'static str;

    /// Fetch every day the API reports for `login` inside `window`
    fn fetch_samples(&self, login: &str, window: &FetchWindow) -> Result<Vec<ContributionSample>>;
}

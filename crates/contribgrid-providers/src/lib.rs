pub mod error;
pub mod github;
pub mod traits;

pub use error::{Error, ErrorKind, Result};
pub use github::{DEFAULT_GITHUB_GRAPHQL_URL, GitHubClient, GitHubConfig};
pub use traits::ContributionSource;

//! GitHub GraphQL contribution calendar.

mod client;
mod mapper;
mod schema;

pub use client::{DEFAULT_GITHUB_GRAPHQL_URL, GitHubClient, GitHubConfig};
pub use mapper::{map_response, status_message};

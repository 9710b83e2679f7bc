use std::time::Duration;

use contribgrid_types::{ContributionSample, FetchWindow};
use reqwest::Client;
use reqwest::header::{ACCEPT, USER_AGENT};

use super::mapper::{map_response, status_message};
use super::schema::{CONTRIBUTIONS_QUERY, GraphQlRequest, QueryVariables};
use crate::traits::ContributionSource;
use crate::{Error, Result};

pub const DEFAULT_GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

const DEFAULT_USER_AGENT: &str = concat!("contribgrid/", env!("CARGO_PKG_VERSION"));

/// Transport configuration for GitHub GraphQL requests.
#[derive(Clone)]
pub struct GitHubConfig {
    /// Personal access token sent as a bearer credential.
    pub token: String,
    /// GraphQL endpoint.
    pub api_url: String,
    /// Optional request timeout.
    pub timeout: Option<Duration>,
}

impl GitHubConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: DEFAULT_GITHUB_GRAPHQL_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl std::fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[derive(Debug)]
pub struct GitHubClient {
    http: Client,
    config: GitHubConfig,
}

impl GitHubClient {
    pub fn new(config: GitHubConfig) -> Result<Self> {
        // Each fetch drives its own short-lived runtime; pooled connections
        // would outlive it.
        let mut builder = Client::builder().pool_max_idle_per_host(0);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    pub fn build_request(&self, login: &str, window: &FetchWindow) -> reqwest::RequestBuilder {
        let body = GraphQlRequest {
            query: CONTRIBUTIONS_QUERY,
            variables: QueryVariables {
                login,
                from: window.from_timestamp(),
                to: window.to_timestamp(),
            },
        };

        self.http
            .post(&self.config.api_url)
            .bearer_auth(self.config.token.trim())
            .header(USER_AGENT, DEFAULT_USER_AGENT)
            .header(ACCEPT, "application/json")
            .json(&body)
    }

    pub async fn fetch(&self, login: &str, window: &FetchWindow) -> Result<Vec<ContributionSample>> {
        tracing::debug!(login, from = %window.anchor, to = %window.today, "sending contributions query");

        let response = self.build_request(login, window).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(login, status = status.as_u16(), "contributions query rejected");
            return Err(Error::Status {
                status: status.as_u16(),
                message: status_message(status, &body),
            });
        }

        let samples = map_response(&body, login)?;
        tracing::debug!(login, days = samples.len(), "contributions decoded");
        Ok(samples)
    }
}

impl ContributionSource for GitHubClient {
    fn id(&self) -> &'static str {
        "github"
    }

    fn fetch_samples(&self, login: &str, window: &FetchWindow) -> Result<Vec<ContributionSample>> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(Error::Runtime)?;

        runtime.block_on(self.fetch(login, window))
    }
}

use serde::{Deserialize, Serialize};

/// Calendar query; the window is passed through variables, never interpolated.
pub(crate) const CONTRIBUTIONS_QUERY: &str = "query($login: String!, $from: DateTime!, $to: DateTime!) { \
user(login: $login) { contributionsCollection(from: $from, to: $to) { \
contributionCalendar { weeks { contributionDays { date contributionCount } } } } } }";

#[derive(Debug, Serialize, Clone)]
pub(crate) struct GraphQlRequest<'a> {
    pub query: &'static str,
    pub variables: QueryVariables<'a>,
}

#[derive(Debug, Serialize, Clone)]
pub(crate) struct QueryVariables<'a> {
    pub login: &'a str,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<ResponseData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct ResponseData {
    pub user: Option<User>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct User {
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContributionsCollection {
    pub contribution_calendar: ContributionCalendar,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct ContributionCalendar {
    #[serde(default)]
    pub weeks: Vec<Week>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Week {
    #[serde(default)]
    pub contribution_days: Vec<ContributionDay>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ContributionDay {
    pub date: String,
    pub contribution_count: u32,
}

/// Body GitHub returns with non-success statuses (e.g. `{"message": "Bad credentials"}`)
#[derive(Debug, Deserialize, Clone)]
pub(crate) struct ErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
}

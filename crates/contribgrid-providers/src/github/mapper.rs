use contribgrid_types::ContributionSample;

use super::schema::{ErrorPayload, GraphQlResponse};
use crate::{Error, Result};

/// Decode a GraphQL response body into a flat, date-ordered sample list.
///
/// GraphQL-level errors win over partial data; a `null` user means the login
/// does not exist.
pub fn map_response(body: &str, login: &str) -> Result<Vec<ContributionSample>> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    if !response.errors.is_empty() {
        return Err(Error::GraphQl(
            response.errors.into_iter().map(|e| e.message).collect(),
        ));
    }

    let Some(user) = response.data.and_then(|data| data.user) else {
        return Err(Error::UserNotFound(login.to_string()));
    };

    user.contributions_collection
        .contribution_calendar
        .weeks
        .iter()
        .flat_map(|week| week.contribution_days.iter())
        .map(|day| {
            ContributionSample::parse(&day.date, day.contribution_count).map_err(Error::from)
        })
        .collect()
}

/// Human-readable message for a non-success response.
pub fn status_message(status: reqwest::StatusCode, body: &str) -> String {
    let parsed = serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.message)
        .filter(|message| !message.trim().is_empty());

    match parsed {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_map_response_flattens_weeks() {
        let body = r#"{"data":{"user":{"contributionsCollection":{"contributionCalendar":{"weeks":[
            {"contributionDays":[{"date":"2023-05-20","contributionCount":1},{"date":"2023-05-21","contributionCount":0}]},
            {"contributionDays":[{"date":"2023-05-22","contributionCount":5}]}
        ]}}}}}"#;

        let samples = map_response(body, "octocat").unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[2], ContributionSample::parse("2023-05-22", 5).unwrap());
    }

    #[test]
    fn test_map_response_null_user() {
        let err = map_response(r#"{"data":{"user":null}}"#, "ghost").unwrap_err();
        assert!(matches!(&err, Error::UserNotFound(login) if login == "ghost"));
        assert_eq!(err.kind(), ErrorKind::Response);
    }

    #[test]
    fn test_map_response_graphql_errors() {
        let body = r#"{"data":{"user":null},"errors":[{"type":"NOT_FOUND","message":"Could not resolve to a User with the login of 'ghost'."}]}"#;
        let err = map_response(body, "ghost").unwrap_err();
        assert_eq!(
            err.to_string(),
            "GraphQL error: Could not resolve to a User with the login of 'ghost'."
        );
        assert_eq!(err.kind(), ErrorKind::Response);
    }

    #[test]
    fn test_map_response_malformed_date() {
        let body = r#"{"data":{"user":{"contributionsCollection":{"contributionCalendar":{"weeks":[
            {"contributionDays":[{"date":"2023-05-20","contributionCount":1},{"date":"20-05-2023","contributionCount":2}]}
        ]}}}}}"#;

        let err = map_response(body, "octocat").unwrap_err();
        assert!(matches!(err, Error::Date(_)));
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_map_response_malformed_json() {
        let err = map_response("<html>oops</html>", "octocat").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_map_response_negative_count_is_decode_error() {
        let body = r#"{"data":{"user":{"contributionsCollection":{"contributionCalendar":{"weeks":[
            {"contributionDays":[{"date":"2023-05-20","contributionCount":-1}]}
        ]}}}}}"#;
        assert_eq!(
            map_response(body, "octocat").unwrap_err().kind(),
            ErrorKind::Decode
        );
    }

    #[test]
    fn test_status_message_prefers_payload_message() {
        let status = reqwest::StatusCode::UNAUTHORIZED;
        assert_eq!(
            status_message(status, r#"{"message":"Bad credentials","documentation_url":"https://docs.github.com"}"#),
            "Bad credentials"
        );
        assert_eq!(status_message(status, "  plain text  "), "plain text");
        assert_eq!(status_message(status, ""), "Unauthorized");
    }
}

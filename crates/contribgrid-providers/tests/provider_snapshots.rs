use contribgrid_providers::github::map_response;
use std::fs;
use std::path::Path;

fn load_sample(name: &str) -> String {
    let path = Path::new("tests/samples").join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read sample: {}", path.display()))
}

#[test]
fn test_github_calendar_decodes_to_samples() {
    let body = load_sample("octocat_contributions.json");

    let samples = map_response(&body, "octocat").expect("decode");

    insta::assert_json_snapshot!(samples, @r#"
    [
      {
        "date": "2023-05-20",
        "count": 0
      },
      {
        "date": "2023-05-21",
        "count": 3
      },
      {
        "date": "2023-05-22",
        "count": 12
      }
    ]
    "#);
}

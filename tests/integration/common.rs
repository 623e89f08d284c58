use cf_crawler::config::{Config, OutputConfig, RemoteConfig};
use serde_json::{json, Value};
use std::path::Path;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const HANDLE: &str = "tourist";

/// Creates a test configuration pointed at a mock server
pub fn create_test_config(base_url: &str, solutions_dir: &Path) -> Config {
    Config {
        remote: RemoteConfig {
            base_url: base_url.to_string(),
        },
        output: OutputConfig {
            solutions_dir: Some(solutions_dir.to_path_buf()),
        },
        ..Config::default()
    }
}

/// One `user.status` result entry
pub fn api_entry(id: u64, contest_id: u64, index: &str, language: &str, verdict: &str) -> Value {
    json!({
        "id": id,
        "contestId": contest_id,
        "creationTimeSeconds": 1_584_000_000u64 + id,
        "problem": { "contestId": contest_id, "index": index, "name": format!("Problem {}", index) },
        "author": { "members": [ { "handle": HANDLE } ] },
        "programmingLanguage": language,
        "verdict": verdict,
        "passedTestCount": 10,
    })
}

/// Renders a public submission page around already-escaped source text
pub fn submission_page(escaped_source: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Submission - Codeforces</title></head>
<body>
<div class="roundbox">
<pre id="program-source-text" class="prettyprint lang-cpp linenums program-source" style="padding: 0.5em;">{}</pre>
</div>
</body>
</html>"#,
        escaped_source
    )
}

/// Mounts the submission list for `HANDLE`
pub async fn mount_submission_list(server: &MockServer, entries: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/api/user.status"))
        .and(query_param("handle", HANDLE))
        .and(query_param("from", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "result": entries,
        })))
        .mount(server)
        .await;
}

/// Mounts a submission page returning `response`
pub async fn mount_submission_page(
    server: &MockServer,
    contest_id: u64,
    submission_id: u64,
    response: ResponseTemplate,
) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/contest/{}/submission/{}",
            contest_id, submission_id
        )))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

use crate::common::*;
use cf_crawler::crawler::Coordinator;
use std::fs;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_full_crawl_writes_one_file_per_problem() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    // Most recent first: the second OK for 1325A must be ignored
    mount_submission_list(
        &mock_server,
        vec![
            api_entry(5, 1325, "A", "GNU C++17 (64)", "OK"),
            api_entry(4, 1325, "B", "GNU C++17 (64)", "WRONG_ANSWER"),
            api_entry(3, 1325, "A", "GNU C++17 (64)", "OK"),
            api_entry(2, 1324, "C", "PyPy 3", "OK"),
            api_entry(1, 1324, "D", "Java 11", "COMPILATION_ERROR"),
        ],
    )
    .await;

    mount_submission_page(
        &mock_server,
        1325,
        5,
        html(submission_page(
            "#include &lt;iostream&gt;\r\nint main() {\r\n    std::cout &lt;&lt; 42;\r\n}\r\n",
        )),
    )
    .await;
    mount_submission_page(
        &mock_server,
        1324,
        2,
        html(submission_page("n = int(input())\n\nprint(n &amp; 1)")),
    )
    .await;

    let config = create_test_config(&mock_server.uri(), out.path());
    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let summary = coordinator.run(HANDLE).await;

    assert_eq!(summary.submissions_found, 2);
    assert_eq!(summary.succeeded(), 2);
    assert_eq!(summary.failed(), 0);

    let user_dir = out.path().join(HANDLE);
    let cpp = fs::read_to_string(user_dir.join("1325A.cpp")).expect("missing 1325A.cpp");
    assert_eq!(
        cpp,
        "#include <iostream>\nint main() {\n    std::cout << 42;\n}\n"
    );

    let py = fs::read_to_string(user_dir.join("1324C.py")).expect("missing 1324C.py");
    assert_eq!(py, "n = int(input())\n\nprint(n & 1)\n");

    let mut written: Vec<_> = fs::read_dir(&user_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    written.sort();
    assert_eq!(written, vec!["1324C.py", "1325A.cpp"]);
}

#[tokio::test]
async fn test_failed_fetch_does_not_stop_the_run() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    mount_submission_list(
        &mock_server,
        vec![
            api_entry(30, 3, "A", "GNU C11", "OK"),
            api_entry(20, 2, "A", "GNU C11", "OK"),
            api_entry(10, 1, "A", "GNU C11", "OK"),
        ],
    )
    .await;

    mount_submission_page(&mock_server, 3, 30, html(submission_page("int a;"))).await;
    mount_submission_page(&mock_server, 2, 20, ResponseTemplate::new(500)).await;
    mount_submission_page(&mock_server, 1, 10, html(submission_page("int c;"))).await;

    let config = create_test_config(&mock_server.uri(), out.path());
    let coordinator = Coordinator::new(&config).unwrap();
    let summary = coordinator.run(HANDLE).await;

    assert_eq!(summary.submissions_found, 3);
    assert_eq!(summary.succeeded(), 2);
    assert_eq!(summary.skipped_with("unreachable"), 1);

    let user_dir = out.path().join(HANDLE);
    assert!(user_dir.join("3A.c").exists());
    assert!(!user_dir.join("2A.c").exists());
    assert!(user_dir.join("1A.c").exists());

    // Processing order follows the list order
    assert_eq!(
        summary.saved,
        vec![user_dir.join("3A.c"), user_dir.join("1A.c")]
    );
}

#[tokio::test]
async fn test_private_submission_is_skipped() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    mount_submission_list(
        &mock_server,
        vec![
            api_entry(2, 7, "B", "Kotlin 1.7", "OK"),
            api_entry(1, 7, "A", "Kotlin 1.7", "OK"),
        ],
    )
    .await;

    // Private submissions render without the source block
    mount_submission_page(
        &mock_server,
        7,
        2,
        html("<html><head><title>Codeforces</title></head><body><div>Access denied</div></body></html>".to_string()),
    )
    .await;
    mount_submission_page(&mock_server, 7, 1, html(submission_page("fun main() {}"))).await;

    let config = create_test_config(&mock_server.uri(), out.path());
    let summary = Coordinator::new(&config).unwrap().run(HANDLE).await;

    assert_eq!(summary.succeeded(), 1);
    assert_eq!(summary.skipped_with("not_public"), 1);

    // Unknown languages get no extension
    let written = out.path().join(HANDLE).join("7A");
    assert_eq!(fs::read_to_string(written).unwrap(), "fun main() {}\n");
}

#[tokio::test]
async fn test_api_failure_yields_empty_run() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/user.status"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"status":"FAILED","comment":"handle: User with handle tourist not found"}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), out.path());
    let summary = Coordinator::new(&config).unwrap().run(HANDLE).await;

    assert_eq!(summary.submissions_found, 0);
    assert_eq!(summary.succeeded(), 0);
    assert_eq!(summary.failed(), 0);
    assert!(summary.finished_at.is_some());
    assert!(!out.path().join(HANDLE).exists());
}

#[tokio::test]
async fn test_malformed_list_yields_empty_run() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/user.status"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html>Codeforces is temporarily unavailable</html>"),
        )
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), out.path());
    let summary = Coordinator::new(&config).unwrap().run(HANDLE).await;

    assert_eq!(summary.submissions_found, 0);
    assert!(!out.path().join(HANDLE).exists());
}

#[tokio::test]
async fn test_requests_disable_caching() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/user.status"))
        .and(header("cache-control", "no-cache"))
        .and(header("pragma", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "result": [api_entry(1, 1, "A", "GNU C11", "OK")],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contest/1/submission/1"))
        .and(header("cache-control", "no-cache"))
        .respond_with(html(submission_page("int x;")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), out.path());
    let summary = Coordinator::new(&config).unwrap().run(HANDLE).await;

    assert_eq!(summary.succeeded(), 1);
}

#[tokio::test]
async fn test_requests_respect_rate_limit() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    mount_submission_list(
        &mock_server,
        vec![
            api_entry(3, 3, "A", "GNU C11", "OK"),
            api_entry(2, 2, "A", "GNU C11", "OK"),
            api_entry(1, 1, "A", "GNU C11", "OK"),
        ],
    )
    .await;
    for id in 1..=3 {
        mount_submission_page(&mock_server, id, id, html(submission_page("int x;"))).await;
    }

    let mut config = create_test_config(&mock_server.uri(), out.path());
    config.crawler.requests_per_second = 5.0;

    let start = Instant::now();
    let summary = Coordinator::new(&config).unwrap().run(HANDLE).await;
    let elapsed = start.elapsed();

    // Four requests at 5/s: the last one waits three 200ms intervals
    assert_eq!(summary.succeeded(), 3);
    assert!(
        elapsed >= Duration::from_millis(600),
        "run finished too fast: {:?}",
        elapsed
    );
}

#[tokio::test]
async fn test_rerun_overwrites_existing_files() {
    let mock_server = MockServer::start().await;
    let out = TempDir::new().unwrap();

    mount_submission_list(&mock_server, vec![api_entry(1, 1, "A", "GNU C11", "OK")]).await;
    mount_submission_page(&mock_server, 1, 1, html(submission_page("int fresh;"))).await;

    let user_dir = out.path().join(HANDLE);
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(user_dir.join("1A.c"), "int stale;\nint stale2;\n").unwrap();

    let config = create_test_config(&mock_server.uri(), out.path());
    let coordinator = Coordinator::new(&config).unwrap();
    coordinator.run(HANDLE).await;
    coordinator.run(HANDLE).await;

    assert_eq!(
        fs::read_to_string(user_dir.join("1A.c")).unwrap(),
        "int fresh;\n"
    );
}

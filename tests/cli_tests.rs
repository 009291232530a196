use qbit_client::cli::{execute, Command};
use qbit_client::QbitClient;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

mod common;
use common::mock_server::{form_of, multipart_part_names, requests_to, setup_mock_server};

#[tokio::test]
async fn test_version_command() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/app/version"))
        .respond_with(ResponseTemplate::new(200).set_body_string("v4.6.2"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/app/webapiVersion"))
        .respond_with(ResponseTemplate::new(200).set_body_string("2.9.3"))
        .mount(&server)
        .await;

    let client = QbitClient::new(&server.uri()).unwrap();
    let output = execute(&client, Command::Version).await.unwrap();
    assert_eq!(output, json!({"version": "v4.6.2", "webapi": "2.9.3"}));
}

#[tokio::test]
async fn test_add_command_reads_torrent_files() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/torrents/add"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Ok."))
        .mount(&server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let file = dir.path().join("debian.torrent");
    std::fs::write(&file, b"d8:announce0:e").unwrap();

    let client = QbitClient::new(&server.uri()).unwrap();
    let output = execute(
        &client,
        Command::Add {
            urls: vec![],
            files: vec![file],
            savepath: Some("/downloads".to_string()),
            category: None,
            tags: vec!["iso".to_string(), "linux".to_string()],
            paused: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(output, json!("Ok."));

    let requests = requests_to(&server, "/api/v2/torrents/add").await;
    assert_eq!(
        multipart_part_names(&requests[0]),
        vec!["torrents", "tags", "savepath", "paused", "dummy"]
    );
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("filename=\"debian.torrent\""));
    assert!(body.contains("iso,linux"));
}

#[tokio::test]
async fn test_add_command_missing_file_fails_before_request() {
    let server = setup_mock_server().await;
    let client = QbitClient::new(&server.uri()).unwrap();

    let result = execute(
        &client,
        Command::Add {
            urls: vec![],
            files: vec!["/nonexistent/missing.torrent".into()],
            savepath: None,
            category: None,
            tags: vec![],
            paused: false,
        },
    )
    .await;

    assert!(result.is_err());
    assert!(requests_to(&server, "/api/v2/torrents/add").await.is_empty());
}

#[tokio::test]
async fn test_delete_command() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/torrents/delete"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = QbitClient::new(&server.uri()).unwrap();
    execute(
        &client,
        Command::Delete {
            hashes: vec!["h1".to_string(), "h2".to_string()],
            delete_files: true,
        },
    )
    .await
    .unwrap();

    let requests = requests_to(&server, "/api/v2/torrents/delete").await;
    assert_eq!(
        form_of(&requests[0]),
        vec![
            ("hashes".to_string(), "h1|h2".to_string()),
            ("deleteFiles".to_string(), "true".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_command_failure_carries_context() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/torrents/categories"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let client = QbitClient::new(&server.uri()).unwrap();
    let err = execute(&client, Command::Categories).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to list categories");
    assert_eq!(err.root_cause().to_string(), "403 Forbidden");
}

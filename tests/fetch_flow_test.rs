use anyhow::Result;
use httpmock::prelude::*;
use std::time::Duration;
use text_resume::{render_plain, FetchState, HttpResumeApi, ResumeLoader};

fn resume_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Vivek Sachan",
        "phone": "555-0100",
        "email": "vivek@example.com",
        "twitter": "@vivek",
        "address": "12 Residency Road, Bengaluru",
        "skills": ["Go", "Rust"],
        "projects": [
            {"title": "X", "description": "Y"},
            {"title": "Ledger", "description": "Double-entry bookkeeping service"}
        ]
    })
}

#[tokio::test]
async fn test_end_to_end_fetch_and_render() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/resume")
            .query_param("name", "Vivek Sachan");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(resume_body());
    });

    let api = HttpResumeApi::new(&server.base_url(), Some(Duration::from_secs(5)))?;
    let loader = ResumeLoader::new(api, "Vivek Sachan");
    let state = loader.load().await;

    api_mock.assert_hits(1);

    let resume = state.resume().expect("resume should be loaded");
    let text = render_plain(resume);

    assert!(text.lines().any(|l| l == "Name: Vivek Sachan"));
    assert!(text.lines().any(|l| l == "• X - Y"));
    for value in [
        "555-0100",
        "vivek@example.com",
        "@vivek",
        "12 Residency Road, Bengaluru",
        "Go",
        "Rust",
        "Ledger",
        "Double-entry bookkeeping service",
    ] {
        assert!(text.contains(value), "missing {}", value);
    }
    Ok(())
}

#[tokio::test]
async fn test_server_error_ends_in_failed_state() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/resume");
        then.status(500);
    });

    let api = HttpResumeApi::new(&server.base_url(), None)?;
    let state = ResumeLoader::new(api, "Vivek Sachan").load().await;

    // No retries.
    api_mock.assert_hits(1);
    let message = state.error().expect("should fail");
    assert!(message.starts_with("Failed to load resume:"));
    assert!(message.contains("500"));
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_ends_in_failed_state() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/resume");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(r#"{"name": "Vivek Sachan", "skills": "not a list"}"#);
    });

    let api = HttpResumeApi::new(&server.base_url(), None)?;
    let state = ResumeLoader::new(api, "Vivek Sachan").load().await;

    assert!(matches!(state, FetchState::Failed(_)));
    Ok(())
}

#[tokio::test]
async fn test_unreachable_endpoint_ends_in_failed_state() -> Result<()> {
    // Bind then drop a listener so the port is very likely closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.local_addr()?.port()
    };
    let api = HttpResumeApi::new(
        &format!("http://127.0.0.1:{}/", port),
        Some(Duration::from_secs(2)),
    )?;

    let state = tokio::time::timeout(
        Duration::from_secs(10),
        ResumeLoader::new(api, "Vivek Sachan").load(),
    )
    .await?;

    assert!(!state.is_loading());
    assert!(state.error().is_some());
    Ok(())
}

#[tokio::test]
async fn test_slow_endpoint_times_out() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/resume");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(resume_body());
    });

    let api = HttpResumeApi::new(&server.base_url(), Some(Duration::from_millis(200)))?;
    let state = ResumeLoader::new(api, "Vivek Sachan").load().await;

    assert!(state.error().is_some());
    Ok(())
}

#[tokio::test]
async fn test_base_url_with_path_prefix() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/resume")
            .query_param("name", "Ada Lovelace");
        then.status(200).json_body(resume_body());
    });

    let api = HttpResumeApi::new(&server.url("/api/v1"), None)?;
    let state = ResumeLoader::new(api, "Ada Lovelace").load().await;

    api_mock.assert();
    assert!(state.resume().is_some());
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use emoji_relay::config::CliConfig;
use emoji_relay::server;
use httpmock::prelude::*;
use serde_json::json;
use std::net::SocketAddr;

async fn spawn_relay(api_base: &str) -> SocketAddr {
    let config = CliConfig::parse_from([
        "emoji-relay",
        "--api-base",
        api_base,
        "--emoji-model",
        "test-emoji",
        "--color-model",
        "test-color",
    ]);

    let router = server::build_service(&config, "test-key");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[tokio::test]
async fn test_color_endpoint_passes_valid_hex_through() -> Result<()> {
    let upstream = MockServer::start();
    let completion_mock = upstream.mock(|when, then| {
        when.method(POST)
            .path("/chat/completions")
            .header("authorization", "Bearer test-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(completion_body("#FFCC00"));
    });

    let addr = spawn_relay(&upstream.base_url()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/api/emoji-color", addr))
        .json(&json!({ "emoji": "😀" }))
        .send()
        .await?;

    assert_eq!(response.status(), 200);
    // 顏色回應帶長效快取標頭
    assert_eq!(
        response.headers().get("cache-control").unwrap().to_str()?,
        "s-maxage=2592000, stale-while-revalidate"
    );
    assert_eq!(response.text().await?, "#FFCC00");

    completion_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_color_endpoint_preserves_case() -> Result<()> {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(completion_body("  #aabbcc  "));
    });

    let addr = spawn_relay(&upstream.base_url()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/api/emoji-color", addr))
        .json(&json!({ "emoji": "🖤" }))
        .send()
        .await?;

    assert_eq!(response.text().await?, "#aabbcc");
    Ok(())
}

#[tokio::test]
async fn test_color_endpoint_falls_back_on_garbage() -> Result<()> {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(completion_body("bright yellow, like the sun"));
    });

    let addr = spawn_relay(&upstream.base_url()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/api/emoji-color", addr))
        .json(&json!({ "emoji": "🌞" }))
        .send()
        .await?;

    // 格式錯誤不讓請求失敗，改用預設色
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await?, "#000000");
    Ok(())
}

#[tokio::test]
async fn test_color_endpoint_relays_upstream_status() -> Result<()> {
    let upstream = MockServer::start();
    upstream.mock(|when, then| {
        when.method(POST).path("/chat/completions");
        then.status(401).body("invalid api key");
    });

    let addr = spawn_relay(&upstream.base_url()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("http://{}/api/emoji-color", addr))
        .json(&json!({ "emoji": "😀" }))
        .send()
        .await?;

    assert_eq!(response.status(), 401);
    Ok(())
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let upstream = MockServer::start();
    let addr = spawn_relay(&upstream.base_url()).await;

    let response = reqwest::get(format!("http://{}/health", addr)).await?;
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await?, "ok");
    Ok(())
}

//! HTTP API integration tests.
//!
//! Tests for registry endpoints (health check, service list, name lookup).

mod fixtures;
use fixtures::TestServer;
use minirpc_server::{ServerConfig, config::ServiceKind};

#[tokio::test]
async fn test_health_endpoint() {
    // テスト項目: /api/health エンドポイントが正常に動作する
    // given (前提条件):
    let port = 19180;
    let server = TestServer::start(port).await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/health", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_services_list_endpoint() {
    // テスト項目: /api/services エンドポイントが登録済みサービス一覧を返す
    // given (前提条件):
    let port = 19181;
    let server = TestServer::start(port).await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/services", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let services = body.as_array().expect("Response should be an array");

    // デフォルトでは 2 つのサービスが名前順で登録されている
    assert_eq!(services.len(), 2);
    assert_eq!(services[0]["name"], "CalcService");
    assert_eq!(services[1]["name"], "RoomService");
    assert!(services[0]["methods"].is_array());
    assert!(services[0]["bound_at"].is_string());
}

#[tokio::test]
async fn test_service_lookup_success() {
    // テスト項目: /api/services/{name} が登録済みサービスを解決する
    // given (前提条件):
    let port = 19182;
    let server = TestServer::start(port).await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/services/RoomService", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["name"], "RoomService");
    assert_eq!(
        body["methods"],
        serde_json::json!(["getRoomInfo", "getAllRoomNumbers"])
    );
}

#[tokio::test]
async fn test_service_lookup_not_bound() {
    // テスト項目: 未登録のサービス名は 404 と not_bound を返す
    // given (前提条件):
    let port = 19183;
    let server = TestServer::start(port).await;
    let client = reqwest::Client::new();

    // when (操作):
    let response = client
        .get(format!("{}/api/services/PrinterService", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 404);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"]["kind"], "not_bound");
}

#[tokio::test]
async fn test_service_selection_binds_only_requested() {
    // テスト項目: --service room のみ指定した場合 CalcService は登録されない
    // given (前提条件):
    let port = 19184;
    let server = TestServer::start_with(ServerConfig {
        port,
        services: vec![ServiceKind::Room],
        ..ServerConfig::default()
    })
    .await;
    let client = reqwest::Client::new();

    // when (操作):
    let calc = client
        .get(format!("{}/api/services/CalcService", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");
    let room = client
        .get(format!("{}/api/services/RoomService", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(calc.status(), 404);
    assert_eq!(room.status(), 200);
}

//! Remote call integration tests.
//!
//! Invokes CalcService and RoomService methods through `POST /rpc/{service}/{method}`.

mod fixtures;
use fixtures::TestServer;
use serde_json::{Value, json};

async fn call(server: &TestServer, service: &str, method: &str, args: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}/rpc/{}/{}", server.base_url(), service, method))
        .json(&args)
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status().as_u16();
    let body = response.json().await.expect("Failed to parse JSON");
    (status, body)
}

#[tokio::test]
async fn test_calculate_tax_brackets() {
    // テスト項目: calculateTax が各税率区分で正しい税額を返す
    // given (前提条件):
    let server = TestServer::start(19190).await;

    // when (操作):
    let (s1, free) = call(&server, "CalcService", "calculateTax", json!({"income": 250000.0})).await;
    let (s2, lower) = call(&server, "CalcService", "calculateTax", json!({"income": 250001.0})).await;
    let (s3, upper) = call(&server, "CalcService", "calculateTax", json!({"income": 600000.0})).await;

    // then (期待する結果):
    assert_eq!((s1, s2, s3), (200, 200, 200));
    assert_eq!(free["result"], json!(0.0));
    assert!((lower["result"].as_f64().unwrap() - 12500.05).abs() < 1e-6);
    assert_eq!(upper["result"], json!(60000.0));
}

#[tokio::test]
async fn test_calculate_cgpa_success_and_validation() {
    // テスト項目: calculateCGPA は正常値で CGPA を返し、不正な入力は 422 invalid_input
    // given (前提条件):
    let server = TestServer::start(19191).await;

    // when (操作):
    let (ok_status, ok) = call(
        &server,
        "CalcService",
        "calculateCGPA",
        json!({"marks": [50, 60, 70, 80, 90]}),
    )
    .await;
    let (short_status, short) = call(
        &server,
        "CalcService",
        "calculateCGPA",
        json!({"marks": [50, 60, 70, 80]}),
    )
    .await;
    let (range_status, range) = call(
        &server,
        "CalcService",
        "calculateCGPA",
        json!({"marks": [50, 60, 70, 80, 101]}),
    )
    .await;
    let (wide_status, wide) = call(
        &server,
        "CalcService",
        "calculateCGPA",
        json!({"marks": [5_000_000_000i64, 0, 0, 0, 0]}),
    )
    .await;

    // then (期待する結果):
    assert_eq!(ok_status, 200);
    assert_eq!(ok["result"], json!(7.0));
    assert_eq!(short_status, 422);
    assert_eq!(short["error"]["kind"], "invalid_input");
    assert_eq!(range_status, 422);
    assert_eq!(
        range["error"]["message"],
        "Each mark must be between 0 and 100. Found: 101"
    );
    assert_eq!(wide_status, 422);
    assert_eq!(wide["error"]["kind"], "invalid_input");
    assert_eq!(
        wide["error"]["message"],
        "Each mark must be between 0 and 100. Found: 5000000000"
    );
}

#[tokio::test]
async fn test_is_eligible_to_vote() {
    // テスト項目: isEligibleToVote の境界 (17 / 18)
    // given (前提条件):
    let server = TestServer::start(19192).await;

    // when (操作):
    let (_, minor) = call(&server, "CalcService", "isEligibleToVote", json!({"age": 17})).await;
    let (_, adult) = call(&server, "CalcService", "isEligibleToVote", json!({"age": 18})).await;

    // then (期待する結果):
    assert_eq!(minor["result"], json!(false));
    assert_eq!(adult["result"], json!(true));
}

#[tokio::test]
async fn test_get_room_info_found_and_not_found() {
    // テスト項目: getRoomInfo は登録済みの部屋を返し、未登録の部屋は null を返す
    // given (前提条件):
    let server = TestServer::start(19193).await;

    // when (操作):
    let (found_status, found) = call(
        &server,
        "RoomService",
        "getRoomInfo",
        json!({"room_number": "101"}),
    )
    .await;
    let (missing_status, missing) = call(
        &server,
        "RoomService",
        "getRoomInfo",
        json!({"room_number": "999"}),
    )
    .await;

    // then (期待する結果):
    assert_eq!(found_status, 200);
    assert_eq!(
        found["result"]["occupant_names"],
        json!(["Rajesh Kumar", "Amit Sharma"])
    );
    assert_eq!(found["result"]["warden_contact"], "+91-9876543210");
    assert_eq!(missing_status, 200);
    assert!(missing["result"].is_null());
}

#[tokio::test]
async fn test_get_all_room_numbers_sorted() {
    // テスト項目: getAllRoomNumbers は 8 部屋を昇順で返す（ボディなしでも呼び出せる）
    // given (前提条件):
    let server = TestServer::start(19194).await;

    // when (操作):
    let response = reqwest::Client::new()
        .post(format!("{}/rpc/RoomService/getAllRoomNumbers", server.base_url()))
        .send()
        .await
        .expect("Failed to send request");

    // then (期待する結果):
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["result"],
        json!(["101", "102", "103", "201", "202", "203", "301", "302"])
    );
}

#[tokio::test]
async fn test_dispatch_errors() {
    // テスト項目: 未登録サービス・未知のメソッド・不正な引数がそれぞれのエラー種別になる
    // given (前提条件):
    let server = TestServer::start(19195).await;

    // when (操作):
    let (unbound_status, unbound) = call(&server, "PrinterService", "print", json!({})).await;
    let (method_status, method) = call(&server, "CalcService", "divide", json!({})).await;
    let (args_status, args) = call(
        &server,
        "CalcService",
        "calculateTax",
        json!({"income": "lots"}),
    )
    .await;

    // then (期待する結果):
    assert_eq!(unbound_status, 404);
    assert_eq!(unbound["error"]["kind"], "not_bound");
    assert_eq!(method_status, 404);
    assert_eq!(method["error"]["kind"], "method_not_found");
    assert_eq!(args_status, 400);
    assert_eq!(args["error"]["kind"], "bad_arguments");
}

mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};

#[tokio::test]
async fn test_health_endpoint() {
    println!("\n\n[+] Running test: test_health_endpoint");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Server is running");
    assert!(body["timestamp"].is_string());
    println!("[/] Test passed: health endpoint reports server status.");
}

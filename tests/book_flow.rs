mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};

#[tokio::test]
async fn test_book_search_rejects_bad_parameters() {
    println!("\n\n[+] Running test: test_book_search_rejects_bad_parameters");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/books/search?query=")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/books/search?query=dune&search_type=publisher")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BAD_REQUEST");
    println!("[/] Test passed: empty query and unknown search_type rejected.");
}

#[tokio::test]
async fn test_book_search_unreachable_upstream_is_bad_gateway() {
    println!("\n\n[+] Running test: test_book_search_unreachable_upstream_is_bad_gateway");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    // The test config points the book API at a port that refuses connections.
    println!("[>] Searching against the dead endpoint.");
    let req = test::TestRequest::get()
        .uri("/api/books/search?query=dune")
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UPSTREAM_ERROR");

    println!("[>] ISBN lookup against the dead endpoint.");
    let req = test::TestRequest::get()
        .uri("/api/books/9780553448184")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    println!("[/] Test passed: a refused upstream maps to 502.");
}

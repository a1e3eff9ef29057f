mod common;

use actix_web::{http::StatusCode, test};
use common::{
    client::{multipart_images, TestClient},
    test_data, TestContext,
};

#[tokio::test]
async fn test_post_creation_flow_success() {
    println!("\n\n[+] Running test: test_post_creation_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_author_id, token) = client.create_active_user("author@example.com", "author").await;

    let post = test_data::sample_post();
    println!("[>] Creating post: {}", post.title);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(&post)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Thoughts on The Vegetarian");
    assert_eq!(body["rating"], 4);
    assert_eq!(body["author"]["nickname"], "author");
    assert_eq!(body["like_count"], 0);
    assert_eq!(body["comment_count"], 0);
    assert_eq!(body["is_liked"], false);

    // Hashtags are extracted from the content, in order of appearance.
    let tags: Vec<&str> = body["hashtags"]
        .as_array()
        .expect("hashtags missing")
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(tags, vec!["한강", "booktalk"]);
    println!("[/] Test passed: post created with derived hashtags.");
}

#[tokio::test]
async fn test_post_creation_requires_auth() {
    println!("\n\n[+] Running test: test_post_creation_requires_auth");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(test_data::sample_post())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: anonymous post creation rejected.");
}

#[tokio::test]
async fn test_post_creation_validation() {
    println!("\n\n[+] Running test: test_post_creation_validation");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_id, token) = client.create_active_user("critic@example.com", "critic").await;

    let mut post = test_data::sample_post();
    post.rating = Some(6);
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(&post)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let mut post = test_data::sample_post();
    post.content = "a".repeat(2001);
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(&post)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    println!("[/] Test passed: out-of-range rating and oversized content rejected.");
}

#[tokio::test]
async fn test_post_list_pagination() {
    println!("\n\n[+] Running test: test_post_list_pagination");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (author_id, _token) = client.create_active_user("lister@example.com", "lister").await;
    client.create_post_for(author_id, "First", "first post").await;
    client.create_post_for(author_id, "Second", "second post").await;
    client.create_post_for(author_id, "Third", "third post").await;

    println!("[>] Listing with limit=2.");
    let req = test::TestRequest::get()
        .uri("/api/posts?limit=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["pagination"]["limit"], 2);
    assert_eq!(body["pagination"]["offset"], 0);
    assert_eq!(body["pagination"]["count"], 2);
    let data = body["data"].as_array().expect("data missing");
    assert_eq!(data.len(), 2);
    // Newest first.
    assert_eq!(data[0]["title"], "Third");
    assert_eq!(data[1]["title"], "Second");

    let req = test::TestRequest::get()
        .uri("/api/posts?limit=2&offset=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let data = body["data"].as_array().expect("data missing");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "First");
    println!("[/] Test passed: pagination window and ordering correct.");
}

#[tokio::test]
async fn test_post_get_not_found() {
    println!("\n\n[+] Running test: test_post_get_not_found");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get().uri("/api/posts/9999").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOT_FOUND");
    println!("[/] Test passed: missing post is a 404.");
}

#[tokio::test]
async fn test_post_update_owner_only() {
    println!("\n\n[+] Running test: test_post_update_owner_only");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, owner_token) = client.create_active_user("owner@example.com", "owner").await;
    let (_other_id, other_token) = client.create_active_user("other@example.com", "other").await;
    let post_id = client.create_post_for(owner_id, "Mine", "original #old").await;

    println!("[>] Attempting update as a different user.");
    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", post_id))
        .insert_header(("Authorization", format!("Bearer {}", other_token)))
        .set_json(serde_json::json!({ "content": "hijacked" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    println!("[>] Updating as the owner.");
    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", post_id))
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .set_json(serde_json::json!({ "content": "revised text #new" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["content"], "revised text #new");
    // New content means newly derived hashtags.
    let tags: Vec<&str> = body["hashtags"]
        .as_array()
        .expect("hashtags missing")
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert_eq!(tags, vec!["new"]);
    println!("[/] Test passed: ownership enforced and hashtags rederived.");
}

#[tokio::test]
async fn test_post_update_keeps_absent_fields() {
    println!("\n\n[+] Running test: test_post_update_keeps_absent_fields");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_owner_id, token) = client.create_active_user("editor@example.com", "editor").await;

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(test_data::sample_post())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: serde_json::Value = test::read_body_json(resp).await;
    let post_id = created["id"].as_i64().expect("no post id");

    // Only the title is sent; rating and book metadata must survive.
    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", post_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({ "title": "Retitled" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Retitled");
    assert_eq!(body["rating"], 4);
    assert_eq!(body["isbn"], "9780553448184");
    assert_eq!(body["book_title"], "The Vegetarian");
    assert_eq!(body["book_author"], "Han Kang");
    println!("[/] Test passed: absent update fields keep their stored values.");
}

#[tokio::test]
async fn test_post_delete_flow() {
    println!("\n\n[+] Running test: test_post_delete_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, token) = client.create_active_user("deleter@example.com", "deleter").await;
    let post_id = client.create_post_for(owner_id, "Ephemeral", "soon gone").await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/posts/{}", post_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", post_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: deleted post is gone.");
}

#[tokio::test]
async fn test_post_images_appear_in_view() {
    println!("\n\n[+] Running test: test_post_images_appear_in_view");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, _token) = client.create_active_user("shutter@example.com", "shutter").await;
    let post_id = client.create_post_for(owner_id, "With pics", "look at these").await;

    ctx.db
        .add_post_images(
            post_id,
            vec![
                "/uploads/aaa.jpg".to_string(),
                "/uploads/bbb.png".to_string(),
            ],
        )
        .await
        .expect("Failed to attach images");

    let count = ctx
        .db
        .count_post_images(post_id)
        .await
        .expect("Failed to count images");
    assert_eq!(count, 2);

    let req = test::TestRequest::get()
        .uri(&format!("/api/posts/{}", post_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let images = body["images"].as_array().expect("images missing");
    assert_eq!(images.len(), 2);
    assert_eq!(images[0], "/uploads/aaa.jpg");
    println!("[/] Test passed: attached images show up in the post view.");
}

#[tokio::test]
async fn test_image_upload_flow() {
    println!("\n\n[+] Running test: test_image_upload_flow");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, owner_token) = client
        .create_active_user("uploader@example.com", "uploader")
        .await;
    let (_other_id, other_token) = client
        .create_active_user("bystander@example.com", "bystander")
        .await;
    let post_id = client.create_post_for(owner_id, "Illustrated", "with covers").await;

    println!("[>] Uploading two images as the owner.");
    let (content_type, body) = multipart_images(&[
        ("front.jpg", "image/jpeg", b"\xFF\xD8\xFFfake front cover"),
        ("back.png", "image/png", b"\x89PNGfake back cover"),
    ]);
    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/images", post_id))
        .insert_header(("Authorization", format!("Bearer {}", owner_token)))
        .insert_header(("Content-Type", content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);

    let res_body: serde_json::Value = test::read_body_json(resp).await;
    let images = res_body["images"].as_array().expect("images missing");
    assert_eq!(images.len(), 2);
    for image in images {
        let path = image.as_str().expect("image path not a string");
        assert!(
            std::path::Path::new(path).exists(),
            "uploaded file missing on disk: {path}"
        );
    }

    let count = ctx
        .db
        .count_post_images(post_id)
        .await
        .expect("Failed to count images");
    assert_eq!(count, 2);

    println!("[>] Uploading as a non-owner must fail.");
    let (content_type, body) =
        multipart_images(&[("sneaky.jpg", "image/jpeg", b"\xFF\xD8\xFFnot mine")]);
    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/images", post_id))
        .insert_header(("Authorization", format!("Bearer {}", other_token)))
        .insert_header(("Content-Type", content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    println!("[/] Test passed: owner uploads land on disk, others are rejected.");
}

#[tokio::test]
async fn test_image_upload_respects_per_post_limit() {
    println!("\n\n[+] Running test: test_image_upload_respects_per_post_limit");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, token) = client
        .create_active_user("hoarder@example.com", "hoarder")
        .await;
    let post_id = client.create_post_for(owner_id, "Full", "album is full").await;

    // Five images already attached; the next upload must bounce.
    ctx.db
        .add_post_images(
            post_id,
            (1..=5).map(|i| format!("/uploads/full-{i}.jpg")).collect(),
        )
        .await
        .expect("Failed to attach images");

    let (content_type, body) =
        multipart_images(&[("sixth.jpg", "image/jpeg", b"\xFF\xD8\xFFone too many")]);
    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/images", post_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .insert_header(("Content-Type", content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let count = ctx
        .db
        .count_post_images(post_id)
        .await
        .expect("Failed to count images");
    assert_eq!(count, 5);
    println!("[/] Test passed: the sixth image is rejected and nothing is recorded.");
}

#[tokio::test]
async fn test_image_upload_rejects_bad_files() {
    println!("\n\n[+] Running test: test_image_upload_rejects_bad_files");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (owner_id, token) = client
        .create_active_user("strict@example.com", "strict")
        .await;
    let post_id = client.create_post_for(owner_id, "Strict", "images only").await;

    println!("[>] A .txt attachment must be rejected.");
    let (content_type, body) =
        multipart_images(&[("notes.txt", "text/plain", b"not an image at all")]);
    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/images", post_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .insert_header(("Content-Type", content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    println!("[>] An image extension with a non-image content type must be rejected.");
    let (content_type, body) =
        multipart_images(&[("fake.jpg", "text/plain", b"jpg in name only")]);
    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/images", post_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .insert_header(("Content-Type", content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    println!("[>] A file over 5 MiB must be rejected and cleaned up.");
    let oversized = vec![0u8; 5 * 1024 * 1024 + 1];
    let (content_type, body) = multipart_images(&[("huge.jpg", "image/jpeg", &oversized)]);
    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/images", post_id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .insert_header(("Content-Type", content_type))
        .set_payload(body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let count = ctx
        .db
        .count_post_images(post_id)
        .await
        .expect("Failed to count images");
    assert_eq!(count, 0);
    println!("[/] Test passed: extension, content type and size limits all hold.");
}

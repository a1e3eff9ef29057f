use actix_web::{web, App};
use std::sync::Arc;

use modubook::{
    config::config,
    db::postgres_service::PostgresService,
    types::post::RPostCreate,
    types::user::DBUserCreate,
    utils::token::{hash_password, issue_jwt},
};

use super::test_data::TEST_PASSWORD;

/// Build a multipart/form-data body carrying `files` under the `images`
/// field. Returns the content-type header value and the raw body.
#[allow(dead_code)]
pub fn multipart_images(files: &[(&str, &str, &[u8])]) -> (String, Vec<u8>) {
    let boundary = "----modubook-test-boundary";
    let mut body: Vec<u8> = Vec::new();
    for (filename, content_type, bytes) in files {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"images\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}

pub struct TestClient {
    pub db: Arc<PostgresService>,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(modubook::routes::configure_routes)
    }

    /// Verified user plus a JWT that passes the auth extractor.
    #[allow(dead_code)]
    pub async fn create_active_user(&self, email: &str, nickname: &str) -> (i32, String) {
        let password_hash = hash_password(TEST_PASSWORD).expect("Failed to hash password");

        let user = self
            .db
            .create_user(DBUserCreate {
                email: email.to_string(),
                password_hash,
                nickname: nickname.to_string(),
            })
            .await
            .expect("Failed to create user");

        self.db
            .activate_user(user.id)
            .await
            .expect("Failed to activate user");

        let token = issue_jwt(user.id, &config().jwt_secret).expect("Failed to issue jwt");

        (user.id, token)
    }

    #[allow(dead_code)]
    pub async fn create_post_for(&self, user_id: i32, title: &str, content: &str) -> i32 {
        self.db
            .create_post(
                user_id,
                RPostCreate {
                    title: title.to_string(),
                    content: content.to_string(),
                    rating: Some(5),
                    isbn: None,
                    book_title: None,
                    book_author: None,
                },
            )
            .await
            .expect("Failed to create post")
    }
}

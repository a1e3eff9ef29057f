use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;

use modubook::config::{BookApiConfig, EnvConfig, MailConfig, CONFIG};
use modubook::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        // First caller wins; every test binary needs the same test config.
        CONFIG.set(get_test_config()).ok();

        let postgres = Postgres::default();
        let container = postgres
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    let upload_dir = std::env::temp_dir().join("modubook-test-uploads");
    std::fs::create_dir_all(&upload_dir).expect("Failed to create upload dir");

    EnvConfig {
        port: 8080,
        db_url: "test".to_string(), // Not used in tests
        jwt_secret: "integration-test-secret".to_string(),
        frontend_url: "http://localhost:3000".to_string(),
        upload_dir: upload_dir.to_string_lossy().into_owned(),
        mail: MailConfig {
            // Port 9 refuses connections; signup must survive a dead mailer.
            api_key: "test".to_string(),
            endpoint: "http://127.0.0.1:9/emails".to_string(),
            from: "noreply@test.local".to_string(),
        },
        books: BookApiConfig {
            api_key: "test".to_string(),
            endpoint: "http://127.0.0.1:9/ItemSearch.aspx".to_string(),
        },
    }
}

// Test data helpers
pub mod test_data {
    use modubook::types::comment::RCommentCreate;
    use modubook::types::post::RPostCreate;
    use modubook::types::user::RSignup;

    pub const TEST_PASSWORD: &str = "Passw0rd!";

    pub fn sample_signup(email: &str, nickname: &str) -> RSignup {
        RSignup {
            email: email.to_string(),
            password: TEST_PASSWORD.to_string(),
            nickname: nickname.to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_post() -> RPostCreate {
        RPostCreate {
            title: "Thoughts on The Vegetarian".to_string(),
            content: "A quiet, unsettling read. #한강 #booktalk".to_string(),
            rating: Some(4),
            isbn: Some("9780553448184".to_string()),
            book_title: Some("The Vegetarian".to_string()),
            book_author: Some("Han Kang".to_string()),
        }
    }

    #[allow(dead_code)]
    pub fn sample_comment(content: &str, parent: Option<i32>) -> RCommentCreate {
        RCommentCreate {
            content: content.to_string(),
            parent_comment_id: parent,
        }
    }
}

use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub jwt_secret: String,
    pub frontend_url: String,
    pub upload_dir: String,
    pub mail: MailConfig,
    pub books: BookApiConfig,
}

#[derive(Clone, Debug)]
pub struct MailConfig {
    pub api_key: String,
    pub endpoint: String,
    pub from: String,
}

#[derive(Clone, Debug)]
pub struct BookApiConfig {
    pub api_key: String,
    pub endpoint: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env_or("PORT", "8080").parse().unwrap_or(8080),
            db_url: Self::get_env("POSTGRES_URI"),
            jwt_secret: Self::get_env("JWT_SECRET"),
            frontend_url: Self::get_env_or("FRONTEND_URL", "http://localhost:3000"),
            upload_dir: Self::get_env_or("UPLOAD_DIR", "uploads"),
            mail: MailConfig {
                api_key: Self::get_env("MAIL_API_KEY"),
                endpoint: Self::get_env_or("MAIL_ENDPOINT", "https://api.resend.com/emails"),
                from: Self::get_env_or("MAIL_FROM", "noreply@modubook.example"),
            },
            books: BookApiConfig {
                api_key: Self::get_env_or("ALADIN_API_KEY", "ttbkey1"),
                endpoint: Self::get_env_or(
                    "ALADIN_API_URL",
                    "http://www.aladin.co.kr/ttb/api/ItemSearch.aspx",
                ),
            },
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}

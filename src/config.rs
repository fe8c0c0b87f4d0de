use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub session_secret: String,
    pub cookie_secure: bool,
    pub admin: Option<AdminSeed>,
}

/// Staff account upserted at startup so a fresh database can be logged into.
#[derive(Clone, Debug)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_opt(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.trim().is_empty())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let db_url: String = Self::get_env("DATABASE_URL");
        let session_secret: String = Self::get_env("SESSION_SECRET");
        let app_env = Self::get_env_opt("APP_ENV").unwrap_or_else(|| "development".to_string());

        let admin = match (Self::get_env_opt("ADMIN_EMAIL"), Self::get_env_opt("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminSeed {
                email,
                password,
                name: Self::get_env_opt("ADMIN_NAME").unwrap_or_else(|| "Administrator".to_string()),
            }),
            _ => None,
        };

        EnvConfig {
            port: Self::get_env_opt("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            db_url,
            session_secret,
            cookie_secure: app_env == "production",
            admin,
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}

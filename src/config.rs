use sqlx::mysql::MySqlConnectOptions;

/// Runtime mode. Anything other than `production` counts as development,
/// which unlocks detailed error bodies in API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, Environment::Development)
    }
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl DbConfig {
    /// Options for the application pool, with the database selected.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        self.server_options().database(&self.name)
    }

    /// Server-level options without a database, used by the seed step to
    /// issue `CREATE DATABASE IF NOT EXISTS` before the schema exists.
    pub fn server_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db: DbConfig,
    pub port: u16,
    pub env: Environment,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let db = DbConfig {
            host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".into()),
            port: std::env::var("DB_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(3306),
            user: std::env::var("DB_USER").unwrap_or_else(|_| "root".into()),
            password: std::env::var("DB_PASSWORD").unwrap_or_default(),
            name: std::env::var("DB_NAME").unwrap_or_else(|_| "avivo_users".into()),
        };
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);
        let env = std::env::var("APP_ENV")
            .map(|v| Environment::parse(&v))
            .unwrap_or(Environment::Development);
        Self { db, port, env }
    }
}

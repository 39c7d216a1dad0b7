use anyhow::Result;

pub struct AppConfig {
    pub database: DatabaseConfig,
    /// Platform id of the operator that should always hold a
    /// root-capable role. Read from `BOOTSTRAP_ROOT_PLATFORM_ID`.
    pub bootstrap_root_platform_id: Option<i64>,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST").unwrap_or_else(|_| "localhost".into()),
            port: std::env::var("DATABASE_PORT")
                .unwrap_or_else(|_| "5432".into())
                .parse()?,
            username: std::env::var("DATABASE_USERNAME").unwrap_or_else(|_| "app".into()),
            password: std::env::var("DATABASE_PASSWORD").unwrap_or_else(|_| "passwd".into()),
            database: std::env::var("DATABASE_NAME").unwrap_or_else(|_| "app".into()),
        };
        let bootstrap_root_platform_id = match std::env::var("BOOTSTRAP_ROOT_PLATFORM_ID") {
            Err(_) => None,
            Ok(v) => Some(v.parse()?),
        };
        Ok(Self {
            database,
            bootstrap_root_platform_id,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

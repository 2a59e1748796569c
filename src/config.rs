use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    /// Id of the category holding truck logos and customer uploads.
    pub truck_sign_category_id: i32,
    pub auto_migrate: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let cors_allowed_origins = parse_origins(
            &env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        );
        let truck_sign_category_id = match env::var("TRUCK_SIGN_CATEGORY_ID") {
            Ok(raw) => raw.trim().parse::<i32>().map_err(|e| {
                anyhow::anyhow!("TRUCK_SIGN_CATEGORY_ID must be an integer id: {e}")
            })?,
            Err(_) => 1,
        };
        let auto_migrate = env::var("AUTO_MIGRATE")
            .map(|v| !matches!(v.trim(), "0" | "false" | "no"))
            .unwrap_or(true);
        Ok(Self {
            port,
            database_url,
            host,
            cors_allowed_origins,
            truck_sign_category_id,
            auto_migrate,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

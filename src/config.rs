use std::env;

/// Runtime configuration, read once at startup.
pub struct Config {
    pub bind_addr: String,
    /// When absent the server runs on the in-memory backend.
    pub database_url: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            bind_addr: var_or("BIND_ADDR", "0.0.0.0:8080"),
            database_url: env::var("DATABASE_URL")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        log::info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

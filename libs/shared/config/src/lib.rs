use std::env;
use std::path::PathBuf;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub port: u16,
    pub cors_origin: String,
    pub watch_interval_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            data_path: env::var("DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    warn!("DATA_PATH not set, using data/items.json");
                    PathBuf::from("data/items.json")
                }),
            port: env::var("PORT")
                .ok()
                .and_then(|value| match value.parse() {
                    Ok(port) => Some(port),
                    Err(_) => {
                        warn!("PORT is not a valid port number, using 3001");
                        None
                    }
                })
                .unwrap_or(3001),
            cors_origin: env::var("CORS_ORIGIN").unwrap_or_else(|_| {
                warn!("CORS_ORIGIN not set, using http://localhost:3000");
                "http://localhost:3000".to_string()
            }),
            watch_interval_ms: env::var("WATCH_INTERVAL_MS")
                .ok()
                .and_then(|value| match value.parse() {
                    Ok(interval) if interval > 0 => Some(interval),
                    _ => {
                        warn!("WATCH_INTERVAL_MS is not a valid interval, using 2000");
                        None
                    }
                })
                .unwrap_or(2000),
        }
    }
}

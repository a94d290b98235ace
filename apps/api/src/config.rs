use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every knob has a default, so the service starts without a .env file.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Destination of the JSON dump of the most recently saved résumé.
    pub save_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            save_path: std::env::var("RESUME_SAVE_PATH")
                .unwrap_or_else(|_| "saved_resume.json".to_string()),
        })
    }
}

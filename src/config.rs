use crate::utils::get_data_dir;
use serde::{Deserialize, Serialize};

/// Default directory server for a locally running fleet console
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Application configuration persisted between runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the label directory service
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
        }
    }
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

/// Saves the app config to disk using an atomic write pattern.
/// 1. Writes to a temporary file.
/// 2. Sets restrictive permissions (0o600).
/// 3. Atomically renames to the target path.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O to avoid blocking the event loop.
pub async fn save_config(config: &AppConfig) -> std::io::Result<()> {
    if let Some(mut path) = get_data_dir() {
        let json = serde_json::to_string_pretty(config)?;

        let mut temp_path = path.clone();
        temp_path.push("config.json.tmp");

        path.push("config.json");

        // Create the file with restrictive permissions before any data lands
        #[cfg(unix)]
        {
            use tokio::fs::OpenOptions;
            use tokio::io::AsyncWriteExt;

            let mut file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .mode(0o600)
                .open(&temp_path)
                .await?;

            file.write_all(json.as_bytes()).await?;
            file.sync_all().await?;
        }

        #[cfg(not(unix))]
        {
            use tokio::io::AsyncWriteExt;

            let mut file = tokio::fs::File::create(&temp_path).await?;
            file.write_all(json.as_bytes()).await?;
            file.sync_all().await?;
        }

        tokio::fs::rename(temp_path, path).await?;
    }
    Ok(())
}

/// Loads the app config from disk, or returns default if not found.
///
/// # Async
/// Uses `tokio::fs` for non-blocking I/O to avoid blocking the event loop.
pub async fn load_config() -> AppConfig {
    if let Some(mut path) = get_data_dir() {
        path.push("config.json");
        if let Ok(json) = tokio::fs::read_to_string(&path).await
            && let Ok(config) = serde_json::from_str::<AppConfig>(&json)
        {
            return config;
        }
    }
    AppConfig::default()
}

/// Synchronous wrapper for `load_config()` for use during startup initialization.
///
/// This blocks the current thread and should only be used where async
/// initialization isn't possible. Everywhere else should use async `load_config()`.
pub fn load_config_blocking() -> AppConfig {
    if let Ok(handle) = tokio::runtime::Handle::try_current() {
        handle.block_on(load_config())
    } else {
        tokio::runtime::Runtime::new()
            .expect("Failed to create runtime")
            .block_on(load_config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_falls_back_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn config_round_trips() {
        let config = AppConfig {
            server_url: "https://fleet.example.com:8443".to_string(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.server_url, config.server_url);
    }
}

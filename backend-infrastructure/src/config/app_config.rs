use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::RuntimeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub events_path: String,
    pub locations_path: String,
    pub backup_dir: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3310".to_string(),
            events_path: "./data/events.json".to_string(),
            locations_path: "./data/locations.json".to_string(),
            backup_dir: "./backups".to_string(),
            max_body_bytes: 8 * 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("EVENTDESK_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.resolve_paths(base_dir);
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.validate()?;
        Ok(config)
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.events_path = resolve_path(base, &self.events_path);
        self.locations_path = resolve_path(base, &self.locations_path);
        self.backup_dir = resolve_path(base, &self.backup_dir);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.events_path.trim().is_empty() {
            return Err(anyhow!("events_path must not be empty"));
        }
        if self.locations_path.trim().is_empty() {
            return Err(anyhow!("locations_path must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("EVENTDESK_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("EVENTDESK_EVENTS_PATH") {
            self.events_path = value;
        }
        if let Ok(value) = env::var("EVENTDESK_LOCATIONS_PATH") {
            self.locations_path = value;
        }
        if let Ok(value) = env::var("EVENTDESK_BACKUP_DIR") {
            self.backup_dir = value;
        }
        if let Ok(value) = env::var("EVENTDESK_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Ok(value) = env::var("EVENTDESK_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

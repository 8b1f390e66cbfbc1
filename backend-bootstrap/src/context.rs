use std::sync::Arc;

use anyhow::Result;

use backend_application::AppState;
use backend_infrastructure::{AppConfig, JsonFileStore};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();

        let store = Arc::new(JsonFileStore::new(
            &config.events_path,
            &config.locations_path,
        ));

        let state = AppState::new(runtime_config, store.clone(), store);
        Ok(Self { state })
    }
}

pub mod context;
pub mod lifecycle;

pub use lifecycle::run_standalone;

use backend_infrastructure::{maintenance, AppConfig};

pub async fn run() -> anyhow::Result<()> {
    run_standalone().await
}

pub async fn normalize_dates() -> anyhow::Result<()> {
    let config = AppConfig::load().await?;
    maintenance::normalize_event_dates(&config).await
}

pub async fn remap_ids() -> anyhow::Result<()> {
    let config = AppConfig::load().await?;
    maintenance::remap_ids(&config).await
}

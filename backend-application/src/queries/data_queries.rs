use chrono::Utc;

use backend_domain::services::csv_codec;
use backend_domain::AllDataExport;

use crate::{AppError, AppState};

const EXPORT_FORMAT_VERSION: &str = "1.0";

/// The stored events collection, pretty-printed exactly as persisted.
pub async fn export_events_json(state: &AppState) -> Result<String, AppError> {
    let events = state.event_repo.load().await?;
    let json = serde_json::to_string_pretty(&events).map_err(anyhow::Error::from)?;
    Ok(json)
}

pub async fn export_locations_json(state: &AppState) -> Result<String, AppError> {
    let locations = state.location_repo.load().await?;
    let json = serde_json::to_string_pretty(&locations).map_err(anyhow::Error::from)?;
    Ok(json)
}

pub async fn export_all(state: &AppState) -> Result<AllDataExport, AppError> {
    let events = state.event_repo.load().await?;
    let locations = state.location_repo.load().await?;
    Ok(AllDataExport {
        events,
        locations,
        export_date: Utc::now().to_rfc3339(),
        version: EXPORT_FORMAT_VERSION.to_string(),
    })
}

pub async fn export_events_csv(state: &AppState) -> Result<String, AppError> {
    let events = state.event_repo.load().await?;
    let locations = state.location_repo.load().await?;
    let csv = csv_codec::events_to_csv(&events, &locations).map_err(anyhow::Error::from)?;
    Ok(csv)
}

pub async fn export_locations_csv(state: &AppState) -> Result<String, AppError> {
    let locations = state.location_repo.load().await?;
    let csv = csv_codec::locations_to_csv(&locations).map_err(anyhow::Error::from)?;
    Ok(csv)
}

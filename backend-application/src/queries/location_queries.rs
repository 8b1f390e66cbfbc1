use backend_domain::Location;

use crate::{AppError, AppState};

pub async fn list_locations(state: &AppState) -> Result<Vec<Location>, AppError> {
    let locations = state.location_repo.load().await?;
    Ok(locations)
}

pub async fn get_location(state: &AppState, id: &str) -> Result<Location, AppError> {
    let locations = state.location_repo.load().await?;
    locations
        .into_iter()
        .find(|location| location.id == id)
        .ok_or_else(|| AppError::NotFound("Location not found".to_string()))
}

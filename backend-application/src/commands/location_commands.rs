use backend_domain::services::id_alloc;
use backend_domain::{Location, LocationDraft, LocationPatch};

use crate::{AppError, AppState};

pub async fn create_location(state: &AppState, draft: LocationDraft) -> Result<Location, AppError> {
    let _guard = state.locations_lock.lock().await;
    let mut locations = state.location_repo.load().await?;

    let ids: Vec<&str> = locations.iter().map(|location| location.id.as_str()).collect();
    let location = Location {
        id: id_alloc::next_id(&ids),
        name: draft.name,
        address: draft.address,
        lat: draft.lat,
        lng: draft.lng,
        description: draft.description,
    };

    locations.push(location.clone());
    state.location_repo.replace(&locations).await?;
    Ok(location)
}

pub async fn update_location(
    state: &AppState,
    id: &str,
    patch: LocationPatch,
) -> Result<Location, AppError> {
    let _guard = state.locations_lock.lock().await;
    let mut locations = state.location_repo.load().await?;

    let Some(location) = locations.iter_mut().find(|location| location.id == id) else {
        return Err(AppError::NotFound("Location not found".to_string()));
    };
    location.apply(patch);
    let updated = location.clone();

    state.location_repo.replace(&locations).await?;
    Ok(updated)
}

pub async fn delete_location(state: &AppState, id: &str) -> Result<(), AppError> {
    let _guard = state.locations_lock.lock().await;
    let mut locations = state.location_repo.load().await?;

    let before = locations.len();
    locations.retain(|location| location.id != id);
    if locations.len() == before {
        return Err(AppError::NotFound("Location not found".to_string()));
    }

    state.location_repo.replace(&locations).await?;
    Ok(())
}

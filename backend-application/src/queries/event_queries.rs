use std::collections::HashMap;

use anyhow::anyhow;
use tracing::warn;

use backend_domain::services::ordering;
use backend_domain::{EventWithLocation, Location};

use crate::{AppError, AppState};

/// Chronologically sorted listing. An event with no venue reference is an
/// online event and is served without one; an event whose reference does not
/// resolve is dropped from the listing.
pub async fn list_events(state: &AppState) -> Result<Vec<EventWithLocation>, AppError> {
    let events = state.event_repo.load().await?;
    let locations = state.location_repo.load().await?;
    let by_id: HashMap<&str, &Location> = locations
        .iter()
        .map(|location| (location.id.as_str(), location))
        .collect();

    let mut listed = Vec::with_capacity(events.len());
    for event in events {
        let location = match event.location_id.as_deref() {
            Some(location_id) => match by_id.get(location_id) {
                Some(location) => Some((*location).clone()),
                None => {
                    warn!(
                        "dropping event {} from listing: location {} not found",
                        event.id, location_id
                    );
                    continue;
                }
            },
            None => None,
        };
        listed.push(EventWithLocation { event, location });
    }

    ordering::sort_events(&mut listed);
    Ok(listed)
}

/// Single lookup. Unlike the listing, a dangling venue reference here is a
/// hard failure.
pub async fn get_event(state: &AppState, id: &str) -> Result<EventWithLocation, AppError> {
    let events = state.event_repo.load().await?;
    let Some(event) = events.into_iter().find(|event| event.id == id) else {
        return Err(AppError::NotFound("Event not found".to_string()));
    };

    let location = match event.location_id.as_deref() {
        Some(location_id) => {
            let locations = state.location_repo.load().await?;
            let Some(location) = locations.into_iter().find(|location| location.id == location_id)
            else {
                return Err(AppError::Internal(anyhow!(
                    "location {} not found for event {}",
                    location_id,
                    id
                )));
            };
            Some(location)
        }
        None => None,
    };

    Ok(EventWithLocation { event, location })
}

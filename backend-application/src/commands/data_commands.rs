// Bulk import: every variant validates first, then replaces the whole
// destination collection. Storage is never touched when validation fails.

use backend_domain::services::csv_codec;
use backend_domain::{coordinates_in_range, BulkImportReport, Event, ImportReport, Location};

use crate::{AppError, AppState};

pub async fn import_events(state: &AppState, events: Vec<Event>) -> Result<ImportReport, AppError> {
    validate_events(&events)?;

    let _guard = state.events_lock.lock().await;
    state.event_repo.replace(&events).await?;
    Ok(import_report("events", events.len()))
}

pub async fn import_locations(
    state: &AppState,
    locations: Vec<Location>,
) -> Result<ImportReport, AppError> {
    validate_locations(&locations)?;

    let _guard = state.locations_lock.lock().await;
    state.location_repo.replace(&locations).await?;
    Ok(import_report("locations", locations.len()))
}

pub async fn import_all(
    state: &AppState,
    events: Vec<Event>,
    locations: Vec<Location>,
) -> Result<BulkImportReport, AppError> {
    validate_events(&events)?;
    validate_locations(&locations)?;

    let _events_guard = state.events_lock.lock().await;
    let _locations_guard = state.locations_lock.lock().await;
    state.event_repo.replace(&events).await?;
    state.location_repo.replace(&locations).await?;

    Ok(BulkImportReport {
        success: true,
        message: format!(
            "imported {} events and {} locations",
            events.len(),
            locations.len()
        ),
        events_count: events.len(),
        locations_count: locations.len(),
    })
}

pub async fn import_events_csv(state: &AppState, csv_data: &str) -> Result<ImportReport, AppError> {
    let events =
        csv_codec::events_from_csv(csv_data).map_err(|err| AppError::BadRequest(err.to_string()))?;

    let _guard = state.events_lock.lock().await;
    state.event_repo.replace(&events).await?;
    Ok(import_report("events", events.len()))
}

pub async fn import_locations_csv(
    state: &AppState,
    csv_data: &str,
) -> Result<ImportReport, AppError> {
    let locations = csv_codec::locations_from_csv(csv_data)
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let _guard = state.locations_lock.lock().await;
    state.location_repo.replace(&locations).await?;
    Ok(import_report("locations", locations.len()))
}

fn import_report(noun: &str, count: usize) -> ImportReport {
    ImportReport {
        success: true,
        message: format!("imported {count} {noun}"),
        count,
    }
}

fn validate_events(events: &[Event]) -> Result<(), AppError> {
    for event in events {
        if event.id.is_empty() || event.title.is_empty() || event.date.is_empty() {
            return Err(AppError::BadRequest(
                "an event is missing required fields (id, title, date)".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_locations(locations: &[Location]) -> Result<(), AppError> {
    for location in locations {
        if location.id.is_empty()
            || location.name.is_empty()
            || !coordinates_in_range(location.lat, location.lng)
        {
            return Err(AppError::BadRequest(
                "a location is missing required fields (id, name, lat, lng)".to_string(),
            ));
        }
    }
    Ok(())
}

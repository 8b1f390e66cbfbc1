use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use backend_application::commands::event_commands;
use backend_application::queries::event_queries;
use backend_application::AppState;
use backend_domain::{Event, EventDraft, EventPatch, EventWithLocation};

use crate::error::HttpError;

pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventWithLocation>>, HttpError> {
    let events = event_queries::list_events(&state)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to fetch events"))?;
    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventWithLocation>, HttpError> {
    let event = event_queries::get_event(&state, &id)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to fetch event"))?;
    Ok(Json(event))
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<EventDraft>,
) -> Result<(StatusCode, Json<Event>), HttpError> {
    let event = event_commands::create_event(&state, draft)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to create event"))?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> Result<Json<Event>, HttpError> {
    let event = event_commands::update_event(&state, &id, patch)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to update event"))?;
    Ok(Json(event))
}

pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    event_commands::delete_event(&state, &id)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to delete event"))?;
    Ok(StatusCode::NO_CONTENT)
}

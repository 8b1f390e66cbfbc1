use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use backend_application::commands::location_commands;
use backend_application::queries::location_queries;
use backend_application::AppState;
use backend_domain::{Location, LocationDraft, LocationPatch};

use crate::error::HttpError;

pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<Location>>, HttpError> {
    let locations = location_queries::list_locations(&state)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to fetch locations"))?;
    Ok(Json(locations))
}

pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Location>, HttpError> {
    let location = location_queries::get_location(&state, &id)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to fetch location"))?;
    Ok(Json(location))
}

pub async fn create_location(
    State(state): State<AppState>,
    Json(draft): Json<LocationDraft>,
) -> Result<(StatusCode, Json<Location>), HttpError> {
    let location = location_commands::create_location(&state, draft)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to create location"))?;
    Ok((StatusCode::CREATED, Json(location)))
}

pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<LocationPatch>,
) -> Result<Json<Location>, HttpError> {
    let location = location_commands::update_location(&state, &id, patch)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to update location"))?;
    Ok(Json(location))
}

pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    location_commands::delete_location(&state, &id)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to delete location"))?;
    Ok(StatusCode::NO_CONTENT)
}

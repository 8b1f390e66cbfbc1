use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use backend_application::commands::data_commands;
use backend_application::queries::data_queries;
use backend_application::AppState;
use backend_domain::{
    AllImportPayload, BulkImportReport, CsvImportPayload, EventsImportPayload, ImportReport,
    LocationsImportPayload,
};

use crate::error::HttpError;

// JSON exports

pub async fn export_events(State(state): State<AppState>) -> Result<impl IntoResponse, HttpError> {
    let json = data_queries::export_events_json(&state)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to export events"))?;
    Ok(attachment("application/json", "events_export.json", json))
}

pub async fn export_locations(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, HttpError> {
    let json = data_queries::export_locations_json(&state)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to export locations"))?;
    Ok(attachment("application/json", "locations_export.json", json))
}

pub async fn export_all(State(state): State<AppState>) -> Result<impl IntoResponse, HttpError> {
    let export = data_queries::export_all(&state)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to export all data"))?;
    Ok((
        [(
            header::CONTENT_DISPOSITION,
            attachment_disposition("all_data_export.json"),
        )],
        Json(export),
    ))
}

// CSV exports

pub async fn export_events_csv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, HttpError> {
    let csv = data_queries::export_events_csv(&state)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to export events CSV"))?;
    Ok(attachment("text/csv; charset=utf-8", "events_export.csv", csv))
}

pub async fn export_locations_csv(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, HttpError> {
    let csv = data_queries::export_locations_csv(&state)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to export locations CSV"))?;
    Ok(attachment("text/csv; charset=utf-8", "locations_export.csv", csv))
}

// JSON imports
//
// Bodies are taken as raw JSON first so a malformed payload is a 400
// validation error, not a framework rejection.

pub async fn import_events(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ImportReport>, HttpError> {
    let payload: EventsImportPayload = parse_payload(body, "events must be an array")?;
    let report = data_commands::import_events(&state, payload.events)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to import events"))?;
    Ok(Json(report))
}

pub async fn import_locations(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ImportReport>, HttpError> {
    let payload: LocationsImportPayload = parse_payload(body, "locations must be an array")?;
    let report = data_commands::import_locations(&state, payload.locations)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to import locations"))?;
    Ok(Json(report))
}

pub async fn import_all(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<BulkImportReport>, HttpError> {
    let payload: AllImportPayload =
        parse_payload(body, "events and locations must both be arrays")?;
    let report = data_commands::import_all(&state, payload.events, payload.locations)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to import all data"))?;
    Ok(Json(report))
}

// CSV imports

pub async fn import_events_csv(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ImportReport>, HttpError> {
    let payload: CsvImportPayload = parse_payload(body, "csvData is required")?;
    let report = data_commands::import_events_csv(&state, &payload.csv_data)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to import events CSV"))?;
    Ok(Json(report))
}

pub async fn import_locations_csv(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ImportReport>, HttpError> {
    let payload: CsvImportPayload = parse_payload(body, "csvData is required")?;
    let report = data_commands::import_locations_csv(&state, &payload.csv_data)
        .await
        .map_err(|err| HttpError::from_app(err, "Failed to import locations CSV"))?;
    Ok(Json(report))
}

fn parse_payload<T: serde::de::DeserializeOwned>(
    body: Value,
    message: &str,
) -> Result<T, HttpError> {
    serde_json::from_value(body).map_err(|_| HttpError::BadRequest(message.to_string()))
}

fn attachment(content_type: &'static str, filename: &str, body: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, attachment_disposition(filename)),
        ],
        body,
    )
}

fn attachment_disposition(filename: &str) -> String {
    format!("attachment; filename=\"{filename}\"")
}

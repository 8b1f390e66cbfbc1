// Wire payloads and runtime configuration shared across layers

use serde::{Deserialize, Serialize};

use super::event::Event;
use super::location::Location;

/// Body of `POST /api/data/import/events`.
#[derive(Debug, Deserialize)]
pub struct EventsImportPayload {
    pub events: Vec<Event>,
}

/// Body of `POST /api/data/import/locations`.
#[derive(Debug, Deserialize)]
pub struct LocationsImportPayload {
    pub locations: Vec<Location>,
}

/// Body of `POST /api/data/import/all`.
#[derive(Debug, Deserialize)]
pub struct AllImportPayload {
    pub events: Vec<Event>,
    pub locations: Vec<Location>,
}

/// Body of the CSV import endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvImportPayload {
    pub csv_data: String,
}

#[derive(Debug, Serialize)]
pub struct ImportReport {
    pub success: bool,
    pub message: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkImportReport {
    pub success: bool,
    pub message: String,
    pub events_count: usize,
    pub locations_count: usize,
}

/// Envelope of `GET /api/data/export/all`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllDataExport {
    pub events: Vec<Event>,
    pub locations: Vec<Location>,
    pub export_date: String,
    pub version: String,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

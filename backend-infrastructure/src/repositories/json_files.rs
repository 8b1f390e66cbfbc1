use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;

use backend_domain::{Event, EventRepository, Location, LocationRepository};

/// JSON-array file store: one file per collection, pretty-printed, rewritten
/// wholesale. Writes land in a temp file first and are renamed into place so
/// a crash mid-write never leaves a truncated collection.
pub struct JsonFileStore {
    events_path: PathBuf,
    locations_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(events_path: impl Into<PathBuf>, locations_path: impl Into<PathBuf>) -> Self {
        Self {
            events_path: events_path.into(),
            locations_path: locations_path.into(),
        }
    }
}

async fn load_collection<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path).await?;
    let records: Vec<T> = serde_json::from_str(&content)?;
    Ok(records)
}

async fn replace_collection<T: Serialize>(path: &Path, records: &[T]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    let content = serde_json::to_string_pretty(records)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

#[async_trait]
impl EventRepository for JsonFileStore {
    async fn load(&self) -> anyhow::Result<Vec<Event>> {
        load_collection(&self.events_path).await
    }

    async fn replace(&self, events: &[Event]) -> anyhow::Result<()> {
        replace_collection(&self.events_path, events).await
    }
}

#[async_trait]
impl LocationRepository for JsonFileStore {
    async fn load(&self) -> anyhow::Result<Vec<Location>> {
        load_collection(&self.locations_path).await
    }

    async fn replace(&self, locations: &[Location]) -> anyhow::Result<()> {
        replace_collection(&self.locations_path, locations).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> JsonFileStore {
        JsonFileStore::new(dir.join("events.json"), dir.join("locations.json"))
    }

    #[tokio::test]
    async fn missing_file_loads_as_empty_collection() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(dir.path());
        let events = EventRepository::load(&store).await.expect("load");
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn replace_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(dir.path());

        let events = vec![Event {
            id: "1".to_string(),
            title: "座禅会".to_string(),
            date: "2025/11/16".to_string(),
            start_time: "09:00".to_string(),
            location_id: Some("2".to_string()),
            ..Event::default()
        }];
        EventRepository::replace(&store, &events).await.expect("replace");

        let loaded = EventRepository::load(&store).await.expect("load");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "1");
        assert_eq!(loaded[0].location_id.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn replace_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(
            dir.path().join("data/events.json"),
            dir.path().join("data/locations.json"),
        );
        let locations = vec![Location {
            id: "1".to_string(),
            name: "建長寺".to_string(),
            lat: 35.3376,
            lng: 139.5532,
            ..Location::default()
        }];
        LocationRepository::replace(&store, &locations)
            .await
            .expect("replace");

        let loaded = LocationRepository::load(&store).await.expect("load");
        assert_eq!(loaded[0].name, "建長寺");
    }

    #[tokio::test]
    async fn no_temp_file_remains_after_replace() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(dir.path());
        EventRepository::replace(&store, &[]).await.expect("replace");
        assert!(dir.path().join("events.json").exists());
        assert!(!dir.path().join("events.json.tmp").exists());
    }
}

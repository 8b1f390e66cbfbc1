// One-shot maintenance routines run from the CLI against the data files.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use chrono::Local;
use tokio::fs;
use tracing::info;

use backend_domain::services::normalize;
use backend_domain::{Event, EventRepository, Location, LocationRepository};

use crate::config::AppConfig;
use crate::repositories::JsonFileStore;

/// Rewrite every event date into the canonical separator form, reporting
/// each change.
pub async fn normalize_event_dates(config: &AppConfig) -> Result<()> {
    let store = JsonFileStore::new(&config.events_path, &config.locations_path);
    let mut events: Vec<Event> = EventRepository::load(&store).await?;

    let mut changed = 0;
    for event in &mut events {
        let normalized = normalize::normalize_date(&event.date);
        if normalized != event.date {
            info!("updated {}: \"{}\" -> \"{}\"", event.id, event.date, normalized);
            event.date = normalized;
            changed += 1;
        }
    }

    EventRepository::replace(&store, &events).await?;
    info!(
        "date normalization completed: {} total, {} updated, {} unchanged",
        events.len(),
        changed,
        events.len() - changed
    );
    Ok(())
}

/// Replace oversized identifiers (anything that is not 1-2 decimal digits)
/// with fresh sequential ids, keeping event venue references consistent.
/// Both data files are backed up first.
pub async fn remap_ids(config: &AppConfig) -> Result<()> {
    let store = JsonFileStore::new(&config.events_path, &config.locations_path);
    let mut events: Vec<Event> = EventRepository::load(&store).await?;
    let mut locations: Vec<Location> = LocationRepository::load(&store).await?;

    info!("current data: {} events, {} locations", events.len(), locations.len());

    let event_ids: Vec<String> = events.iter().map(|event| event.id.clone()).collect();
    let location_ids: Vec<String> = locations.iter().map(|location| location.id.clone()).collect();
    let event_mapping = build_id_mapping(&event_ids);
    let location_mapping = build_id_mapping(&location_ids);

    if event_mapping.is_empty() && location_mapping.is_empty() {
        info!("all identifiers already compact, nothing to do");
        return Ok(());
    }
    for (old, new) in &event_mapping {
        info!("event id {} -> {}", old, new);
    }
    for (old, new) in &location_mapping {
        info!("location id {} -> {}", old, new);
    }

    let timestamp = Local::now().format("%Y-%m-%dT%H-%M-%S").to_string();
    backup_file(Path::new(&config.events_path), Path::new(&config.backup_dir), "events", &timestamp)
        .await?;
    backup_file(
        Path::new(&config.locations_path),
        Path::new(&config.backup_dir),
        "locations",
        &timestamp,
    )
    .await?;

    for event in &mut events {
        if let Some(new_id) = event_mapping.get(&event.id) {
            event.id = new_id.clone();
        }
        if let Some(location_id) = &event.location_id {
            if let Some(new_id) = location_mapping.get(location_id) {
                event.location_id = Some(new_id.clone());
            }
        }
    }
    for location in &mut locations {
        if let Some(new_id) = location_mapping.get(&location.id) {
            location.id = new_id.clone();
        }
    }

    EventRepository::replace(&store, &events).await?;
    LocationRepository::replace(&store, &locations).await?;
    info!("identifier remapping completed");
    Ok(())
}

/// A compact identifier: 1-2 decimal digits.
fn is_compact_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= 2 && id.chars().all(|ch| ch.is_ascii_digit())
}

/// Position-based mapping for every identifier that is not compact.
fn build_id_mapping(ids: &[String]) -> HashMap<String, String> {
    ids.iter()
        .enumerate()
        .filter(|(_, id)| !is_compact_id(id))
        .map(|(index, id)| (id.clone(), (index + 1).to_string()))
        .collect()
}

async fn backup_file(path: &Path, backup_dir: &Path, label: &str, timestamp: &str) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    fs::create_dir_all(backup_dir).await?;
    let target = backup_dir.join(format!("{label}_backup_{timestamp}.json"));
    fs::copy(path, &target).await?;
    info!("backup written to {}", target.display());
    Ok(())
}

use std::sync::Arc;

use backend_domain::ports::{EventRepository, LocationRepository};
use backend_domain::RuntimeConfig;
use tokio::sync::Mutex;

/// Shared application state.
///
/// Every mutation is a full read-modify-write of one backing collection; the
/// per-collection mutexes serialize those cycles so concurrent writers
/// cannot lose each other's updates.
#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub event_repo: Arc<dyn EventRepository>,
    pub location_repo: Arc<dyn LocationRepository>,
    pub events_lock: Arc<Mutex<()>>,
    pub locations_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(
        config: RuntimeConfig,
        event_repo: Arc<dyn EventRepository>,
        location_repo: Arc<dyn LocationRepository>,
    ) -> Self {
        Self {
            config,
            event_repo,
            location_repo,
            events_lock: Arc::new(Mutex::new(())),
            locations_lock: Arc::new(Mutex::new(())),
        }
    }
}

use async_trait::async_trait;

use crate::entities::{Event, Location};

// A collection is read and replaced as a whole; the stored array is the
// unit of consistency.

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn load(&self) -> anyhow::Result<Vec<Event>>;
    async fn replace(&self, events: &[Event]) -> anyhow::Result<()>;
}

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn load(&self) -> anyhow::Result<Vec<Location>>;
    async fn replace(&self, locations: &[Location]) -> anyhow::Result<()>;
}

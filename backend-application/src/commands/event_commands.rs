use backend_domain::services::{id_alloc, normalize};
use backend_domain::{Event, EventDraft, EventPatch};

use crate::{AppError, AppState};

pub async fn create_event(state: &AppState, draft: EventDraft) -> Result<Event, AppError> {
    let _guard = state.events_lock.lock().await;
    let mut events = state.event_repo.load().await?;

    let ids: Vec<&str> = events.iter().map(|event| event.id.as_str()).collect();
    let event = Event {
        id: id_alloc::next_id(&ids),
        title: draft.title,
        description: draft.description,
        date: normalize::normalize_date(&draft.date),
        start_time: draft.start_time,
        end_time: draft.end_time,
        location_id: draft.location_id,
        status: draft.status,
        category: draft.category,
        event_url: draft.event_url,
    };

    events.push(event.clone());
    state.event_repo.replace(&events).await?;
    Ok(event)
}

pub async fn update_event(state: &AppState, id: &str, patch: EventPatch) -> Result<Event, AppError> {
    let _guard = state.events_lock.lock().await;
    let mut events = state.event_repo.load().await?;

    let Some(event) = events.iter_mut().find(|event| event.id == id) else {
        return Err(AppError::NotFound("Event not found".to_string()));
    };
    event.apply(patch);
    event.date = normalize::normalize_date(&event.date);
    let updated = event.clone();

    state.event_repo.replace(&events).await?;
    Ok(updated)
}

pub async fn delete_event(state: &AppState, id: &str) -> Result<(), AppError> {
    let _guard = state.events_lock.lock().await;
    let mut events = state.event_repo.load().await?;

    let before = events.len();
    events.retain(|event| event.id != id);
    if events.len() == before {
        return Err(AppError::NotFound("Event not found".to_string()));
    }

    state.event_repo.replace(&events).await?;
    Ok(())
}

use axum::Router;

use backend_application::AppState;

use crate::handlers::{data_handlers, event_handlers, location_handlers, meta_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api", axum::routing::get(meta_handlers::service_info))
        .route("/api/health", axum::routing::get(meta_handlers::health))
        .route(
            "/api/events",
            axum::routing::get(event_handlers::list_events).post(event_handlers::create_event),
        )
        .route(
            "/api/events/:id",
            axum::routing::get(event_handlers::get_event)
                .put(event_handlers::update_event)
                .delete(event_handlers::delete_event),
        )
        .route(
            "/api/locations",
            axum::routing::get(location_handlers::list_locations)
                .post(location_handlers::create_location),
        )
        .route(
            "/api/locations/:id",
            axum::routing::get(location_handlers::get_location)
                .put(location_handlers::update_location)
                .delete(location_handlers::delete_location),
        )
        .route(
            "/api/data/export/events",
            axum::routing::get(data_handlers::export_events),
        )
        .route(
            "/api/data/export/locations",
            axum::routing::get(data_handlers::export_locations),
        )
        .route(
            "/api/data/export/all",
            axum::routing::get(data_handlers::export_all),
        )
        .route(
            "/api/data/export/events/csv",
            axum::routing::get(data_handlers::export_events_csv),
        )
        .route(
            "/api/data/export/locations/csv",
            axum::routing::get(data_handlers::export_locations_csv),
        )
        .route(
            "/api/data/import/events",
            axum::routing::post(data_handlers::import_events),
        )
        .route(
            "/api/data/import/locations",
            axum::routing::post(data_handlers::import_locations),
        )
        .route(
            "/api/data/import/all",
            axum::routing::post(data_handlers::import_all),
        )
        .route(
            "/api/data/import/events/csv",
            axum::routing::post(data_handlers::import_events_csv),
        )
        .route(
            "/api/data/import/locations/csv",
            axum::routing::post(data_handlers::import_locations_csv),
        )
        .with_state(state)
}

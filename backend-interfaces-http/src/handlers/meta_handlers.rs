use axum::Json;
use serde_json::{json, Value};

pub async fn service_info() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "Eventdesk API",
        "version": "1.0.0",
        "endpoints": {
            "health": "/api/health",
            "events": {
                "getAll": "GET /api/events",
                "getById": "GET /api/events/:id",
                "create": "POST /api/events",
                "update": "PUT /api/events/:id",
                "delete": "DELETE /api/events/:id"
            },
            "locations": {
                "getAll": "GET /api/locations",
                "getById": "GET /api/locations/:id",
                "create": "POST /api/locations",
                "update": "PUT /api/locations/:id",
                "delete": "DELETE /api/locations/:id"
            },
            "data": {
                "export": "GET /api/data/export/{events,locations,all}[/csv]",
                "import": "POST /api/data/import/{events,locations,all}[/csv]"
            }
        }
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "OK", "message": "Eventdesk API is running" }))
}

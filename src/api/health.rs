use axum::response::{Html, Json};
use serde_json::{json, Value};

pub async fn welcome() -> Html<&'static str> {
    Html("<h1>Welcome to Fitness Database</h1>")
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "fitness-center",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

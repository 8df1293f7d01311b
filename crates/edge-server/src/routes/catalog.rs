use axum::extract::Path;
use axum::Json;
use edge_core::error::EdgeError;
use edge_core::routing::find_config;

use crate::error::AppError;

/// GET /__edge/routes — summary of the route config catalog.
pub async fn list_routes() -> Json<serde_json::Value> {
    let entries: Vec<serde_json::Value> = edge_core::catalog::route_configs()
        .iter()
        .map(|c| {
            serde_json::json!({
                "name": c.name,
                "matcher": c.matcher.kind(),
                "quickActions": c.quick_actions.len(),
            })
        })
        .collect();
    Json(serde_json::Value::Array(entries))
}

/// GET /__edge/routes/{name} — one route config by name, unfiltered.
pub async fn get_route(Path(name): Path<String>) -> Result<Json<serde_json::Value>, AppError> {
    let config = find_config(&name)
        .ok_or_else(|| AppError(EdgeError::RouteNotFound(name.clone()).into()))?;
    Ok(Json(serde_json::json!({
        "name": config.name,
        "matcher": config.matcher.kind(),
        "systemPrompt": config.system_prompt,
        "quickActions": config.quick_actions,
    })))
}

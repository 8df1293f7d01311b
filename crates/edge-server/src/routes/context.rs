use axum::extract::Query;
use axum::Json;
use edge_core::actions::{filter_actions, SessionContext};
use edge_core::routing::resolve_config;
use edge_core::types::Role;
use serde::Deserialize;

use crate::error::AppError;

#[derive(Deserialize)]
pub struct ContextQuery {
    pub path: String,
    #[serde(default)]
    pub authenticated: Option<bool>,
    #[serde(default)]
    pub role: Option<String>,
}

/// GET /__edge/context — resolve a path to its route config and return the
/// quick actions visible to the given session.
///
/// A `role` parameter implies an authenticated session unless
/// `authenticated=false` is passed explicitly.
pub async fn get_context(Query(q): Query<ContextQuery>) -> Result<Json<serde_json::Value>, AppError> {
    let role = match q.role.as_deref() {
        Some(r) => r.parse::<Role>()?,
        None => Role::Guest,
    };
    let session = SessionContext {
        is_authenticated: q.authenticated.unwrap_or(q.role.is_some()),
        role,
    };

    let config = resolve_config(&q.path);
    let actions = filter_actions(&config.quick_actions, &session);

    Ok(Json(serde_json::json!({
        "route": config.name,
        "matcher": config.matcher.kind(),
        "systemPrompt": config.system_prompt,
        "quickActions": actions,
    })))
}

use axum::extract::{Query, State};
use axum::Json;
use edge_core::rewrite::resolve_request;
use edge_core::routing::resolve_config;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ResolveQuery {
    pub host: String,
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default)]
    pub subdomain: Option<String>,
}

fn default_path() -> String {
    "/".to_string()
}

/// GET /__edge/resolve — trace a hostname and path through subdomain
/// resolution and report the route config the effective path lands on.
pub async fn resolve(
    State(app): State<AppState>,
    Query(q): Query<ResolveQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let resolution = resolve_request(&q.host, &q.path, q.subdomain.as_deref(), &app.cfg);
    let route = resolve_config(resolution.effective_path()).name;

    let mut value = serde_json::to_value(&resolution)?;
    value["route"] = serde_json::Value::String(route.to_string());
    Ok(Json(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use edge_core::config::EdgeConfig;

    fn query(host: &str, path: &str) -> Query<ResolveQuery> {
        Query(ResolveQuery {
            host: host.to_string(),
            path: path.to_string(),
            subdomain: None,
        })
    }

    #[tokio::test]
    async fn hub_host_root_lands_on_hub_home() {
        let app = AppState::new(EdgeConfig::default());
        let Json(value) = resolve(State(app), query("coach.yoohoo.guru", "/"))
            .await
            .unwrap();
        assert_eq!(value["subdomain"], "coach");
        assert_eq!(value["decision"]["action"], "rewrite");
        assert_eq!(value["decision"]["path"], "/_apps/coach");
        assert_eq!(value["route"], "hub-home");
    }

    #[tokio::test]
    async fn apex_host_passes_through() {
        let app = AppState::new(EdgeConfig::default());
        let Json(value) = resolve(State(app), query("yoohoo.guru", "/dashboard"))
            .await
            .unwrap();
        assert_eq!(value["subdomain"], "www");
        assert_eq!(value["decision"]["action"], "pass_through");
        assert_eq!(value["route"], "dashboard");
    }
}

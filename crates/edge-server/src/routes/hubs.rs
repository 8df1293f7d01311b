use axum::extract::{Path, State};
use axum::Json;
use edge_core::error::EdgeError;
use edge_core::hubs::{self, HubEntry};
use edge_core::subdomain::Subdomain;
use edge_core::types::Category;
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HubView {
    pub id: &'static str,
    pub label: &'static str,
    pub subdomain: &'static str,
    pub emoji: &'static str,
    pub category: Category,
    pub url: String,
    pub has_standard_pages: bool,
}

/// GET /__edge/hubs — the full hub registry, with resolved category and URL.
pub async fn list_hubs(State(app): State<AppState>) -> Json<Vec<HubView>> {
    let views = hubs::HUBS
        .iter()
        .map(|h| view(h, &app.cfg.root_domain))
        .collect();
    Json(views)
}

/// GET /__edge/hubs/{subdomain} — one hub by its subdomain.
pub async fn get_hub(
    State(app): State<AppState>,
    Path(subdomain): Path<String>,
) -> Result<Json<HubView>, AppError> {
    let hub = hubs::find_hub(&subdomain)
        .ok_or_else(|| AppError(EdgeError::HubNotFound(subdomain.clone()).into()))?;
    Ok(Json(view(hub, &app.cfg.root_domain)))
}

fn view(hub: &HubEntry, root_domain: &str) -> HubView {
    let category = Subdomain::lookup(hub.subdomain)
        .map(|s| s.category())
        .unwrap_or(Category::Content);
    HubView {
        id: hub.id,
        label: hub.label,
        subdomain: hub.subdomain,
        emoji: hub.emoji,
        category,
        url: hubs::hub_url(hub.subdomain, root_domain),
        has_standard_pages: hubs::has_standard_pages(hub.subdomain),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_resolves_category_and_url() {
        let hub = hubs::find_hub("coach").unwrap();
        let v = view(hub, "yoohoo.guru");
        assert_eq!(v.category, Category::Core);
        assert_eq!(v.url, "https://coach.yoohoo.guru");
        assert!(v.has_standard_pages);
    }

    #[test]
    fn view_marks_exempt_hubs() {
        let hub = hubs::find_hub("auto").unwrap();
        let v = view(hub, "yoohoo.guru");
        assert!(!v.has_standard_pages);
    }

    #[tokio::test]
    async fn get_hub_unknown_subdomain_errors() {
        let app = AppState::new(edge_core::config::EdgeConfig::default());
        let result = get_hub(State(app), Path("not-a-hub".to_string())).await;
        assert!(result.is_err());
    }
}

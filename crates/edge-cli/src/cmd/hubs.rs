use std::path::Path;

use edge_core::hubs::{self, HUBS};
use edge_core::subdomain::Subdomain;
use edge_core::types::Category;

use crate::cmd::load_or_default;
use crate::output;

pub fn run(config_path: &Path, json: bool) -> anyhow::Result<()> {
    let cfg = load_or_default(config_path)?;

    if json {
        let entries: Vec<serde_json::Value> = HUBS
            .iter()
            .map(|h| {
                serde_json::json!({
                    "id": h.id,
                    "label": h.label,
                    "subdomain": h.subdomain,
                    "emoji": h.emoji,
                    "category": category_of(h.subdomain),
                    "url": hubs::hub_url(h.subdomain, &cfg.root_domain),
                    "hasStandardPages": hubs::has_standard_pages(h.subdomain),
                })
            })
            .collect();
        return output::print_json(&entries);
    }

    let rows: Vec<Vec<String>> = HUBS
        .iter()
        .map(|h| {
            vec![
                h.subdomain.to_string(),
                format!("{} {}", h.emoji, h.label),
                category_of(h.subdomain).as_str().to_string(),
                hubs::hub_url(h.subdomain, &cfg.root_domain),
            ]
        })
        .collect();
    output::print_table(&["SUBDOMAIN", "LABEL", "CATEGORY", "URL"], rows);
    Ok(())
}

fn category_of(subdomain: &str) -> Category {
    Subdomain::lookup(subdomain)
        .map(|s| s.category())
        .unwrap_or(Category::Content)
}

use std::path::Path;

use edge_core::actions::{filter_actions, SessionContext};
use edge_core::rewrite::resolve_request;
use edge_core::routing::resolve_config;
use edge_core::types::Role;

use crate::cmd::load_or_default;
use crate::output;

pub fn run(
    config_path: &Path,
    host: &str,
    path: &str,
    subdomain: Option<&str>,
    authenticated: bool,
    role: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let cfg = load_or_default(config_path)?;
    let resolution = resolve_request(host, path, subdomain, &cfg);
    let config = resolve_config(resolution.effective_path());

    // Naming a role implies an authenticated session; --authenticated alone
    // simulates a signed-in user whose role the frontend has not loaded yet.
    let session = match role {
        Some(r) => SessionContext::authenticated(r.parse::<Role>()?),
        None if authenticated => SessionContext {
            is_authenticated: true,
            role: Role::Guest,
        },
        None => SessionContext::guest(),
    };
    let actions = filter_actions(&config.quick_actions, &session);

    if json {
        let mut value = serde_json::to_value(&resolution)?;
        value["route"] = serde_json::Value::String(config.name.to_string());
        value["quickActions"] = serde_json::to_value(&actions)?;
        return output::print_json(&value);
    }

    println!("host:      {}", resolution.hostname);
    println!(
        "subdomain: {} ({})",
        resolution.subdomain.as_str(),
        resolution.category.as_str()
    );
    match resolution.decision.rewritten_path() {
        Some(p) => println!("decision:  rewrite -> {}", p),
        None => println!("decision:  pass-through"),
    }
    println!("route:     {}", config.name);
    println!();
    println!("Quick actions:");
    for action in &actions {
        println!(
            "  {} {} -> {}",
            action.icon,
            action.label,
            action.target.as_route_str()
        );
    }
    Ok(())
}

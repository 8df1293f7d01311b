use edge_core::catalog;
use edge_core::error::EdgeError;
use edge_core::routing::{find_config, PathMatcher, RouteConfig};

use crate::output;

pub fn run(name: Option<&str>, json: bool) -> anyhow::Result<()> {
    match name {
        Some(n) => show(n, json),
        None => list(json),
    }
}

fn list(json: bool) -> anyhow::Result<()> {
    let table = catalog::route_configs();

    if json {
        let entries: Vec<serde_json::Value> = table
            .iter()
            .map(|c| {
                serde_json::json!({
                    "name": c.name,
                    "matcher": c.matcher.kind(),
                    "quickActions": c.quick_actions.len(),
                })
            })
            .collect();
        return output::print_json(&entries);
    }

    let rows: Vec<Vec<String>> = table
        .iter()
        .map(|c| {
            vec![
                c.name.to_string(),
                describe_matcher(&c.matcher),
                c.quick_actions.len().to_string(),
            ]
        })
        .collect();
    output::print_table(&["NAME", "MATCHER", "ACTIONS"], rows);
    Ok(())
}

fn show(name: &str, json: bool) -> anyhow::Result<()> {
    let config = find_config(name).ok_or_else(|| EdgeError::RouteNotFound(name.to_string()))?;

    if json {
        return output::print_json(&serde_json::json!({
            "name": config.name,
            "matcher": config.matcher.kind(),
            "systemPrompt": config.system_prompt,
            "quickActions": config.quick_actions,
        }));
    }

    println!("name:    {}", config.name);
    println!("matcher: {}", describe_matcher(&config.matcher));
    println!("prompt:  {}", config.system_prompt);
    println!();
    print_actions(config);
    Ok(())
}

fn describe_matcher(matcher: &PathMatcher) -> String {
    match matcher {
        PathMatcher::Literal(p) => p.to_string(),
        PathMatcher::Pattern(re) => re.as_str().to_string(),
        PathMatcher::Predicate(_) => "<predicate>".to_string(),
        PathMatcher::Any => "*".to_string(),
    }
}

fn print_actions(config: &RouteConfig) {
    if config.quick_actions.is_empty() {
        println!("No quick actions.");
        return;
    }
    println!("Quick actions:");
    for action in &config.quick_actions {
        let mut notes = Vec::new();
        if action.requires_auth {
            notes.push("auth".to_string());
        }
        if !action.allowed_roles.is_empty() {
            let roles: Vec<&str> = action.allowed_roles.iter().map(|r| r.as_str()).collect();
            notes.push(format!("roles: {}", roles.join(", ")));
        }
        let suffix = if notes.is_empty() {
            String::new()
        } else {
            format!("  [{}]", notes.join("; "))
        };
        println!(
            "  {} {} -> {}{}",
            action.icon,
            action.label,
            action.target.as_route_str(),
            suffix
        );
    }
}

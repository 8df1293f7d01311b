//! Consistency checks for the static tables.
//!
//! The hub registry and the route catalog are compiled in, so a broken entry
//! ships with the binary. `validate_tables` runs the same invariants a code
//! review would and reports them as warnings, letting `yoohoo-edge check`
//! fail the build pipeline instead of production traffic.

use crate::actions::ActionTarget;
use crate::catalog;
use crate::config::{ConfigWarning, WarnLevel};
use crate::hubs;
use crate::routing::PathMatcher;

pub fn validate_tables() -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    check_hub_registry(&mut warnings);
    check_route_catalog(&mut warnings);
    warnings
}

fn check_hub_registry(warnings: &mut Vec<ConfigWarning>) {
    // 1. Subdomains must be unique and DNS-label shaped (lowercase
    //    alphanumeric). A duplicate would make lookup order-dependent.
    for (i, hub) in hubs::HUBS.iter().enumerate() {
        if hubs::HUBS
            .iter()
            .skip(i + 1)
            .any(|other| other.subdomain == hub.subdomain)
        {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("duplicate hub subdomain '{}'", hub.subdomain),
            });
        }
        if hub.subdomain.is_empty()
            || !hub
                .subdomain
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!(
                    "hub subdomain '{}' is not a lowercase alphanumeric label",
                    hub.subdomain
                ),
            });
        }
        if hub.label.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("hub '{}' has an empty label", hub.subdomain),
            });
        }
    }

    // 2. System subdomains are routed specially and must never shadow a hub.
    for sys in hubs::SYSTEM_SUBDOMAINS {
        if hubs::find_hub(sys).is_some() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("system subdomain '{sys}' collides with a hub entry"),
            });
        }
    }

    // 3. The standard-pages exemption list must name real hubs, otherwise an
    //    entry is dead weight or a typo.
    for sub in hubs::HUBS_WITHOUT_STANDARD_PAGES {
        if hubs::find_hub(sub).is_none() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "standard-pages exemption '{sub}' does not match any hub"
                ),
            });
        }
    }
}

fn check_route_catalog(warnings: &mut Vec<ConfigWarning>) {
    let table = catalog::route_configs();

    // 1. Exactly one catch-all entry, and it must terminate the table so
    //    every lookup resolves.
    let any_positions: Vec<usize> = table
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c.matcher, PathMatcher::Any))
        .map(|(i, _)| i)
        .collect();
    match any_positions.as_slice() {
        [last] if *last == table.len() - 1 => {}
        [] => warnings.push(ConfigWarning {
            level: WarnLevel::Error,
            message: "route catalog has no catch-all entry".to_string(),
        }),
        _ => warnings.push(ConfigWarning {
            level: WarnLevel::Error,
            message: "route catalog catch-all must be the single last entry".to_string(),
        }),
    }

    for (i, config) in table.iter().enumerate() {
        // 2. Names are the lookup key for tooling; duplicates hide entries.
        if table.iter().skip(i + 1).any(|c| c.name == config.name) {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!("duplicate route config name '{}'", config.name),
            });
        }

        if config.system_prompt.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("route '{}' has an empty system prompt", config.name),
            });
        }
        if config.quick_actions.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("route '{}' has no quick actions", config.name),
            });
        }

        for action in &config.quick_actions {
            // 3. A role gate without an auth gate can never pass: role checks
            //    assume an authenticated session.
            if !action.allowed_roles.is_empty() && !action.requires_auth {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "route '{}': action '{}' lists roles but does not require auth",
                        config.name, action.label
                    ),
                });
            }
            // 4. Internal targets render as site-relative links or anchors.
            if let ActionTarget::Internal(path) = action.target {
                if !path.starts_with('/') && !path.starts_with('#') {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Warning,
                        message: format!(
                            "route '{}': action '{}' targets '{}', which is neither \
                             site-relative nor an anchor",
                            config.name, action.label, path
                        ),
                    });
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

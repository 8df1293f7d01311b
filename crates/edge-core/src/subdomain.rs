//! Hostname to subdomain resolution.
//!
//! Resolution is total: any hostname, however malformed, maps to a valid
//! subdomain, with `www` as the universal fallback. Routing must never turn
//! a strange Host header into an error page.

use crate::config::EdgeConfig;
use crate::hubs::{self, HubEntry, SYSTEM_SUBDOMAINS};
use crate::types::{Category, DeployEnv};
use serde::{Serialize, Serializer};
use std::fmt;

/// Subdomain serving the main site, and the fallback for every hostname
/// that does not name a valid hub.
pub const DEFAULT_SUBDOMAIN: &str = "www";

// ---------------------------------------------------------------------------
// Subdomain
// ---------------------------------------------------------------------------

/// A validated subdomain. Only constructible from the static registry, so
/// holding one proves the name is routable; the inner str is the canonical
/// interned spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subdomain(&'static str);

impl Subdomain {
    pub const WWW: Subdomain = Subdomain(DEFAULT_SUBDOMAIN);

    /// Look up a name in the registry. Matches hubs and system subdomains;
    /// anything else is unroutable.
    pub fn lookup(name: &str) -> Option<Subdomain> {
        if let Some(sys) = SYSTEM_SUBDOMAINS.iter().find(|s| **s == name) {
            return Some(Subdomain(sys));
        }
        hubs::find_hub(name).map(|h| Subdomain(h.subdomain))
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }

    /// True for `www`, the subdomain whose paths are served as-is.
    pub fn is_default(self) -> bool {
        self.0 == DEFAULT_SUBDOMAIN
    }

    pub fn hub(self) -> Option<&'static HubEntry> {
        hubs::find_hub(self.0)
    }

    pub fn category(self) -> Category {
        match self.0 {
            "www" => Category::Main,
            "coach" | "angel" | "heroes" | "dashboard" => Category::Core,
            "tech" | "coding" | "data" => Category::Technology,
            "art" | "design" | "music" | "photography" | "writing" | "crafts" => {
                Category::Creative
            }
            "business" | "marketing" | "sales" | "finance" | "investing" => {
                Category::Professional
            }
            "language" | "math" | "science" | "history" => Category::Education,
            "fitness" | "cooking" | "wellness" | "gardening" | "home" => Category::Lifestyle,
            "auto" | "mechanical" | "sports" => Category::Specialized,
            _ => Category::Content,
        }
    }
}

impl fmt::Display for Subdomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for Subdomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0)
    }
}

// ---------------------------------------------------------------------------
// Hostname resolution
// ---------------------------------------------------------------------------

/// Resolve a raw Host header to a subdomain.
///
/// Rules, in order:
/// 1. Hosts under the root domain: the first DNS label when the host has at
///    least three, otherwise the apex is the main site.
/// 2. Loopback hosts: `www`, unless running in development and the request
///    carried a `subdomain` query override.
/// 3. Hosts under the preview domain: preview deployments always collapse
///    to `www`; production aliases embed the subdomain in the first label
///    ahead of the project suffix.
/// 4. Anything else: `www`.
///
/// Whatever a rule extracts is validated against the registry; unknown
/// names fall back to `www`.
pub fn resolve_subdomain(
    hostname: &str,
    dev_override: Option<&str>,
    cfg: &EdgeConfig,
) -> Subdomain {
    // Hostnames are case-insensitive; ports are never routing-significant.
    let normalized = hostname.trim().to_ascii_lowercase();
    let host = normalized.split(':').next().unwrap_or("");

    let candidate = if !cfg.root_domain.is_empty() && host.contains(cfg.root_domain.as_str()) {
        first_label(host).unwrap_or(DEFAULT_SUBDOMAIN).to_string()
    } else if host.contains("localhost") || host.contains("127.0.0.1") {
        match dev_override {
            Some(name) if cfg.deploy_env.is_development() => name.trim().to_ascii_lowercase(),
            _ => DEFAULT_SUBDOMAIN.to_string(),
        }
    } else if !cfg.preview.domain.is_empty() && host.contains(cfg.preview.domain.as_str()) {
        preview_label(host, cfg).to_string()
    } else {
        DEFAULT_SUBDOMAIN.to_string()
    };

    Subdomain::lookup(&candidate).unwrap_or(Subdomain::WWW)
}

/// First DNS label, only when the host has enough labels to carry a
/// subdomain: "coach.yoohoo.guru" has three, the apex "yoohoo.guru" two.
fn first_label(host: &str) -> Option<&str> {
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() >= 3 {
        Some(labels[0])
    } else {
        None
    }
}

/// Preview-platform hosts look like "coach-yoohoo-abc123.vercel.app": the
/// target subdomain is whatever precedes the project suffix in the first
/// label. Branch previews are not per-subdomain, so they serve the main
/// site.
fn preview_label<'a>(host: &'a str, cfg: &EdgeConfig) -> &'a str {
    if cfg.deploy_env == DeployEnv::Preview {
        return DEFAULT_SUBDOMAIN;
    }
    match first_label(host) {
        Some(label) => label
            .split(cfg.preview.project_suffix.as_str())
            .next()
            .unwrap_or(label),
        None => DEFAULT_SUBDOMAIN,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hubs::HUBS;

    fn cfg() -> EdgeConfig {
        EdgeConfig::default()
    }

    fn dev_cfg() -> EdgeConfig {
        EdgeConfig {
            deploy_env: DeployEnv::Development,
            ..EdgeConfig::default()
        }
    }

    #[test]
    fn hub_subdomain_from_root_domain() {
        assert_eq!(
            resolve_subdomain("coach.yoohoo.guru", None, &cfg()).as_str(),
            "coach"
        );
        assert_eq!(
            resolve_subdomain("dashboard.yoohoo.guru", None, &cfg()).as_str(),
            "dashboard"
        );
    }

    #[test]
    fn apex_resolves_to_www() {
        assert_eq!(
            resolve_subdomain("yoohoo.guru", None, &cfg()),
            Subdomain::WWW
        );
        assert_eq!(
            resolve_subdomain("www.yoohoo.guru", None, &cfg()),
            Subdomain::WWW
        );
    }

    #[test]
    fn unknown_label_falls_back_to_www() {
        assert_eq!(
            resolve_subdomain("blog.yoohoo.guru", None, &cfg()),
            Subdomain::WWW
        );
        // Deeply nested labels extract the leftmost, which is not a hub.
        assert_eq!(
            resolve_subdomain("a.b.yoohoo.guru", None, &cfg()),
            Subdomain::WWW
        );
    }

    #[test]
    fn lookalike_domain_is_not_trusted() {
        // Contains the root domain as a substring but the first label is
        // not a registered hub.
        assert_eq!(
            resolve_subdomain("yoohoo.guru.evil.example", None, &cfg()),
            Subdomain::WWW
        );
    }

    #[test]
    fn hostname_is_case_and_port_insensitive() {
        assert_eq!(
            resolve_subdomain("COACH.YooHoo.GURU", None, &cfg()).as_str(),
            "coach"
        );
        assert_eq!(
            resolve_subdomain("coach.yoohoo.guru:8443", None, &cfg()).as_str(),
            "coach"
        );
    }

    #[test]
    fn localhost_defaults_to_www() {
        assert_eq!(
            resolve_subdomain("localhost:3000", None, &cfg()),
            Subdomain::WWW
        );
        assert_eq!(
            resolve_subdomain("127.0.0.1:3000", None, &cfg()),
            Subdomain::WWW
        );
    }

    #[test]
    fn dev_override_honored_only_in_development() {
        assert_eq!(
            resolve_subdomain("localhost:3000", Some("tech"), &dev_cfg()).as_str(),
            "tech"
        );
        // Same override outside development is ignored.
        assert_eq!(
            resolve_subdomain("localhost:3000", Some("tech"), &cfg()),
            Subdomain::WWW
        );
        // Invalid override degrades to www.
        assert_eq!(
            resolve_subdomain("localhost:3000", Some("nope"), &dev_cfg()),
            Subdomain::WWW
        );
    }

    #[test]
    fn preview_deploys_collapse_to_www() {
        let preview = EdgeConfig {
            deploy_env: DeployEnv::Preview,
            ..EdgeConfig::default()
        };
        assert_eq!(
            resolve_subdomain("coach-yoohoo-abc123.vercel.app", None, &preview),
            Subdomain::WWW
        );
    }

    #[test]
    fn production_alias_on_preview_domain_extracts_subdomain() {
        assert_eq!(
            resolve_subdomain("coach-yoohoo-abc123.vercel.app", None, &cfg()).as_str(),
            "coach"
        );
        // Project names without the suffix do not name a hub.
        assert_eq!(
            resolve_subdomain("otherapp-abc123.vercel.app", None, &cfg()),
            Subdomain::WWW
        );
        // Bare preview domain has no label to extract.
        assert_eq!(
            resolve_subdomain("vercel.app", None, &cfg()),
            Subdomain::WWW
        );
    }

    #[test]
    fn unrelated_and_malformed_hosts_resolve_to_www() {
        assert_eq!(
            resolve_subdomain("example.com", None, &cfg()),
            Subdomain::WWW
        );
        assert_eq!(resolve_subdomain("", None, &cfg()), Subdomain::WWW);
        assert_eq!(resolve_subdomain("   ", None, &cfg()), Subdomain::WWW);
        assert_eq!(resolve_subdomain("[::1]:3000", None, &cfg()), Subdomain::WWW);
    }

    #[test]
    fn lookup_interns_canonical_str() {
        let sub = Subdomain::lookup("coach").unwrap();
        assert_eq!(sub.as_str(), "coach");
        assert_eq!(sub.hub().unwrap().label, "Coaching");
        assert!(Subdomain::lookup("Coach").is_none());
        assert!(Subdomain::lookup("").is_none());
    }

    #[test]
    fn categories_match_grouping() {
        assert_eq!(Subdomain::WWW.category(), Category::Main);
        assert_eq!(Subdomain::lookup("coach").unwrap().category(), Category::Core);
        assert_eq!(
            Subdomain::lookup("dashboard").unwrap().category(),
            Category::Core
        );
        assert_eq!(
            Subdomain::lookup("coding").unwrap().category(),
            Category::Technology
        );
        assert_eq!(
            Subdomain::lookup("sports").unwrap().category(),
            Category::Specialized
        );
    }

    #[test]
    fn every_hub_has_a_specific_category() {
        // Content is the forward-compat catch-all; today's registry maps
        // every hub to a named group.
        for hub in HUBS {
            let sub = Subdomain::lookup(hub.subdomain).unwrap();
            assert_ne!(sub.category(), Category::Content, "{}", hub.subdomain);
        }
    }

    #[test]
    fn subdomain_serializes_as_plain_string() {
        let sub = Subdomain::lookup("coach").unwrap();
        assert_eq!(serde_json::to_string(&sub).unwrap(), "\"coach\"");
    }
}

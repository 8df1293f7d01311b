//! Route config resolution.
//!
//! Every pathname maps to exactly one route config from the catalog. The
//! resolver runs kind-ordered passes so an exact path always beats a
//! pattern, and a pattern always beats a predicate, regardless of where
//! each entry sits in the table. Within one pass, table order decides.

use crate::actions::QuickAction;
use crate::catalog;
use regex::Regex;

// ---------------------------------------------------------------------------
// PathMatcher
// ---------------------------------------------------------------------------

/// How a route config claims pathnames. Exactly one variant per config.
pub enum PathMatcher {
    /// Matches one exact pathname.
    Literal(&'static str),
    /// Matches by regular expression.
    Pattern(Regex),
    /// Matches by arbitrary test, for rules a regex states poorly.
    Predicate(fn(&str) -> bool),
    /// Matches everything. The catalog's terminal fallback is the only
    /// entry using this.
    Any,
}

impl PathMatcher {
    pub fn kind(&self) -> &'static str {
        match self {
            PathMatcher::Literal(_) => "literal",
            PathMatcher::Pattern(_) => "pattern",
            PathMatcher::Predicate(_) => "predicate",
            PathMatcher::Any => "any",
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathMatcher::Literal(p) => *p == path,
            PathMatcher::Pattern(re) => re.is_match(path),
            PathMatcher::Predicate(test) => test(path),
            PathMatcher::Any => true,
        }
    }
}

// ---------------------------------------------------------------------------
// RouteConfig
// ---------------------------------------------------------------------------

/// Per-page context bundle: the quick actions offered on that page and the
/// behavior text for the page's assistant.
pub struct RouteConfig {
    pub name: &'static str,
    pub matcher: PathMatcher,
    pub quick_actions: Vec<QuickAction>,
    pub system_prompt: &'static str,
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve a pathname to its route config. Total: unmatched paths land on
/// the catalog's fallback entry.
pub fn resolve_config(path: &str) -> &'static RouteConfig {
    let table = catalog::route_configs();

    for config in table {
        if let PathMatcher::Literal(p) = &config.matcher {
            if *p == path {
                return config;
            }
        }
    }

    for config in table {
        if let PathMatcher::Pattern(re) = &config.matcher {
            if re.is_match(path) {
                return config;
            }
        }
    }

    for config in table {
        if let PathMatcher::Predicate(test) = &config.matcher {
            if test(path) {
                return config;
            }
        }
    }

    catalog::fallback_config()
}

/// Look up a route config by name rather than by path.
pub fn find_config(name: &str) -> Option<&'static RouteConfig> {
    catalog::route_configs().iter().find(|c| c.name == name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_paths_resolve_first() {
        assert_eq!(resolve_config("/").name, "home");
        assert_eq!(resolve_config("/dashboard").name, "dashboard");
        assert_eq!(resolve_config("/skills").name, "skills");
        // Literal wins over the jobs predicate.
        assert_eq!(resolve_config("/jobs/post").name, "job-posting");
    }

    #[test]
    fn patterns_resolve_after_literals() {
        assert_eq!(resolve_config("/admin").name, "admin");
        assert_eq!(resolve_config("/admin/users").name, "admin");
        assert_eq!(resolve_config("/privacy").name, "legal");
        assert_eq!(resolve_config("/cookies").name, "legal");
        assert_eq!(resolve_config("/skills/guitar").name, "skill-subject");
        assert_eq!(resolve_config("/guru/profile/edit").name, "guru-profile");
        assert_eq!(resolve_config("/guru/abc123/book-session").name, "book-session");
        assert_eq!(resolve_config("/guru/abc123/ratings").name, "guru-ratings");
        assert_eq!(resolve_config("/session/xyz/video").name, "session-video");
    }

    #[test]
    fn predicates_resolve_last() {
        assert_eq!(resolve_config("/jobs").name, "job-browsing");
        assert_eq!(resolve_config("/jobs?remote=true").name, "job-browsing");
        assert_eq!(resolve_config("/onboarding/step-2").name, "onboarding");
        assert_eq!(resolve_config("/profiles/someone").name, "public-profile");
        assert_eq!(resolve_config("/disputes/42").name, "disputes");
    }

    #[test]
    fn apps_tree_paths_resolve_to_hub_configs() {
        assert_eq!(resolve_config("/_apps/tech").name, "hub-home");
        assert_eq!(resolve_config("/_apps/cooking").name, "hub-home");
        assert_eq!(resolve_config("/_apps/tech/blog").name, "hub-blog");
        assert_eq!(resolve_config("/_apps/tech/blog/rust-tips").name, "hub-blog-post");
    }

    #[test]
    fn blog_literal_vs_pattern() {
        assert_eq!(resolve_config("/blog").name, "blog");
        assert_eq!(resolve_config("/blog/launch-week").name, "blog-post");
    }

    #[test]
    fn unmatched_paths_hit_the_fallback() {
        assert_eq!(resolve_config("/no/such/page").name, "fallback");
        assert_eq!(resolve_config("").name, "fallback");
        assert_eq!(resolve_config("not-even-a-path").name, "fallback");
    }

    #[test]
    fn resolution_is_stable() {
        // Same input, same config identity (pointer equality).
        let a = resolve_config("/jobs");
        let b = resolve_config("/jobs");
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn find_config_by_name() {
        assert!(find_config("admin").is_some());
        assert!(find_config("no-such-config").is_none());
    }

    #[test]
    fn matcher_kinds() {
        assert_eq!(PathMatcher::Literal("/x").kind(), "literal");
        assert_eq!(PathMatcher::Any.kind(), "any");
        assert!(PathMatcher::Any.matches("/anything/at/all"));
    }
}

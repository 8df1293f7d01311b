//! Path rewriting for hub subdomains.
//!
//! Requests to a hub subdomain are internally rewritten under the `/_apps`
//! tree so one upstream app can serve every hub. The decision layer is pure:
//! it never touches the network, and like subdomain resolution it is total.
//! A path we do not understand is passed through untouched.

use crate::config::EdgeConfig;
use crate::subdomain::{resolve_subdomain, Subdomain};
use crate::types::Category;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Internal tree hub requests are rewritten into.
pub const APPS_PREFIX: &str = "/_apps";

/// Path prefixes that bypass rewriting on every subdomain: framework and
/// asset namespaces, auth flows, and the edge's own API.
pub const RESERVED_PREFIXES: &[&str] = &[
    "/api",
    "/_next",
    "/favicon",
    "/static",
    "/auth",
    "/__edge",
];

/// Exact paths served directly by the main site.
const WWW_PAGES: &[&str] = &[
    "/",
    "/login",
    "/signup",
    "/dashboard",
    "/privacy",
    "/terms",
    "/about",
    "/contact",
    "/browse",
    "/hubs",
    "/help",
    "/how-it-works",
    "/pricing",
    "/faq",
];

/// Path prefixes served directly by the main site.
const WWW_PREFIXES: &[&str] = &["/dashboard", "/profile", "/settings"];

// ---------------------------------------------------------------------------
// RouteDecision
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Serve the path as requested.
    PassThrough,
    /// Serve the contained internal path instead.
    Rewrite(String),
}

impl RouteDecision {
    pub fn rewritten_path(&self) -> Option<&str> {
        match self {
            RouteDecision::PassThrough => None,
            RouteDecision::Rewrite(path) => Some(path),
        }
    }

    pub fn is_rewrite(&self) -> bool {
        matches!(self, RouteDecision::Rewrite(_))
    }
}

impl Serialize for RouteDecision {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RouteDecision::PassThrough => {
                let mut st = serializer.serialize_struct("RouteDecision", 1)?;
                st.serialize_field("action", "pass_through")?;
                st.end()
            }
            RouteDecision::Rewrite(path) => {
                let mut st = serializer.serialize_struct("RouteDecision", 2)?;
                st.serialize_field("action", "rewrite")?;
                st.serialize_field("path", path)?;
                st.end()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Decision rules
// ---------------------------------------------------------------------------

/// True for paths the rewriter never touches: reserved namespaces and
/// anything with a file extension.
pub fn is_reserved_path(path: &str) -> bool {
    RESERVED_PREFIXES.iter().any(|p| path.starts_with(p)) || path.contains('.')
}

/// True for paths the main site serves directly.
pub fn is_www_page(path: &str) -> bool {
    WWW_PAGES.contains(&path) || WWW_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// Decide what to do with a request path, in order:
/// 1. Reserved paths pass through on every subdomain.
/// 2. Main-site pages pass through on `www`.
/// 3. Paths already under the apps tree pass through, so rewriting is
///    idempotent.
/// 4. Hub subdomains rewrite everything else under their apps tree.
/// 5. `www` never rewrites.
pub fn decide(subdomain: Subdomain, path: &str) -> RouteDecision {
    // A request path always begins with '/'; anything else passes through
    // rather than producing a malformed rewrite.
    if path.is_empty() || !path.starts_with('/') {
        return RouteDecision::PassThrough;
    }
    if is_reserved_path(path) {
        return RouteDecision::PassThrough;
    }
    if subdomain.is_default() && is_www_page(path) {
        return RouteDecision::PassThrough;
    }
    if path.starts_with(APPS_PREFIX) {
        return RouteDecision::PassThrough;
    }
    if !subdomain.is_default() {
        // The hub root maps to the bare apps path, not "/_apps/<sub>/".
        let rewritten = if path == "/" {
            format!("{APPS_PREFIX}/{}", subdomain.as_str())
        } else {
            format!("{APPS_PREFIX}/{}{}", subdomain.as_str(), path)
        };
        return RouteDecision::Rewrite(rewritten);
    }
    RouteDecision::PassThrough
}

// ---------------------------------------------------------------------------
// Resolution (hostname + path, combined)
// ---------------------------------------------------------------------------

/// Everything the edge derives from one request line: the resolved
/// subdomain, its category, and the rewrite decision for the path.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    pub hostname: String,
    pub path: String,
    pub subdomain: Subdomain,
    pub category: Category,
    pub decision: RouteDecision,
}

impl Resolution {
    /// The path the upstream will actually serve.
    pub fn effective_path(&self) -> &str {
        self.decision.rewritten_path().unwrap_or(&self.path)
    }
}

pub fn resolve_request(
    hostname: &str,
    path: &str,
    dev_override: Option<&str>,
    cfg: &EdgeConfig,
) -> Resolution {
    let subdomain = resolve_subdomain(hostname, dev_override, cfg);
    let decision = decide(subdomain, path);
    Resolution {
        hostname: hostname.to_string(),
        path: path.to_string(),
        subdomain,
        category: subdomain.category(),
        decision,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

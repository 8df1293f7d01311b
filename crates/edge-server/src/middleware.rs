//! Host inspection applied to every proxied request.
//!
//! Resolves the subdomain from the `Host` header, rewrites hub traffic onto
//! the apps tree, and stamps the resolution onto the request so the upstream
//! app can pick its hub context without repeating the work. The control API
//! under `/__edge` is served by this process and skips resolution entirely.

use axum::extract::{Request, State};
use axum::http::uri::PathAndQuery;
use axum::http::{header, HeaderValue, Uri};
use axum::middleware::Next;
use axum::response::Response;
use edge_core::rewrite::resolve_request;

use crate::state::AppState;

/// Request and response header carrying the resolved subdomain.
pub const SUBDOMAIN_HEADER: &str = "x-subdomain";
/// Request and response header carrying the subdomain's hub category.
pub const CATEGORY_HEADER: &str = "x-subdomain-category";
/// Development-only response header carrying the rewritten path.
pub const REWRITE_HEADER: &str = "x-edge-rewrite";

pub async fn subdomain_middleware(
    State(app): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    if req.uri().path().starts_with("/__edge") {
        return next.run(req).await;
    }

    let hostname = host_of(&req);
    let dev_override = query_param(req.uri().query(), "subdomain").map(str::to_string);
    let resolution = resolve_request(
        &hostname,
        req.uri().path(),
        dev_override.as_deref(),
        &app.cfg,
    );

    let subdomain = resolution.subdomain;
    let rewritten = resolution.decision.rewritten_path().map(str::to_string);

    if let Some(target) = &rewritten {
        // Degrade to pass-through if the rewritten path does not parse.
        if let Some(uri) = with_path(req.uri(), target) {
            *req.uri_mut() = uri;
        }
    }

    req.headers_mut().insert(
        SUBDOMAIN_HEADER,
        HeaderValue::from_static(subdomain.as_str()),
    );
    req.headers_mut().insert(
        CATEGORY_HEADER,
        HeaderValue::from_static(subdomain.category().as_str()),
    );

    let mut response = next.run(req).await;

    // Frontends read these for cross-subdomain session and nav state.
    let headers = response.headers_mut();
    headers.insert(
        SUBDOMAIN_HEADER,
        HeaderValue::from_static(subdomain.as_str()),
    );
    headers.insert(
        CATEGORY_HEADER,
        HeaderValue::from_static(subdomain.category().as_str()),
    );
    if app.cfg.deploy_env.is_development() {
        if let Some(target) = &rewritten {
            if let Ok(value) = HeaderValue::from_str(target) {
                headers.insert(REWRITE_HEADER, value);
            }
        }
    }
    response
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The request's hostname: `Host` header first, then the URI authority
/// (HTTP/2 requests may carry only `:authority`).
fn host_of(req: &Request) -> String {
    req.headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
        .or_else(|| req.uri().authority().map(|a| a.to_string()))
        .unwrap_or_default()
}

/// Swap the URI path, keeping the query string intact.
fn with_path(uri: &Uri, new_path: &str) -> Option<Uri> {
    let path_and_query = match uri.query() {
        Some(q) => format!("{new_path}?{q}"),
        None => new_path.to_string(),
    };
    let parsed: PathAndQuery = path_and_query.parse().ok()?;
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(parsed);
    Uri::from_parts(parts).ok()
}

/// Extract a raw query parameter value. Subdomain labels are plain ASCII, so
/// no percent-decoding is needed.
fn query_param<'a>(query: Option<&'a str>, key: &str) -> Option<&'a str> {
    query?.split('&').find_map(|pair| {
        pair.split_once('=')
            .filter(|(k, _)| *k == key)
            .map(|(_, v)| v)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Reverse-proxy fallback handler.
//!
//! Every request that is not part of the `/__edge` control API is forwarded
//! to the configured upstream application server, after the subdomain
//! middleware has already rewritten hub traffic onto the apps tree.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use futures::StreamExt;

use crate::state::AppState;

// Hop-by-hop headers must not be forwarded in either direction.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub async fn proxy_handler(State(app): State<AppState>, req: Request) -> Response {
    let Some(upstream) = app.cfg.upstream.clone() else {
        return text_response(
            StatusCode::BAD_GATEWAY,
            "no upstream configured; set `upstream` in edge.yaml",
        );
    };

    let upstream_url = build_upstream_uri(&upstream, req.uri());
    let method = reqwest::Method::from_bytes(req.method().as_str().as_bytes())
        .unwrap_or(reqwest::Method::GET);

    // Forward request headers, stripping host and hop-by-hop.
    let mut req_headers = reqwest::header::HeaderMap::new();
    for (name, value) in req.headers() {
        let lower = name.as_str().to_ascii_lowercase();
        if lower == "host" || HOP_BY_HOP.contains(&lower.as_str()) {
            continue;
        }
        if let (Ok(n), Ok(v)) = (
            reqwest::header::HeaderName::from_bytes(name.as_str().as_bytes()),
            reqwest::header::HeaderValue::from_bytes(value.as_bytes()),
        ) {
            req_headers.insert(n, v);
        }
    }

    // Buffer the request body (up to 10 MB).
    let body_bytes = match axum::body::to_bytes(req.into_body(), MAX_BODY_BYTES).await {
        Ok(b) => b,
        Err(_) => return text_response(StatusCode::BAD_REQUEST, "request body too large"),
    };

    let upstream_resp = match app
        .http_client
        .request(method, &upstream_url)
        .headers(req_headers)
        .body(body_bytes.to_vec())
        .send()
        .await
    {
        Ok(r) => r,
        Err(err) => {
            tracing::warn!("upstream request to {upstream_url} failed: {err}");
            return text_response(StatusCode::BAD_GATEWAY, "could not reach upstream");
        }
    };

    // Copy status and headers, stripping hop-by-hop.
    let status = StatusCode::from_u16(upstream_resp.status().as_u16())
        .unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = Response::builder().status(status);
    for (name, value) in upstream_resp.headers() {
        let lower = name.as_str().to_ascii_lowercase();
        if HOP_BY_HOP.contains(&lower.as_str()) {
            continue;
        }
        if let Ok(v) = axum::http::HeaderValue::from_bytes(value.as_bytes()) {
            builder = builder.header(name.as_str(), v);
        }
    }

    // Stream the response body without buffering.
    let stream = upstream_resp
        .bytes_stream()
        .map(|chunk| chunk.map_err(std::io::Error::other));
    builder
        .body(Body::from_stream(stream))
        .expect("infallible")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn text_response(status: StatusCode, msg: &'static str) -> Response {
    Response::builder()
        .status(status)
        .header("content-type", "text/plain")
        .body(Body::from(msg))
        .expect("infallible")
}

/// Join the upstream base URL with the request's path and query.
fn build_upstream_uri(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
    format!("{}{}", base.trim_end_matches('/'), path_and_query)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_upstream_uri_with_path_and_query() {
        let uri: Uri = "/foo/bar?baz=1".parse().unwrap();
        assert_eq!(
            build_upstream_uri("http://127.0.0.1:3000", &uri),
            "http://127.0.0.1:3000/foo/bar?baz=1"
        );
    }

    #[test]
    fn build_upstream_uri_trims_trailing_slash() {
        let uri: Uri = "/_apps/coach/about".parse().unwrap();
        assert_eq!(
            build_upstream_uri("http://app.internal/", &uri),
            "http://app.internal/_apps/coach/about"
        );
    }

    #[test]
    fn build_upstream_uri_root() {
        let uri: Uri = "/".parse().unwrap();
        assert_eq!(
            build_upstream_uri("http://127.0.0.1:3000", &uri),
            "http://127.0.0.1:3000/"
        );
    }

    #[test]
    fn hop_by_hop_list_is_lowercase() {
        assert!(HOP_BY_HOP.iter().all(|h| h.chars().all(|c| !c.is_ascii_uppercase())));
    }
}

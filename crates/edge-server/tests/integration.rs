use axum::http::StatusCode;
use edge_core::config::EdgeConfig;
use edge_core::types::DeployEnv;
use http_body_util::BodyExt;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn router() -> axum::Router {
    edge_server::build_router(EdgeConfig::default())
}

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Send a GET request with a custom Host header and return the raw response.
async fn get_with_host(
    app: axum::Router,
    uri: &str,
    host: &str,
) -> axum::http::Response<axum::body::Body> {
    let req = axum::http::Request::builder()
        .uri(uri)
        .header("host", host)
        .body(axum::body::Body::empty())
        .unwrap();
    app.oneshot(req).await.unwrap()
}

// ---------------------------------------------------------------------------
// Control API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn healthz_reports_ok() {
    let (status, json) = get(router(), "/__edge/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn hubs_lists_the_full_registry() {
    let (status, json) = get(router(), "/__edge/hubs").await;
    assert_eq!(status, StatusCode::OK);

    let hubs = json.as_array().expect("expected JSON array");
    assert_eq!(hubs.len(), 29);

    let coach = hubs
        .iter()
        .find(|h| h["subdomain"] == "coach")
        .expect("coach hub present");
    assert_eq!(coach["label"], "Coaching");
    assert_eq!(coach["category"], "core");
    assert_eq!(coach["url"], "https://coach.yoohoo.guru");
}

#[tokio::test]
async fn hub_detail_reports_standard_pages_flag() {
    let (status, json) = get(router(), "/__edge/hubs/cooking").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hasStandardPages"], true);

    let (status, json) = get(router(), "/__edge/hubs/auto").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hasStandardPages"], false);
}

#[tokio::test]
async fn hub_detail_unknown_subdomain_is_404() {
    let (status, _json) = get(router(), "/__edge/hubs/not-a-hub").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn routes_list_ends_with_fallback() {
    let (status, json) = get(router(), "/__edge/routes").await;
    assert_eq!(status, StatusCode::OK);
    let entries = json.as_array().expect("expected JSON array");
    assert_eq!(entries.last().unwrap()["name"], "fallback");
}

#[tokio::test]
async fn context_for_guest_on_admin_page_keeps_only_globals() {
    let (status, json) = get(router(), "/__edge/context?path=/admin/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["route"], "admin");
    let actions = json["quickActions"].as_array().unwrap();
    assert_eq!(actions.len(), 2);
}

#[tokio::test]
async fn context_resolves_jobs_index_by_predicate() {
    let (status, json) = get(router(), "/__edge/context?path=/jobs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["route"], "job-browsing");
    assert_eq!(json["matcher"], "predicate");
}

#[tokio::test]
async fn context_rejects_unknown_role() {
    let (status, json) = get(router(), "/__edge/context?path=/dashboard&role=superuser").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("superuser"));
}

#[tokio::test]
async fn resolve_traces_hub_host() {
    let (status, json) = get(
        router(),
        "/__edge/resolve?host=coach.yoohoo.guru&path=/book",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["subdomain"], "coach");
    assert_eq!(json["category"], "core");
    assert_eq!(json["decision"]["action"], "rewrite");
    assert_eq!(json["decision"]["path"], "/_apps/coach/book");
}

#[tokio::test]
async fn resolve_strips_preview_deployment_suffix() {
    let (status, json) = get(
        router(),
        "/__edge/resolve?host=fitness-yoohoo.vercel.app&path=/",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["subdomain"], "fitness");
    assert_eq!(json["route"], "hub-home");
}

// ---------------------------------------------------------------------------
// Middleware + proxy
// ---------------------------------------------------------------------------

#[tokio::test]
async fn proxy_without_upstream_is_502_but_still_resolves() {
    let resp = get_with_host(router(), "/book", "coach.yoohoo.guru").await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(resp.headers()["x-subdomain"], "coach");
    assert_eq!(resp.headers()["x-subdomain-category"], "core");
    // The rewrite trace header is development-only.
    assert!(resp.headers().get("x-edge-rewrite").is_none());
}

#[tokio::test]
async fn reserved_paths_are_never_rewritten() {
    // Development config, so a rewrite would be visible in x-edge-rewrite.
    let mut cfg = EdgeConfig::default();
    cfg.deploy_env = DeployEnv::Development;
    let app = edge_server::build_router(cfg);

    let resp = get_with_host(app, "/api/profile", "coach.yoohoo.guru").await;
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(resp.headers()["x-subdomain"], "coach");
    assert!(resp.headers().get("x-edge-rewrite").is_none());
}

#[tokio::test]
async fn dev_override_applies_on_localhost() {
    let mut cfg = EdgeConfig::default();
    cfg.deploy_env = DeployEnv::Development;
    let app = edge_server::build_router(cfg);

    let resp = get_with_host(app, "/about?subdomain=fitness", "localhost:3000").await;
    assert_eq!(resp.headers()["x-subdomain"], "fitness");
    assert_eq!(resp.headers()["x-edge-rewrite"], "/_apps/fitness/about");
}

#[tokio::test]
async fn dev_override_is_ignored_in_production() {
    let resp = get_with_host(router(), "/about?subdomain=fitness", "localhost:3000").await;
    assert_eq!(resp.headers()["x-subdomain"], "www");
    assert!(resp.headers().get("x-edge-rewrite").is_none());
}

#[tokio::test]
async fn proxy_forwards_rewritten_path_to_upstream() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/_apps/coach/book")
        .match_header("x-subdomain", "coach")
        .match_header("x-subdomain-category", "core")
        .with_status(200)
        .with_body("hub booking page")
        .create_async()
        .await;

    let mut cfg = EdgeConfig::default();
    cfg.upstream = Some(server.url());
    let app = edge_server::build_router(cfg);

    let resp = get_with_host(app, "/book", "coach.yoohoo.guru").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["x-subdomain"], "coach");
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"hub booking page");

    mock.assert_async().await;
}

#[tokio::test]
async fn apex_traffic_reaches_upstream_unrewritten() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/about")
        .match_header("x-subdomain", "www")
        .with_status(200)
        .with_body("about page")
        .create_async()
        .await;

    let mut cfg = EdgeConfig::default();
    cfg.upstream = Some(server.url());
    let app = edge_server::build_router(cfg);

    let resp = get_with_host(app, "/about", "www.yoohoo.guru").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"about page");

    mock.assert_async().await;
}

#[tokio::test]
async fn upstream_status_is_passed_through() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/_apps/coach/missing")
        .with_status(404)
        .with_body("not here")
        .create_async()
        .await;

    let mut cfg = EdgeConfig::default();
    cfg.upstream = Some(server.url());
    let app = edge_server::build_router(cfg);

    let resp = get_with_host(app, "/missing", "coach.yoohoo.guru").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

pub mod error;
pub mod middleware;
pub mod proxy;
pub mod routes;
pub mod state;

use axum::routing::get;
use axum::Router;
use edge_core::config::EdgeConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with the control API, the subdomain middleware, and
/// the proxy fallback. Used by `serve()` and available for integration
/// testing.
pub fn build_router(cfg: EdgeConfig) -> Router {
    let app_state = state::AppState::new(cfg);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/__edge/healthz", get(routes::health::healthz))
        .route("/__edge/hubs", get(routes::hubs::list_hubs))
        .route("/__edge/hubs/{subdomain}", get(routes::hubs::get_hub))
        .route("/__edge/routes", get(routes::catalog::list_routes))
        .route("/__edge/routes/{name}", get(routes::catalog::get_route))
        .route("/__edge/context", get(routes::context::get_context))
        .route("/__edge/resolve", get(routes::resolve::resolve))
        .fallback(proxy::proxy_handler)
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            middleware::subdomain_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// Start the edge router on the given port.
pub async fn serve(cfg: EdgeConfig, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    serve_on(cfg, listener).await
}

/// Start the edge router on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0`
/// and the OS picks a free port).
pub async fn serve_on(cfg: EdgeConfig, listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    tracing::info!(
        "edge router for '{}' listening on http://localhost:{actual_port}",
        cfg.root_domain
    );

    let app = build_router(cfg);
    axum::serve(listener, app).await?;
    Ok(())
}

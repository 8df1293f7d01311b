use std::path::Path;

use crate::cmd::load_or_default;

pub fn run(config_path: &Path, port: u16) -> anyhow::Result<()> {
    let cfg = load_or_default(config_path)?;
    for warning in cfg.validate() {
        tracing::warn!("config: {}", warning.message);
    }

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        let actual_port = listener.local_addr()?.port();

        println!(
            "yoohoo-edge router for '{}' → http://localhost:{actual_port}",
            cfg.root_domain
        );

        tokio::select! {
            res = edge_server::serve_on(cfg, listener) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}

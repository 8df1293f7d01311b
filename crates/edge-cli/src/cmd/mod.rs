use std::path::Path;

use anyhow::Context;
use edge_core::config::EdgeConfig;

pub mod check;
pub mod hubs;
pub mod init;
pub mod resolve;
pub mod routes;
pub mod serve;

/// Loads the config file at `path`, or falls back to the built-in defaults
/// when no file exists. Only the implicit default path may be absent here:
/// an explicit `--config` path is checked for existence before dispatch.
pub fn load_or_default(path: &Path) -> anyhow::Result<EdgeConfig> {
    if path.exists() {
        EdgeConfig::load(path).with_context(|| format!("loading {}", path.display()))
    } else {
        Ok(EdgeConfig::default())
    }
}

use std::path::Path;

use anyhow::Context;
use edge_core::config::EdgeConfig;

pub fn run(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        println!("{} already exists; leaving it untouched.", path.display());
        return Ok(());
    }

    let cfg = EdgeConfig::default();
    cfg.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {}.", path.display());
    Ok(())
}

use std::path::Path;

use anyhow::bail;
use edge_core::check::validate_tables;
use edge_core::config::WarnLevel;

use crate::cmd::load_or_default;
use crate::output;

pub fn run(config_path: &Path, json: bool) -> anyhow::Result<()> {
    let mut warnings = validate_tables();
    if config_path.exists() {
        let cfg = load_or_default(config_path)?;
        warnings.extend(cfg.validate());
    }

    if json {
        output::print_json(&serde_json::json!({ "warnings": warnings }))?;
    } else if warnings.is_empty() {
        println!("All tables and config are valid. No warnings.");
    } else {
        for w in &warnings {
            let tag = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{}] {}", tag, w.message);
        }
    }

    if warnings.iter().any(|w| w.level == WarnLevel::Error) {
        bail!("validation found errors");
    }
    Ok(())
}

use crate::error::{EdgeError, Result};
use crate::types::DeployEnv;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config filename, looked up in the working directory when no
/// explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "edge.yaml";

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// PreviewConfig
// ---------------------------------------------------------------------------

/// How preview-platform hostnames are interpreted. Deployment previews get
/// hostnames like `<project>-<hash>.vercel.app`; the project name embeds the
/// target subdomain as `<subdomain><project_suffix>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_preview_domain")]
    pub domain: String,
    #[serde(default = "default_project_suffix")]
    pub project_suffix: String,
}

fn default_preview_domain() -> String {
    "vercel.app".to_string()
}

fn default_project_suffix() -> String {
    "-yoohoo".to_string()
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            domain: default_preview_domain(),
            project_suffix: default_project_suffix(),
        }
    }
}

// ---------------------------------------------------------------------------
// EdgeConfig (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Apex domain all subdomains hang off, e.g. `yoohoo.guru`.
    #[serde(default = "default_root_domain")]
    pub root_domain: String,
    #[serde(default)]
    pub deploy_env: DeployEnv,
    /// Origin the server proxies rewritten requests to. When unset the
    /// server answers 502 for proxied paths; resolution endpoints still work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream: Option<String>,
    #[serde(default)]
    pub preview: PreviewConfig,
}

fn default_version() -> u32 {
    1
}

fn default_root_domain() -> String {
    "yoohoo.guru".to_string()
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            root_domain: default_root_domain(),
            deploy_env: DeployEnv::default(),
            upstream: None,
            preview: PreviewConfig::default(),
        }
    }
}

impl EdgeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EdgeError::ConfigNotFound(path.display().to_string()));
        }
        let data = std::fs::read_to_string(path)?;
        let cfg: EdgeConfig = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(path, data.as_bytes())
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.root_domain.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "root_domain is empty: every hostname would fall through to the default subdomain".to_string(),
            });
        } else if self.root_domain.contains("://")
            || self.root_domain.contains('/')
            || self.root_domain.chars().any(|c| c.is_whitespace() || c.is_ascii_uppercase())
        {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!(
                    "root_domain '{}' should be a bare lowercase domain name",
                    self.root_domain
                ),
            });
        }

        if let Some(upstream) = &self.upstream {
            if !upstream.starts_with("http://") && !upstream.starts_with("https://") {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!(
                        "upstream '{}' must be an absolute http:// or https:// URL",
                        upstream
                    ),
                });
            }
        }

        if self.preview.domain.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "preview.domain is empty: preview hostnames will not be recognized".to_string(),
            });
        }

        if self.preview.project_suffix.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "preview.project_suffix is empty: preview hostnames cannot embed a subdomain".to_string(),
            });
        }

        if self.version != 1 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("unknown config version {} (expected 1)", self.version),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

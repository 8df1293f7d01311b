use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Platform roles as carried in the session. `Guest` is the role of an
/// unauthenticated visitor; role-gated quick actions never list it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Guest,
    Gunu,
    Guru,
    Angel,
    HeroGuru,
    Admin,
}

impl Role {
    pub fn all() -> &'static [Role] {
        &[
            Role::Guest,
            Role::Gunu,
            Role::Guru,
            Role::Angel,
            Role::HeroGuru,
            Role::Admin,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Gunu => "gunu",
            Role::Guru => "guru",
            Role::Angel => "angel",
            Role::HeroGuru => "hero-guru",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = crate::error::EdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "guest" => Ok(Role::Guest),
            "gunu" => Ok(Role::Gunu),
            "guru" => Ok(Role::Guru),
            "angel" => Ok(Role::Angel),
            "hero-guru" | "hero_guru" => Ok(Role::HeroGuru),
            "admin" => Ok(Role::Admin),
            _ => Err(crate::error::EdgeError::InvalidRole(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// DeployEnv
// ---------------------------------------------------------------------------

/// Where this edge instance is running. Affects hostname interpretation:
/// preview deployments collapse to the default subdomain, and the dev-only
/// subdomain override is honored only in `Development`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeployEnv {
    #[default]
    Production,
    Preview,
    Development,
}

impl DeployEnv {
    pub fn all() -> &'static [DeployEnv] {
        &[
            DeployEnv::Production,
            DeployEnv::Preview,
            DeployEnv::Development,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeployEnv::Production => "production",
            DeployEnv::Preview => "preview",
            DeployEnv::Development => "development",
        }
    }

    pub fn is_development(self) -> bool {
        matches!(self, DeployEnv::Development)
    }
}

impl fmt::Display for DeployEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeployEnv {
    type Err = crate::error::EdgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(DeployEnv::Production),
            "preview" => Ok(DeployEnv::Preview),
            "development" | "dev" => Ok(DeployEnv::Development),
            _ => Err(crate::error::EdgeError::InvalidDeployEnv(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Coarse grouping of subdomains, stamped on proxied responses as the
/// `x-subdomain-category` header. `Main` is reserved for the www site;
/// `Content` is the catch-all for hubs without a more specific group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Main,
    Core,
    Technology,
    Creative,
    Professional,
    Education,
    Lifestyle,
    Specialized,
    Content,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::Main,
            Category::Core,
            Category::Technology,
            Category::Creative,
            Category::Professional,
            Category::Education,
            Category::Lifestyle,
            Category::Specialized,
            Category::Content,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Main => "main",
            Category::Core => "core",
            Category::Technology => "technology",
            Category::Creative => "creative",
            Category::Professional => "professional",
            Category::Education => "education",
            Category::Lifestyle => "lifestyle",
            Category::Specialized => "specialized",
            Category::Content => "content",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

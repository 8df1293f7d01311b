use thiserror::Error;

#[derive(Debug, Error)]
pub enum EdgeError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("unknown role '{0}': expected guest, gunu, guru, angel, hero-guru, or admin")]
    InvalidRole(String),

    #[error("unknown deploy environment '{0}': expected production, preview, or development")]
    InvalidDeployEnv(String),

    #[error("unknown hub: {0}")]
    HubNotFound(String),

    #[error("unknown route config: {0}")]
    RouteNotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, EdgeError>;

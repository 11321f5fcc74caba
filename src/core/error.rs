use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReloadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown ammo kind: {0}")]
    UnknownAmmoKind(String),

    #[error("Weapon '{weapon}' has no ammo link named '{link}'")]
    UnknownLink { weapon: String, link: String },

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),
}

pub type Result<T> = std::result::Result<T, ReloadError>;

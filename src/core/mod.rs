pub mod config;
pub mod error;
pub mod types;

pub use config::{load_config, ReloadConfig};
pub use error::{ReloadError, Result};
pub use types::{AgentId, AmmoKindId, AmmoLinkId, Tick, WeaponId};

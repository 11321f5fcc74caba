//! TOML scenarios describing one agent's weapons, inventory and loadout

pub mod file;
pub mod loader;

pub use file::ScenarioFile;
pub use loader::{load_scenario, parse_scenario, Scenario};

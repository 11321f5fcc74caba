//! Reload Check - reload decisions for armed agents

pub mod agent;
pub mod ammo;
pub mod core;
pub mod inventory;
pub mod loadout;
pub mod reload;
pub mod scenario;
pub mod weapon;

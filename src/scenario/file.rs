//! On-disk scenario format
//!
//! Everything refers to ammo kinds, ammo sets and links by name; the loader
//! resolves names into runtime types.

use crate::ammo::AmmoClass;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioFile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub drafted: bool,
    /// False models an agent with no inventory capability at all
    #[serde(default = "default_true")]
    pub has_inventory: bool,
    #[serde(default)]
    pub ammo: Vec<AmmoKindEntry>,
    #[serde(default)]
    pub ammo_sets: Vec<AmmoSetEntry>,
    #[serde(default)]
    pub equipped: Option<WeaponEntry>,
    #[serde(default)]
    pub carried_weapons: Vec<WeaponEntry>,
    #[serde(default)]
    pub inventory: Vec<StackEntry>,
    /// Absent means no loadout assigned
    #[serde(default)]
    pub loadout: Option<LoadoutEntry>,
    #[serde(default)]
    pub holds: Vec<StackEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmmoKindEntry {
    pub name: String,
    pub caliber: u16,
    pub class: AmmoClass,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmmoSetEntry {
    pub name: String,
    pub links: Vec<AmmoLinkEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmmoLinkEntry {
    pub name: String,
    pub adders: Vec<AdderEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdderEntry {
    pub ammo: String,
    pub charges: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponEntry {
    pub name: String,
    /// Absent for weapons that never use ammunition
    #[serde(default)]
    pub magazine: Option<MagazineEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MagazineEntry {
    pub size: u32,
    pub ammo_set: String,
    pub selected: String,
    #[serde(default = "default_true")]
    pub use_ammo: bool,
    #[serde(default)]
    pub loaded: Vec<LoadedEntry>,
    /// Overrides the charge count computed from `loaded`
    #[serde(default)]
    pub count: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadedEntry {
    pub link: String,
    pub ammo: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackEntry {
    pub ammo: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadoutEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slots: Vec<SlotEntry>,
}

/// Exactly one of `ammo` or `category` must be set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotEntry {
    #[serde(default)]
    pub ammo: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryEntry>,
    pub count: u32,
}

/// Generic category; unset fields match anything
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub caliber: Option<u16>,
    #[serde(default)]
    pub class: Option<AmmoClass>,
}

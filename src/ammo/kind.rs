//! Ammunition kinds from the static catalog
//!
//! A kind is a small copyable value so it can travel through links,
//! inventory stacks and loadout predicates without catalog lookups.

use crate::core::types::AmmoKindId;
use serde::{Deserialize, Serialize};

/// Caliber family an ammo kind belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaliberId(pub u16);

/// Projectile class - what a generic loadout rule usually matches on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmmoClass {
    /// Full metal jacket, the default load
    Ball,
    /// Hardened core for armored targets
    ArmorPiercing,
    /// Expanding rounds
    HollowPoint,
    Incendiary,
    /// High-explosive shells, rockets, grenades
    Explosive,
    /// Buckshot and slugs
    Shot,
    /// Arrows and bolts
    Arrow,
    /// Power cells and other rechargeable sources
    Charge,
}

/// A distinct type of consumable ammunition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmmoKind {
    pub id: AmmoKindId,
    pub caliber: CaliberId,
    pub class: AmmoClass,
}

impl AmmoKind {
    pub fn new(id: AmmoKindId, caliber: CaliberId, class: AmmoClass) -> Self {
        Self { id, caliber, class }
    }

    /// Identity comparison; caliber and class are descriptive only
    pub fn is(&self, other: &AmmoKind) -> bool {
        self.id == other.id
    }
}

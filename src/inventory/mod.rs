//! Carried-items snapshot
//!
//! Recomputed by the caller before each evaluation. Order of both lists is
//! significant: the evaluator takes the first qualifying entry.

use crate::ammo::AmmoKind;
use crate::core::types::AmmoKindId;
use crate::weapon::Weapon;
use serde::{Deserialize, Serialize};

/// A stack of one ammo kind in the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoStack {
    pub kind: AmmoKind,
    pub count: u32,
}

impl AmmoStack {
    pub fn new(kind: AmmoKind, count: u32) -> Self {
        Self { kind, count }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    ammo: Vec<AmmoStack>,
    ranged_weapons: Vec<Weapon>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ammo(mut self, kind: AmmoKind, count: u32) -> Self {
        self.ammo.push(AmmoStack::new(kind, count));
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.ranged_weapons.push(weapon);
        self
    }

    /// Carried ammo stacks in inventory order
    pub fn ammo_stacks(&self) -> &[AmmoStack] {
        &self.ammo
    }

    /// Carried ranged weapons in inventory order (equipped weapon excluded)
    pub fn ranged_weapons(&self) -> &[Weapon] {
        &self.ranged_weapons
    }

    /// Total units of `kind` across all stacks
    pub fn ammo_count(&self, kind: AmmoKindId) -> u32 {
        self.ammo
            .iter()
            .filter(|s| s.kind.id == kind)
            .fold(0u32, |acc, s| acc.saturating_add(s.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ammo::{AmmoClass, CaliberId};
    use crate::core::types::WeaponId;

    fn kind(id: u32) -> AmmoKind {
        AmmoKind::new(AmmoKindId(id), CaliberId(9), AmmoClass::Ball)
    }

    #[test]
    fn test_ammo_count_sums_stacks() {
        let inv = Inventory::new()
            .with_ammo(kind(1), 20)
            .with_ammo(kind(2), 5)
            .with_ammo(kind(1), 7);
        assert_eq!(inv.ammo_count(AmmoKindId(1)), 27);
        assert_eq!(inv.ammo_count(AmmoKindId(2)), 5);
        assert_eq!(inv.ammo_count(AmmoKindId(3)), 0);
    }

    #[test]
    fn test_ammo_count_saturates() {
        let inv = Inventory::new()
            .with_ammo(kind(1), u32::MAX)
            .with_ammo(kind(1), 1);
        assert_eq!(inv.ammo_count(AmmoKindId(1)), u32::MAX);
    }

    #[test]
    fn test_weapon_order_preserved() {
        let inv = Inventory::new()
            .with_weapon(Weapon::melee(WeaponId(2), "b"))
            .with_weapon(Weapon::melee(WeaponId(1), "a"));
        let ids: Vec<_> = inv.ranged_weapons().iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![WeaponId(2), WeaponId(1)]);
    }
}

//! Weapons and their magazine state
//!
//! A weapon without an `AmmoUser` (melee, grenades thrown from the stack)
//! is never a reload candidate.

use crate::ammo::{AmmoKind, AmmoLink, AmmoSet};
use crate::core::types::{AmmoKindId, AmmoLinkId, WeaponId};
use serde::{Deserialize, Serialize};

/// Ammunition currently sitting in a magazine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadedAmmo {
    pub kind: AmmoKind,
    pub count: u32,
}

/// Magazine and ammo-link state of a weapon that uses ammunition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmmoUser {
    /// Charges a full magazine holds (0 = no magazine, fed straight from inventory)
    pub magazine_size: u32,
    /// Charges currently loaded; may be out of range if external state is corrupt
    pub cur_mag_count: i32,
    /// False for self-contained weapons that never draw from inventory
    pub use_ammo: bool,
    pub ammo_set: AmmoSet,
    /// Kinds contributing to the loaded charges
    pub loaded: Vec<LoadedAmmo>,
    /// Link the loaded ammunition resolves to, if any
    pub current_link: Option<AmmoLinkId>,
    /// Link the player or AI has chosen for the next reload
    pub selected_link: AmmoLinkId,
}

impl AmmoUser {
    pub fn new(magazine_size: u32, ammo_set: AmmoSet, selected_link: AmmoLinkId) -> Self {
        Self {
            magazine_size,
            cur_mag_count: 0,
            use_ammo: true,
            ammo_set,
            loaded: Vec::new(),
            current_link: None,
            selected_link,
        }
    }

    /// Mark the weapon as self-contained (never consumes inventory ammo)
    pub fn without_ammo(mut self) -> Self {
        self.use_ammo = false;
        self
    }

    /// Load `count` units of `kind` through `link`
    pub fn with_loaded(mut self, link: AmmoLinkId, kind: AmmoKind, count: u32) -> Self {
        let charges = self
            .ammo_set
            .link(link)
            .and_then(|l| l.charges_for(kind.id))
            .unwrap_or(1);
        let added = i64::from(count) * i64::from(charges);
        self.cur_mag_count =
            i32::try_from(i64::from(self.cur_mag_count) + added).unwrap_or(i32::MAX);
        self.loaded.push(LoadedAmmo { kind, count });
        self.current_link = Some(link);
        self
    }

    /// Override the loaded charge count directly
    pub fn with_mag_count(mut self, count: i32) -> Self {
        self.cur_mag_count = count;
        self
    }

    pub fn has_magazine(&self) -> bool {
        self.magazine_size > 0
    }

    /// Charges missing from the magazine, never more than its capacity
    pub fn deficit(&self) -> i64 {
        let capacity = i64::from(self.magazine_size);
        capacity.min(capacity - i64::from(self.cur_mag_count))
    }

    pub fn is_full(&self) -> bool {
        i64::from(self.cur_mag_count) >= i64::from(self.magazine_size)
    }

    pub fn current_link(&self) -> Option<&AmmoLink> {
        self.current_link.and_then(|id| self.ammo_set.link(id))
    }

    pub fn selected_link(&self) -> Option<&AmmoLink> {
        self.ammo_set.link(self.selected_link)
    }

    /// Loaded ammunition resolves to the link that is selected
    pub fn links_match(&self) -> bool {
        self.current_link == Some(self.selected_link) && self.current_link().is_some()
    }

    /// Kinds currently contributing to the loaded charges
    pub fn loaded_kinds(&self) -> impl Iterator<Item = &AmmoKind> + '_ {
        self.loaded.iter().map(|l| &l.kind)
    }

    /// Units of `kind` needed to fill an empty magazine through the current link
    ///
    /// Falls back to the selected link when nothing is loaded; a kind the link
    /// does not list counts one charge per unit.
    pub fn amount_to_load_magazine(&self, kind: AmmoKindId) -> i64 {
        let charges = self
            .current_link()
            .or_else(|| self.selected_link())
            .and_then(|l| l.charges_for(kind))
            .filter(|&c| c > 0)
            .unwrap_or(1);
        let capacity = i64::from(self.magazine_size);
        let charges = i64::from(charges);
        (capacity + charges - 1) / charges
    }
}

/// A carried or equipped item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub id: WeaponId,
    pub name: String,
    pub ammo_user: Option<AmmoUser>,
}

impl Weapon {
    /// A weapon that does not use ammunition at all
    pub fn melee(id: WeaponId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ammo_user: None,
        }
    }

    pub fn ranged(id: WeaponId, name: impl Into<String>, ammo_user: AmmoUser) -> Self {
        Self {
            id,
            name: name.into(),
            ammo_user: Some(ammo_user),
        }
    }
}

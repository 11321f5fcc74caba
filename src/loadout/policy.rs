//! Allocation policies (loadouts) and hold records
//!
//! A loadout is an ordered list of slots. Each slot reserves a count of
//! either one exact ammo kind or every kind a generic category accepts.

use crate::ammo::{AmmoClass, AmmoKind, CaliberId};
use std::fmt;
use std::sync::Arc;

type KindPredicate = dyn Fn(&AmmoKind) -> bool + Send + Sync;

/// A named predicate over ammo kinds ("any 5.56", "any armor-piercing")
#[derive(Clone)]
pub struct GenericCategory {
    pub name: String,
    predicate: Arc<KindPredicate>,
}

impl GenericCategory {
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&AmmoKind) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn caliber(name: impl Into<String>, caliber: CaliberId) -> Self {
        Self::new(name, move |k| k.caliber == caliber)
    }

    pub fn class(name: impl Into<String>, class: AmmoClass) -> Self {
        Self::new(name, move |k| k.class == class)
    }

    pub fn any_ammo(name: impl Into<String>) -> Self {
        Self::new(name, |_| true)
    }

    pub fn accepts(&self, kind: &AmmoKind) -> bool {
        (self.predicate)(kind)
    }
}

impl fmt::Debug for GenericCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericCategory")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// What a loadout slot reserves
#[derive(Debug, Clone)]
pub enum SlotTarget {
    Exact(AmmoKind),
    Category(GenericCategory),
}

impl SlotTarget {
    pub fn matches(&self, kind: &AmmoKind) -> bool {
        match self {
            SlotTarget::Exact(k) => k.is(kind),
            SlotTarget::Category(c) => c.accepts(kind),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadoutSlot {
    pub target: SlotTarget,
    pub count: u32,
}

impl LoadoutSlot {
    pub fn exact(kind: AmmoKind, count: u32) -> Self {
        Self {
            target: SlotTarget::Exact(kind),
            count,
        }
    }

    pub fn generic(category: GenericCategory, count: u32) -> Self {
        Self {
            target: SlotTarget::Category(category),
            count,
        }
    }
}

/// Ordered reservation rules; earlier slots are deducted first
#[derive(Debug, Clone, Default)]
pub struct AllocationPolicy {
    pub name: String,
    pub slots: Vec<LoadoutSlot>,
}

impl AllocationPolicy {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: Vec::new(),
        }
    }

    pub fn with_slot(mut self, slot: LoadoutSlot) -> Self {
        self.slots.push(slot);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// A standing per-agent reservation outside the loadout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoldRecord {
    pub kind: AmmoKind,
    pub count: u32,
}

impl HoldRecord {
    pub fn new(kind: AmmoKind, count: u32) -> Self {
        Self { kind, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AmmoKindId;

    fn kind(id: u32, caliber: u16, class: AmmoClass) -> AmmoKind {
        AmmoKind::new(AmmoKindId(id), CaliberId(caliber), class)
    }

    #[test]
    fn test_exact_target_matches_identity_only() {
        let target = SlotTarget::Exact(kind(1, 556, AmmoClass::Ball));
        assert!(target.matches(&kind(1, 556, AmmoClass::Ball)));
        assert!(!target.matches(&kind(2, 556, AmmoClass::Ball)));
    }

    #[test]
    fn test_category_targets() {
        let caliber = SlotTarget::Category(GenericCategory::caliber("any 5.56", CaliberId(556)));
        assert!(caliber.matches(&kind(2, 556, AmmoClass::HollowPoint)));
        assert!(!caliber.matches(&kind(3, 762, AmmoClass::Ball)));

        let ap = SlotTarget::Category(GenericCategory::class("any AP", AmmoClass::ArmorPiercing));
        assert!(ap.matches(&kind(4, 762, AmmoClass::ArmorPiercing)));
        assert!(!ap.matches(&kind(4, 762, AmmoClass::Ball)));

        let any = GenericCategory::any_ammo("anything");
        assert!(any.accepts(&kind(9, 1, AmmoClass::Arrow)));
    }

    #[test]
    fn test_category_debug_shows_name() {
        let category = GenericCategory::any_ammo("anything");
        assert!(format!("{:?}", category).contains("anything"));
    }

    #[test]
    fn test_policy_builder() {
        let policy = AllocationPolicy::new("rifleman")
            .with_slot(LoadoutSlot::exact(kind(1, 556, AmmoClass::Ball), 60));
        assert!(!policy.is_empty());
        assert!(AllocationPolicy::new("empty").is_empty());
    }
}

//! Ammo links and ammo sets
//!
//! An `AmmoLink` lists the kinds that can fill one magazine and how many
//! charges each unit of a kind supplies. An `AmmoSet` is the ordered list of
//! links a weapon accepts.

use crate::ammo::kind::AmmoKind;
use crate::core::types::{AmmoKindId, AmmoLinkId};
use serde::{Deserialize, Serialize};

/// One kind that can feed a link, with charges supplied per unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoAdder {
    pub kind: AmmoKind,
    pub charges: u32,
}

impl AmmoAdder {
    pub fn new(kind: AmmoKind, charges: u32) -> Self {
        Self { kind, charges }
    }
}

/// A named combination of kinds that together constitute one magazine load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoLink {
    pub name: String,
    pub adders: Vec<AmmoAdder>,
}

impl AmmoLink {
    pub fn new(name: impl Into<String>, adders: Vec<AmmoAdder>) -> Self {
        Self {
            name: name.into(),
            adders,
        }
    }

    /// Charges one unit of `kind` supplies through this link
    pub fn charges_for(&self, kind: AmmoKindId) -> Option<u32> {
        self.adders
            .iter()
            .find(|a| a.kind.id == kind)
            .map(|a| a.charges)
    }

    pub fn contains(&self, kind: AmmoKindId) -> bool {
        self.charges_for(kind).is_some()
    }
}

/// All links a weapon accepts, in definition order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmmoSet {
    pub name: String,
    pub links: Vec<AmmoLink>,
}

impl AmmoSet {
    pub fn new(name: impl Into<String>, links: Vec<AmmoLink>) -> Self {
        Self {
            name: name.into(),
            links,
        }
    }

    pub fn link(&self, id: AmmoLinkId) -> Option<&AmmoLink> {
        self.links.get(id.0)
    }

    pub fn link_by_name(&self, name: &str) -> Option<AmmoLinkId> {
        self.links
            .iter()
            .position(|l| l.name == name)
            .map(AmmoLinkId)
    }

    /// Largest charge any link grants per unit of `kind` (0 if unusable)
    pub fn max_charge(&self, kind: AmmoKindId) -> u32 {
        self.max_charge_link(kind).map(|(_, c)| c).unwrap_or(0)
    }

    /// First link holding `kind` at exactly `charges` per unit
    pub fn containing(&self, kind: AmmoKindId, charges: u32) -> Option<AmmoLinkId> {
        self.links
            .iter()
            .position(|l| l.adders.iter().any(|a| a.kind.id == kind && a.charges == charges))
            .map(AmmoLinkId)
    }

    /// The link granting the most charges per unit of `kind`, with that charge
    ///
    /// Ties go to the earliest link, matching `containing`.
    pub fn max_charge_link(&self, kind: AmmoKindId) -> Option<(AmmoLinkId, u32)> {
        let mut best: Option<(AmmoLinkId, u32)> = None;
        for (idx, link) in self.links.iter().enumerate() {
            for adder in link.adders.iter().filter(|a| a.kind.id == kind) {
                if best.map_or(true, |(_, c)| adder.charges > c) {
                    best = Some((AmmoLinkId(idx), adder.charges));
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ammo::kind::{AmmoClass, CaliberId};

    fn kind(id: u32) -> AmmoKind {
        AmmoKind::new(AmmoKindId(id), CaliberId(12), AmmoClass::Shot)
    }

    fn shotgun_set() -> AmmoSet {
        AmmoSet::new(
            "12 gauge",
            vec![
                AmmoLink::new("buck", vec![AmmoAdder::new(kind(1), 1)]),
                AmmoLink::new("slug", vec![AmmoAdder::new(kind(2), 1)]),
                AmmoLink::new("box", vec![AmmoAdder::new(kind(1), 4), AmmoAdder::new(kind(2), 4)]),
            ],
        )
    }

    #[test]
    fn test_max_charge_picks_largest() {
        let set = shotgun_set();
        assert_eq!(set.max_charge(AmmoKindId(1)), 4);
        assert_eq!(set.max_charge_link(AmmoKindId(1)), Some((AmmoLinkId(2), 4)));
    }

    #[test]
    fn test_max_charge_unknown_kind_is_zero() {
        assert_eq!(shotgun_set().max_charge(AmmoKindId(99)), 0);
    }

    #[test]
    fn test_containing_exact_charge() {
        let set = shotgun_set();
        assert_eq!(set.containing(AmmoKindId(2), 1), Some(AmmoLinkId(1)));
        assert_eq!(set.containing(AmmoKindId(2), 4), Some(AmmoLinkId(2)));
        assert_eq!(set.containing(AmmoKindId(2), 3), None);
    }

    #[test]
    fn test_link_lookup() {
        let set = shotgun_set();
        assert_eq!(set.link_by_name("slug"), Some(AmmoLinkId(1)));
        assert_eq!(set.link(AmmoLinkId(0)).map(|l| l.name.as_str()), Some("buck"));
        assert!(set.link(AmmoLinkId(5)).is_none());
        assert_eq!(set.links[2].charges_for(AmmoKindId(1)), Some(4));
        assert!(!set.links[0].contains(AmmoKindId(2)));
    }
}

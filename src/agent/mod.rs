//! The agent as seen by the reload check
//!
//! Architecture: Trait + Data hybrid
//! - `AgentView` is the read-only interface the evaluator consumes
//! - `AgentSnapshot` is a plain owned implementation for tools and tests

use crate::core::types::AgentId;
use crate::inventory::Inventory;
use crate::loadout::{AllocationPolicy, HoldRecord};
use crate::weapon::Weapon;

/// Read-only access to the state a reload decision depends on
pub trait AgentView {
    fn id(&self) -> AgentId;

    /// None when the agent has no inventory capability at all
    fn inventory(&self) -> Option<&Inventory>;

    fn equipped_weapon(&self) -> Option<&Weapon>;

    /// None when no loadout is assigned
    fn allocation_policy(&self) -> Option<&AllocationPolicy>;

    fn hold_records(&self) -> &[HoldRecord];

    /// Under direct player control; autonomous jobs stay silent
    fn is_drafted(&self) -> bool;

    /// Loadout assigned and holding at least one slot
    fn has_loadout(&self) -> bool {
        self.allocation_policy().is_some_and(|p| !p.is_empty())
    }
}

/// Owned snapshot of one agent
#[derive(Debug, Clone)]
pub struct AgentSnapshot {
    pub id: AgentId,
    pub inventory: Option<Inventory>,
    pub equipped: Option<Weapon>,
    pub policy: Option<AllocationPolicy>,
    pub holds: Vec<HoldRecord>,
    pub drafted: bool,
}

impl AgentSnapshot {
    /// Agent with an empty inventory and nothing equipped
    pub fn new(id: AgentId) -> Self {
        Self {
            id,
            inventory: Some(Inventory::new()),
            equipped: None,
            policy: None,
            holds: Vec::new(),
            drafted: false,
        }
    }

    pub fn without_inventory(mut self) -> Self {
        self.inventory = None;
        self
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = Some(inventory);
        self
    }

    pub fn with_equipped(mut self, weapon: Weapon) -> Self {
        self.equipped = Some(weapon);
        self
    }

    pub fn with_policy(mut self, policy: AllocationPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn with_hold(mut self, record: HoldRecord) -> Self {
        self.holds.push(record);
        self
    }

    pub fn drafted(mut self) -> Self {
        self.drafted = true;
        self
    }
}

impl AgentView for AgentSnapshot {
    fn id(&self) -> AgentId {
        self.id
    }

    fn inventory(&self) -> Option<&Inventory> {
        self.inventory.as_ref()
    }

    fn equipped_weapon(&self) -> Option<&Weapon> {
        self.equipped.as_ref()
    }

    fn allocation_policy(&self) -> Option<&AllocationPolicy> {
        self.policy.as_ref()
    }

    fn hold_records(&self) -> &[HoldRecord] {
        &self.holds
    }

    fn is_drafted(&self) -> bool {
        self.drafted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ammo::{AmmoClass, AmmoKind, CaliberId};
    use crate::core::types::AmmoKindId;
    use crate::loadout::LoadoutSlot;

    #[test]
    fn test_has_loadout_requires_slots() {
        let agent = AgentSnapshot::new(AgentId::new());
        assert!(!agent.has_loadout());

        let agent = agent.with_policy(AllocationPolicy::new("empty"));
        assert!(!agent.has_loadout());

        let kind = AmmoKind::new(AmmoKindId(1), CaliberId(9), AmmoClass::Ball);
        let agent = agent.with_policy(AllocationPolicy::new("p").with_slot(LoadoutSlot::exact(kind, 5)));
        assert!(agent.has_loadout());
    }

    #[test]
    fn test_without_inventory() {
        let agent = AgentSnapshot::new(AgentId::new()).without_inventory();
        assert!(agent.inventory().is_none());
        assert!(!agent.is_drafted());
        assert!(agent.clone().drafted().is_drafted());
    }
}

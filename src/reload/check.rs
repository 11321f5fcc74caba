//! Reload decision - which weapon to reload and with what
//!
//! Candidates are the equipped weapon followed by carried ranged weapons in
//! inventory order. For each candidate:
//! 1. Skip it if it has no ammo user or no magazine
//! 2. Policy restock: if none of the loaded kinds is covered by the loadout,
//!    look for a carried kind that is covered and on hand in quantity
//! 3. Top-off: if the magazine is not full, reload self-contained weapons
//!    outright, or reload from the current link when inventory covers the gap
//!
//! The first candidate to produce a decision wins. The check holds no state,
//! so calling it twice on the same snapshot gives the same answer.

use crate::agent::AgentView;
use crate::core::types::{AmmoLinkId, WeaponId};
use crate::inventory::Inventory;
use crate::loadout::{is_reservation_satisfied, AllocationPolicy, HoldRecord};
use crate::weapon::{AmmoUser, Weapon};
use serde::{Deserialize, Serialize};

/// Why a reload was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloadReason {
    /// Loaded ammo is not in the loadout; switch to carried ammo that is
    PolicyRestock,
    /// Weapon never draws ammo from inventory and is not full
    SelfContained,
    /// Inventory holds enough of the current link to fill the magazine
    TopOff,
}

/// Weapon and link a reload should use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReloadDecision {
    pub weapon: WeaponId,
    pub link: AmmoLinkId,
    pub reason: ReloadReason,
}

/// Check the agent's equipment and inventory for a weapon worth reloading
///
/// Returns None when no reload is needed.
pub fn evaluate_reload_need<A: AgentView + ?Sized>(agent: &A) -> Option<ReloadDecision> {
    let Some(inventory) = agent.inventory() else {
        tracing::trace!(agent = ?agent.id(), "no inventory, nothing to reload");
        return None;
    };

    let equipped = agent.equipped_weapon();
    if equipped.is_none() && inventory.ranged_weapons().is_empty() {
        return None;
    }

    let policy = agent.allocation_policy().filter(|p| !p.is_empty());
    let holds = agent.hold_records();

    for weapon in equipped.into_iter().chain(inventory.ranged_weapons()) {
        let Some(user) = weapon.ammo_user.as_ref().filter(|u| u.has_magazine()) else {
            tracing::trace!(weapon = %weapon.id, "skipped: no magazine");
            continue;
        };

        let deficit = user.deficit();

        if let Some(policy) = policy.filter(|_| user.use_ammo) {
            if let Some(decision) = policy_restock(weapon, user, inventory, policy, holds, deficit) {
                log_decision(&decision, deficit);
                return Some(decision);
            }
        }

        if !user.is_full() {
            if let Some(decision) = top_off(weapon, user, inventory, deficit) {
                log_decision(&decision, deficit);
                return Some(decision);
            }
        }
    }

    None
}

/// Restock from carried ammo the loadout sanctions
///
/// Only runs when no loaded kind is covered for a full magazine. The loadout
/// check uses the rounded-up unit count while the on-hand check compares
/// against the exact fractional requirement.
fn policy_restock(
    weapon: &Weapon,
    user: &AmmoUser,
    inventory: &Inventory,
    policy: &AllocationPolicy,
    holds: &[HoldRecord],
    deficit: i64,
) -> Option<ReloadDecision> {
    let loaded_covered = user.loaded_kinds().any(|kind| {
        is_reservation_satisfied(policy, holds, kind, user.amount_to_load_magazine(kind.id))
    });
    if loaded_covered {
        return None;
    }

    for stack in inventory.ammo_stacks() {
        let Some((link, max_charge)) = user.ammo_set.max_charge_link(stack.kind.id) else {
            continue;
        };
        if max_charge == 0 {
            continue;
        }

        let to_fill = deficit as f32 / max_charge as f32;
        if to_fill > 0.0
            && is_reservation_satisfied(policy, holds, &stack.kind, to_fill.ceil() as i64)
            && to_fill < inventory.ammo_count(stack.kind.id) as f32
        {
            return Some(ReloadDecision {
                weapon: weapon.id,
                link,
                reason: ReloadReason::PolicyRestock,
            });
        }
    }

    None
}

/// Top off a magazine that is not full
fn top_off(
    weapon: &Weapon,
    user: &AmmoUser,
    inventory: &Inventory,
    deficit: i64,
) -> Option<ReloadDecision> {
    if !user.use_ammo {
        return Some(ReloadDecision {
            weapon: weapon.id,
            link: user.selected_link,
            reason: ReloadReason::SelfContained,
        });
    }

    if !user.links_match() {
        return None;
    }
    let link_id = user.current_link?;
    let link = user.ammo_set.link(link_id)?;

    let mut charges: i64 = 0;
    for adder in &link.adders {
        let per_unit = i64::from(adder.charges);
        if per_unit < deficit {
            let on_hand = i64::from(inventory.ammo_count(adder.kind.id));
            charges = charges.saturating_add(per_unit.saturating_mul(on_hand));
        }
        if charges >= deficit {
            return Some(ReloadDecision {
                weapon: weapon.id,
                link: link_id,
                reason: ReloadReason::TopOff,
            });
        }
    }

    None
}

fn log_decision(decision: &ReloadDecision, deficit: i64) {
    tracing::debug!(
        weapon = %decision.weapon,
        link = %decision.link,
        reason = ?decision.reason,
        deficit,
        "reload needed"
    );
}

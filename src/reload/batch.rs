//! Reload checks across many agents in one tick
//!
//! Each agent's snapshot is independent, so large batches run on rayon.

use crate::agent::AgentView;
use crate::core::config::ReloadConfig;
use crate::core::types::AgentId;
use crate::reload::check::{evaluate_reload_need, ReloadDecision};
use rayon::prelude::*;

/// Evaluate every agent, preserving input order in the result
pub fn evaluate_agents<A>(agents: &[A], config: &ReloadConfig) -> Vec<(AgentId, Option<ReloadDecision>)>
where
    A: AgentView + Sync,
{
    if agents.len() >= config.parallel_threshold {
        // PARALLEL: no shared state between agents
        agents
            .par_iter()
            .map(|a| (a.id(), evaluate_reload_need(a)))
            .collect()
    } else {
        agents
            .iter()
            .map(|a| (a.id(), evaluate_reload_need(a)))
            .collect()
    }
}

/// Agents that should be offered a reload job this tick
///
/// Drafted agents are skipped before evaluation.
pub fn agents_needing_reload<A>(agents: &[A], config: &ReloadConfig) -> Vec<(AgentId, ReloadDecision)>
where
    A: AgentView + Sync,
{
    if agents.len() >= config.parallel_threshold {
        agents.par_iter().filter_map(undrafted_need).collect()
    } else {
        agents.iter().filter_map(undrafted_need).collect()
    }
}

fn undrafted_need<A: AgentView>(agent: &A) -> Option<(AgentId, ReloadDecision)> {
    if agent.is_drafted() {
        return None;
    }
    evaluate_reload_need(agent).map(|d| (agent.id(), d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::AgentSnapshot;
    use crate::ammo::{AmmoAdder, AmmoClass, AmmoKind, AmmoLink, AmmoSet, CaliberId};
    use crate::core::types::{AmmoKindId, AmmoLinkId, WeaponId};
    use crate::inventory::Inventory;
    use crate::loadout::{AllocationPolicy, HoldRecord};
    use crate::weapon::{AmmoUser, Weapon};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn arrow() -> AmmoKind {
        AmmoKind::new(AmmoKindId(3), CaliberId(1), AmmoClass::Arrow)
    }

    fn archer(loaded: i32, arrows: u32) -> AgentSnapshot {
        let set = AmmoSet::new("arrows", vec![AmmoLink::new("arrow", vec![AmmoAdder::new(arrow(), 1)])]);
        let bow = Weapon::ranged(
            WeaponId(1),
            "bow",
            AmmoUser::new(2, set, AmmoLinkId(0))
                .with_loaded(AmmoLinkId(0), arrow(), 1)
                .with_mag_count(loaded),
        );
        AgentSnapshot::new(AgentId::new())
            .with_equipped(bow)
            .with_inventory(Inventory::new().with_ammo(arrow(), arrows))
    }

    fn roster() -> Vec<AgentSnapshot> {
        (0..40).map(|i| archer(i % 3, (i % 4) as u32)).collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let agents = roster();
        let sequential = evaluate_agents(&agents, &ReloadConfig {
            parallel_threshold: usize::MAX,
            ..Default::default()
        });
        let parallel = evaluate_agents(&agents, &ReloadConfig {
            parallel_threshold: 0,
            ..Default::default()
        });
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.len(), agents.len());
    }

    #[test]
    fn test_order_preserved() {
        let agents = roster();
        let results = evaluate_agents(&agents, &ReloadConfig::default());
        let ids: Vec<_> = results.iter().map(|(id, _)| *id).collect();
        let expected: Vec<_> = agents.iter().map(|a| a.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_drafted_agents_filtered() {
        let agents = vec![archer(0, 5), archer(0, 5).drafted(), archer(2, 5)];
        let needing = agents_needing_reload(&agents, &ReloadConfig::default());
        assert_eq!(needing.len(), 1);
        assert_eq!(needing[0].0, agents[0].id);
    }

    /// Counts inventory reads so skipped agents can be told apart
    struct Counted {
        agent: AgentSnapshot,
        reads: AtomicUsize,
    }

    impl AgentView for Counted {
        fn id(&self) -> AgentId {
            self.agent.id()
        }

        fn inventory(&self) -> Option<&Inventory> {
            self.reads.fetch_add(1, Ordering::Relaxed);
            self.agent.inventory()
        }

        fn equipped_weapon(&self) -> Option<&Weapon> {
            self.agent.equipped_weapon()
        }

        fn allocation_policy(&self) -> Option<&AllocationPolicy> {
            self.agent.allocation_policy()
        }

        fn hold_records(&self) -> &[HoldRecord] {
            self.agent.hold_records()
        }

        fn is_drafted(&self) -> bool {
            self.agent.is_drafted()
        }
    }

    #[test]
    fn test_drafted_agents_not_evaluated() {
        for threshold in [0, usize::MAX] {
            let agents: Vec<_> = [archer(0, 5).drafted(), archer(0, 5)]
                .into_iter()
                .map(|agent| Counted { agent, reads: AtomicUsize::new(0) })
                .collect();
            let config = ReloadConfig { parallel_threshold: threshold, ..Default::default() };
            let needing = agents_needing_reload(&agents, &config);
            assert_eq!(needing.len(), 1);
            assert_eq!(needing[0].0, agents[1].agent.id);
            assert_eq!(agents[0].reads.load(Ordering::Relaxed), 0);
            assert!(agents[1].reads.load(Ordering::Relaxed) > 0);
        }
    }
}

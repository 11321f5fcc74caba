//! Reload job giver - the scheduler-facing side of the reload check
//!
//! The scheduler asks for a priority first and, if it picks this job, asks
//! again for the task. Both calls re-run the check on the current snapshot.

use crate::agent::AgentView;
use crate::core::config::ReloadConfig;
use crate::core::types::{AgentId, AmmoLinkId, Tick, WeaponId};
use crate::reload::check::{evaluate_reload_need, ReloadDecision};
use serde::{Deserialize, Serialize};

/// A queued reload, handed back to the scheduler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReloadTask {
    pub agent: AgentId,
    pub weapon: WeaponId,
    pub link: AmmoLinkId,
    pub created_tick: Tick,
}

impl ReloadTask {
    pub fn new(agent: AgentId, weapon: WeaponId, link: AmmoLinkId, tick: Tick) -> Self {
        Self {
            agent,
            weapon,
            link,
            created_tick: tick,
        }
    }
}

/// Owner of the weapons' mutable state, performing the reload itself
pub trait ReloadPreparer {
    /// Commit `link` as the weapon's selected link; false aborts the job
    fn pre_reload(&mut self, agent: AgentId, weapon: WeaponId, link: AmmoLinkId) -> bool;

    /// Build the executable reload job for a prepared weapon
    fn make_reload_job(&mut self, agent: AgentId, weapon: WeaponId) -> Option<ReloadTask>;
}

/// Offers reload jobs to the scheduler
#[derive(Debug, Clone, Default)]
pub struct CheckReload {
    config: ReloadConfig,
}

impl CheckReload {
    pub fn new(config: ReloadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReloadConfig {
        &self.config
    }

    /// Priority of reloading for this agent; 0.0 means "do not offer"
    pub fn priority<A: AgentView + ?Sized>(&self, agent: &A) -> f32 {
        if !agent.is_drafted() && evaluate_reload_need(agent).is_some() {
            self.config.reload_priority
        } else {
            0.0
        }
    }

    /// Re-check, commit the link choice, then build the job
    pub fn try_give_task<A, P>(&self, agent: &A, preparer: &mut P) -> Option<ReloadTask>
    where
        A: AgentView + ?Sized,
        P: ReloadPreparer + ?Sized,
    {
        let ReloadDecision { weapon, link, .. } = evaluate_reload_need(agent)?;
        let agent_id = agent.id();

        if !preparer.pre_reload(agent_id, weapon, link) {
            tracing::debug!(agent = ?agent_id, weapon = %weapon, link = %link, "pre-reload refused");
            return None;
        }

        let task = preparer.make_reload_job(agent_id, weapon);
        if task.is_none() {
            tracing::debug!(agent = ?agent_id, weapon = %weapon, "no reload job produced");
        }
        task
    }
}

/// Preparer that records committed links and stamps tasks with a fixed tick
///
/// Stands in for the real reload executor in tools and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingPreparer {
    pub tick: Tick,
    pub committed: Vec<(AgentId, WeaponId, AmmoLinkId)>,
    pub refuse: bool,
}

impl RecordingPreparer {
    pub fn at_tick(tick: Tick) -> Self {
        Self {
            tick,
            ..Default::default()
        }
    }
}

impl ReloadPreparer for RecordingPreparer {
    fn pre_reload(&mut self, agent: AgentId, weapon: WeaponId, link: AmmoLinkId) -> bool {
        if self.refuse {
            return false;
        }
        self.committed.push((agent, weapon, link));
        true
    }

    fn make_reload_job(&mut self, agent: AgentId, weapon: WeaponId) -> Option<ReloadTask> {
        let (_, _, link) = self
            .committed
            .iter()
            .rev()
            .find(|(a, w, _)| *a == agent && *w == weapon)?;
        Some(ReloadTask::new(agent, weapon, *link, self.tick))
    }
}

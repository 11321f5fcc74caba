//! Reload decision engine and job giver

pub mod batch;
pub mod check;
pub mod job_giver;

pub use batch::{agents_needing_reload, evaluate_agents};
pub use check::{evaluate_reload_need, ReloadDecision, ReloadReason};
pub use job_giver::{CheckReload, RecordingPreparer, ReloadPreparer, ReloadTask};

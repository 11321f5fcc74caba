//! Ammunition catalog types: kinds, links and sets

pub mod kind;
pub mod set;

pub use kind::{AmmoClass, AmmoKind, CaliberId};
pub use set::{AmmoAdder, AmmoLink, AmmoSet};

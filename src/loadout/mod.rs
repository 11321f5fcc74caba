//! Loadout policies, hold records and the reservation check

pub mod policy;
pub mod tracking;

pub use policy::{AllocationPolicy, GenericCategory, HoldRecord, LoadoutSlot, SlotTarget};
pub use tracking::is_reservation_satisfied;

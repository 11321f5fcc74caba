//! Reservation check against loadout slots and hold records
//!
//! Answers "is this many units of this kind already earmarked by the loadout
//! or a hold record?" by greedy deduction. Several checks in the same tick
//! may count the same slot twice; that approximation is accepted.

use crate::ammo::AmmoKind;
use crate::loadout::policy::{AllocationPolicy, HoldRecord};

/// Whether `amount` units of `kind` are covered by `policy` then `holds`
///
/// Slots are deducted in order and the scan stops as soon as the amount is
/// covered. Whatever remains carries over into the hold records, which match
/// on exact kind only. A non-positive amount is covered trivially.
pub fn is_reservation_satisfied(
    policy: &AllocationPolicy,
    holds: &[HoldRecord],
    kind: &AmmoKind,
    amount: i64,
) -> bool {
    let mut remaining = amount;
    if remaining <= 0 {
        return true;
    }

    for slot in &policy.slots {
        if slot.target.matches(kind) {
            remaining = remaining.saturating_sub(i64::from(slot.count));
        }
        if remaining <= 0 {
            return true;
        }
    }

    for record in holds.iter().filter(|r| r.kind.is(kind)) {
        remaining = remaining.saturating_sub(i64::from(record.count));
    }

    let satisfied = remaining <= 0;
    tracing::trace!(
        kind = %kind.id,
        amount,
        remaining,
        satisfied,
        "reservation checked against hold records"
    );
    satisfied
}

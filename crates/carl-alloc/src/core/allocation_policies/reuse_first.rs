//! Reuse-first allocation policy.

use crate::core::allocation_policy::{AllocationPolicy, PolicyOutcome};
use crate::core::capacity_table::CapacityTable;
use crate::core::user::User;

/// Charges one unit to the first preinstalled application with remaining
/// capacity. Only when every preinstalled application is empty does it fall
/// back to the non-preinstalled application with the most remaining capacity.
/// Each user consumes at most one unit.
#[derive(Default)]
pub struct ReuseFirst;

impl ReuseFirst {
    pub fn new() -> Self {
        Default::default()
    }
}

impl AllocationPolicy for ReuseFirst {
    fn allocate(&self, user: &User, capacities: &mut CapacityTable) -> PolicyOutcome {
        let mut outcome = PolicyOutcome::default();

        for app in &user.preinstalled {
            if capacities.charge(app) {
                outcome.apps.push(app.clone());
                outcome.used_preinstalled.push(app.clone());
                outcome.transactions = 1;
                return outcome;
            }
        }

        if let Some(extra) = capacities.most_available_excluding(&user.preinstalled) {
            if capacities.charge(&extra) {
                outcome.apps.push(extra.clone());
                outcome.extra_app = Some(extra);
                outcome.transactions = 1;
            }
        }
        outcome
    }
}

//! Drain-preinstalled allocation policy.

use crate::core::allocation_policy::{AllocationPolicy, PolicyOutcome};
use crate::core::capacity_table::CapacityTable;
use crate::core::user::User;

/// Drains each preinstalled application to zero, in preference order, charging
/// one transaction per unit. Reproduces the legacy demo behavior where a
/// single user could absorb the entire remaining capacity of its apps.
/// The fallback fires only when no preinstalled application had any capacity.
#[derive(Default)]
pub struct DrainPreinstalled;

impl DrainPreinstalled {
    pub fn new() -> Self {
        Default::default()
    }
}

impl AllocationPolicy for DrainPreinstalled {
    fn allocate(&self, user: &User, capacities: &mut CapacityTable) -> PolicyOutcome {
        let mut outcome = PolicyOutcome::default();

        for app in &user.preinstalled {
            let mut drained = false;
            while capacities.charge(app) {
                outcome.transactions += 1;
                drained = true;
            }
            if drained {
                outcome.apps.push(app.clone());
                outcome.used_preinstalled.push(app.clone());
            }
        }

        if outcome.transactions == 0 {
            if let Some(extra) = capacities.most_available_excluding(&user.preinstalled) {
                if capacities.charge(&extra) {
                    outcome.apps.push(extra.clone());
                    outcome.extra_app = Some(extra);
                    outcome.transactions = 1;
                }
            }
        }
        outcome
    }
}

//! Allocation policies.

use crate::core::allocation_policies::drain_preinstalled::DrainPreinstalled;
use crate::core::allocation_policies::reuse_first::ReuseFirst;
use crate::core::capacity_table::CapacityTable;
use crate::core::user::User;

/// Charges produced by an allocation policy for one user.
#[derive(Debug, Clone, Default)]
pub struct PolicyOutcome {
    /// Applications charged, in charge order.
    pub apps: Vec<String>,
    /// Preinstalled applications that absorbed at least one unit.
    pub used_preinstalled: Vec<String>,
    /// Fallback application charged when no preinstalled app had capacity.
    pub extra_app: Option<String>,
    /// Units of capacity charged.
    pub transactions: u32,
}

/// Trait for implementation of allocation policies.
///
/// A policy is a function of the current user and the capacity table: it
/// charges units to the table and reports which applications absorbed the
/// user's demand. The engine turns the outcome into an assignment record.
///
/// It is possible to implement an arbitrary policy and use it in the engine.
pub trait AllocationPolicy {
    fn allocate(&self, user: &User, capacities: &mut CapacityTable) -> PolicyOutcome;
}

pub fn allocation_policy_resolver(policy_name: &str) -> Box<dyn AllocationPolicy> {
    match policy_name {
        "ReuseFirst" => Box::new(ReuseFirst::new()),
        "DrainPreinstalled" => Box::new(DrainPreinstalled::new()),
        _ => panic!("Can't resolve: {}", policy_name),
    }
}

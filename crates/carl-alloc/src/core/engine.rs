//! Component stepping through the roster and recording allocation decisions.

use log::{debug, info};

use crate::core::allocation_policy::{allocation_policy_resolver, AllocationPolicy};
use crate::core::assignment::{save_history_csv, AssignmentRecord};
use crate::core::capacity_table::CapacityTable;
use crate::core::config::ScenarioConfig;
use crate::core::user::User;

/// Engine processing the roster one user at a time.
///
/// It owns the capacity table, the roster cursor and the append-only
/// assignment history. The allocation decision for each user is delegated to
/// the configured allocation policy; the engine wraps the policy outcome into
/// an `AssignmentRecord` together with a post-step capacity snapshot.
///
/// The engine is a plain owned object driven by its caller (CLI tool or test
/// harness) via `process_next_user`, with no I/O or shared state of its own.
pub struct AllocationEngine {
    capacities: CapacityTable,
    roster: Vec<User>,
    cursor: usize,
    history: Vec<AssignmentRecord>,
    policy: Box<dyn AllocationPolicy>,
}

impl AllocationEngine {
    /// Creates engine from the scenario config, resolving the policy by name.
    pub fn new(config: &ScenarioConfig) -> Self {
        let mut capacities = CapacityTable::new();
        for app in &config.applications {
            capacities.add_app(&app.name, app.max_capacity);
        }
        let roster = config
            .users
            .iter()
            .map(|user| User {
                name: user.name.clone(),
                preinstalled: user.preinstalled.clone(),
            })
            .collect();
        Self {
            capacities,
            roster,
            cursor: 0,
            history: Vec::new(),
            policy: allocation_policy_resolver(&config.policy),
        }
    }

    /// Processes the user at the cursor and appends the resulting record.
    ///
    /// Returns `None` once the roster is exhausted; the call is then a no-op.
    pub fn process_next_user(&mut self) -> Option<&AssignmentRecord> {
        if self.cursor >= self.roster.len() {
            debug!("all users processed, nothing to do");
            return None;
        }

        let user = self.roster[self.cursor].clone();
        let outcome = self.policy.allocate(&user, &mut self.capacities);

        info!(
            "{}: charged {:?}, extra app {:?}, {} transaction(s)",
            user.name, outcome.apps, outcome.extra_app, outcome.transactions
        );

        self.history.push(AssignmentRecord {
            user: user.name,
            preinstalled: user.preinstalled,
            apps: outcome.apps,
            used_preinstalled: outcome.used_preinstalled,
            extra_app: outcome.extra_app,
            capacities_after: self.capacities.snapshot(),
            transactions: outcome.transactions,
        });
        self.cursor += 1;
        self.history.last()
    }

    /// Processes all remaining users.
    pub fn process_all(&mut self) {
        while self.process_next_user().is_some() {}
    }

    /// Restores capacities to their maximums, clears the history and rewinds
    /// the cursor. Always succeeds.
    pub fn reset(&mut self) {
        self.capacities.restore_all();
        self.cursor = 0;
        self.history.clear();
    }

    /// Returns true once every user was processed.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.roster.len()
    }

    /// Returns the current roster position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of users in the roster.
    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    /// Returns the user to be processed next, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.roster.get(self.cursor)
    }

    /// Returns read-only view of the capacity table.
    pub fn capacities(&self) -> &CapacityTable {
        &self.capacities
    }

    /// Returns all records appended so far, in processing order.
    pub fn history(&self) -> &[AssignmentRecord] {
        &self.history
    }

    /// Returns application names ordered by remaining capacity, descending.
    pub fn apps_by_descending_capacity(&self) -> Vec<String> {
        self.capacities.by_descending_capacity()
    }

    /// Saves the assignment history to a CSV file.
    pub fn save_history(&self, path: &str) -> Result<(), std::io::Error> {
        save_history_csv(&self.history, path)
    }
}

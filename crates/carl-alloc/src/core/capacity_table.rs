//! Capacity pool state.

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::application::Application;

/// Stores capacity entries for all applications.
///
/// Application order is the fixed enumeration order used for tie-breaking, so
/// entries are kept in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct CapacityTable {
    apps: IndexMap<String, Application>,
}

impl CapacityTable {
    /// Creates empty capacity table.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds application at full capacity.
    pub fn add_app(&mut self, name: &str, max: u32) {
        self.apps.insert(name.to_string(), Application::new(max));
    }

    /// Returns names of all applications in enumeration order.
    pub fn app_names(&self) -> Vec<String> {
        self.apps.keys().cloned().collect()
    }

    /// Returns the number of applications.
    pub fn app_count(&self) -> usize {
        self.apps.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.apps.contains_key(name)
    }

    /// Returns the remaining capacity of the specified application.
    pub fn get_current(&self, name: &str) -> u32 {
        self.apps[name].current
    }

    /// Returns the maximum capacity of the specified application.
    pub fn get_max(&self, name: &str) -> u32 {
        self.apps[name].max
    }

    /// Charges one unit of capacity to the specified application.
    ///
    /// Returns false (and leaves the table unchanged) if the application is
    /// unknown or already empty.
    pub fn charge(&mut self, name: &str) -> bool {
        match self.apps.get_mut(name) {
            Some(app) if app.current > 0 => {
                app.current -= 1;
                true
            }
            _ => false,
        }
    }

    /// Restores every application to its maximum capacity.
    pub fn restore_all(&mut self) {
        for app in self.apps.values_mut() {
            app.current = app.max;
        }
    }

    /// Returns the total remaining capacity across all applications.
    pub fn total_current(&self) -> u32 {
        self.apps.values().map(|app| app.current).sum()
    }

    /// Returns the total maximum capacity across all applications.
    pub fn total_max(&self) -> u32 {
        self.apps.values().map(|app| app.max).sum()
    }

    /// Returns application names ordered by remaining capacity, descending.
    ///
    /// The sort is stable, so ties keep the enumeration order.
    pub fn by_descending_capacity(&self) -> Vec<String> {
        let mut names = self.app_names();
        names.sort_by(|a, b| self.apps[b].current.cmp(&self.apps[a].current));
        names
    }

    /// Returns the application with the greatest remaining capacity among
    /// those not in the excluded set, ties broken by enumeration order.
    ///
    /// Returns `None` if the excluded set covers every application.
    /// The returned application may have zero remaining capacity.
    pub fn most_available_excluding(&self, exclude: &[String]) -> Option<String> {
        let mut result: Option<&String> = None;
        let mut max_current = 0;
        for (name, app) in &self.apps {
            if exclude.contains(name) {
                continue;
            }
            if result.is_none() || app.current > max_current {
                max_current = app.current;
                result = Some(name);
            }
        }
        result.cloned()
    }

    /// Returns a copy of all capacity entries in enumeration order.
    pub fn snapshot(&self) -> IndexMap<String, Application> {
        self.apps.clone()
    }
}

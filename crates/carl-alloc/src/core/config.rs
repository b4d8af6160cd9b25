//! Scenario configuration.

use serde::{Deserialize, Serialize};

/// Holds raw scenario config parsed from YAML file.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
struct RawScenarioConfig {
    pub policy: Option<String>,
    pub applications: Option<Vec<ApplicationConfig>>,
    pub users: Option<Vec<UserConfig>>,
}

/// Holds configuration of a single application.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ApplicationConfig {
    /// Application name.
    pub name: String,
    /// Maximum capacity in units.
    pub max_capacity: u32,
}

/// Holds configuration of a single roster entry.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct UserConfig {
    /// User name.
    pub name: String,
    /// Preinstalled application names, in preference order.
    pub preinstalled: Vec<String>,
}

/// Represents scenario configuration.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ScenarioConfig {
    /// Allocation policy name, resolved via `allocation_policy_resolver`.
    pub policy: String,
    /// Applications in enumeration order.
    pub applications: Vec<ApplicationConfig>,
    /// Roster processed in order.
    pub users: Vec<UserConfig>,
}

impl ScenarioConfig {
    /// Creates scenario config by reading parameter values from YAML file
    /// (uses the demo dataset if some sections are absent).
    pub fn from_file(file_name: &str) -> Self {
        let raw: RawScenarioConfig = serde_yaml::from_str(
            &std::fs::read_to_string(file_name).unwrap_or_else(|_| panic!("Can't read file {}", file_name)),
        )
        .unwrap_or_else(|_| panic!("Can't parse YAML from file {}", file_name));

        let config = Self {
            policy: raw.policy.unwrap_or_else(|| "ReuseFirst".to_string()),
            applications: raw.applications.unwrap_or_else(default_applications),
            users: raw.users.unwrap_or_else(default_roster),
        };
        config.validate();
        config
    }

    /// Checks that application capacities are positive, application names are
    /// unique and every preinstalled app refers to a configured application.
    fn validate(&self) {
        for (idx, app) in self.applications.iter().enumerate() {
            if app.max_capacity == 0 {
                panic!("Application {} has zero max capacity", app.name);
            }
            if self.applications[..idx].iter().any(|other| other.name == app.name) {
                panic!("Duplicate application {}", app.name);
            }
        }
        for user in &self.users {
            for app in &user.preinstalled {
                if !self.applications.iter().any(|config| &config.name == app) {
                    panic!("Unknown application {} in preinstalled list of {}", app, user.name);
                }
            }
        }
    }
}

impl Default for ScenarioConfig {
    /// The fixed demo dataset: five applications with 50 units each and the
    /// eight-user roster, driven by the reuse-first policy.
    fn default() -> Self {
        Self {
            policy: "ReuseFirst".to_string(),
            applications: default_applications(),
            users: default_roster(),
        }
    }
}

fn default_applications() -> Vec<ApplicationConfig> {
    ["App A", "App B", "App C", "App D", "App E"]
        .iter()
        .map(|name| ApplicationConfig {
            name: name.to_string(),
            max_capacity: 50,
        })
        .collect()
}

fn default_roster() -> Vec<UserConfig> {
    [
        ("User 1", vec!["App A", "App B"]),
        ("User 2", vec!["App B", "App C"]),
        ("User 3", vec!["App A", "App D"]),
        ("User 4", vec!["App C", "App E"]),
        ("User 5", vec!["App B", "App D"]),
        ("User 6", vec!["App A", "App E"]),
        ("User 7", vec!["App C", "App D"]),
        ("User 8", vec!["App A", "App C"]),
    ]
    .into_iter()
    .map(|(name, preinstalled)| UserConfig {
        name: name.to_string(),
        preinstalled: preinstalled.into_iter().map(|app| app.to_string()).collect(),
    })
    .collect()
}

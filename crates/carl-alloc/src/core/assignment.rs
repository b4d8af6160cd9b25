//! Assignment history records.

use std::fs::File;

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::application::Application;

/// Append-only log entry describing the allocation decision made for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignmentRecord {
    /// Name of the processed user.
    pub user: String,
    /// The user's preinstalled applications, in preference order.
    pub preinstalled: Vec<String>,
    /// Applications actually charged, in charge order.
    pub apps: Vec<String>,
    /// Preinstalled applications that absorbed at least one unit, deduplicated.
    pub used_preinstalled: Vec<String>,
    /// The non-preinstalled application charged when no preinstalled app had
    /// capacity. Unset when a preinstalled app absorbed the demand or when
    /// nothing could be charged at all.
    pub extra_app: Option<String>,
    /// Capacities of all applications right after this step.
    pub capacities_after: IndexMap<String, Application>,
    /// Units of capacity charged during this step.
    pub transactions: u32,
}

#[derive(Serialize)]
struct HistoryRow {
    step: usize,
    user: String,
    preinstalled: String,
    apps: String,
    used_preinstalled: String,
    extra_app: String,
    transactions: u32,
}

/// Saves assignment records to a CSV file, one row per processed user.
/// Application lists are joined with `;`.
pub fn save_history_csv(history: &[AssignmentRecord], path: &str) -> Result<(), std::io::Error> {
    let file = File::create(path)?;
    let mut wtr = csv::Writer::from_writer(file);
    for (idx, record) in history.iter().enumerate() {
        wtr.serialize(HistoryRow {
            step: idx + 1,
            user: record.user.clone(),
            preinstalled: record.preinstalled.join(";"),
            apps: record.apps.join(";"),
            used_preinstalled: record.used_preinstalled.join(";"),
            extra_app: record.extra_app.clone().unwrap_or_default(),
            transactions: record.transactions,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

use carl_alloc::core::config::{ApplicationConfig, ScenarioConfig, UserConfig};
use carl_alloc::core::engine::AllocationEngine;

fn scenario(apps: Vec<(&str, u32)>, users: Vec<(&str, Vec<&str>)>, policy: &str) -> ScenarioConfig {
    ScenarioConfig {
        policy: policy.to_string(),
        applications: apps
            .into_iter()
            .map(|(name, max_capacity)| ApplicationConfig {
                name: name.to_string(),
                max_capacity,
            })
            .collect(),
        users: users
            .into_iter()
            .map(|(name, preinstalled)| UserConfig {
                name: name.to_string(),
                preinstalled: preinstalled.into_iter().map(|app| app.to_string()).collect(),
            })
            .collect(),
    }
}

fn drain_config() -> ScenarioConfig {
    ScenarioConfig {
        policy: "DrainPreinstalled".to_string(),
        ..ScenarioConfig::default()
    }
}

#[test]
// Reuse-first follows the preference order, not the remaining capacity:
// App A is charged even though App B has more room.
fn test_reuse_first_prefers_order_over_capacity() {
    let config = scenario(
        vec![("App A", 1), ("App B", 5)],
        vec![("User 1", vec!["App A", "App B"])],
        "ReuseFirst",
    );
    let mut engine = AllocationEngine::new(&config);

    let record = engine.process_next_user().unwrap().clone();
    assert_eq!(record.apps, vec!["App A"]);
    assert_eq!(record.transactions, 1);
    assert_eq!(engine.capacities().get_current("App B"), 5);
}

#[test]
// The legacy drain policy empties each preinstalled app in order: the first
// demo user absorbs all 50 units of App A and then all 50 units of App B.
fn test_drain_first_user() {
    let mut engine = AllocationEngine::new(&drain_config());

    let record = engine.process_next_user().unwrap().clone();
    assert_eq!(record.user, "User 1");
    assert_eq!(record.apps, vec!["App A", "App B"]);
    assert_eq!(record.used_preinstalled, vec!["App A", "App B"]);
    assert_eq!(record.extra_app, None);
    assert_eq!(record.transactions, 100);
    assert_eq!(engine.capacities().get_current("App A"), 0);
    assert_eq!(engine.capacities().get_current("App B"), 0);
}

#[test]
// Under the drain policy the demo roster empties the whole table in four
// steps (users 1-4 drain A+B, C, D, E), so users 5-8 find neither
// preinstalled capacity nor a usable fallback and consume nothing.
fn test_drain_full_roster() {
    let mut engine = AllocationEngine::new(&drain_config());
    engine.process_all();

    let history = engine.history();
    assert_eq!(history.len(), 8);
    assert_eq!(history[0].transactions, 100);
    assert_eq!(history[1].transactions, 50);
    assert_eq!(history[1].apps, vec!["App C"]);
    assert_eq!(history[2].apps, vec!["App D"]);
    assert_eq!(history[3].apps, vec!["App E"]);
    for record in &history[4..] {
        assert_eq!(record.transactions, 0);
        assert_eq!(record.apps, Vec::<String>::new());
        assert_eq!(record.extra_app, None);
    }

    let charged: u32 = history.iter().map(|record| record.transactions).sum();
    assert_eq!(charged, engine.capacities().total_max());
    assert_eq!(engine.capacities().total_current(), 0);
}

#[test]
// The drain fallback still charges a single unit, not the whole app.
fn test_drain_fallback_charges_one_unit() {
    let config = scenario(
        vec![("App A", 1), ("App B", 2)],
        vec![("User 1", vec!["App A"]), ("User 2", vec!["App A"])],
        "DrainPreinstalled",
    );
    let mut engine = AllocationEngine::new(&config);
    engine.process_next_user();

    let record = engine.process_next_user().unwrap().clone();
    assert_eq!(record.extra_app, Some("App B".to_string()));
    assert_eq!(record.transactions, 1);
    assert_eq!(engine.capacities().get_current("App B"), 1);
}

#[test]
// A drained-through list records only the apps that actually gave up units.
fn test_drain_skips_empty_preinstalled() {
    let config = scenario(
        vec![("App A", 1), ("App B", 2)],
        vec![("User 1", vec!["App A"]), ("User 2", vec!["App A", "App B"])],
        "DrainPreinstalled",
    );
    let mut engine = AllocationEngine::new(&config);
    engine.process_next_user();

    let record = engine.process_next_user().unwrap().clone();
    assert_eq!(record.apps, vec!["App B"]);
    assert_eq!(record.used_preinstalled, vec!["App B"]);
    assert_eq!(record.extra_app, None);
    assert_eq!(record.transactions, 2);
}

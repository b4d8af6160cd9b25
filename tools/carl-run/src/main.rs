use std::io::Write as IoWrite;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use carl_alloc::core::config::ScenarioConfig;
use carl_alloc::core::engine::AllocationEngine;

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
/// Steps the CARL allocation engine through a scenario
struct Args {
    /// Path to YAML file with scenario configuration (default - demo dataset)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of users to process (default - the whole roster)
    #[arg(short, long)]
    steps: Option<usize>,

    /// Path to produced JSON file with assignment history
    #[arg(short, long)]
    json: Option<PathBuf>,

    /// Path to produced CSV file with assignment history
    #[arg(long)]
    csv: Option<String>,
}

fn init_logger() {
    use env_logger::Builder;
    Builder::from_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn print_capacities(engine: &AllocationEngine) {
    let capacities = engine.capacities();
    for (rank, app) in engine.apps_by_descending_capacity().iter().enumerate() {
        println!(
            "  #{} {:<8} {:>3} / {}",
            rank + 1,
            app,
            capacities.get_current(app),
            capacities.get_max(app)
        );
    }
}

fn main() -> std::io::Result<()> {
    init_logger();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ScenarioConfig::from_file(path.to_str().unwrap()),
        None => ScenarioConfig::default(),
    };
    let mut engine = AllocationEngine::new(&config);

    info!(
        "scenario: {} applications, {} users, policy {}",
        config.applications.len(),
        config.users.len(),
        config.policy
    );

    let steps = args.steps.unwrap_or_else(|| engine.roster_len());
    for _ in 0..steps {
        let Some(record) = engine.process_next_user() else {
            break;
        };
        println!(
            "{} (preinstalled: {}) -> apps {:?}, extra app {:?}, {} transaction(s)",
            record.user,
            record.preinstalled.join(", "),
            record.apps,
            record.extra_app,
            record.transactions
        );
    }

    println!("\nApplications by remaining capacity:");
    print_capacities(&engine);
    if engine.is_complete() {
        println!("\nAll users processed, {} records in history", engine.history().len());
    } else {
        println!(
            "\nStopped at {} of {} users",
            engine.cursor(),
            engine.roster_len()
        );
    }

    if let Some(path) = &args.json {
        std::fs::File::create(path)?
            .write_all(serde_json::to_string_pretty(engine.history()).unwrap().as_bytes())?;
    }
    if let Some(path) = &args.csv {
        engine.save_history(path)?;
    }
    Ok(())
}

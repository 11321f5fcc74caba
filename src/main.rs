//! Reload Check - Entry Point
//!
//! Loads one or more agent scenarios, runs the reload job giver against each
//! and reports the priority offered and the reload task produced.

use clap::Parser;
use reload_check::core::config::{load_config, ReloadConfig};
use reload_check::core::error::Result;
use reload_check::reload::{evaluate_reload_need, CheckReload, RecordingPreparer, ReloadReason};
use reload_check::scenario::{load_scenario, Scenario};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Reload Check - evaluate reload decisions for agent scenarios
#[derive(Parser, Debug)]
#[command(name = "reload_check")]
#[command(about = "Evaluate whether agents should reload, and with what")]
struct Args {
    /// Scenario TOML files (see data/scenarios/)
    #[arg(required = true)]
    scenarios: Vec<PathBuf>,

    /// Job giver config; defaults are used when the file is absent
    #[arg(long, default_value = "data/reload.toml")]
    config: PathBuf,

    /// Tick stamped on produced reload tasks
    #[arg(long, default_value_t = 0)]
    tick: u64,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct ScenarioReport {
    scenario: String,
    priority: f32,
    needed: bool,
    weapon: Option<String>,
    link: Option<String>,
    reason: Option<ReloadReason>,
    task_created: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reload_check=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = if args.config.exists() {
        load_config(&args.config)?
    } else {
        tracing::warn!("Config {:?} not found - using defaults", args.config);
        ReloadConfig::default()
    };
    let giver = CheckReload::new(config);

    let mut reports = Vec::with_capacity(args.scenarios.len());
    for path in &args.scenarios {
        let scenario = load_scenario(path)?;
        reports.push(report(&giver, &scenario, args.tick));
    }

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for r in &reports {
            print_text(r);
        }
    }

    Ok(())
}

fn report(giver: &CheckReload, scenario: &Scenario, tick: u64) -> ScenarioReport {
    let agent = &scenario.agent;
    let priority = giver.priority(agent);
    let decision = evaluate_reload_need(agent);

    let mut preparer = RecordingPreparer::at_tick(tick);
    let task = giver.try_give_task(agent, &mut preparer);

    tracing::info!(
        scenario = %scenario.name,
        priority,
        needed = decision.is_some(),
        "scenario evaluated"
    );

    ScenarioReport {
        scenario: scenario.name.clone(),
        priority,
        needed: decision.is_some(),
        weapon: decision
            .and_then(|d| scenario.weapon(d.weapon))
            .map(|w| w.name.clone()),
        link: decision
            .and_then(|d| scenario.link_name(d.weapon, d.link))
            .map(str::to_string),
        reason: decision.map(|d| d.reason),
        task_created: task.is_some(),
    }
}

fn print_text(r: &ScenarioReport) {
    println!("=== {} ===", r.scenario);
    if r.needed {
        println!(
            "  reload {} with '{}' ({:?})",
            r.weapon.as_deref().unwrap_or("?"),
            r.link.as_deref().unwrap_or("?"),
            r.reason
        );
    } else {
        println!("  no reload needed");
    }
    println!("  priority: {:.1}", r.priority);
    println!("  task created: {}", r.task_created);
}

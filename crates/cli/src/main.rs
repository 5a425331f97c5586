use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use stowage_core::{ComplianceEngine, ComplianceRequest, TravelClass};
use stowage_observability::{init_tracing, EngineMetrics};
use stowage_storage::{load_manifest, save_manifest};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "stowage")]
#[command(about = "Baggage compliance desk CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a luggage manifest against a class/age policy.
    Evaluate {
        /// CSV manifest of luggage items.
        #[arg(long)]
        manifest: PathBuf,
        #[arg(long, default_value = "economy")]
        class: String,
        #[arg(long, default_value = "adult")]
        age: String,
        /// Emit the full structured report instead of the bare result.
        #[arg(long)]
        report: bool,
        /// Write the moved-to-checked items back out as a manifest.
        #[arg(long)]
        save_moved: Option<PathBuf>,
    },
    /// Print the policy table, optionally for a single class.
    Policy {
        #[arg(long)]
        class: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing("stowage_cli");
    let cli = Cli::parse();
    let engine = ComplianceEngine::default();

    match cli.command {
        Command::Evaluate {
            manifest,
            class,
            age,
            report,
            save_moved,
        } => {
            let items = load_manifest(&manifest)
                .with_context(|| format!("failed loading manifest {}", manifest.display()))?;
            info!(items = items.len(), "manifest loaded");

            let request = ComplianceRequest::from_codes(&class, &age, items)
                .context("invalid --class or --age value")?;

            let metrics = EngineMetrics::shared();
            let (result, full_report) = engine.evaluate_with_report(request);
            metrics.record_evaluation(
                result.valid,
                result.items.len(),
                result.moved_to_checked.len(),
                result.cargo.len(),
                result.fees,
            );
            let snapshot = metrics.snapshot();
            info!(
                evaluations = snapshot.evaluations_total,
                fee_units = snapshot.fee_units_total,
                cargo = snapshot.cargo_routed_total,
                "session metrics"
            );

            if let Some(path) = save_moved {
                save_manifest(&path, &result.moved_to_checked)
                    .with_context(|| format!("failed saving moved items to {}", path.display()))?;
            }

            if report {
                println!("{}", serde_json::to_string_pretty(&full_report)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
        }
        Command::Policy { class } => {
            let table = engine.policy_table();
            match class {
                Some(class) => {
                    let class = TravelClass::parse(&class).context("invalid --class value")?;
                    println!(
                        "{}",
                        serde_json::to_string_pretty(table.class_policy(class))?
                    );
                }
                None => println!("{}", serde_json::to_string_pretty(table)?),
            }
        }
    }

    Ok(())
}

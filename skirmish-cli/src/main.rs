//! SKIRMISH CLI - plan a turn from a simulation snapshot
//!
//! Commands:
//! - plan: choose the footmen's joint action for this turn
//! - eval: print the heuristic utility of a snapshot
//! - children: dump the generated joint actions for inspection

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use skirmish_core::{order_children, AlphaBetaPlanner, Snapshot};

#[derive(Parser)]
#[command(name = "skirmish")]
#[command(about = "Joint-action adversarial search for grid skirmishes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose the footmen's joint action for this turn
    Plan {
        /// Path to the snapshot JSON
        #[arg(long)]
        snapshot: PathBuf,
        /// Search depth in plies
        #[arg(long, default_value = "3")]
        depth: u32,
    },
    /// Print the heuristic utility of a snapshot
    Eval {
        #[arg(long)]
        snapshot: PathBuf,
    },
    /// Dump the generated children of a snapshot
    Children {
        #[arg(long)]
        snapshot: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Plan { snapshot, depth } => plan(&snapshot, depth),
        Commands::Eval { snapshot } => eval(&snapshot),
        Commands::Children { snapshot } => children(&snapshot),
    }
}

fn load(path: &Path) -> anyhow::Result<Snapshot> {
    Snapshot::load(path).with_context(|| format!("loading snapshot {}", path.display()))
}

fn plan(path: &Path, depth: u32) -> anyhow::Result<()> {
    let snapshot = load(path)?;
    let planner = AlphaBetaPlanner::new(depth)?;
    let plan = planner.plan_snapshot(&snapshot)?;

    tracing::info!(
        "search: depth={}, nodes={}, cutoffs={}",
        depth,
        plan.stats.nodes,
        plan.stats.cutoffs
    );

    let out = serde_json::json!({
        "action": plan.action,
        "value": plan.value,
        "nodes": plan.stats.nodes,
        "cutoffs": plan.stats.cutoffs,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn eval(path: &Path) -> anyhow::Result<()> {
    let snapshot = load(path)?;
    let state = snapshot.initial_state()?;
    println!("{:.4}", state.utility());
    Ok(())
}

fn children(path: &Path) -> anyhow::Result<()> {
    let snapshot = load(path)?;
    let state = snapshot.initial_state()?;

    let mut children = state.children();
    order_children(&mut children);

    for (i, child) in children.iter().enumerate() {
        println!(
            "#{:<2} utility={:<12.4} {} | {}",
            i,
            child.state.utility(),
            serde_json::to_string(&child.action)?,
            child.state.describe_positions(),
        );
    }
    Ok(())
}

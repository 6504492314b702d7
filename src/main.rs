//! Coverage planner - camera coverage gaps and placement recommendations
//!
//! Reads a floor plan snapshot (floor plan, zones, cameras) and proposes new
//! camera positions for under-covered critical zones.
//!
//! Module structure:
//! - `domain/` - Core types (FloorPlan, Zone, Camera, Recommendation) and geometry
//! - `services/` - Coverage field, zone coverage, placement, recommender
//! - `infra/` - Configuration and logging
//! - `io/` - Snapshot input and JSONL egress

use anyhow::Context;
use clap::{Parser, Subcommand};
use coverage_planner::infra::logging::{self, LogFormat};
use coverage_planner::infra::Config;
use coverage_planner::io::{Egress, Snapshot};
use coverage_planner::services::{
    build_coverage_grid, generate_recommendations, sort_by_priority, RecommendationSummary,
};
use tracing::info;

/// Coverage planner - camera placement recommendations for venue floor plans
#[derive(Parser, Debug)]
#[command(name = "coverage-planner", version, about)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, env = "CONFIG_FILE", default_value = "config/dev.toml", global = true)]
    config: String,

    /// Emit logs as JSON lines instead of text
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate recommendations and append them to the egress file
    Recommend {
        /// Snapshot JSON with floorPlan, zones and cameras
        #[arg(short, long)]
        snapshot: String,

        /// Output JSONL file (defaults to output.file from config)
        #[arg(short, long)]
        output: Option<String>,

        /// Order output by priority (stable within a priority)
        #[arg(long)]
        sort_by_priority: bool,
    },
    /// Print the coverage grid as an ASCII heat map
    Grid {
        /// Snapshot JSON with floorPlan, zones and cameras
        #[arg(short, long)]
        snapshot: String,

        /// Cells per side (defaults to grid.size from config)
        #[arg(short = 'n', long)]
        size: Option<usize>,
    },
}

/// Shade ramp from unseen to fully covered
const SHADES: [char; 5] = [' ', '.', ':', '*', '#'];

fn shade(coverage: f64) -> char {
    if coverage <= 0.0 {
        return SHADES[0];
    }
    let idx = (coverage * (SHADES.len() - 1) as f64).ceil() as usize;
    SHADES[idx.min(SHADES.len() - 1)]
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(if args.json_logs { LogFormat::Json } else { LogFormat::Text });
    info!(git_hash = env!("GIT_HASH"), "coverage-planner starting");

    let config = Config::load_from_path(&args.config)?;
    info!(
        config_file = %config.config_file(),
        coverage_threshold = %config.coverage_threshold(),
        coverage_target = %config.coverage_target(),
        camera_cost = %config.camera_cost(),
        blind_spots = %config.blind_spots_enabled(),
        redundancy = %config.redundancy_enabled(),
        "config_loaded"
    );

    match args.command {
        Command::Recommend { snapshot, output, sort_by_priority: sort } => {
            let snapshot = Snapshot::from_file(&snapshot)?;
            let mut recommendations = generate_recommendations(
                &config,
                &snapshot.floor_plan,
                &snapshot.cameras,
                &snapshot.zones,
            )
            .with_context(|| format!("Failed to plan floor plan {}", snapshot.floor_plan.id))?;

            if sort {
                sort_by_priority(&mut recommendations);
            }

            RecommendationSummary::from_recommendations(&recommendations).log(&snapshot.floor_plan.id);

            let output = output.unwrap_or_else(|| config.output_file().to_string());
            let egress = Egress::new(&output);
            let written = egress
                .write_recommendations(&snapshot.floor_plan.id, &recommendations)
                .with_context(|| format!("Failed to write recommendations to {output}"))?;
            info!(written, output = %output, "recommendations_written");
        }
        Command::Grid { snapshot, size } => {
            let snapshot = Snapshot::from_file(&snapshot)?;
            let size = size.unwrap_or(config.grid_size());
            anyhow::ensure!(size > 0, "Grid size must be at least 1");

            let grid = build_coverage_grid(snapshot.floor_plan.dimensions, &snapshot.cameras, size);
            let border = "-".repeat(size);
            println!("+{border}+");
            for row in &grid {
                let line: String = row.iter().map(|&c| shade(c)).collect();
                println!("|{line}|");
            }
            println!("+{border}+");
        }
    }

    info!("coverage-planner done");
    Ok(())
}

//! CLI command definitions and subcommands

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Momentum - goal-to-roadmap planner with Pomodoro session tracking
#[derive(Parser)]
#[command(
    name = "momentum",
    about = "Turn a goal into a monthly roadmap and a week of Pomodoro-sized tasks",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Generate a plan for a goal
    Plan {
        /// The goal to plan for
        goal: String,

        /// Duration in months (omit to derive from the goal)
        #[arg(short, long, default_value = "0")]
        months: u32,

        /// Hours available per day (1.0 to 12.0, half-hour steps)
        #[arg(short, long, default_value = "2.0")]
        daily_hours: f64,

        /// Fixed daily commitments to plan around
        #[arg(long, default_value = "")]
        commitments: String,

        /// Skip the generation backend and synthesize offline
        #[arg(long)]
        offline: bool,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Also write the plan as JSON for later `session` runs
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Work through a day of a saved plan
    Session {
        /// Plan file written by `plan --output`
        plan_file: PathBuf,

        /// Day of the week to start (1-7)
        #[arg(short, long, default_value = "1")]
        day: usize,
    },

    /// Print the estimated duration for a goal
    Estimate {
        /// The goal to estimate
        goal: String,

        /// Hours available per day
        #[arg(short, long, default_value = "2.0")]
        daily_hours: f64,
    },
}

/// Output format for plan rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::load_catalog;
use crate::error::Result;
use crate::schedule::{build_initial_data, seed::load_seed, time_labels, Activity, ScheduleData};

#[derive(Debug, Parser)]
#[command(name = "schedule-planner", version, about = "Drag-and-drop weekly schedule planner")]
pub struct Cli {
    #[command(flatten)]
    pub seed: SeedArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the planner over HTTP
    Serve {
        #[arg(long, env = "PLANNER_BIND", default_value = "0.0.0.0")]
        bind: String,
        #[arg(short, long, env = "PLANNER_PORT", default_value_t = 8080)]
        port: u16,
    },
    /// Print the seeded board and grid
    Show,
}

/// Where the initial board, grid and catalog come from
#[derive(Debug, Clone, Args)]
pub struct SeedArgs {
    /// JSON seed with days, times and initial board activities
    #[arg(long, env = "PLANNER_SEED", global = true)]
    pub seed_file: Option<PathBuf>,

    /// Catalog of activity templates (.csv or .json)
    #[arg(long, env = "PLANNER_CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Day labels, comma separated
    #[arg(
        long,
        env = "PLANNER_DAYS",
        value_delimiter = ',',
        default_values = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
        global = true
    )]
    pub days: Vec<String>,

    /// Time of the first row (HH:MM)
    #[arg(long, env = "PLANNER_START", default_value = "09:00", global = true)]
    pub start: String,

    /// Number of time rows
    #[arg(long, env = "PLANNER_ROWS", default_value_t = 9, global = true)]
    pub rows: usize,

    /// Minutes between rows
    #[arg(long, env = "PLANNER_INTERVAL", default_value_t = 60, global = true)]
    pub interval: u32,
}

impl SeedArgs {
    /// Builds the starting schedule; a seed file wins over the day/time flags
    pub fn initial_data(&self) -> Result<ScheduleData> {
        if let Some(path) = &self.seed_file {
            tracing::info!(path = %path.display(), "loading seed file");
            return load_seed(path);
        }

        let days = self
            .days
            .iter()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .collect();
        let times = time_labels(&self.start, self.rows, self.interval)?;
        build_initial_data(days, times, Vec::new())
    }

    pub fn catalog(&self) -> Result<Vec<Activity>> {
        match &self.catalog {
            Some(path) => load_catalog(path),
            None => Ok(Vec::new()),
        }
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Booth Plan — solves break-even, target-profit and profit-ladder figures for a booth.
#[derive(Parser, Debug)]
#[command(name = "booth_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the booth JSON file.
    #[arg(short, long, default_value = "booth.json")]
    pub file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute and display the business plan.
    Plan {
        /// Include the profit ladder.
        #[arg(long)]
        ladder: bool,

        /// Save the computed plan as JSON.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Compare required revenue across profit percentages.
    Ladder {
        /// Profit percentages (comma-separated). Defaults to the booth settings.
        #[arg(long, value_delimiter = ',')]
        percentages: Option<Vec<u32>>,

        /// Export the table as CSV.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Edit the menu selection and sales mix interactively.
    Mix,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            ladder: false,
            out: None,
        }
    }
}

// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::ViewMode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to TOML config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// JSON restaurant catalog to use instead of the built-in list
    #[arg(long, value_name = "CATALOG", global = true)]
    pub catalog: Option<PathBuf>,

    /// Evaluate open/closed status at this hour instead of now
    #[arg(long, value_name = "HOUR", global = true, value_parser = clap::value_parser!(u32).range(0..24))]
    pub hour: Option<u32>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the card grid after selecting a mood filter
    Cards {
        /// Mood to filter by ("all" shows every restaurant)
        #[arg(short, long, default_value = "all")]
        mood: String,

        /// Print text instead of markup
        #[arg(long)]
        plain: bool,
    },

    /// Print the table body with every restaurant
    Table {
        /// Print text instead of markup
        #[arg(long)]
        plain: bool,
    },

    /// Pick a random restaurant and print its card
    Random {
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,

        /// Print text instead of markup
        #[arg(long)]
        plain: bool,
    },

    /// Print whether restaurants are open
    Status,

    /// List restaurant names matching a mood
    List {
        /// Mood to filter by ("all" lists every restaurant)
        #[arg(short, long, default_value = "all")]
        mood: String,

        /// Output the matching records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the whole directory page and write it to a file
    Page {
        /// Mood filter to click after loading
        #[arg(short, long)]
        mood: Option<String>,

        /// View tab to click after loading (card or table)
        #[arg(long, value_name = "VIEW")]
        view: Option<ViewMode>,

        /// Output file; a temporary file is used when omitted
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Open the written page in the browser
        #[arg(long)]
        open: bool,
    },
}

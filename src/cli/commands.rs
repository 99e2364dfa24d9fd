//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "workxlog")]
#[command(about = "Weekly work log with skill and mood insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// User whose log to use (overrides the configured user)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new work log
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Save the entry for a week (replaces an existing entry for that week)
    Log {
        /// Week to log (this, last, "3 weeks ago", DD-MM-YYYY, YYYY-MM-DD)
        #[arg(short, long, default_value = "this")]
        week: String,

        /// A responsibility statement; repeat for several lines
        #[arg(short, long = "line", value_name = "TEXT")]
        lines: Vec<String>,

        /// Read additional lines from stdin, one per line
        #[arg(long)]
        stdin: bool,

        /// A skill tag; repeat for several skills
        #[arg(short, long = "skill", value_name = "TAG")]
        skills: Vec<String>,

        /// How the week felt, 1 (overwhelmed) to 10 (excellent)
        #[arg(short, long, default_value_t = 7, value_parser = clap::value_parser!(i32).range(1..=10))]
        mood: i32,
    },

    /// Show the entry logged for a week
    Show {
        /// Week to show
        #[arg(default_value = "this")]
        week: String,
    },

    /// List logged weeks, most recent first
    Weeks {
        /// Show every logged week instead of the latest 12
        #[arg(short, long)]
        all: bool,
    },

    /// Show strengths, highlights, and mood trend
    Insights {
        /// Number of most recent weeks to analyze
        #[arg(short, long)]
        weeks: Option<usize>,

        /// Number of top skills to show
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Suggest skill tags matching a draft
    Suggest {
        /// Part of a skill name
        draft: String,

        /// Tags already chosen, left out of suggestions
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// Load ten weeks of sample entries
    Demo,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

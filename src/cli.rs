use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "oss-finder",
    about = "Search open-source repositories and flag their license risk",
    version
)]
pub struct Cli {
    /// Config file [default: ./.oss-finder/config.toml, fallback ~/.config/oss-finder/config.toml]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// User dictionary file [default: ~/.config/oss-finder/dictionary.json]
    #[arg(long = "dict", value_name = "FILE", global = true)]
    pub dict: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print summary lines
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate the query, search GitHub, and classify every hit's license
    Search {
        /// Search keywords (source-language terms are translated first)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Number of repositories to fetch [default: from config, 5]
        #[arg(short, long)]
        limit: Option<u32>,

        /// Report format
        #[arg(long, default_value = "terminal", value_name = "FORMAT")]
        report: ReportFormat,

        /// GitHub token [default: $GITHUB_TOKEN]
        #[arg(long)]
        token: Option<String>,
    },

    /// Show how a query is rewritten by the dictionaries
    Translate {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Classify a license identifier (omit it to classify "no license")
    Classify { license: Option<String> },

    /// Manage the user dictionary
    Dict {
        #[command(subcommand)]
        action: DictAction,
    },

    /// Interactive search prompt; a new query supersedes the one in flight
    Shell {
        #[arg(short, long)]
        limit: Option<u32>,

        /// GitHub token [default: $GITHUB_TOKEN]
        #[arg(long)]
        token: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DictAction {
    /// List user mappings
    List {
        /// Include built-in mappings
        #[arg(long)]
        all: bool,
    },
    /// Add or replace a mapping
    Add { source: String, target: String },
    /// Remove a mapping
    Remove { source: String },
    /// Remove every user mapping
    Clear,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

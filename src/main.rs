//! `oss-finder`: search open-source repositories, translate queries, and flag license risk.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and install logging ([`logging`]).
//! 2. Load config ([`config::load_config`]) and resolve the user dictionary ([`dictionary::store`]).
//! 3. Translate the query through builtin ∪ user terms ([`dictionary`]).
//! 4. Search GitHub with fixed popularity filters ([`search::github`]).
//! 5. Classify each hit's license ([`license`]).
//! 6. Render the requested report ([`report`]).
//! 7. Exit `0`, or `1` when the search backend failed.

mod cli;
mod commands;
mod config;
mod dictionary;
mod license;
mod logging;
mod models;
mod report;
mod search;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};
use config::load_config;
use search::github::GithubClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let store = commands::dictionary_store(cli.dict.as_deref(), &config);

    match cli.command {
        Command::Search {
            query,
            limit,
            report,
            token,
        } => {
            let client = GithubClient::new(&config.search, commands::resolve_token(token))?;
            let limit = limit.unwrap_or(config.search.default_limit);
            let user = store.load();

            let outcome =
                commands::search::run(&client, &query.join(" "), &user, limit, report, cli.quiet)
                    .await?;

            if outcome.error {
                std::process::exit(1);
            }
        }
        Command::Translate { query } => {
            commands::lookup::translate(&query.join(" "), &store.load());
        }
        Command::Classify { license } => {
            commands::lookup::classify_license(license.as_deref());
        }
        Command::Dict { action } => {
            commands::dict::run(&store, action, cli.quiet)?;
        }
        Command::Shell { limit, token } => {
            let client = GithubClient::new(&config.search, commands::resolve_token(token))?;
            let limit = limit.unwrap_or(config.search.default_limit);
            commands::shell::run(client, store, limit, cli.quiet).await?;
        }
    }

    Ok(())
}

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::dictionary::store::DictionaryStore;
use crate::dictionary::{builtin, merge};
use crate::report;
use crate::search::github::GithubClient;
use crate::search::run_search;
use crate::search::session::SearchSession;

/// A parsed line of shell input.
#[derive(Debug, PartialEq)]
enum Input {
    Search(String),
    Limit(u32),
    Quit,
    Invalid(String),
    Empty,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Input::Search(line.to_string());
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("q" | "quit" | "exit"), None) => Input::Quit,
        (Some("limit"), Some(n)) => match n.parse::<u32>() {
            Ok(n) if n > 0 => Input::Limit(n),
            _ => Input::Invalid(format!("not a positive number: {}", n)),
        },
        _ => Input::Invalid(format!("unknown command: :{}", command)),
    }
}

/// Read queries from stdin until EOF or `:quit`.
///
/// Each query starts a new search task. A still-running earlier search is
/// aborted, and its results are dropped if it completes anyway.
pub async fn run(
    client: GithubClient,
    store: DictionaryStore,
    mut limit: u32,
    quiet: bool,
) -> Result<()> {
    let session = Arc::new(SearchSession::new());
    let mut in_flight: Option<JoinHandle<()>> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !quiet {
        eprintln!(
            " {} type keywords to search, :limit N to change the result count, :quit to leave",
            "oss-finder".bold()
        );
    }

    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Empty => {}
            Input::Quit => break,
            Input::Invalid(msg) => eprintln!(" {} {}", "[ERROR]".red().bold(), msg),
            Input::Limit(n) => {
                limit = n;
                if !quiet {
                    eprintln!(" limit set to {}", n);
                }
            }
            Input::Search(query) => {
                if let Some(previous) = in_flight.take() {
                    previous.abort();
                }

                // Reload per query so edits from another terminal apply.
                let dictionary = merge(&builtin(), &store.load());
                let ticket = session.begin();
                let session = Arc::clone(&session);
                let client = client.clone();

                in_flight = Some(tokio::spawn(async move {
                    let outcome = run_search(&client, &query, &dictionary, limit).await;
                    if !session.is_current(ticket) {
                        debug!(query = %query, "dropping superseded search results");
                        return;
                    }
                    if let Err(err) = report::terminal::render(&outcome, quiet) {
                        eprintln!(" {} {:#}", "[ERROR]".red().bold(), err);
                    }
                }));
            }
        }
    }

    if let Some(last) = in_flight {
        let _ = last.await;
    }

    Ok(())
}

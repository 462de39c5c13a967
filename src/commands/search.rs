use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::ReportFormat;
use crate::dictionary::{builtin, merge, TermDictionary};
use crate::models::SearchOutcome;
use crate::report;
use crate::search::github::GithubClient;
use crate::search::run_search;

/// Run one search and render it. Returns the outcome so the caller can pick
/// the exit code.
pub async fn run(
    client: &GithubClient,
    query: &str,
    user: &TermDictionary,
    limit: u32,
    format: ReportFormat,
    quiet: bool,
) -> Result<SearchOutcome> {
    let dictionary = merge(&builtin(), user);

    let spinner = if !quiet && matches!(format, ReportFormat::Terminal) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
        pb.set_message("Scanning repositories...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let outcome = run_search(client, query, &dictionary, limit).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    match format {
        ReportFormat::Terminal => report::terminal::render(&outcome, quiet)?,
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(outcome)
}

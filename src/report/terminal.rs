use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{ClassifiedRepository, LicenseClassification, LicenseStatus, SearchOutcome};

const DESCRIPTION_WIDTH: usize = 60;
const MAX_TOPICS: usize = 3;

/// Render a colored terminal report for one search.
pub fn render(outcome: &SearchOutcome, quiet: bool) -> Result<()> {
    let total = outcome.repositories.len();
    let allowed = outcome.count(LicenseStatus::Allowed);
    let review = outcome.count(LicenseStatus::Review);
    let forbidden = outcome.count(LicenseStatus::Forbidden);
    let unknown = outcome.count(LicenseStatus::Unknown);

    if outcome.error {
        eprintln!(
            " {} target unreachable, the repository search failed",
            "[SYSTEM ERROR]".red().bold()
        );
        return Ok(());
    }

    if quiet {
        println!(
            "Total: {}  Allowed: {}  Review: {}  Forbidden: {}  Unknown: {}",
            total,
            allowed.to_string().green(),
            review.to_string().cyan(),
            forbidden.to_string().red(),
            unknown.to_string().yellow(),
        );
        return Ok(());
    }

    println!("\n {} v{}", "oss-finder".bold(), env!("CARGO_PKG_VERSION"));
    if outcome.translated_query != outcome.query {
        println!(
            " Query: {} {} {}\n",
            outcome.query,
            "→".cyan(),
            outcome.translated_query
        );
    } else {
        println!(" Query: {}\n", outcome.query);
    }

    if total == 0 {
        println!(" No repositories found. Try adjusting your search terms.\n");
        return Ok(());
    }

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Repositories       : {}", total));
    println!(
        " │  {:<48} │",
        format!("{}  Commercial OK   : {:>4}", "✓".green(), allowed)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Copyleft        : {:>4}", "⚠".cyan(), review)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Non-commercial  : {:>4}", "✗".red(), forbidden)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Unknown         : {:>4}", "?".yellow(), unknown)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    render_table(&outcome.repositories);
    println!();

    Ok(())
}

fn render_table(repos: &[ClassifiedRepository]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Repository").add_attribute(Attribute::Bold),
            Cell::new("Description").add_attribute(Attribute::Bold),
            Cell::new("Topics").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Classification").add_attribute(Attribute::Bold),
            Cell::new("Access").add_attribute(Attribute::Bold),
            Cell::new("Stars").add_attribute(Attribute::Bold),
            Cell::new("Forks").add_attribute(Attribute::Bold),
            Cell::new("Updated").add_attribute(Attribute::Bold),
        ]);

    for entry in repos {
        let repo = &entry.repository;
        let color = status_color(&entry.classification);

        let description = repo
            .description
            .as_deref()
            .map(|d| truncate(d, DESCRIPTION_WIDTH))
            .unwrap_or_else(|| "No description available.".to_string());

        let topics = if repo.topics.is_empty() {
            "-".to_string()
        } else {
            repo.topics
                .iter()
                .take(MAX_TOPICS)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        };

        let license = repo
            .license
            .as_ref()
            .map(|l| l.name.as_str())
            .unwrap_or("None");

        table.add_row(vec![
            Cell::new(format!("{}\n{}", repo.name, repo.full_name)),
            Cell::new(description),
            Cell::new(topics),
            Cell::new(license),
            Cell::new(entry.classification.label).fg(color),
            Cell::new(entry.classification.access_type.to_string())
                .fg(color)
                .set_alignment(CellAlignment::Center),
            Cell::new(repo.stargazers_count).set_alignment(CellAlignment::Right),
            Cell::new(repo.forks_count).set_alignment(CellAlignment::Right),
            Cell::new(date_part(&repo.updated_at)),
        ]);
    }

    println!("{}", table);
}

fn status_color(classification: &LicenseClassification) -> Color {
    match classification.status {
        LicenseStatus::Allowed => Color::Green,
        LicenseStatus::Review => Color::Cyan,
        LicenseStatus::Forbidden => Color::Red,
        LicenseStatus::Unknown => Color::Yellow,
    }
}

/// Cut `text` to at most `max` characters, marking the cut with `…`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// `2024-05-01T10:00:00Z` → `2024-05-01`.
fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

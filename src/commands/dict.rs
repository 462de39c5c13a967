use anyhow::Result;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use tracing::info;

use crate::cli::DictAction;
use crate::dictionary::builtin;
use crate::dictionary::store::DictionaryStore;

pub fn run(store: &DictionaryStore, action: DictAction, quiet: bool) -> Result<()> {
    match action {
        DictAction::List { all } => list(store, all, quiet),
        DictAction::Add { source, target } => {
            store.add(&source, &target)?;
            info!(source = %source.trim(), target = %target.trim(), "mapping saved");
            if !quiet {
                println!(
                    " {} {} {} {}",
                    "+".green(),
                    source.trim(),
                    "→".cyan(),
                    target.trim()
                );
            }
            Ok(())
        }
        DictAction::Remove { source } => {
            if store.remove(&source)? {
                if !quiet {
                    println!(" {} {}", "-".red(), source.trim());
                }
            } else {
                eprintln!(" No user mapping for '{}'", source.trim());
            }
            Ok(())
        }
        DictAction::Clear => {
            store.clear()?;
            if !quiet {
                println!(" User dictionary cleared");
            }
            Ok(())
        }
    }
}

fn list(store: &DictionaryStore, all: bool, quiet: bool) -> Result<()> {
    let user = store.load();
    let base = if all { builtin() } else { Default::default() };

    if quiet {
        println!("User: {}  Built-in: {}", user.len(), base.len());
        return Ok(());
    }

    if user.is_empty() && base.is_empty() {
        println!(" No custom mappings ({})", store.path().display());
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Source").add_attribute(Attribute::Bold),
            Cell::new("Target").add_attribute(Attribute::Bold),
            Cell::new("Origin").add_attribute(Attribute::Bold),
        ]);

    for (source, target) in &base {
        let origin = if user.contains_key(source) {
            "built-in (overridden)"
        } else {
            "built-in"
        };
        table.add_row(vec![Cell::new(source), Cell::new(target), Cell::new(origin)]);
    }
    for (source, target) in &user {
        table.add_row(vec![Cell::new(source), Cell::new(target), Cell::new("user")]);
    }

    println!("{}", table);
    Ok(())
}

//! Subcommand implementations, one module per command family.

pub mod dict;
pub mod lookup;
pub mod search;
pub mod shell;

use crate::config::Config;
use crate::dictionary::store::DictionaryStore;

/// Resolve the user dictionary location: `--dict`, then config, then default.
pub fn dictionary_store(flag: Option<&std::path::Path>, config: &Config) -> DictionaryStore {
    let path = flag
        .map(|p| p.to_path_buf())
        .or_else(|| config.dictionary.path.clone())
        .unwrap_or_else(DictionaryStore::default_path);
    DictionaryStore::new(path)
}

/// `--token`, then `$GITHUB_TOKEN`. Unauthenticated when neither is set.
pub fn resolve_token(flag: Option<String>) -> Option<String> {
    flag.or_else(|| std::env::var("GITHUB_TOKEN").ok())
        .filter(|t| !t.trim().is_empty())
}

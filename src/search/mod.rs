//! Repository search: the GitHub client, the translate → search → classify
//! pipeline, and last-request-wins bookkeeping for overlapping searches.

pub mod github;
pub mod session;

use tracing::{info, warn};

use crate::dictionary::{translate_with, TermDictionary};
use crate::license::classifier::classify_repository;
use crate::models::SearchOutcome;
use github::GithubClient;

/// Translate `query` with `dictionary`, search, and classify every hit.
///
/// Search failures never propagate: they are logged and reported through
/// [`SearchOutcome::error`] with an empty result list.
pub async fn run_search(
    client: &GithubClient,
    query: &str,
    dictionary: &TermDictionary,
    limit: u32,
) -> SearchOutcome {
    let translated = translate_with(query, dictionary);
    info!(original = query, translated = %translated, limit, "searching repositories");

    let (repositories, error) = match client.search_repositories(&translated, limit).await {
        Ok(repos) => (repos.into_iter().map(classify_repository).collect(), false),
        Err(err) => {
            warn!(error = %err, "repository search failed");
            (Vec::new(), true)
        }
    };

    SearchOutcome {
        query: query.to_string(),
        translated_query: translated,
        repositories,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::dictionary::{builtin, merge};

    #[tokio::test]
    async fn test_unreachable_backend_sets_error_flag() {
        // Nothing listens on port 9 (discard) on a test box.
        let config = SearchConfig {
            api_base: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..SearchConfig::default()
        };
        let client = GithubClient::new(&config, None).unwrap();
        let dict = merge(&builtin(), &TermDictionary::new());

        let outcome = run_search(&client, "推論", &dict, 5).await;
        assert!(outcome.error);
        assert!(outcome.repositories.is_empty());
        assert_eq!(outcome.query, "推論");
        assert_eq!(outcome.translated_query, "inference");
    }

    #[tokio::test]
    async fn test_blank_query_is_not_an_error() {
        let client = GithubClient::new(&SearchConfig::default(), None).unwrap();
        let outcome = run_search(&client, "  ", &TermDictionary::new(), 5).await;
        assert!(!outcome.error);
        assert!(outcome.repositories.is_empty());
    }
}

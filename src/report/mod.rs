//! Report renderers for search outcomes.
//!
//! - [`terminal`]: colored, tabular output with summary box; respects `--quiet`.
//! - JSON output is a plain `serde_json` dump of [`SearchOutcome`](crate::models::SearchOutcome)
//!   and lives in the search command.

pub mod terminal;

//! Query translation dictionaries.
//!
//! - [`builtin`]: the fixed Japanese → English technical term table.
//! - [`merge`] / [`translate`]: pure substitution over builtin ∪ user terms.
//! - [`store`]: best-effort persistence of the user dictionary.

pub mod store;

use std::collections::BTreeMap;

/// Source term → target term. Ordered so that substitution order is stable.
pub type TermDictionary = BTreeMap<String, String>;

const BUILTIN_TERMS: &[(&str, &str)] = &[
    ("画像認識", "image recognition"),
    ("監視", "monitoring"),
    ("分析", "analytics"),
    ("フレームワーク", "framework"),
    ("推論", "inference"),
    ("学習", "learning"),
    ("自動化", "automation"),
    ("セキュリティ", "security"),
    ("ネットワーク", "network"),
    ("データベース", "database"),
];

/// The built-in term dictionary.
pub fn builtin() -> TermDictionary {
    BUILTIN_TERMS
        .iter()
        .map(|(src, dst)| (src.to_string(), dst.to_string()))
        .collect()
}

/// Merge `user` on top of `base`; user entries win on key collision.
pub fn merge(base: &TermDictionary, user: &TermDictionary) -> TermDictionary {
    let mut merged = base.clone();
    merged.extend(user.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// Translate `query` with the built-in dictionary overridden by `user`.
pub fn translate(query: &str, user: &TermDictionary) -> String {
    translate_with(query, &merge(&builtin(), user))
}

/// Replace every literal occurrence of each key with its value, in key order.
///
/// Keys are plain text; characters such as `.` or `*` have no special meaning.
pub fn translate_with(query: &str, dictionary: &TermDictionary) -> String {
    dictionary
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .fold(query.to_string(), |acc, (key, value)| {
            if acc.contains(key.as_str()) {
                acc.replace(key.as_str(), value)
            } else {
                acc
            }
        })
}

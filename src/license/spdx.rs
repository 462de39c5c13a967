/// Identifiers that are safe for commercial reuse. Lowercase.
pub const PERMISSIVE: &[&str] = &[
    "mit",
    "apache-2.0",
    "bsd-3-clause",
    "bsd-2-clause",
    "isc",
    "unlicense",
    "wtfpl",
    "cc0-1.0",
    "zlib",
];

/// Identifiers that allow commercial use but require source disclosure. Lowercase.
pub const COPYLEFT: &[&str] = &[
    "gpl-3.0",
    "gpl-2.0",
    "agpl-3.0",
    "lgpl-3.0",
    "lgpl-2.1",
    "mpl-2.0",
    "epl-2.0",
];

/// Substrings that mark a non-commercial license (e.g. `cc-by-nc-4.0`).
pub const NON_COMMERCIAL_MARKERS: &[&str] = &["nc", "non-commercial"];

/// Lowercase and trim an identifier for table lookups.
pub fn normalize(id: &str) -> String {
    id.trim().to_lowercase()
}

pub fn is_permissive(normalized: &str) -> bool {
    PERMISSIVE.contains(&normalized)
}

pub fn is_copyleft(normalized: &str) -> bool {
    COPYLEFT.contains(&normalized)
}

pub fn is_non_commercial(normalized: &str) -> bool {
    NON_COMMERCIAL_MARKERS
        .iter()
        .any(|marker| normalized.contains(marker))
}

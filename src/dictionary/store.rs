use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

use super::TermDictionary;

/// JSON-file backed storage for the user dictionary.
///
/// Reads never fail: a missing or corrupt file loads as an empty dictionary.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    path: PathBuf,
}

impl DictionaryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.config/oss-finder/dictionary.json`, or `./dictionary.json` when no
    /// home directory can be resolved.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(".config").join("oss-finder"))
            .unwrap_or_default()
            .join("dictionary.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> TermDictionary {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no user dictionary yet");
            return TermDictionary::new();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to read user dictionary");
                return TermDictionary::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(dict) => dict,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "corrupt user dictionary, ignoring");
                TermDictionary::new()
            }
        }
    }

    pub fn save(&self, dict: &TermDictionary) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(dict)?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("Failed to write dictionary to {}", self.path.display()))?;
        Ok(())
    }

    /// Insert or replace a mapping. Both sides must be non-blank.
    pub fn add(&self, source: &str, target: &str) -> Result<TermDictionary> {
        let (source, target) = (source.trim(), target.trim());
        if source.is_empty() || target.is_empty() {
            bail!("both a source term and a target term are required");
        }

        let mut dict = self.load();
        dict.insert(source.to_string(), target.to_string());
        self.save(&dict)?;
        Ok(dict)
    }

    /// Remove a mapping. Returns `false` when the term was not present.
    pub fn remove(&self, source: &str) -> Result<bool> {
        let mut dict = self.load();
        if dict.remove(source.trim()).is_none() {
            return Ok(false);
        }
        self.save(&dict)?;
        Ok(true)
    }

    pub fn clear(&self) -> Result<()> {
        self.save(&TermDictionary::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> DictionaryStore {
        DictionaryStore::new(dir.path().join("nested").join("dictionary.json"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store_in(&dir).load().is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dictionary.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(DictionaryStore::new(&path).load().is_empty());
    }

    #[test]
    fn test_wrong_shape_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dictionary.json");
        std::fs::write(&path, r#"["推論", "inference"]"#).unwrap();
        assert!(DictionaryStore::new(&path).load().is_empty());
    }

    #[test]
    fn test_add_persists() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add("推論", "reasoning").unwrap();
        store.add(" 監視 ", " monitoring ").unwrap();

        let loaded = store_in(&dir).load();
        assert_eq!(loaded.get("推論").map(String::as_str), Some("reasoning"));
        assert_eq!(loaded.get("監視").map(String::as_str), Some("monitoring"));
    }

    #[test]
    fn test_add_rejects_blank() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.add("", "x").is_err());
        assert!(store.add("x", "  ").is_err());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_remove_and_clear() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.add("a", "b").unwrap();
        store.add("c", "d").unwrap();

        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());
        assert_eq!(store.load().len(), 1);

        store.clear().unwrap();
        assert!(store.load().is_empty());
    }
}

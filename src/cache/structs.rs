use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::RawRow;
use crate::errors::cache_context;

/// File-based cache for scraped round pages
pub struct Cache {
    rounds_dir: PathBuf,
}

impl Cache {
    /// Create a new cache instance
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let rounds_dir = cache_dir.as_ref().join("rounds");

        fs::create_dir_all(&rounds_dir).context("Failed to create rounds cache directory")?;

        Ok(Self { rounds_dir })
    }

    /// Save the raw rows of one round
    pub fn save_round(&self, slug: &str, round: u32, rows: &[RawRow]) -> Result<()> {
        let key = Self::round_key(slug, round);
        let file_path = self.build_round_path(&key);

        self.write_json(&file_path, &rows)
            .with_context(|| cache_context("save", &key))?;
        debug!("Saved round to cache: {}", file_path.display());
        Ok(())
    }

    /// Load the raw rows of one round, if cached
    pub fn load_round(&self, slug: &str, round: u32) -> Result<Option<Vec<RawRow>>> {
        let key = Self::round_key(slug, round);
        let file_path = self.build_round_path(&key);

        self.read_json_opt(&file_path)
            .with_context(|| cache_context("load", &key))
    }

    /// Clear all cached rounds; only the rounds directory is removed
    pub fn clear(&self) -> Result<()> {
        fs::remove_dir_all(&self.rounds_dir).context("Failed to clear cache")?;

        fs::create_dir_all(&self.rounds_dir).context("Failed to recreate cache directory")?;

        info!("Cleared cache directory");
        Ok(())
    }

    // --- Helper Methods ---

    fn round_key(slug: &str, round: u32) -> String {
        format!("{}_{}", slug, round)
    }

    fn build_round_path(&self, key: &str) -> PathBuf {
        self.rounds_dir.join(format!("{}.json", key))
    }

    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        fs::write(path, json).context("Failed to write cache file")?;
        Ok(())
    }

    fn read_json_opt<T: for<'de> Deserialize<'de>>(&self, path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(path)?;
        let data = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse JSON from {:?}. First 200 chars: {}",
                path,
                json.chars().take(200).collect::<String>()))?;
        Ok(Some(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Side;

    #[test]
    fn test_round_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let cache = Cache::new(temp_dir.path()).unwrap();
        let rows = vec![RawRow::pairing(
            ("Alice", "Dorinthea"),
            ("Bob", "Katsu"),
            Some(Side::Player2),
        )];

        cache.save_round("calling-bologna-2025", 3, &rows).unwrap();

        let loaded = cache.load_round("calling-bologna-2025", 3).unwrap();
        assert_eq!(loaded, Some(rows));
        assert_eq!(cache.load_round("calling-bologna-2025", 4).unwrap(), None);
    }

    #[test]
    fn test_clear_removes_rounds() {
        let temp_dir = tempfile::tempdir().unwrap();
        let cache = Cache::new(temp_dir.path()).unwrap();
        cache.save_round("event", 1, &[RawRow::default()]).unwrap();

        cache.clear().unwrap();

        assert_eq!(cache.load_round("event", 1).unwrap(), None);
    }

    #[test]
    fn test_clear_keeps_unrelated_files_in_cache_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let unrelated = temp_dir.path().join("notes.txt");
        fs::write(&unrelated, "keep me").unwrap();
        let cache = Cache::new(temp_dir.path()).unwrap();
        cache.save_round("event", 1, &[RawRow::default()]).unwrap();

        cache.clear().unwrap();

        assert!(unrelated.exists());
        assert!(temp_dir.path().join("rounds").is_dir());
        assert_eq!(cache.load_round("event", 1).unwrap(), None);
    }
}

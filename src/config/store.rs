//! On-disk tag config with lazy hot-reload
//!
//! The store never fails outward. A config that can't be read or parsed is
//! replaced by the empty config (whitelist, no rules, so nothing is shown)
//! and a one-shot message is queued for [`ConfigStore::consume_error`].

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, error, info, trace};

use crate::config::rules::TagConfig;
use crate::constants::config::{APP_DIR, APP_NAME, FILENAME};
use crate::error::ConfigError;

#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    config: TagConfig,
    /// Modification time of the file the active config was read from
    last_modified: Option<SystemTime>,
    /// Message for the next `consume_error` call
    pending_error: Option<String>,
}

impl ConfigStore {
    /// Platform config location, e.g. `~/.config/tooltip-tags/tooltip_tags.json`
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(FILENAME);
        path
    }

    /// Load the config at `path`, writing the example config if it's missing
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            config: TagConfig::default(),
            last_modified: None,
            pending_error: None,
        };
        store.reload();
        info!(
            path = %store.path.display(),
            rules = store.config.rule_count(),
            "Loaded tag config"
        );
        store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    pub fn rule_count(&self) -> usize {
        self.config.rule_count()
    }

    /// Reload if the file's modification time moved since the last load
    ///
    /// A file that can't be stat'ed counts as unchanged.
    pub fn check_and_reload(&mut self) {
        let current = match fs::metadata(&self.path).and_then(|meta| meta.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                trace!(path = %self.path.display(), error = %e, "Cannot stat tag config, keeping current");
                return;
            }
        };
        if self.last_modified != Some(current) {
            info!(path = %self.path.display(), "Config changed, reloading...");
            self.reload();
        }
    }

    /// Take the queued load error, if any
    pub fn consume_error(&mut self) -> Option<String> {
        self.pending_error.take()
    }

    /// Write the active config as pretty JSON
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(&self.config)
            .context("Failed to serialize tag config to JSON")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write config file to {}", self.path.display()))?;
        Ok(())
    }

    fn reload(&mut self) {
        if !self.path.exists() {
            self.create_default();
            self.pending_error = None;
            return;
        }

        // Recorded before reading so a broken file isn't re-parsed until it changes again
        self.last_modified = fs::metadata(&self.path)
            .and_then(|meta| meta.modified())
            .ok();

        match read_config(&self.path) {
            Ok(config) => {
                debug!(path = %self.path.display(), rules = config.rule_count(), "Parsed tag config");
                self.config = config;
                self.pending_error = None;
            }
            Err(e) => {
                error!(path = %e.path().display(), error = %e, "Failed to load tag config");
                self.pending_error = Some(format!("{APP_NAME} config error: {e}"));
                self.config = TagConfig::default();
            }
        }
    }

    fn create_default(&mut self) {
        self.config = TagConfig::with_examples();
        match self.save() {
            Ok(()) => {
                self.last_modified = fs::metadata(&self.path)
                    .and_then(|meta| meta.modified())
                    .ok();
                info!(path = %self.path.display(), "Generated tag config file for user to edit");
            }
            Err(e) => error!(error = ?e, "Failed to create default tag config"),
        }
    }
}

/// Read and validate a config file; JSON `null` reads as the empty config
fn read_config(path: &Path) -> Result<TagConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: Option<TagConfig> =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let mut config = parsed.unwrap_or_default();
    config.validate();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rules::{Policy, TagRule};
    use std::time::Duration;
    use tempfile::TempDir;

    fn config_file(dir: &TempDir) -> PathBuf {
        dir.path().join(FILENAME)
    }

    /// Write `contents` and push the mtime forward so the change is always visible
    fn rewrite(path: &Path, contents: &str, bump: u64) {
        fs::write(path, contents).unwrap();
        set_mtime(path, SystemTime::now() + Duration::from_secs(bump));
    }

    fn set_mtime(path: &Path, time: SystemTime) {
        fs::File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(time)
            .unwrap();
    }

    #[test]
    fn test_load_missing_creates_examples() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir);

        let mut store = ConfigStore::load(&path);

        assert!(path.exists());
        assert_eq!(store.config(), &TagConfig::with_examples());
        assert_eq!(store.rule_count(), 5);
        assert_eq!(store.consume_error(), None);

        // written file reloads to the same config
        let reread = read_config(&path).unwrap();
        assert_eq!(reread, TagConfig::with_examples());
    }

    #[test]
    fn test_load_missing_in_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join(FILENAME);

        let store = ConfigStore::load(&path);

        assert!(path.exists());
        assert_eq!(store.rule_count(), 5);
    }

    #[test]
    fn test_load_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir);
        fs::write(
            &path,
            r#"{"useBlacklist": true, "tagList": {"c:hidden": {"hidden": true}}}"#,
        )
        .unwrap();

        let mut store = ConfigStore::load(&path);

        assert_eq!(store.config().policy, Policy::Blacklist);
        assert_eq!(store.config().tag_list["c:hidden"], TagRule::hidden());
        assert!(store.config().item_tags.is_empty());
        assert_eq!(store.consume_error(), None);
    }

    #[test]
    fn test_load_corrupted_file_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir);
        fs::write(&path, "{ not json").unwrap();

        let mut store = ConfigStore::load(&path);

        assert_eq!(store.config(), &TagConfig::default());
        let message = store.consume_error().unwrap();
        assert!(message.starts_with("TooltipTags config error:"), "{message}");
        assert_eq!(store.consume_error(), None);
        // broken file is preserved for the user to fix
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_null_file_is_empty_config() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir);
        fs::write(&path, "null").unwrap();

        let mut store = ConfigStore::load(&path);

        assert_eq!(store.config(), &TagConfig::default());
        assert_eq!(store.consume_error(), None);
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir);
        let mut store = ConfigStore::load(&path);
        assert_eq!(store.config().policy, Policy::Whitelist);

        rewrite(&path, r#"{"useBlacklist": true}"#, 60);
        store.check_and_reload();

        assert_eq!(store.config().policy, Policy::Blacklist);
        assert_eq!(store.rule_count(), 0);
    }

    #[test]
    fn test_unchanged_mtime_skips_reload() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir);
        rewrite(&path, r#"{"useBlacklist": true}"#, 0);
        let mut store = ConfigStore::load(&path);
        let recorded = fs::metadata(&path).unwrap().modified().unwrap();

        fs::write(&path, r#"{"useBlacklist": false}"#).unwrap();
        set_mtime(&path, recorded);
        store.check_and_reload();

        assert_eq!(store.config().policy, Policy::Blacklist);
    }

    #[test]
    fn test_corrupted_reload_resets_and_queues_once() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir);
        let mut store = ConfigStore::load(&path);
        assert_eq!(store.rule_count(), 5);

        rewrite(&path, r#"{"tagList": 12}"#, 60);
        store.check_and_reload();

        assert_eq!(store.config(), &TagConfig::default());
        assert!(store.consume_error().is_some());
        assert_eq!(store.consume_error(), None);

        // not re-parsed (and not re-reported) until the file changes again
        store.check_and_reload();
        assert_eq!(store.consume_error(), None);
    }

    #[test]
    fn test_fixed_file_clears_error_state() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir);
        fs::write(&path, "[").unwrap();
        let mut store = ConfigStore::load(&path);

        rewrite(&path, r#"{"tagList": {"a:b": {}}}"#, 60);
        store.check_and_reload();

        assert_eq!(store.rule_count(), 1);
        // the reload replaced the unconsumed message from the broken load
        assert_eq!(store.consume_error(), None);
    }

    #[test]
    fn test_deleted_file_keeps_config() {
        let dir = TempDir::new().unwrap();
        let path = config_file(&dir);
        let mut store = ConfigStore::load(&path);

        fs::remove_file(&path).unwrap();
        store.check_and_reload();

        assert_eq!(store.rule_count(), 5);
        assert_eq!(store.consume_error(), None);
        assert!(!path.exists());
    }

    #[test]
    fn test_default_path_ends_with_filename() {
        let path = ConfigStore::default_path();
        assert!(path.ends_with(Path::new(APP_DIR).join(FILENAME)));
    }
}

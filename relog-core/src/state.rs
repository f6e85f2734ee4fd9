use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RelogError, Result};
use crate::release::Release;

const STATE_FILE: &str = "ui-state.json";

/// Persisted per-version open/closed state for the changelog view.
///
/// Keys are version labels. Stale keys (for releases no longer listed)
/// and missing keys are both tolerated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiState {
    #[serde(default)]
    pub versions: BTreeMap<String, bool>,
}

impl UiState {
    /// Resolve a section's open state: mapping lookup, then the record's
    /// default-open flag, else closed.
    pub fn is_open(&self, release: &Release) -> bool {
        self.versions
            .get(&release.version)
            .copied()
            .unwrap_or(release.default_open)
    }

    /// Merge a single key into the mapping. Other entries are untouched.
    pub fn set_open(&mut self, version: &str, open: bool) {
        self.versions.insert(version.to_string(), open);
    }
}

/// JSON-file-backed store for [`UiState`].
///
/// Last write wins; there is no locking or conflict handling, the state
/// is single-user UI state.
pub struct UiStateStore {
    path: PathBuf,
}

impl UiStateStore {
    /// Create a store backed by the given file path. No I/O happens
    /// until [`load`](Self::load) or [`save`](Self::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default state file location: `$RELOG_STATE_DIR/ui-state.json` if
    /// the override is set, else `~/.relog/ui-state.json`
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(dir) = env::var("RELOG_STATE_DIR") {
            return Ok(PathBuf::from(dir).join(STATE_FILE));
        }

        let home = dirs::home_dir()
            .ok_or_else(|| RelogError::state_path("could not find home directory"))?;
        Ok(home.join(".relog").join(STATE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted state. A missing file is the empty default; a
    /// malformed file degrades to the default with a warning.
    pub async fn load(&self) -> Result<UiState> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(UiState::default());
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&data) {
            Ok(state) => Ok(state),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "state file is malformed, starting from the default"
                );
                Ok(UiState::default())
            }
        }
    }

    /// Persist the full state. Writes to a temporary file and renames it
    /// into place so an interrupted write never truncates the previous
    /// state.
    pub async fn save(&self, state: &UiState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let data = serde_json::to_vec_pretty(state)
            .map_err(|err| RelogError::json("serializing ui state", err))?;

        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &data).await?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|err| RelogError::state_replace(&self.path, err))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn release(version: &str, default_open: bool) -> Release {
        Release {
            version: version.to_string(),
            date: None,
            notes: "notes",
            default_open,
        }
    }

    #[test]
    fn test_is_open_prefers_mapping_entry() {
        let mut state = UiState::default();
        state.set_open("v0.9.0", true);
        state.set_open("v0.7.0", false);

        assert!(state.is_open(&release("v0.9.0", false)));
        assert!(!state.is_open(&release("v0.7.0", true)));
    }

    #[test]
    fn test_is_open_falls_back_to_record_default() {
        let state = UiState::default();

        assert!(state.is_open(&release("v0.9.0", true)));
        assert!(!state.is_open(&release("v0.8.0", false)));
    }

    #[test]
    fn test_set_open_preserves_other_keys() {
        let mut state = UiState::default();
        state.set_open("v0.9.0", true);
        state.set_open("v0.8.0", false);

        state.set_open("v0.7.0", true);

        assert_eq!(state.versions.len(), 3);
        assert_eq!(state.versions.get("v0.9.0"), Some(&true));
        assert_eq!(state.versions.get("v0.8.0"), Some(&false));
        assert_eq!(state.versions.get("v0.7.0"), Some(&true));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let store = UiStateStore::new(dir.path().join("ui-state.json"));

        let state = store.load().await.unwrap();
        assert_eq!(state, UiState::default());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = UiStateStore::new(dir.path().join("ui-state.json"));

        let mut state = UiState::default();
        state.set_open("v0.9.0", true);
        state.set_open("v0.8.0", false);

        store.save(&state).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, state);
    }

    #[tokio::test]
    async fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let store = UiStateStore::new(dir.path().join("nested").join("ui-state.json"));

        store.save(&UiState::default()).await.unwrap();

        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_malformed_file_degrades_to_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ui-state.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let store = UiStateStore::new(&path);
        let state = store.load().await.unwrap();

        assert_eq!(state, UiState::default());
    }

    #[tokio::test]
    async fn test_stale_keys_are_tolerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ui-state.json");
        tokio::fs::write(&path, r#"{"versions":{"v0.0.1-retired":true}}"#)
            .await
            .unwrap();

        let store = UiStateStore::new(&path);
        let state = store.load().await.unwrap();

        assert_eq!(state.versions.get("v0.0.1-retired"), Some(&true));
        assert!(!state.is_open(&release("v0.9.0", false)));
    }
}

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use relog_core::{Release, UiState, UiStateStore};

use crate::mode::AppMode;

/// Main application state
pub struct App {
    /// Current mode
    pub mode: AppMode,

    /// Index of the selected release
    pub selected: usize,

    /// Status message (shown in command bar)
    pub status_message: Option<String>,

    /// Should quit?
    pub should_quit: bool,

    /// True until the persisted open state has been read
    pub loading: bool,

    /// Releases in display order, newest first
    pub releases: Vec<Release>,

    /// Persisted open/closed state per version
    pub state: UiState,

    /// Open-state store
    pub store: UiStateStore,
}

impl App {
    /// Create a new App
    pub fn new(store: UiStateStore, releases: Vec<Release>) -> Self {
        Self {
            mode: AppMode::Normal,
            selected: 0,
            status_message: None,
            should_quit: false,
            loading: true,
            releases,
            state: UiState::default(),
            store,
        }
    }

    /// Version label of the running release (the first catalog entry)
    pub fn current_version(&self) -> Option<&str> {
        self.releases.first().map(|r| r.version.as_str())
    }

    /// Read the persisted open state. The view renders nothing until
    /// this has completed.
    pub async fn load_state(&mut self) -> Result<()> {
        self.state = self.store.load().await?;
        self.loading = false;
        Ok(())
    }

    /// Handle keyboard input
    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        match self.mode {
            AppMode::Normal => self.handle_normal_mode(key).await?,
            AppMode::Help => self.handle_help_mode(key),
        }
        Ok(())
    }

    /// Handle normal mode keys
    async fn handle_normal_mode(&mut self, key: KeyEvent) -> Result<()> {
        match (key.code, key.modifiers) {
            // Quit
            (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.should_quit = true;
            }

            // Help
            (KeyCode::Char('?'), _) => {
                self.mode = AppMode::Help;
                self.status_message = None;
            }

            _ if self.loading => {}

            // Selection
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                self.select_next();
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.select_previous();
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => {
                self.selected = 0;
            }
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => {
                self.selected = self.releases.len().saturating_sub(1);
            }

            // Toggle the selected section
            (KeyCode::Enter, _) | (KeyCode::Char(' '), KeyModifiers::NONE) => {
                self.toggle_selected().await;
            }

            // Reload persisted state
            (KeyCode::Char('r'), KeyModifiers::NONE) => {
                self.state = self.store.load().await?;
                self.status_message = Some("Reloaded open state".to_string());
            }

            _ => {}
        }
        Ok(())
    }

    /// Handle help mode keys
    fn handle_help_mode(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.mode = AppMode::Normal;
            }
            _ => {}
        }
    }

    /// Flip the selected section's open state and persist the merged
    /// mapping. A failed write logs a warning and the UI proceeds with
    /// the in-memory state.
    async fn toggle_selected(&mut self) {
        let Some(release) = self.releases.get(self.selected) else {
            return;
        };

        let open = self.state.is_open(release);
        let version = release.version.clone();
        self.state.set_open(&version, !open);

        if let Err(err) = self.store.save(&self.state).await {
            tracing::warn!(version = %version, error = %err, "failed to persist open state");
            self.status_message = Some(format!("Could not save state: {}", err));
        }
    }

    /// Move selection up
    fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down
    fn select_next(&mut self) {
        if self.selected < self.releases.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// Poll for events with timeout
    pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
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

    #[tokio::test]
    async fn test_toggle_merges_single_key() {
        let dir = tempdir().unwrap();
        let store = UiStateStore::new(dir.path().join("ui-state.json"));

        let mut seeded = UiState::default();
        seeded.set_open("v0.9.0", true);
        store.save(&seeded).await.unwrap();

        let mut app = App::new(
            UiStateStore::new(dir.path().join("ui-state.json")),
            vec![release("v1.0.0", true), release("v0.9.0", false)],
        );
        app.load_state().await.unwrap();
        app.selected = 0;

        app.toggle_selected().await;

        // Previous mapping plus the single changed key
        let persisted = app.store.load().await.unwrap();
        assert_eq!(persisted.versions.len(), 2);
        assert_eq!(persisted.versions.get("v0.9.0"), Some(&true));
        assert_eq!(persisted.versions.get("v1.0.0"), Some(&false));
    }

    #[tokio::test]
    async fn test_toggle_flips_resolved_state() {
        let dir = tempdir().unwrap();
        let mut app = App::new(
            UiStateStore::new(dir.path().join("ui-state.json")),
            vec![release("v1.0.0", true)],
        );
        app.load_state().await.unwrap();

        // default_open = true resolves open, so the first toggle closes
        app.toggle_selected().await;
        assert!(!app.state.is_open(&app.releases[0]));

        app.toggle_selected().await;
        assert!(app.state.is_open(&app.releases[0]));
    }

    #[tokio::test]
    async fn test_selection_stays_in_bounds() {
        let dir = tempdir().unwrap();
        let mut app = App::new(
            UiStateStore::new(dir.path().join("ui-state.json")),
            vec![release("v1.0.0", true), release("v0.9.0", false)],
        );

        app.select_previous();
        assert_eq!(app.selected, 0);

        app.select_next();
        app.select_next();
        assert_eq!(app.selected, 1);
    }

    #[tokio::test]
    async fn test_load_state_clears_loading() {
        let dir = tempdir().unwrap();
        let mut app = App::new(
            UiStateStore::new(dir.path().join("ui-state.json")),
            vec![release("v1.0.0", true)],
        );

        assert!(app.loading);
        app.load_state().await.unwrap();
        assert!(!app.loading);
    }
}

pub mod changelog_panel;
pub mod command_bar;
pub mod help;
pub mod layout;
pub mod section;
pub mod status_bar;

use ratatui::Frame;

use crate::app::App;
use crate::mode::AppMode;

pub use changelog_panel::ChangelogPanel;

/// Main UI renderer
pub struct UI {
    pub changelog_panel: ChangelogPanel,
}

impl UI {
    /// Create a new UI
    pub fn new() -> Self {
        Self {
            changelog_panel: ChangelogPanel::new(),
        }
    }

    /// Render the entire UI
    pub fn render(&mut self, f: &mut Frame, app: &App) {
        // Get main layout areas
        let (status_area, content_area, command_area) = layout::Layout::main(f.area());

        // Render status bar
        status_bar::render(f, status_area, app);

        // Render command bar
        command_bar::render(f, command_area, app);

        // Render content
        match app.mode {
            AppMode::Help => help::render(f, content_area),
            AppMode::Normal => self.changelog_panel.render(f, content_area, app),
        }
    }
}

impl Default for UI {
    fn default() -> Self {
        Self::new()
    }
}

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::ui::section;

/// Changelog panel state
pub struct ChangelogPanel {
    /// Vertical scroll offset, follows the selected section
    scroll: u16,
}

impl ChangelogPanel {
    /// Create a new changelog panel
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    /// Render the changelog panel.
    ///
    /// While the persisted state is still loading, nothing is drawn: no
    /// placeholder, no error state.
    pub fn render(&mut self, f: &mut Frame, area: Rect, app: &App) {
        if app.loading {
            return;
        }

        let (lines, header_offsets) = build_lines(app);

        // Keep the selected header inside the viewport
        let inner_height = area.height.saturating_sub(2);
        if let Some(&header) = header_offsets.get(app.selected) {
            let header = header as u16;
            if header < self.scroll {
                self.scroll = header;
            } else if inner_height > 0 && header >= self.scroll + inner_height {
                self.scroll = header - inner_height + 1;
            }
        }

        let max_scroll = (lines.len() as u16).saturating_sub(inner_height);
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Changelog ")
            .border_style(Style::default().fg(app.mode.color()));

        let paragraph = Paragraph::new(lines).block(block).scroll((self.scroll, 0));

        f.render_widget(paragraph, area);
    }
}

/// Build the full line list: one header per release in catalog order,
/// followed by the rendered note body when the section is expanded.
///
/// Returns the lines plus the line offset of each section header.
pub fn build_lines(app: &App) -> (Vec<Line<'static>>, Vec<usize>) {
    let mut lines = Vec::new();
    let mut header_offsets = Vec::new();

    if app.loading {
        return (lines, header_offsets);
    }

    for (idx, release) in app.releases.iter().enumerate() {
        let open = app.state.is_open(release);

        header_offsets.push(lines.len());
        lines.push(section::header_line(release, open, idx == app.selected));

        if open {
            lines.extend(section::body_lines(release));
        } else {
            lines.push(Line::default());
        }
    }

    (lines, header_offsets)
}

impl Default for ChangelogPanel {
    fn default() -> Self {
        Self::new()
    }
}

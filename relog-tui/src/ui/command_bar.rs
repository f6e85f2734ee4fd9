use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::mode::AppMode;

/// Render the command bar (bottom bar)
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    // Show status message or keybind hints
    let content = if let Some(ref msg) = app.status_message {
        Line::from(msg.as_str())
    } else {
        let hints = match app.mode {
            AppMode::Normal => {
                "j/k: move | Enter: toggle | g/G: top/bottom | r: reload | ?: help | q: quit"
            }
            AppMode::Help => "Esc: close help",
        };

        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
    };

    let paragraph = Paragraph::new(content);
    f.render_widget(paragraph, area);
}

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("j / Down", "select next release"),
    ("k / Up", "select previous release"),
    ("Enter / Space", "expand or collapse the selected section"),
    ("g / Home", "jump to the newest release"),
    ("G / End", "jump to the oldest release"),
    ("r", "reload persisted open state from disk"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Render the key reference overlay
pub fn render(f: &mut Frame, area: Rect) {
    let mut lines = vec![Line::default()];

    for (key, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<14}", key), Style::default().fg(Color::Cyan)),
            Span::raw(*action),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .border_style(Style::default().fg(Color::Magenta)),
    );

    f.render_widget(paragraph, area);
}

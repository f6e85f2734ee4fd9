use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use relog_core::Release;

use crate::markdown;

/// Header line for one release section: expand indicator, version label,
/// and the release date when present.
pub fn header_line(release: &Release, open: bool, selected: bool) -> Line<'static> {
    let indicator = if open { "▾" } else { "▸" };

    let style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![Span::styled(
        format!("{} {}", indicator, release.version),
        style,
    )];

    if let Some(ref date) = release.date {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            date.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

/// Body lines for an expanded section: the rendered note, indented under
/// the header, framed by separator blanks.
pub fn body_lines(release: &Release) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];

    for line in markdown::render(release.notes) {
        lines.push(indent(line));
    }

    lines.push(Line::default());
    lines
}

fn indent(line: Line<'static>) -> Line<'static> {
    if line.spans.is_empty() {
        return line;
    }

    let mut spans = vec![Span::raw("  ")];
    spans.extend(line.spans);
    Line::from(spans)
}

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Render a markdown note body to styled terminal lines.
///
/// Covers the subset release notes actually use: headings, paragraphs,
/// bullet and ordered lists, inline code, fenced code blocks,
/// emphasis/strong, rules, and line breaks. Unknown constructs degrade
/// to their plain text content; rendering never fails.
pub fn render(markdown: &str) -> Vec<Line<'static>> {
    let mut renderer = Renderer::default();

    for event in Parser::new_ext(markdown, Options::empty()) {
        renderer.handle(event);
    }

    renderer.finish()
}

#[derive(Default)]
struct Renderer {
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,

    /// Counters for open lists: `Some(n)` for ordered, `None` for bullets
    list_stack: Vec<Option<u64>>,

    heading: Option<HeadingLevel>,
    emphasis: bool,
    strong: bool,
    in_code_block: bool,
}

impl Renderer {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.flush_line();
                self.heading = Some(level);
            }
            Event::End(TagEnd::Heading(_)) => {
                self.flush_line();
                self.blank_line();
                self.heading = None;
            }

            Event::Start(Tag::Paragraph) => self.flush_line(),
            Event::End(TagEnd::Paragraph) => {
                self.flush_line();
                self.blank_line();
            }

            Event::Start(Tag::List(start)) => {
                self.flush_line();
                self.list_stack.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.blank_line();
                }
            }
            Event::Start(Tag::Item) => {
                self.flush_line();
                let depth = self.list_stack.len().saturating_sub(1);
                let marker = match self.list_stack.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.spans.push(Span::styled(
                    format!("{}{}", "  ".repeat(depth), marker),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Event::End(TagEnd::Item) => self.flush_line(),

            Event::Start(Tag::CodeBlock(_)) => {
                self.flush_line();
                self.in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                self.in_code_block = false;
                self.blank_line();
            }

            Event::Start(Tag::Emphasis) => self.emphasis = true,
            Event::End(TagEnd::Emphasis) => self.emphasis = false,
            Event::Start(Tag::Strong) => self.strong = true,
            Event::End(TagEnd::Strong) => self.strong = false,

            Event::Text(text) => {
                if self.in_code_block {
                    for code_line in text.lines() {
                        self.lines.push(Line::from(Span::styled(
                            format!("  {}", code_line),
                            Style::default().fg(Color::Green),
                        )));
                    }
                } else {
                    let style = self.current_style();
                    self.spans.push(Span::styled(text.to_string(), style));
                }
            }
            Event::Code(code) => {
                self.spans.push(Span::styled(
                    code.to_string(),
                    Style::default().fg(Color::Green),
                ));
            }

            Event::SoftBreak => self.spans.push(Span::raw(" ")),
            Event::HardBreak => self.flush_line(),

            Event::Rule => {
                self.flush_line();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(30),
                    Style::default().fg(Color::DarkGray),
                )));
                self.blank_line();
            }

            // Links, images, html: keep the text, drop the structure
            _ => {}
        }
    }

    fn current_style(&self) -> Style {
        if let Some(level) = self.heading {
            return heading_style(level);
        }

        let mut style = Style::default();
        if self.strong {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.emphasis {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }

    fn flush_line(&mut self) {
        if !self.spans.is_empty() {
            let spans = std::mem::take(&mut self.spans);
            self.lines.push(Line::from(spans));
        }
    }

    /// Push a separator line unless the previous line is already blank
    fn blank_line(&mut self) {
        if self.lines.last().is_some_and(|line| !line.spans.is_empty()) {
            self.lines.push(Line::default());
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        while self.lines.last().is_some_and(|line| line.spans.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    match level {
        HeadingLevel::H1 | HeadingLevel::H2 | HeadingLevel::H3 => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().add_modifier(Modifier::BOLD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn rendered_text(markdown: &str) -> Vec<String> {
        render(markdown).iter().map(line_text).collect()
    }

    #[test]
    fn test_heading_and_paragraph() {
        let lines = rendered_text("### Fixes\n\nSmall fixes only.\n");

        assert_eq!(lines, vec!["Fixes", "", "Small fixes only."]);
    }

    #[test]
    fn test_bullet_list() {
        let lines = rendered_text("* one\n* two\n");

        assert_eq!(lines, vec!["• one", "• two"]);
    }

    #[test]
    fn test_ordered_list_numbering() {
        let lines = rendered_text("1. first\n2. second\n3. third\n");

        assert_eq!(lines, vec!["1. first", "2. second", "3. third"]);
    }

    #[test]
    fn test_nested_list_is_indented() {
        let lines = rendered_text("* outer\n  * inner\n");

        assert_eq!(lines[0], "• outer");
        assert_eq!(lines[1], "  • inner");
    }

    #[test]
    fn test_inline_code_keeps_surrounding_text() {
        let lines = rendered_text("run `relog` to start\n");

        assert_eq!(lines, vec!["run relog to start"]);
        let spans = &render("run `relog` to start\n")[0].spans;
        assert!(spans
            .iter()
            .any(|s| s.content == "relog" && s.style.fg == Some(Color::Green)));
    }

    #[test]
    fn test_code_block_lines() {
        let lines = rendered_text("```\nfirst\nsecond\n```\n");

        assert_eq!(lines, vec!["  first", "  second"]);
    }

    #[test]
    fn test_soft_break_becomes_space() {
        let lines = rendered_text("one\ntwo\n");

        assert_eq!(lines, vec!["one two"]);
    }

    #[test]
    fn test_no_trailing_blank_lines() {
        let lines = render("paragraph\n\n");

        assert!(!lines.last().unwrap().spans.is_empty());
    }
}

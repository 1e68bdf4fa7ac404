//! Help overlay widget.
//!
//! The overlay lists every keybinding and is shown when the user presses
//! `?`. Any key dismisses it.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 36;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 22;

/// Renders a centered help overlay listing the keybindings of the board,
/// the client table and the detail editor.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use returndesk_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);
    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Key and description pairs per section.
const SECTIONS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Board",
        &[
            ("←/→", "Switch bucket"),
            ("↑/↓", "Select card or row"),
            ("Enter", "Open editor"),
            ("e", "Show more / less"),
            ("n", "New request"),
        ],
    ),
    (
        "Editor",
        &[
            ("Tab", "Next field"),
            ("1-5", "Set rating"),
            ("←/→", "Change damage type"),
            ("a", "Attach file"),
            ("Esc", "Close editor"),
        ],
    ),
    ("General", &[("?", "Toggle help"), ("Ctrl+C", "Quit")]),
];

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    for (title, bindings) in SECTIONS {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(format!("  {title}"), header_style)));
        for (key, action) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<11}"), key_style),
                Span::styled(*action, text_style),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn render_help_overlay_creates_output() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_help_overlay(area, &mut buf);

        // Verify the help title is rendered
        let content = buffer_to_string(&buf);
        assert!(content.contains("Help"));
        assert!(content.contains("Board"));
        assert!(content.contains("Editor"));
        assert!(content.contains("Press any key to close"));
    }

    #[test]
    fn render_help_overlay_handles_small_area() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);

        // Should not panic with small area
        render_help_overlay(area, &mut buf);
    }

    #[test]
    fn build_help_lines_contains_all_keybindings() {
        let lines = build_help_lines();

        let content: String = lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        // Check navigation keys (arrow symbols)
        assert!(content.contains("←"));
        assert!(content.contains("→"));
        assert!(content.contains("↑"));
        assert!(content.contains("↓"));

        // Check action keys
        assert!(content.contains("Enter"));
        assert!(content.contains("Esc"));
        assert!(content.contains("Tab"));
        assert!(content.contains("1-5"));
        assert!(content.contains("New request"));
        assert!(content.contains("Quit"));
        assert!(content.contains("?"));
    }
}

//! New request type picker.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use returndesk_protocol::{ReturnRequest, ReturnType};

use super::centered_rect;

const PICKER_WIDTH: u16 = 36;
const PICKER_HEIGHT: u16 = 11;

/// Renders the type picker for a staged draft, centered on the frame.
///
/// # Layout
///
/// ```text
/// ╭ New Request ─────────────────────╮
/// │Created Mar 04, 2025              │
/// │                                  │
/// │  ▸ Refund                        │
/// │    Missing Item                  │
/// │    Damage                        │
/// │    Exchange                      │
/// │                                  │
/// │←/→ change · Enter open · Esc     │
/// ╰──────────────────────────────────╯
/// ```
pub fn render_type_picker(draft: &ReturnRequest, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(PICKER_WIDTH, PICKER_HEIGHT, area);
    Clear.render(popup, buf);

    let block = Block::default()
        .title(Span::styled(
            " New Request ",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightGreen));

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Created {}", draft.created),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    lines.extend(ReturnType::all().into_iter().map(|kind| {
        if kind == draft.return_type {
            Line::from(Span::styled(
                format!("  ▸ {}", kind.display_name()),
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                format!("    {}", kind.display_name()),
                Style::default().fg(Color::White),
            ))
        }
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "←/→ change · Enter open · Esc",
        Style::default().fg(Color::DarkGray),
    )));

    Paragraph::new(lines).block(block).render(popup, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn picker_marks_draft_type() {
        let draft = ReturnRequest::new("", "", "", ReturnType::Damage).with_created("Mar 04, 2025");
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_type_picker(&draft, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("New Request"));
        assert!(content.contains("Created Mar 04, 2025"));
        assert!(content.contains("▸ Damage"));
        assert!(!content.contains("▸ Refund"));
        assert!(content.contains("Missing Item"));
    }
}

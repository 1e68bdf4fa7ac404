//! Request card rendering widget.
//!
//! Cards are color-coded by the request's triage status.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use returndesk_protocol::{RequestStatus, ReturnRequest};

/// Returns the color associated with a triage status.
///
/// | Status | Color |
/// |--------|-------|
/// | `Pending` | Yellow |
/// | `Approved` | Green |
/// | `Flagged` | Red |
///
/// # Examples
///
/// ```
/// use ratatui::style::Color;
/// use returndesk_protocol::RequestStatus;
/// use returndesk_tui::widgets::status_color;
///
/// assert_eq!(status_color(RequestStatus::Pending), Color::Yellow);
/// assert_eq!(status_color(RequestStatus::Flagged), Color::Red);
/// ```
#[must_use]
pub const fn status_color(status: RequestStatus) -> Color {
    match status {
        RequestStatus::Pending => Color::Yellow,
        RequestStatus::Approved => Color::Green,
        RequestStatus::Flagged => Color::Red,
    }
}

/// Brighter status colors for the focused card.
const fn status_color_bright(status: RequestStatus) -> Color {
    match status {
        RequestStatus::Pending => Color::LightYellow,
        RequestStatus::Approved => Color::LightGreen,
        RequestStatus::Flagged => Color::LightRed,
    }
}

/// Renders a request card to the buffer.
///
/// # Layout
///
/// ```text
/// ╭ RET-1003 ──────────╮
/// │Globex Corp         │
/// │INV-20957 $1,120.00 │
/// ╰────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use returndesk_protocol::{ReturnRequest, ReturnType};
/// use returndesk_tui::widgets::render_request_card;
///
/// let request = ReturnRequest::new("RET-1", "Acme", "INV-1", ReturnType::Refund);
/// let area = Rect::new(0, 0, 24, 4);
/// let mut buf = Buffer::empty(area);
///
/// render_request_card(&request, true, area, &mut buf);
/// ```
pub fn render_request_card(request: &ReturnRequest, is_selected: bool, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_color, name_style, detail_style) = if is_selected {
        let bright = status_color_bright(request.status);
        (
            bright,
            Style::default().fg(bright).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else {
        (
            status_color(request.status),
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        )
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", request.id),
            Style::default().fg(border_color),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color));

    let lines = vec![
        Line::from(Span::styled(request.client_name.as_str(), name_style)),
        Line::from(Span::styled(
            format!("{} {}", request.invoice_number, request.amount),
            detail_style,
        )),
    ];

    Paragraph::new(lines).block(block).render(area, buf);
}

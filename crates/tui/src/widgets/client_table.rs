//! Client table rendering widget.
//!
//! Clients get a compact table of their first few requests instead of the
//! board.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Row, Table, Widget},
};
use returndesk_protocol::{ClientHealth, ClientRow};

use crate::layout::CLIENT_TABLE_HEADER_ROWS;

/// Column titles, in display order.
pub const CLIENT_TABLE_COLUMNS: [&str; 5] = ["Invoice", "Type", "Amount", "Satisfaction", "Health"];

const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(12),
    Constraint::Length(14),
    Constraint::Length(11),
    Constraint::Length(13),
    Constraint::Min(8),
];

/// Returns the color of a health label.
#[must_use]
pub const fn health_color(health: ClientHealth) -> Color {
    match health {
        ClientHealth::Healthy => Color::Green,
        ClientHealth::AtRisk => Color::Red,
        ClientHealth::Monitor => Color::Yellow,
    }
}

/// Formats the cells of one table row.
///
/// Satisfaction is shown with one decimal.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::{client_rows, dummy::dummy_requests};
/// use returndesk_tui::widgets::client_row_cells;
///
/// let requests = dummy_requests();
/// let rows = client_rows(&requests);
/// assert_eq!(
///     client_row_cells(&rows[0]),
///     ["INV-20931", "Refund", "$249.00", "4.4", "Healthy"].map(String::from)
/// );
/// ```
#[must_use]
pub fn client_row_cells(row: &ClientRow<'_>) -> [String; 5] {
    [
        row.request.invoice_number.clone(),
        row.request.return_type.display_name().to_string(),
        row.request.amount.clone(),
        format!("{:.1}", row.satisfaction),
        row.health.label().to_string(),
    ]
}

/// Renders the client table to the buffer.
///
/// # Layout
///
/// ```text
/// ╭ Your returns ──────────────────────────────────────────────╮
/// │Invoice     Type          Amount     Satisfaction  Health  │
/// │INV-20931   Refund        $249.00    4.4           Healthy │
/// ╰────────────────────────────────────────────────────────────╯
/// ```
pub fn render_client_table(
    rows: &[ClientRow<'_>],
    selected_row: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    let header = Row::new(CLIENT_TABLE_COLUMNS).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let body = rows.iter().enumerate().map(|(i, row)| {
        let [invoice, kind, amount, satisfaction, health] = client_row_cells(row);
        let style = if selected_row == Some(i) {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::White)
        };
        Row::new([
            Cell::from(invoice),
            Cell::from(kind),
            Cell::from(amount),
            Cell::from(satisfaction),
            Cell::from(Span::styled(
                health,
                Style::default().fg(health_color(row.health)),
            )),
        ])
        .style(style)
    });

    let block = Block::default()
        .title(Span::styled(
            " Your returns ",
            Style::default().fg(Color::Cyan),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    Table::new(body, COLUMN_WIDTHS)
        .header(header)
        .block(block)
        .render(area, buf);
}

/// Returns the row index under a click, if it lands on a data row.
#[must_use]
pub fn client_row_at(row_count: usize, area: Rect, column: u16, row: u16) -> Option<usize> {
    if !area.contains((column, row).into()) {
        return None;
    }
    let first = area.y.saturating_add(CLIENT_TABLE_HEADER_ROWS);
    let idx = usize::from(row.checked_sub(first)?);
    (idx < row_count && row < area.bottom().saturating_sub(1)).then_some(idx)
}

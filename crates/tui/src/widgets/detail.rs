//! Detail editor modal widget.
//!
//! The modal shows the request header read-only and the three editable
//! fields: the star rating, the notes and the line items with their damage
//! classification. Its geometry is exposed so mouse clicks on the stars can
//! be mapped back to a rating.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use returndesk_protocol::{DetailEditor, LineItem, Rating};

use super::centered_rect;
use crate::state::EditorField;

/// Width of the editor modal.
const MODAL_WIDTH: u16 = 64;

/// Inner row holding the star rating.
const RATING_ROW: u16 = 5;

/// Inner column of the first star, right after `"Rating: "`.
const STAR_COLUMN: u16 = 8;

/// Columns from one star to the next.
const STAR_SPACING: u16 = 2;

/// Inner rows above the first line item.
const LINES_ROW: u16 = 9;

/// Inner rows below the last line item (blank and key hints).
const FOOTER_ROWS: u16 = 2;

const LABEL_WIDTH: usize = 9;

/// Returns the title of the editor for a request kind.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::{DetailEditor, ReturnRequest, ReturnType};
/// use returndesk_tui::widgets::editor_title;
///
/// let request = ReturnRequest::new("R-1", "Acme", "INV-1", ReturnType::Missing);
/// let editor = DetailEditor::open(request, Vec::new());
/// assert_eq!(editor_title(&editor), "Missing Item Request");
/// ```
#[must_use]
pub fn editor_title(editor: &DetailEditor) -> String {
    format!("{} Request", editor.kind().display_name())
}

/// Renders a rating as five stars separated by spaces.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::Rating;
/// use returndesk_tui::widgets::rating_stars;
///
/// assert_eq!(rating_stars(Rating::new(2)), "★ ★ ☆ ☆ ☆");
/// ```
#[must_use]
pub fn rating_stars(rating: Rating) -> String {
    (1..=Rating::MAX)
        .map(|k| if k <= rating.get() { "★" } else { "☆" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns the modal area for an editor inside the full frame.
#[must_use]
pub fn editor_modal_area(area: Rect, editor: &DetailEditor) -> Rect {
    let lines = u16::try_from(editor.line_items().len().max(1)).unwrap_or(u16::MAX);
    let height = LINES_ROW
        .saturating_add(lines)
        .saturating_add(FOOTER_ROWS)
        .saturating_add(2);
    centered_rect(MODAL_WIDTH, height, area)
}

/// Maps a click inside the modal to the star it hit.
///
/// Stars sit [`STAR_SPACING`] columns apart; a click on the gap after a
/// star counts for that star.
///
/// # Examples
///
/// ```
/// use ratatui::layout::Rect;
/// use returndesk_tui::widgets::star_hit;
///
/// let modal = Rect::new(10, 5, 64, 14);
/// // Border, then "Rating: " puts the first star at column 19 on row 11.
/// assert_eq!(star_hit(modal, 19, 11), Some(1));
/// assert_eq!(star_hit(modal, 27, 11), Some(5));
/// assert_eq!(star_hit(modal, 29, 11), None);
/// assert_eq!(star_hit(modal, 19, 10), None);
/// ```
#[must_use]
pub fn star_hit(modal: Rect, column: u16, row: u16) -> Option<u8> {
    let inner_x = modal.x.saturating_add(1);
    let inner_y = modal.y.saturating_add(1);
    if row != inner_y.saturating_add(RATING_ROW) || row >= modal.bottom().saturating_sub(1) {
        return None;
    }
    let offset = column.checked_sub(inner_x.saturating_add(STAR_COLUMN))?;
    let star = offset / STAR_SPACING + 1;
    u8::try_from(star)
        .ok()
        .filter(|k| *k <= Rating::MAX)
}

/// Renders the editor modal centered on the frame.
///
/// # Layout
///
/// ```text
/// ╭ Damage Request ─────────────────────────────────────────────╮
/// │ID       RET-1003                                            │
/// │Client   Globex Corp                                         │
/// │Invoice  INV-20957                                           │
/// │Mode     Partial · created Jan 13, 2025                      │
/// │                                                             │
/// │Rating: ★ ★ ☆ ☆ ☆                                            │
/// │Notes:  arrived in pieces▏                                   │
/// │                                                             │
/// │Line items                                                   │
/// │▸ SKU-4410   Ceramic Vase Set        x2   Broken             │
/// │  SKU-4411   Glass Coasters          x4   No damage          │
/// │                                                             │
/// │Tab field · 1-5 rate · ←/→ damage · a attach · Esc close     │
/// ╰─────────────────────────────────────────────────────────────╯
/// ```
pub fn render_editor(
    editor: &DetailEditor,
    field: EditorField,
    selected_line: usize,
    area: Rect,
    buf: &mut Buffer,
) {
    let modal = editor_modal_area(area, editor);
    Clear.render(modal, buf);

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", editor_title(editor)),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    let request = editor.request();
    let id = if request.is_draft() {
        "(draft)"
    } else {
        editor.id()
    };
    let mode = if request.created.is_empty() {
        editor.return_mode().display_name().to_string()
    } else {
        format!(
            "{} · created {}",
            editor.return_mode().display_name(),
            request.created
        )
    };

    let mut lines = vec![
        header_line("ID", id),
        header_line("Client", editor.client_name()),
        header_line("Invoice", editor.invoice_number()),
        header_line("Mode", &mode),
        Line::from(""),
        Line::from(vec![
            Span::styled("Rating: ", label_style(field == EditorField::Rating)),
            Span::styled(
                rating_stars(editor.rating()),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        notes_line(editor.notes(), field == EditorField::Notes),
        Line::from(""),
        Line::from(Span::styled(
            EditorField::LineItems.display_name(),
            label_style(field == EditorField::LineItems),
        )),
    ];

    if editor.line_items().is_empty() {
        lines.push(Line::from(Span::styled(
            "  No line items",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    } else {
        let lines_focused = field == EditorField::LineItems;
        lines.extend(
            editor
                .line_items()
                .iter()
                .enumerate()
                .map(|(i, item)| line_item_line(item, lines_focused && i == selected_line)),
        );
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab field · 1-5 rate · ←/→ damage · a attach · Esc close",
        Style::default().fg(Color::DarkGray),
    )));

    Paragraph::new(lines).block(block).render(modal, buf);
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn header_line<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{label:<width$}", width = LABEL_WIDTH),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn notes_line(notes: &str, focused: bool) -> Line<'_> {
    let mut spans = vec![
        Span::styled("Notes:  ", label_style(focused)),
        Span::styled(notes, Style::default().fg(Color::White)),
    ];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    } else if notes.is_empty() {
        spans.push(Span::styled(
            "(none)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn line_item_line(item: &LineItem, selected: bool) -> Line<'static> {
    let (marker, damage_style) = if selected {
        (
            "▸ ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(Color::Gray))
    };
    Line::from(vec![
        Span::raw(format!(
            "{marker}{:<10} {:<22} x{:<3} ",
            item.item_code, item.item_name, item.qty
        )),
        Span::styled(item.damage_type.display_name(), damage_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use returndesk_protocol::{DamageType, ReturnMode, ReturnRequest, ReturnType};

    fn damage_editor() -> DetailEditor {
        let request = ReturnRequest::new("RET-1003", "Globex Corp", "INV-20957", ReturnType::Damage)
            .with_mode(ReturnMode::Partial)
            .with_rating(2)
            .with_created("Jan 13, 2025");
        DetailEditor::open(
            request,
            vec![
                LineItem::new("SKU-4410", "Ceramic Vase Set", 2).with_damage(DamageType::Broken),
                LineItem::new("SKU-4411", "Glass Coasters", 4),
            ],
        )
    }

    #[test]
    fn modal_is_centered_and_sized_by_lines() {
        let area = Rect::new(0, 0, 100, 30);
        let modal = editor_modal_area(area, &damage_editor());

        assert_eq!(modal.width, 64);
        assert_eq!(modal.height, 15);
        assert_eq!(modal.x, 18);
        assert_eq!(modal.y, 7);
    }

    #[test]
    fn render_shows_header_and_fields() {
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        let mut editor = damage_editor();
        editor.set_notes("arrived in pieces");

        render_editor(&editor, EditorField::LineItems, 0, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Damage Request"));
        assert!(content.contains("RET-1003"));
        assert!(content.contains("Globex Corp"));
        assert!(content.contains("Partial · created Jan 13, 2025"));
        assert!(content.contains("Rating: ★ ★ ☆ ☆ ☆"));
        assert!(content.contains("arrived in pieces"));
        assert!(content.contains("▸ SKU-4410"));
        assert!(content.contains("Broken"));
        assert!(content.contains("No damage"));
    }

    #[test]
    fn draft_shows_placeholder_id_and_no_lines() {
        let request = ReturnRequest::new("", "", "", ReturnType::Exchange);
        let editor = DetailEditor::open(request, Vec::new());
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_editor(&editor, EditorField::Rating, 0, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Exchange Request"));
        assert!(content.contains("(draft)"));
        assert!(content.contains("No line items"));
        assert!(content.contains("Rating: ☆ ☆ ☆ ☆ ☆"));
    }

    #[test]
    fn stars_are_where_the_hit_test_expects() {
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        let editor = damage_editor();

        render_editor(&editor, EditorField::Rating, 0, area, &mut buf);

        let modal = editor_modal_area(area, &editor);
        let row = modal.y + 1 + RATING_ROW;
        for k in 1..=5u16 {
            let column = modal.x + 1 + STAR_COLUMN + (k - 1) * STAR_SPACING;
            let expected = if k <= 2 { "★" } else { "☆" };
            assert_eq!(buf[(column, row)].symbol(), expected);
            assert_eq!(star_hit(modal, column, row), u8::try_from(k).ok());
        }
    }

    #[test]
    fn star_hit_outside_stars() {
        let modal = Rect::new(0, 0, 64, 14);

        assert_eq!(star_hit(modal, 8, 6), None);
        assert_eq!(star_hit(modal, 9, 6), Some(1));
        assert_eq!(star_hit(modal, 10, 6), Some(1));
        assert_eq!(star_hit(modal, 11, 6), Some(2));
        assert_eq!(star_hit(modal, 17, 6), Some(5));
        assert_eq!(star_hit(modal, 18, 6), Some(5));
        assert_eq!(star_hit(modal, 19, 6), None);
        assert_eq!(star_hit(modal, 9, 5), None);
    }

    #[test]
    fn rating_stars_bounds() {
        assert_eq!(rating_stars(Rating::UNRATED), "☆ ☆ ☆ ☆ ☆");
        assert_eq!(rating_stars(Rating::new(5)), "★ ★ ★ ★ ★");
    }
}

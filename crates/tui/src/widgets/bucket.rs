//! Bucket column rendering widget.
//!
//! A bucket column shows one return type: a header with the full count,
//! the visible cards, and a show more/less footer when the bucket
//! overflows.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use returndesk_protocol::{Affordance, Bucket, BucketViewState};

use super::request_card::render_request_card;
use crate::layout::REQUEST_CARD_HEIGHT;

/// Position of a bucket in the horizontal layout.
///
/// Adjacent buckets share one border, so only the last column draws a right
/// edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketPosition {
    /// Leftmost column, rounded on the left.
    First,
    /// Inner columns, joined with T-connectors.
    Middle,
    /// Rightmost column, rounded on the right.
    Last,
}

impl BucketPosition {
    /// Returns the position of column `index` out of `count`.
    #[must_use]
    pub const fn of(index: usize, count: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 >= count {
            Self::Last
        } else {
            Self::Middle
        }
    }

    fn borders(self) -> Borders {
        match self {
            Self::First | Self::Middle => Borders::TOP | Borders::BOTTOM | Borders::LEFT,
            Self::Last => Borders::ALL,
        }
    }
}

const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// What a click inside a bucket column landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketHit {
    /// A card, by index into the visible slice.
    Card(usize),
    /// The show more/less footer.
    Footer,
}

/// Returns the footer text for an affordance.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::Affordance;
/// use returndesk_tui::widgets::affordance_label;
///
/// assert_eq!(affordance_label(Affordance::ShowMore(3)), "▼ 3 more");
/// assert_eq!(affordance_label(Affordance::ShowLess), "▲ show less");
/// ```
#[must_use]
pub fn affordance_label(affordance: Affordance) -> String {
    match affordance {
        Affordance::ShowMore(hidden) => format!("▼ {hidden} more"),
        Affordance::ShowLess => "▲ show less".to_string(),
    }
}

/// Renders a single bucket column to the buffer.
///
/// # Arguments
///
/// * `bucket` - The bucket to render
/// * `view` - Expansion flags deciding the visible slice
/// * `is_focused` - Whether this bucket currently has focus
/// * `selected_idx` - Focused card within the visible slice, if any
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
/// * `position` - The column's position, used to pick its borders
///
/// # Layout
///
/// ```text
/// ╭Refund (7)──────
/// │╭ RET-1001 ────╮
/// ││Acme Retail   │
/// ││INV-20931 ... │
/// │╰──────────────╯
/// │      ...
/// │▼ 1 more
/// ╰────────────────
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use returndesk_protocol::{BucketViewState, Buckets, ReturnRequest, ReturnType};
/// use returndesk_tui::widgets::{BucketPosition, render_bucket};
///
/// let requests = vec![ReturnRequest::new("R-1", "Acme", "INV-1", ReturnType::Refund)];
/// let buckets = Buckets::partition(&requests);
/// let area = Rect::new(0, 0, 20, 15);
/// let mut buf = Buffer::empty(area);
///
/// render_bucket(
///     buckets.bucket(ReturnType::Refund),
///     &BucketViewState::new(),
///     true,
///     Some(0),
///     area,
///     &mut buf,
///     BucketPosition::First,
/// );
/// ```
pub fn render_bucket(
    bucket: &Bucket<'_>,
    view: &BucketViewState,
    is_focused: bool,
    selected_idx: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
    position: BucketPosition,
) {
    let (border_style, title_style) = if is_focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::White),
        )
    };

    // The badge always counts the full bucket, not the visible slice.
    let title = format!("{} ({})", bucket.kind.display_name(), bucket.len());
    let border_set = match position {
        BucketPosition::First => BORDER_SET_FIRST,
        BucketPosition::Middle => BORDER_SET_MIDDLE,
        BucketPosition::Last => BORDER_SET_LAST,
    };
    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(position.borders())
        .border_set(border_set)
        .border_style(border_style);

    let inner_area = block.inner(area);
    block.render(area, buf);

    if bucket.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    let affordance = view.affordance(bucket);
    let (cards_area, footer_area) = split_footer(inner_area, affordance.is_some());

    let visible = view.visible(bucket);
    let slots = card_slots(cards_area);
    let offset = scroll_offset(
        if is_focused { selected_idx } else { None },
        visible.len(),
        slots,
    );

    let count = visible.len().saturating_sub(offset).min(slots);
    let mut constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Length(REQUEST_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    let card_areas = Layout::vertical(constraints).split(cards_area);

    for (i, card_area) in card_areas.iter().take(count).enumerate() {
        let idx = offset + i;
        let Some(request) = visible.get(idx) else {
            break;
        };
        let is_selected = is_focused && selected_idx == Some(idx);
        render_request_card(request, is_selected, *card_area, buf);
    }

    if let (Some(affordance), Some(footer_area)) = (affordance, footer_area) {
        let style = if is_focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(Line::from(Span::styled(affordance_label(affordance), style)))
            .render(footer_area, buf);
    }
}

/// Finds what a click at (`column`, `row`) hits inside a bucket column.
///
/// Uses the same geometry as [`render_bucket`], including the scroll
/// offset of the focused bucket.
#[must_use]
pub fn bucket_hit(
    bucket: &Bucket<'_>,
    view: &BucketViewState,
    is_focused: bool,
    selected_idx: Option<usize>,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<BucketHit> {
    if !area.contains((column, row).into()) || bucket.is_empty() {
        return None;
    }

    // Every position draws a top and a bottom border.
    let inner_area = Rect {
        y: area.y.saturating_add(1),
        height: area.height.saturating_sub(2),
        ..area
    };
    let (cards_area, footer_area) = split_footer(inner_area, view.affordance(bucket).is_some());

    if footer_area.is_some_and(|footer| footer.y == row) {
        return Some(BucketHit::Footer);
    }
    if row < cards_area.y || row >= cards_area.bottom() {
        return None;
    }

    let visible = view.visible(bucket).len();
    let slots = card_slots(cards_area);
    let offset = scroll_offset(if is_focused { selected_idx } else { None }, visible, slots);
    let slot = usize::from((row - cards_area.y) / REQUEST_CARD_HEIGHT);
    let idx = offset + slot;
    (slot < slots && idx < visible).then_some(BucketHit::Card(idx))
}

/// Reserves the last inner row for the footer when there is one.
fn split_footer(inner: Rect, has_footer: bool) -> (Rect, Option<Rect>) {
    if !has_footer || inner.height == 0 {
        return (inner, None);
    }
    let cards = Rect {
        height: inner.height - 1,
        ..inner
    };
    let footer = Rect {
        y: inner.bottom() - 1,
        height: 1,
        ..inner
    };
    (cards, Some(footer))
}

/// Number of whole cards that fit, never less than one.
fn card_slots(area: Rect) -> usize {
    usize::from((area.height / REQUEST_CARD_HEIGHT).max(1))
}

/// Renders a placeholder message for empty buckets.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No requests",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Calculates the scroll offset that keeps the focused card visible.
pub(crate) fn scroll_offset(selected_idx: Option<usize>, total: usize, slots: usize) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };
    if total <= slots {
        return 0;
    }

    let max_offset = total - slots;
    selected.saturating_sub(slots / 2).min(max_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use returndesk_protocol::{Buckets, ReturnRequest, ReturnType};

    fn refunds(n: usize) -> Vec<ReturnRequest> {
        (0..n)
            .map(|i| {
                ReturnRequest::new(format!("R-{i}"), format!("Client {i}"), "INV", ReturnType::Refund)
            })
            .collect()
    }

    #[test]
    fn render_empty_bucket() {
        let buckets = Buckets::partition(&[]);
        let area = Rect::new(0, 0, 20, 15);
        let mut buf = Buffer::empty(area);

        render_bucket(
            buckets.bucket(ReturnType::Damage),
            &BucketViewState::new(),
            false,
            None,
            area,
            &mut buf,
            BucketPosition::First,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("Damage (0)"));
        assert!(content.contains("No requests"));
    }

    #[test]
    fn badge_counts_full_bucket_and_footer_shows_hidden() {
        let requests = refunds(8);
        let buckets = Buckets::partition(&requests);
        let area = Rect::new(0, 0, 20, 40);
        let mut buf = Buffer::empty(area);

        render_bucket(
            buckets.bucket(ReturnType::Refund),
            &BucketViewState::new(),
            true,
            Some(0),
            area,
            &mut buf,
            BucketPosition::Middle,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("Refund (8)"));
        assert!(content.contains("R-5"));
        assert!(!content.contains("R-6"));
        assert!(content.contains("▼ 2 more"));
    }

    #[test]
    fn expanded_bucket_offers_show_less() {
        let requests = refunds(7);
        let buckets = Buckets::partition(&requests);
        let mut view = BucketViewState::new();
        view.toggle(ReturnType::Refund);
        let area = Rect::new(0, 0, 20, 40);
        let mut buf = Buffer::empty(area);

        render_bucket(
            buckets.bucket(ReturnType::Refund),
            &view,
            false,
            None,
            area,
            &mut buf,
            BucketPosition::Last,
        );

        let content = buffer_to_string(&buf);
        assert!(content.contains("R-6"));
        assert!(content.contains("▲ show less"));
    }

    #[test]
    fn small_bucket_has_no_footer() {
        let requests = refunds(6);
        let buckets = Buckets::partition(&requests);
        let area = Rect::new(0, 0, 20, 40);
        let mut buf = Buffer::empty(area);

        render_bucket(
            buckets.bucket(ReturnType::Refund),
            &BucketViewState::new(),
            false,
            None,
            area,
            &mut buf,
            BucketPosition::First,
        );

        let content = buffer_to_string(&buf);
        assert!(!content.contains("more"));
        assert!(!content.contains("show less"));
    }

    #[test]
    fn hit_maps_rows_to_cards_and_footer() {
        let requests = refunds(7);
        let buckets = Buckets::partition(&requests);
        let bucket = buckets.bucket(ReturnType::Refund);
        let view = BucketViewState::new();
        // Inner rows 1..=28; footer on row 28, cards fill rows 1..=24.
        let area = Rect::new(10, 0, 20, 30);

        let hit = |row| bucket_hit(bucket, &view, false, None, area, 12, row);
        assert_eq!(hit(0), None);
        assert_eq!(hit(1), Some(BucketHit::Card(0)));
        assert_eq!(hit(4), Some(BucketHit::Card(0)));
        assert_eq!(hit(5), Some(BucketHit::Card(1)));
        assert_eq!(hit(24), Some(BucketHit::Card(5)));
        assert_eq!(hit(25), None);
        assert_eq!(hit(28), Some(BucketHit::Footer));
        assert_eq!(hit(29), None);
        assert_eq!(bucket_hit(bucket, &view, false, None, area, 5, 1), None);
    }

    #[test]
    fn hit_follows_scroll_offset() {
        let requests = refunds(6);
        let buckets = Buckets::partition(&requests);
        let bucket = buckets.bucket(ReturnType::Refund);
        let view = BucketViewState::new();
        // Room for two cards: rows 1..=8.
        let area = Rect::new(0, 0, 20, 10);

        assert_eq!(
            bucket_hit(bucket, &view, true, Some(5), area, 2, 1),
            Some(BucketHit::Card(4))
        );
        assert_eq!(
            bucket_hit(bucket, &view, false, Some(5), area, 2, 1),
            Some(BucketHit::Card(0))
        );
    }

    #[test]
    fn position_of_column() {
        assert_eq!(BucketPosition::of(0, 4), BucketPosition::First);
        assert_eq!(BucketPosition::of(2, 4), BucketPosition::Middle);
        assert_eq!(BucketPosition::of(3, 4), BucketPosition::Last);
    }

    #[test]
    fn scroll_offset_cases() {
        assert_eq!(scroll_offset(None, 10, 3), 0);
        assert_eq!(scroll_offset(Some(2), 3, 5), 0);
        assert_eq!(scroll_offset(Some(0), 10, 3), 0);
        assert_eq!(scroll_offset(Some(5), 10, 3), 4);
        assert_eq!(scroll_offset(Some(9), 10, 3), 7);
    }
}

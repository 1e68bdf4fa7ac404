//! Triage board rendering widget.
//!
//! The board shows the four buckets side by side in [`ReturnType`] order.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};
use returndesk_protocol::{BucketViewState, Buckets, ReturnType};

use super::bucket::{BucketHit, BucketPosition, bucket_hit, render_bucket};

/// Splits the board area into one equal column per bucket.
#[must_use]
pub fn bucket_areas(area: Rect) -> [Rect; 4] {
    Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(area)
}

/// Renders the complete triage board to the buffer.
///
/// # Arguments
///
/// * `buckets` - The partitioned requests
/// * `view` - Expansion flags per bucket
/// * `selected_bucket` - Index of the focused bucket (0-3)
/// * `selected_card` - Focused card within the focused bucket, if any
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use returndesk_protocol::{BucketViewState, dummy::dummy_store};
/// use returndesk_tui::widgets::render_board;
///
/// let store = dummy_store();
/// let area = Rect::new(0, 0, 100, 30);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&store.buckets(), &BucketViewState::new(), 0, Some(0), area, &mut buf);
/// ```
pub fn render_board(
    buckets: &Buckets<'_>,
    view: &BucketViewState,
    selected_bucket: usize,
    selected_card: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    let areas = bucket_areas(area);
    let count = areas.len();

    for (i, (bucket, bucket_area)) in buckets.iter().zip(areas).enumerate() {
        let is_focused = selected_bucket == i;
        render_bucket(
            bucket,
            view,
            is_focused,
            if is_focused { selected_card } else { None },
            bucket_area,
            buf,
            BucketPosition::of(i, count),
        );
    }
}

/// Finds the bucket and card under a click on the board.
///
/// Returns the bucket type together with what was hit inside it.
#[must_use]
pub fn board_hit(
    buckets: &Buckets<'_>,
    view: &BucketViewState,
    selected_bucket: usize,
    selected_card: Option<usize>,
    area: Rect,
    column: u16,
    row: u16,
) -> Option<(ReturnType, BucketHit)> {
    let areas = bucket_areas(area);
    let (i, bucket_area) = areas
        .iter()
        .enumerate()
        .find(|(_, a)| a.contains((column, row).into()))?;
    let kind = ReturnType::from_index(i)?;
    let is_focused = selected_bucket == i;

    bucket_hit(
        buckets.bucket(kind),
        view,
        is_focused,
        if is_focused { selected_card } else { None },
        *bucket_area,
        column,
        row,
    )
    .map(|hit| (kind, hit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use returndesk_protocol::dummy::dummy_store;

    #[test]
    fn render_empty_board() {
        let buckets = Buckets::partition(&[]);
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        render_board(&buckets, &BucketViewState::new(), 0, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Refund (0)"));
        assert!(content.contains("Missing Item (0)"));
        assert!(content.contains("Damage (0)"));
        assert!(content.contains("Exchange (0)"));
    }

    #[test]
    fn render_sample_board_badges() {
        let store = dummy_store();
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);

        render_board(&store.buckets(), &BucketViewState::new(), 1, Some(0), area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Refund (7)"));
        assert!(content.contains("Missing Item (5)"));
        assert!(content.contains("▼ 1 more"));
    }

    #[test]
    fn render_board_narrow_terminal() {
        let store = dummy_store();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        render_board(&store.buckets(), &BucketViewState::new(), 0, None, area, &mut buf);
    }

    #[test]
    fn bucket_areas_cover_width() {
        let areas = bucket_areas(Rect::new(0, 0, 80, 20));
        assert_eq!(areas[0].x, 0);
        assert_eq!(areas.iter().map(|a| a.width).sum::<u16>(), 80);
        assert!(areas.iter().all(|a| a.width == 20));
    }

    #[test]
    fn board_hit_finds_bucket_and_card() {
        let store = dummy_store();
        let buckets = store.buckets();
        let view = BucketViewState::new();
        let area = Rect::new(0, 3, 80, 30);

        // Third column, second card: rows 4..=7 hold the first card.
        assert_eq!(
            board_hit(&buckets, &view, 0, None, area, 45, 9),
            Some((ReturnType::Damage, BucketHit::Card(1)))
        );
        assert_eq!(board_hit(&buckets, &view, 0, None, area, 45, 2), None);
        // Damage has only two cards.
        assert_eq!(board_hit(&buckets, &view, 0, None, area, 45, 13), None);
    }
}

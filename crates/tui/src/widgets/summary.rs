//! Summary line shown in the header.

use returndesk_protocol::Summary;

/// Formats the aggregate figures as one line of text.
///
/// Averages that cannot be computed are shown as `-`.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::Summary;
/// use returndesk_tui::widgets::summary_line;
///
/// let summary = Summary::from_requests(&[]);
/// assert_eq!(
///     summary_line(&summary),
///     "0 requests · 0 pending · 0 approved · 0 flagged · avg rating - · avg progress -"
/// );
/// ```
#[must_use]
pub fn summary_line(summary: &Summary) -> String {
    let statuses = summary
        .by_status
        .iter()
        .map(|(status, count)| format!("{count} {}", status.display_name().to_lowercase()))
        .collect::<Vec<_>>()
        .join(" · ");
    let rating = summary
        .average_rating
        .map_or_else(|| "-".to_string(), |r| format!("{r:.1}"));
    let progress = summary
        .average_progress
        .map_or_else(|| "-".to_string(), |p| format!("{p:.0}%"));

    format!(
        "{} requests · {statuses} · avg rating {rating} · avg progress {progress}",
        summary.total
    )
}

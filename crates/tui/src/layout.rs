//! Centralized layout measurements for the TUI.
//!
//! Rendering and mouse hit-testing both read these values, so a click always
//! lands on what was drawn.

/// Height of the header bar in rows.
///
/// The header displays the application title, the summary line and the help
/// cue.
pub const HEADER_HEIGHT: u16 = 4;

/// Height of each request card in rows.
///
/// This includes the border (2 rows) and content (2 rows for client and
/// invoice line).
pub const REQUEST_CARD_HEIGHT: u16 = 4;

/// Rows the client table spends above its first data row (border and
/// column header).
pub const CLIENT_TABLE_HEADER_ROWS: u16 = 2;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message. The editor
/// modal needs the most vertical space:
/// - Borders: 2 rows
/// - Request header: 4 rows
/// - Rating and notes: 3 rows
/// - At least one line item: 1 row
pub const MIN_HEIGHT: u16 = 12;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim its rows for content.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The board has 4 buckets; each needs at least 12 characters for borders
/// and a readable client name.
pub const MIN_WIDTH: u16 = 48;

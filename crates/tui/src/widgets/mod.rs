//! Widget components for the returndesk TUI.
//!
//! Each widget is a plain function that renders borrowed state into a
//! [`Buffer`](ratatui::buffer::Buffer). Widgets that accept clicks also expose
//! a matching hit-test function computed from the same geometry, so the app
//! never has to guess where something was drawn.
//!
//! # Modules
//!
//! - [`board`]: Renders the triage board with one bucket per return type
//! - [`bucket`]: Renders a single bucket with its cards and overflow footer
//! - [`request_card`]: Renders request cards, colored by status
//! - [`client_table`]: Renders the compact table shown to clients
//! - [`create`]: Renders the return type picker for new requests
//! - [`detail`]: Renders the detail editor modal
//! - [`help`]: Renders the keybinding overlay
//! - [`summary`]: Formats the aggregate line shown in the header
//!
//! # Color Coding
//!
//! Cards are colored by their [`RequestStatus`](returndesk_protocol::RequestStatus):
//!
//! | Status | Color |
//! |--------|-------|
//! | `Pending` | Yellow (`Color::Yellow`) |
//! | `Approved` | Green (`Color::Green`) |
//! | `Flagged` | Red (`Color::Red`) |
//!
//! # Example
//!
//! ```
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//! use returndesk_protocol::{BucketViewState, dummy::dummy_store};
//! use returndesk_tui::widgets;
//!
//! let store = dummy_store();
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(&store.buckets(), &BucketViewState::new(), 0, Some(0), area, &mut buf);
//! ```

use ratatui::layout::Rect;

pub mod board;
pub mod bucket;
pub mod client_table;
pub mod create;
pub mod detail;
pub mod help;
pub mod request_card;
pub mod summary;

pub use board::{board_hit, bucket_areas, render_board};
pub use bucket::{BucketHit, BucketPosition, affordance_label, bucket_hit, render_bucket};
pub use client_table::{
    CLIENT_TABLE_COLUMNS, client_row_at, client_row_cells, health_color, render_client_table,
};
pub use create::render_type_picker;
pub use detail::{editor_modal_area, editor_title, rating_stars, render_editor, star_hit};
pub use help::render_help_overlay;
pub use request_card::{render_request_card, status_color};
pub use summary::summary_line;

/// Calculates a centered rectangle within the given area.
///
/// The requested size is clamped to the area.
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

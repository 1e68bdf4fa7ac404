//! Helpers shared by the rendering tests.

use ratatui::buffer::Buffer;

/// Returns one buffer row as text, without trailing blanks.
pub(crate) fn buffer_row(buf: &Buffer, y: u16) -> String {
    let row: String = (0..buf.area.width)
        .filter_map(|x| buf.cell((buf.area.x + x, buf.area.y + y)))
        .map(|cell| cell.symbol())
        .collect();
    row.trim_end_matches(' ').to_string()
}

/// Renders a whole buffer as text, one line per row.
///
/// Rows are trimmed as in [`buffer_row`], so inline snapshots stay free of
/// trailing whitespace.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| buffer_row(buf, y) + "\n")
        .collect()
}

use core::cmp;

use crate::{VisibleWindow, WindowOptions};

/// Maps a scroll offset to the rows that must be rendered.
///
/// - `start_index` is the row under `offset` (floor division), so a partially visible leading
///   row is never skipped.
/// - `ceil(container_height / item_height)` rows are taken for the viewport, followed by
///   `options.buffer` trailing rows. The first buffer row also catches the extra row that
///   straddles the bottom edge when `offset` is not row-aligned.
/// - Indices are clamped to `count`; `offset` itself is not clamped. Passing an offset past the
///   end yields an empty window at `count` rather than an out-of-bounds range.
///
/// The result always satisfies `start_index <= end_index <= count`.
pub fn compute_window(offset: u64, count: usize, options: &WindowOptions) -> VisibleWindow {
    if count == 0 {
        return VisibleWindow::EMPTY;
    }

    let row = options.row_height();
    let start_index = usize::try_from(offset / row).map_or(count, |i| cmp::min(i, count));
    let end_index = cmp::min(
        start_index
            .saturating_add(options.visible_count())
            .saturating_add(options.buffer),
        count,
    );

    VisibleWindow {
        start_index,
        end_index,
        offset_y: (start_index as u64).saturating_mul(row),
    }
}

/// Start offset of `index` inside the scroll track.
pub fn item_offset(index: usize, options: &WindowOptions) -> u64 {
    (index as u64).saturating_mul(options.row_height())
}

/// Row height used by the demo list, in pixels.
pub const ITEM_HEIGHT: u32 = 80;
/// Viewport height used by the demo list, in pixels.
pub const CONTAINER_HEIGHT: u32 = 600;
/// Extra rows rendered after the last visible one.
pub const DEFAULT_BUFFER: usize = 1;

/// Configuration for [`crate::compute_window`] and [`crate::WindowMemo`].
///
/// All rows share `item_height`; the viewport is `container_height` tall. Both must be non-zero:
/// a zero height is clamped to 1 (and debug-asserted) so the calculator never divides by zero.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize` so hosts can keep it
/// in their own config files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowOptions {
    pub item_height: u32,
    pub container_height: u32,
    /// Number of trailing rows rendered past the viewport.
    ///
    /// One row is enough to hide sub-pixel scroll deltas; raise it for hosts that repaint late.
    pub buffer: usize,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            item_height: ITEM_HEIGHT,
            container_height: CONTAINER_HEIGHT,
            buffer: DEFAULT_BUFFER,
        }
    }
}

impl WindowOptions {
    pub fn new(item_height: u32, container_height: u32) -> Self {
        Self {
            item_height: non_zero("item_height", item_height),
            container_height: non_zero("container_height", container_height),
            buffer: DEFAULT_BUFFER,
        }
    }

    pub fn with_item_height(mut self, item_height: u32) -> Self {
        self.item_height = non_zero("item_height", item_height);
        self
    }

    pub fn with_container_height(mut self, container_height: u32) -> Self {
        self.container_height = non_zero("container_height", container_height);
        self
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    pub(crate) fn row_height(&self) -> u64 {
        self.item_height.max(1) as u64
    }

    /// Number of rows needed to cover the viewport, counting a partially visible last row.
    pub fn visible_count(&self) -> usize {
        let view = self.container_height as u64;
        view.div_ceil(self.row_height()) as usize
    }

    /// Height of the full scroll track for `count` rows.
    pub fn total_height(&self, count: usize) -> u64 {
        (count as u64).saturating_mul(self.row_height())
    }

    pub fn max_scroll_offset(&self, count: usize) -> u64 {
        self.total_height(count)
            .saturating_sub(self.container_height as u64)
    }

    pub fn clamp_offset(&self, offset: u64, count: usize) -> u64 {
        offset.min(self.max_scroll_offset(count))
    }
}

fn non_zero(field: &'static str, value: u32) -> u32 {
    if value == 0 {
        vwarn!(field, "WindowOptions: zero height clamped to 1");
        debug_assert!(value > 0, "WindowOptions: {field} must be non-zero");
        return 1;
    }
    value
}

use core::ops::Range;

/// The contiguous slice of rows that must be materialized for the current viewport.
///
/// `offset_y` is where the first materialized row sits inside the full-height scroll track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub start_index: usize,
    pub end_index: usize, // exclusive
    pub offset_y: u64,
}

impl VisibleWindow {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
        offset_y: 0,
    };

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index.max(self.start_index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start_index && index < self.end_index
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// A snapshot of the scroll position together with the collection length it was taken against.
///
/// Keeping both in one value lets a dataset swap replace them together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset: u64,
    pub count: usize,
}

impl ViewportState {
    pub fn new(count: usize) -> Self {
        Self {
            scroll_offset: 0,
            count,
        }
    }
}

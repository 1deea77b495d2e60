/// Rows requested per page.
pub const PAGE_SIZE: usize = 10;
/// Loading stops once this many rows have arrived.
pub const MAX_ITEMS: usize = 100;
/// Fraction of the sentinel row that must be visible before the next page is requested.
pub const SENTINEL_THRESHOLD: f32 = 0.5;

/// A page the host should fetch. Pages are 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    pub page: u32,
    pub page_size: usize,
}

/// Pagination state for an append-only feed that loads more rows as its end scrolls into view.
///
/// The pager never fetches anything itself. It hands out at most one [`PageRequest`] at a time;
/// the host performs the load (however long it takes) and reports back with
/// [`Self::complete`] or [`Self::fail`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedPager {
    page: u32,
    page_size: usize,
    max_items: usize,
    threshold: f32,
    loaded: usize,
    loading: bool,
    has_more: bool,
}

impl Default for FeedPager {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedPager {
    pub fn new() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
            max_items: MAX_ITEMS,
            threshold: SENTINEL_THRESHOLD,
            loaded: 0,
            loading: false,
            has_more: true,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self.has_more = self.loaded < self.max_items;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// The next page that will be requested.
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Starts loading the next page unless a load is in flight or the feed is exhausted.
    pub fn request_next(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        vtrace!(page = self.page, page_size = self.page_size, "FeedPager: request");
        Some(PageRequest {
            page: self.page,
            page_size: self.page_size,
        })
    }

    /// Call this when the host reports how much of the sentinel row at the end of the feed is
    /// visible (`0.0..=1.0`). A `NaN` ratio never triggers a load.
    pub fn on_sentinel(&mut self, visible_ratio: f32) -> Option<PageRequest> {
        if !(visible_ratio >= self.threshold) {
            return None;
        }
        self.request_next()
    }

    /// Records a finished load of `received` rows.
    ///
    /// A page shorter than `page_size` means the source has nothing more to give.
    pub fn complete(&mut self, received: usize) {
        if !self.loading {
            vwarn!(received, "FeedPager: completion without a pending request");
            return;
        }
        self.loading = false;
        self.loaded = self.loaded.saturating_add(received);
        self.page = self.page.saturating_add(1);
        if self.loaded >= self.max_items || received < self.page_size {
            self.has_more = false;
        }
        vdebug!(
            loaded = self.loaded,
            has_more = self.has_more,
            "FeedPager: page complete"
        );
    }

    /// Records a failed load. The same page is requested again next time.
    pub fn fail(&mut self) {
        if self.loading {
            vwarn!(page = self.page, "FeedPager: page load failed");
        }
        self.loading = false;
    }

    /// Back to an empty feed at page 1.
    pub fn reset(&mut self) {
        self.page = 1;
        self.loaded = 0;
        self.loading = false;
        self.has_more = self.max_items > 0;
    }
}

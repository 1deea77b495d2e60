use alloc::vec::Vec;

use windowed_list::{
    DatasetSize, ItemCollection, Record, ViewportState, VisibleWindow, WindowMemo, WindowOptions,
    item_offset,
};

use crate::{LeadingEdgeThrottle, SubscriptionId, ThrottleState, ViewportCell};

/// What the rendering layer needs for one frame.
///
/// Draw `items` (exactly `window.len()` rows) starting at `window.offset_y` inside a scroll track
/// of `total_height`.
#[derive(Debug, PartialEq, Eq)]
pub struct RenderInstruction<'a, T> {
    pub window: VisibleWindow,
    pub items: &'a [T],
    pub total_height: u64,
}

impl<T> Clone for RenderInstruction<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RenderInstruction<'_, T> {}

/// A framework-neutral controller for one windowed list.
///
/// It owns the dataset, the viewport state and the scroll throttle. Adapters drive it by calling:
/// - `on_scroll(offset, now_ms)` for every raw scroll event
/// - `tick(now_ms)` each frame/timer tick (fires the throttle cooldown)
/// - `render()` when they need to draw
///
/// The dataset and the viewport state are only ever replaced together (see
/// [`Self::replace_items`]), so a window is never computed from an offset that belongs to a
/// different dataset.
#[derive(Debug)]
pub struct ListController<T> {
    items: ItemCollection<T>,
    viewport: ViewportCell,
    throttle: LeadingEdgeThrottle,
    memo: WindowMemo,
}

impl<T> ListController<T> {
    pub fn new(items: Vec<T>, options: WindowOptions) -> Self {
        Self::from_collection(ItemCollection::new(items), options)
    }

    pub fn from_collection(items: ItemCollection<T>, options: WindowOptions) -> Self {
        vdebug!(
            count = items.len(),
            item_height = options.item_height,
            container_height = options.container_height,
            "ListController::new"
        );
        Self {
            viewport: ViewportCell::new(ViewportState::new(items.len())),
            items,
            throttle: LeadingEdgeThrottle::new(),
            memo: WindowMemo::new(options),
        }
    }

    /// Replaces the scroll throttle (e.g. to change the cooldown).
    ///
    /// A disposed controller stays disposed: the new throttle is disposed before it is installed.
    pub fn with_throttle(mut self, mut throttle: LeadingEdgeThrottle) -> Self {
        if self.throttle.is_disposed() {
            throttle.dispose();
        }
        self.throttle = throttle;
        self
    }

    pub fn options(&self) -> &WindowOptions {
        self.memo.options()
    }

    /// Applies new geometry and re-clamps the scroll offset against it.
    pub fn set_options(&mut self, options: WindowOptions) {
        self.memo.set_options(options);
        let clamped = options.clamp_offset(self.viewport.scroll_offset(), self.items.len());
        self.viewport.set_scroll_offset(clamped);
    }

    pub fn items(&self) -> &ItemCollection<T> {
        &self.items
    }

    pub fn viewport(&self) -> &ViewportCell {
        &self.viewport
    }

    pub fn viewport_state(&self) -> ViewportState {
        self.viewport.get()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.viewport.scroll_offset()
    }

    pub fn throttle_state(&self) -> ThrottleState {
        self.throttle.state()
    }

    pub fn throttle(&self) -> &LeadingEdgeThrottle {
        &self.throttle
    }

    pub fn subscribe(
        &mut self,
        listener: impl Fn(&ViewportState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.viewport.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.viewport.unsubscribe(id)
    }

    /// Call this for every scroll event reported by the UI.
    ///
    /// The event is dropped while the throttle is cooling down. Accepted offsets are clamped to
    /// the scrollable range before they are stored. Returns `true` if the event was accepted.
    pub fn on_scroll(&mut self, offset: u64, now_ms: u64) -> bool {
        if !self.throttle.accept(now_ms) {
            vtrace!(offset, now_ms, "on_scroll: dropped");
            return false;
        }
        let clamped = self.options().clamp_offset(offset, self.items.len());
        vtrace!(offset, clamped, now_ms, "on_scroll: accepted");
        self.viewport.set_scroll_offset(clamped);
        true
    }

    /// Advances the throttle clock. Returns `true` if a cooldown ended.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.throttle.poll(now_ms)
    }

    /// Programmatically scrolls so that `index` is the first row (no throttling).
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_index(&mut self, index: usize) -> u64 {
        if self.throttle.is_disposed() {
            return self.viewport.scroll_offset();
        }
        let count = self.items.len();
        let target = item_offset(index.min(count.saturating_sub(1)), self.options());
        let offset = self.options().clamp_offset(target, count);
        self.viewport.set_scroll_offset(offset);
        offset
    }

    /// The window for the current viewport state, recomputed only when it changed.
    pub fn window(&mut self) -> VisibleWindow {
        let state = self.viewport.get();
        debug_assert_eq!(
            state.count,
            self.items.len(),
            "viewport state out of sync with the dataset"
        );
        self.memo.window(state.scroll_offset, state.count)
    }

    pub fn render(&mut self) -> RenderInstruction<'_, T> {
        let window = self.window();
        RenderInstruction {
            window,
            items: self.items.slice(&window),
            total_height: self.options().total_height(self.items.len()),
        }
    }

    /// Swaps in a new dataset and resets the scroll position to the top.
    ///
    /// Subscribers are notified once, after both the dataset length and the offset changed.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.replace_collection(ItemCollection::new(items));
    }

    pub fn replace_collection(&mut self, items: ItemCollection<T>) {
        vdebug!(
            prev = self.items.len(),
            next = items.len(),
            "ListController::replace_collection"
        );
        self.items = items;
        self.viewport.reset(self.items.len());
    }

    /// Tears the controller down: cancels a pending cooldown and ignores later scroll events.
    pub fn dispose(&mut self) {
        self.throttle.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.throttle.is_disposed()
    }
}

impl ListController<Record> {
    /// Creates a controller over a freshly generated dataset of `size` rows.
    pub fn with_dataset(size: DatasetSize, options: WindowOptions) -> Self {
        Self::new(size.generate(), options)
    }

    /// Regenerates the dataset at `size` and resets the scroll position.
    pub fn select_dataset(&mut self, size: DatasetSize) {
        self.replace_items(size.generate());
    }
}

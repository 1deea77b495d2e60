use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cell::Cell;
use core::cmp;
use core::fmt;

use windowed_list::{ScrollDirection, ViewportState};

/// A callback fired synchronously after the viewport state changes.
pub type ViewportListener = Arc<dyn Fn(&ViewportState) + Send + Sync>;

/// Handle returned by [`ViewportCell::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// The single mutable cell holding the viewport state of one list.
///
/// Every subscriber is called after each effective change, in subscription order. Setters that
/// do not change the value do not notify. Use [`Self::batch_update`] to apply several changes
/// with a single notification.
pub struct ViewportCell {
    state: ViewportState,
    scroll_direction: Option<ScrollDirection>,
    listeners: Vec<(SubscriptionId, ViewportListener)>,
    next_id: u64,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl fmt::Debug for ViewportCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportCell")
            .field("state", &self.state)
            .field("scroll_direction", &self.scroll_direction)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl ViewportCell {
    pub fn new(state: ViewportState) -> Self {
        Self {
            state,
            scroll_direction: None,
            listeners: Vec::new(),
            next_id: 0,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn get(&self) -> ViewportState {
        self.state
    }

    pub fn scroll_offset(&self) -> u64 {
        self.state.scroll_offset
    }

    pub fn count(&self) -> usize {
        self.state.count
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn subscribe(
        &mut self,
        listener: impl Fn(&ViewportState) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Removes a subscriber. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(other, _)| *other != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn set_scroll_offset(&mut self, offset: u64) {
        if self.state.scroll_offset == offset {
            return;
        }
        let prev = self.state.scroll_offset;
        self.state.scroll_offset = offset;
        self.scroll_direction = match offset.cmp(&prev) {
            cmp::Ordering::Greater => Some(ScrollDirection::Forward),
            cmp::Ordering::Less => Some(ScrollDirection::Backward),
            cmp::Ordering::Equal => self.scroll_direction,
        };
        self.notify();
    }

    pub fn set_count(&mut self, count: usize) {
        if self.state.count == count {
            return;
        }
        self.state.count = count;
        self.notify();
    }

    /// Replaces the whole state: scroll offset back to zero, new `count`, one notification.
    ///
    /// Subscribers are notified even when both values were already equal, since a reset means
    /// the rows behind them changed.
    pub fn reset(&mut self, count: usize) {
        self.batch_update(|cell| {
            cell.set_scroll_offset(0);
            cell.set_count(count);
            cell.notify_pending.set(true);
        });
        self.scroll_direction = None;
    }

    /// Batches multiple updates into a single notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    fn notify_now(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }
}

use crate::{VisibleWindow, WindowOptions, compute_window};

/// A single-entry cache in front of [`compute_window`].
///
/// The cached window is reused while `(offset, count)` compares equal to the previous call.
/// Replacing the options drops the cache.
#[derive(Clone, Debug)]
pub struct WindowMemo {
    options: WindowOptions,
    key: Option<(u64, usize)>,
    window: VisibleWindow,
    recomputations: u64,
}

impl WindowMemo {
    pub fn new(options: WindowOptions) -> Self {
        Self {
            options,
            key: None,
            window: VisibleWindow::EMPTY,
            recomputations: 0,
        }
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: WindowOptions) {
        if self.options == options {
            return;
        }
        self.options = options;
        self.invalidate();
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }

    pub fn window(&mut self, offset: u64, count: usize) -> VisibleWindow {
        let key = (offset, count);
        if self.key == Some(key) {
            return self.window;
        }
        self.window = compute_window(offset, count, &self.options);
        self.key = Some(key);
        self.recomputations = self.recomputations.saturating_add(1);
        vtrace!(
            offset,
            count,
            start_index = self.window.start_index,
            end_index = self.window.end_index,
            "WindowMemo: recomputed"
        );
        self.window
    }

    /// Number of times the window was actually recomputed (cache misses).
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}

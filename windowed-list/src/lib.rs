//! A headless windowing engine for fixed-row-height lists.
//!
//! For scroll throttling, observable viewport state and list controllers, see the
//! `windowed-list-adapter` crate.
//!
//! Given a scroll offset, a row height, a viewport height and a row count, this crate computes
//! the contiguous index range that must be materialized and the vertical offset that places it
//! inside a full-height scroll track. Nothing outside that range is touched.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the scroll offset (whole pixels)
//! - the row and viewport heights (via [`WindowOptions`])
//! - the dataset, held in an [`ItemCollection`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod collection;
pub mod dataset;
mod memo;
mod options;
mod types;
mod window;


#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "tracing")]
    pub use tracing;
}

pub use collection::ItemCollection;
pub use dataset::{DatasetSize, Post, Record};
pub use memo::WindowMemo;
pub use options::{CONTAINER_HEIGHT, DEFAULT_BUFFER, ITEM_HEIGHT, WindowOptions};
pub use types::{ScrollDirection, ViewportState, VisibleWindow};
pub use window::{compute_window, item_offset};

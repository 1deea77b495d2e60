//! Adapter utilities for the `windowed-list` crate.
//!
//! The `windowed-list` crate is UI-agnostic and only does the math. This crate provides the
//! small, framework-neutral pieces a host needs around it:
//!
//! - A leading-edge scroll throttle (one accepted event per frame)
//! - An observable viewport cell with synchronous subscriptions
//! - A list controller that ties dataset, viewport, throttle and memoized window together
//! - A pager for append-only feeds that load more rows at the end
//! - An idempotent registry for the stylesheets a host installs at startup
//!
//! Time is always supplied by the host as `now_ms`; nothing here spawns timers or threads.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
extern crate windowed_list;

mod cell;
mod controller;
mod feed;
mod style;
mod throttle;

#[cfg(test)]
mod tests;

pub use cell::{SubscriptionId, ViewportCell, ViewportListener};
pub use controller::{ListController, RenderInstruction};
pub use feed::{FeedPager, MAX_ITEMS, PAGE_SIZE, PageRequest, SENTINEL_THRESHOLD};
pub use style::{LOADING_SPINNER, StyleRegistry, StyleSheet};
pub use throttle::{FRAME_MS, LeadingEdgeThrottle, ThrottleState};

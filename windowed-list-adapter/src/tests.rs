use crate::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::vec::Vec;

use windowed_list::{
    DatasetSize, Post, Record, ViewportState, WindowOptions, compute_window, dataset,
};

fn demo_options() -> WindowOptions {
    WindowOptions::new(80, 600)
}

fn recording(c: &mut ListController<Record>) -> Arc<Mutex<Vec<ViewportState>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    c.subscribe(move |s| sink.lock().unwrap().push(*s));
    seen
}

#[test]
fn throttle_accepts_first_event_then_cools_down() {
    let mut t = LeadingEdgeThrottle::new();
    assert_eq!(t.state(), ThrottleState::Idle);
    assert_eq!(t.cooldown_ms(), FRAME_MS);

    assert!(t.accept(100));
    assert_eq!(t.state(), ThrottleState::Cooling { until_ms: 116 });
    assert!(!t.accept(101));
    assert!(!t.accept(115));

    assert!(!t.poll(115));
    assert!(t.poll(116));
    assert_eq!(t.state(), ThrottleState::Idle);
    assert!(!t.poll(200));

    assert!(t.accept(120));
    assert_eq!(t.accepted(), 2);
    assert_eq!(t.dropped(), 2);
}

#[test]
fn accept_fires_an_expired_cooldown_itself() {
    let mut t = LeadingEdgeThrottle::with_cooldown_ms(10);
    assert!(t.accept(0));
    // No poll in between: the deadline has passed, so the next event goes through.
    assert!(t.accept(10));
    assert!(!t.accept(19));
    assert!(t.accept(20));
}

#[test]
fn burst_within_one_frame_updates_once() {
    let mut c = ListController::with_dataset(DatasetSize::TenThousand, demo_options());
    let seen = recording(&mut c);

    let mut accepted = 0;
    for i in 0..100u64 {
        let now_ms = i * 16 / 100; // 0..=15
        if c.on_scroll(1_000 + i * 7, now_ms) {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 1);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].scroll_offset, 1_000);
    assert_eq!(c.throttle().dropped(), 99);
}

#[test]
fn events_spaced_beyond_cooldown_all_update() {
    let mut c = ListController::with_dataset(DatasetSize::TenThousand, demo_options());
    let seen = recording(&mut c);

    for i in 0..10u64 {
        assert!(c.on_scroll(500 * (i + 1), i * 20));
    }

    let offsets: Vec<u64> = seen.lock().unwrap().iter().map(|s| s.scroll_offset).collect();
    assert_eq!(offsets, (1..=10).map(|i| i * 500).collect::<Vec<_>>());
}

#[test]
fn dropped_events_are_not_replayed() {
    let mut c = ListController::with_dataset(DatasetSize::Thousand, demo_options());
    assert!(c.on_scroll(100, 0));
    assert!(!c.on_scroll(900, 8));

    assert!(c.tick(16));
    assert!(!c.is_disposed());
    // Leading edge only: the cooldown ending does not apply the last dropped value.
    assert_eq!(c.scroll_offset(), 100);
    assert_eq!(c.throttle_state(), ThrottleState::Idle);
}

#[test]
fn dispose_cancels_pending_cooldown() {
    let mut c = ListController::with_dataset(DatasetSize::Thousand, demo_options());
    let seen = recording(&mut c);

    assert!(c.on_scroll(400, 0));
    assert!(matches!(c.throttle_state(), ThrottleState::Cooling { .. }));

    c.dispose();
    assert!(c.is_disposed());
    assert_eq!(c.throttle_state(), ThrottleState::Disposed);

    assert!(!c.tick(1_000));
    assert!(!c.on_scroll(2_000, 1_000));
    assert_eq!(c.scroll_to_index(50), 400);
    assert_eq!(c.scroll_offset(), 400);
    assert_eq!(seen.lock().unwrap().len(), 1);
}

#[test]
fn render_at_top() {
    let mut c = ListController::with_dataset(DatasetSize::TenThousand, demo_options());
    let frame = c.render();
    assert_eq!(frame.window.start_index, 0);
    assert_eq!(frame.window.end_index, 9);
    assert_eq!(frame.window.offset_y, 0);
    assert_eq!(frame.items.len(), 9);
    assert_eq!(frame.total_height, 800_000);
}

#[test]
fn render_mid_row() {
    let mut c = ListController::with_dataset(DatasetSize::TenThousand, demo_options());
    assert!(c.on_scroll(805, 0));

    let frame = c.render();
    assert_eq!(frame.window.start_index, 10);
    assert_eq!(frame.window.end_index, 19);
    assert_eq!(frame.window.offset_y, 800);

    let ids: Vec<u64> = frame.items.iter().map(|r| r.id).collect();
    assert_eq!(ids, (11..=19).collect::<Vec<_>>());
}

#[test]
fn scroll_offsets_are_clamped_to_the_track() {
    let mut c = ListController::with_dataset(DatasetSize::TenThousand, demo_options());
    assert!(c.on_scroll(10_000_000, 0));
    assert_eq!(c.scroll_offset(), 799_400);

    let frame = c.render();
    assert_eq!(frame.window.end_index, 10_000);
    assert_eq!(frame.items.last().map(|r| r.id), Some(10_000));
}

#[test]
fn switching_dataset_resets_offset_atomically() {
    let mut c = ListController::with_dataset(DatasetSize::TenThousand, demo_options());
    assert!(c.on_scroll(5_000, 0));
    assert_eq!(c.render().window.start_index, 62);

    let opts = *c.options();
    let windows = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&windows);
    let seen = recording(&mut c);
    c.subscribe(move |s| {
        sink.lock()
            .unwrap()
            .push(compute_window(s.scroll_offset, s.count, &opts));
    });

    c.select_dataset(DatasetSize::Thousand);

    let seen = seen.lock().unwrap();
    assert_eq!(
        seen.as_slice(),
        &[ViewportState {
            scroll_offset: 0,
            count: 1_000,
        }]
    );
    assert!(
        !seen
            .iter()
            .any(|s| s.scroll_offset == 5_000 && s.count == 1_000)
    );

    let windows = windows.lock().unwrap();
    assert_eq!(windows.len(), 1);
    assert_eq!(windows[0].start_index, 0);
    assert_eq!(windows[0].end_index, 9);

    let frame = c.render();
    assert_eq!(frame.window.start_index, 0);
    assert_eq!(frame.items.first().map(|r| r.id), Some(1));
    assert_eq!(frame.total_height, 80_000);
    assert_eq!(c.items().len(), 1_000);
}

#[test]
fn replacing_with_same_length_dataset_still_notifies_once() {
    let mut c = ListController::new(dataset::generate(100), demo_options());
    let seen = recording(&mut c);
    assert_eq!(c.viewport_state(), ViewportState::new(100));

    let mut next = dataset::generate(100);
    next[0].name = "Renamed".into();
    c.replace_items(next);

    assert_eq!(seen.lock().unwrap().as_slice(), &[ViewportState::new(100)]);
    assert_eq!(c.render().items[0].name, "Renamed");
}

#[test]
fn replacing_with_empty_dataset_renders_nothing() {
    let mut c = ListController::with_dataset(DatasetSize::Thousand, demo_options());
    assert!(c.on_scroll(2_400, 0));

    c.replace_items(Vec::new());
    assert_eq!(c.viewport_state(), ViewportState::new(0));

    let frame = c.render();
    assert!(frame.window.is_empty());
    assert!(frame.items.is_empty());
    assert_eq!(frame.total_height, 0);

    assert!(c.on_scroll(500, 100));
    assert_eq!(c.scroll_offset(), 0);
}

#[test]
fn scroll_to_index_aligns_row_to_top() {
    let mut c = ListController::with_dataset(DatasetSize::TenThousand, demo_options());
    assert_eq!(c.scroll_to_index(20), 1_600);
    assert_eq!(c.render().window.start_index, 20);

    assert_eq!(c.scroll_to_index(usize::MAX), 799_400);
    // Programmatic scrolling bypasses the throttle.
    assert_eq!(c.throttle_state(), ThrottleState::Idle);
}

#[test]
fn set_options_reclamps_offset() {
    let mut c = ListController::with_dataset(DatasetSize::Thousand, demo_options());
    assert!(c.on_scroll(u64::MAX, 0));
    assert_eq!(c.scroll_offset(), 79_400);

    c.set_options(demo_options().with_container_height(1_000));
    assert_eq!(c.scroll_offset(), 79_000);
    assert_eq!(c.options().container_height, 1_000);
    assert_eq!(c.render().window.end_index, 1_000);
}

#[test]
fn custom_cooldown() {
    let mut c = ListController::new(dataset::generate(100), demo_options())
        .with_throttle(LeadingEdgeThrottle::with_cooldown_ms(50));
    assert!(c.on_scroll(80, 0));
    assert!(!c.on_scroll(160, 20));
    assert!(c.on_scroll(240, 50));
    assert_eq!(c.scroll_offset(), 240);
}

#[test]
fn swapping_throttle_after_dispose_stays_disposed() {
    let mut c = ListController::new(dataset::generate(100), demo_options());
    c.dispose();

    let mut c = c.with_throttle(LeadingEdgeThrottle::with_cooldown_ms(50));
    assert!(c.is_disposed());
    assert_eq!(c.throttle_state(), ThrottleState::Disposed);
    assert_eq!(c.throttle().cooldown_ms(), 50);
    assert!(!c.on_scroll(800, 0));
    assert_eq!(c.scroll_offset(), 0);
}

#[test]
fn cell_notifies_on_effective_changes_only() {
    let count = Arc::new(AtomicUsize::new(0));
    let hits = Arc::clone(&count);
    let mut cell = ViewportCell::new(ViewportState::new(10));
    let id = cell.subscribe(move |_| {
        hits.fetch_add(1, Ordering::Relaxed);
    });
    assert_eq!(cell.subscriber_count(), 1);

    cell.set_scroll_offset(0);
    cell.set_count(10);
    assert_eq!(count.load(Ordering::Relaxed), 0);

    cell.set_scroll_offset(40);
    assert_eq!(count.load(Ordering::Relaxed), 1);
    assert_eq!(cell.scroll_direction(), Some(windowed_list::ScrollDirection::Forward));

    cell.set_scroll_offset(20);
    assert_eq!(cell.scroll_direction(), Some(windowed_list::ScrollDirection::Backward));

    assert!(cell.unsubscribe(id));
    assert!(!cell.unsubscribe(id));
    cell.set_scroll_offset(60);
    assert_eq!(count.load(Ordering::Relaxed), 2);
}

#[test]
fn cell_batch_update_coalesces() {
    let count = Arc::new(AtomicUsize::new(0));
    let hits = Arc::clone(&count);
    let mut cell = ViewportCell::new(ViewportState::new(10));
    cell.subscribe(move |_| {
        hits.fetch_add(1, Ordering::Relaxed);
    });

    cell.batch_update(|c| {
        c.set_scroll_offset(10);
        c.set_scroll_offset(20);
        c.set_count(50);
    });
    assert_eq!(count.load(Ordering::Relaxed), 1);
    assert_eq!(
        cell.get(),
        ViewportState {
            scroll_offset: 20,
            count: 50,
        }
    );

    cell.batch_update(|_| {});
    assert_eq!(count.load(Ordering::Relaxed), 1);

    cell.reset(5);
    assert_eq!(count.load(Ordering::Relaxed), 2);
    assert_eq!(cell.get(), ViewportState::new(5));
    assert_eq!(cell.scroll_direction(), None);
}

#[test]
fn cell_reset_notifies_even_when_unchanged() {
    let count = Arc::new(AtomicUsize::new(0));
    let hits = Arc::clone(&count);
    let mut cell = ViewportCell::new(ViewportState::new(10));
    cell.subscribe(move |_| {
        hits.fetch_add(1, Ordering::Relaxed);
    });

    cell.reset(10);
    assert_eq!(count.load(Ordering::Relaxed), 1);
    assert_eq!(cell.get(), ViewportState::new(10));

    // Nested inside a batch it still coalesces into the outer notification.
    cell.batch_update(|c| {
        c.reset(10);
        c.set_scroll_offset(40);
    });
    assert_eq!(count.load(Ordering::Relaxed), 2);
}

#[test]
fn feed_pager_loads_one_page_at_a_time() {
    let mut pager = FeedPager::new();
    let req = pager.request_next().unwrap();
    assert_eq!(
        req,
        PageRequest {
            page: 1,
            page_size: PAGE_SIZE,
        }
    );
    assert!(pager.is_loading());
    assert_eq!(pager.request_next(), None);
    assert_eq!(pager.on_sentinel(1.0), None);

    pager.complete(PAGE_SIZE);
    assert!(!pager.is_loading());
    assert_eq!(pager.page(), 2);
    assert_eq!(pager.loaded(), PAGE_SIZE);
}

#[test]
fn feed_pager_stops_at_max_items() {
    let mut pager = FeedPager::new();
    let mut rows: Vec<Post> = Vec::new();
    while let Some(req) = pager.on_sentinel(0.75) {
        let page = dataset::page(req.page, req.page_size);
        let n = page.len();
        rows.extend(page);
        pager.complete(n);
    }

    assert_eq!(rows.len(), MAX_ITEMS);
    assert!(!pager.has_more());
    assert_eq!(pager.page(), 11);
    let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=100).collect::<Vec<_>>());
}

#[test]
fn feed_pager_threshold_and_short_pages() {
    let mut pager = FeedPager::new().with_page_size(20).with_max_items(1_000);
    assert_eq!(pager.on_sentinel(SENTINEL_THRESHOLD - 0.1), None);
    assert!(!pager.is_loading());

    assert_eq!(pager.on_sentinel(f32::NAN), None);
    assert!(!pager.is_loading());

    assert!(pager.on_sentinel(SENTINEL_THRESHOLD).is_some());
    pager.complete(7);
    assert!(!pager.has_more());
    assert_eq!(pager.request_next(), None);
}

#[test]
fn feed_pager_failure_and_reset() {
    let mut pager = FeedPager::new().with_threshold(0.0);
    assert_eq!(pager.on_sentinel(0.0).map(|r| r.page), Some(1));
    pager.fail();
    assert!(!pager.is_loading());
    assert_eq!(pager.request_next().map(|r| r.page), Some(1));
    pager.complete(PAGE_SIZE);

    // A stray completion is ignored.
    pager.complete(PAGE_SIZE);
    assert_eq!(pager.loaded(), PAGE_SIZE);

    pager.reset();
    assert_eq!(pager, FeedPager::new().with_threshold(0.0));
    assert_eq!(pager.page_size(), PAGE_SIZE);
}

#[test]
fn style_registration_is_idempotent() {
    let mut styles = StyleRegistry::new();
    assert!(styles.is_empty());
    assert!(styles.register(LOADING_SPINNER));
    assert!(!styles.register(LOADING_SPINNER));
    assert!(!styles.register(StyleSheet::new("loading-spinner", "/* replaced */")));
    assert_eq!(styles.len(), 1);
    assert_eq!(styles.sheets()[0], LOADING_SPINNER);
    assert!(styles.sheets()[0].body.contains("@keyframes spin"));

    assert!(styles.register(StyleSheet::new("row", ".row { height: 80px; }")));
    assert!(styles.contains("row"));
    assert_eq!(styles.len(), 2);
}

use windowed_list::{DatasetSize, WindowOptions};
use windowed_list_adapter::{LOADING_SPINNER, ListController, StyleRegistry};

fn main() {
    // Startup: install host styles once.
    let mut styles = StyleRegistry::new();
    styles.register(LOADING_SPINNER);
    println!("styles={:?}", styles.sheets().iter().map(|s| &s.name).collect::<Vec<_>>());

    let mut c = ListController::with_dataset(DatasetSize::TenThousand, WindowOptions::default());
    c.subscribe(|s| println!("  viewport -> offset={} count={}", s.scroll_offset, s.count));

    // Simulated wheel: a raw event every 4 ms, the adapter ticks every 16 ms frame.
    let mut offset = 0u64;
    for now_ms in (0..200u64).step_by(4) {
        offset += 37;
        c.on_scroll(offset, now_ms);
        if now_ms % 16 == 0 {
            c.tick(now_ms);
            let frame = c.render();
            println!(
                "t={now_ms} window={}..{} offset_y={} rows={}",
                frame.window.start_index,
                frame.window.end_index,
                frame.window.offset_y,
                frame.items.len()
            );
        }
    }
    println!(
        "accepted={} dropped={}",
        c.throttle().accepted(),
        c.throttle().dropped()
    );

    c.select_dataset(DatasetSize::Thousand);
    println!("after reset: {:?}", c.render().window);

    c.dispose();
    println!("disposed: on_scroll accepted={}", c.on_scroll(400, 1_000));
}

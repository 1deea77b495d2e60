use windowed_list::{ItemCollection, WindowMemo, WindowOptions, compute_window, dataset};

fn main() {
    let opts = WindowOptions::new(80, 600);
    let items = ItemCollection::new(dataset::generate(10_000));

    let w = compute_window(805, items.len(), &opts);
    println!("total_height={}", opts.total_height(items.len()));
    println!("window={w:?}");
    for r in items.slice(&w) {
        println!("  #{} {} <{}> {} {}", r.id, r.name, r.email, r.age, r.city);
    }

    // Repeated queries for the same (offset, count) reuse the cached window.
    let mut memo = WindowMemo::new(opts);
    for off in [0, 0, 805, 805, 805, 1_600] {
        memo.window(off, items.len());
    }
    println!("recomputations={}", memo.recomputations());
}

use windowed_list::{Post, dataset};
use windowed_list_adapter::FeedPager;

fn main() {
    // Example: an append-only feed. The host reports how much of the sentinel row below the last
    // post is visible; the pager decides whether to fetch and which page.
    let mut pager = FeedPager::new();
    let mut posts: Vec<Post> = Vec::new();

    let mut visible = 0.0f32;
    while pager.has_more() {
        visible = (visible + 0.3) % 1.2;
        let Some(req) = pager.on_sentinel(visible) else {
            continue;
        };
        let page = dataset::page(req.page, req.page_size);
        let n = page.len();
        posts.extend(page);
        pager.complete(n);
        println!("page={} loaded={} has_more={}", req.page, pager.loaded(), pager.has_more());
    }

    println!("done: {} posts, last={:?}", posts.len(), posts.last().map(|p| p.id));
}

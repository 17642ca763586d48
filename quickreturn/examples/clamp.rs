use quickreturn::{
    ClampPolicy, PlacementInput, PlacementPolicy, ScrollSample, ScrollTracker, raw_header_y,
};

fn main() {
    // Example: the stateless clamp policy pinning a header between its resting
    // position and the viewport top, fed by tracker-derived scroll positions.
    let heights = [80u32, 120, 120, 120, 120, 120, 120, 120];
    let mut tracker = ScrollTracker::new();
    tracker.rebuild(heights.len(), |i| heights[i]);

    let viewport = 400;
    let placeholder_top = 80;
    let mut policy = ClampPolicy::new();

    for (index, top) in [(0usize, 0i32), (0, -40), (1, -10), (2, -60), (3, -100)] {
        let sample = ScrollSample {
            first_visible_index: index,
            first_visible_top: top,
        };
        let scroll_y = tracker.scroll_y(sample).unwrap();
        let raw_y = raw_header_y(placeholder_top, tracker.total_height(), viewport, scroll_y);
        let placement = policy.on_scroll(PlacementInput {
            raw_y,
            placeholder_top,
            current_translation: 0,
        });
        println!(
            "scroll_y={scroll_y} raw_y={raw_y} translation={:?}",
            placement.translation
        );
    }
}

use quickreturn::ScrollSample;
use quickreturn_adapter::{
    HeaderViews, QuickReturnController, TranslationSink, TweenAnimator, ViewId,
};

struct PrintSink;

impl TranslationSink for PrintSink {
    fn set_translation_y(&mut self, y: i32) {
        println!("  translation_y={y}");
    }
}

fn main() {
    // Example: a full quick-return session driven by the tick-based animator.
    //
    // A host would:
    // - bind the sticky/placeholder views once, after layout
    // - forward every scroll notification as a ScrollSample
    // - tick the animator in its frame loop and report the final frame back
    let views = HeaderViews::bind(Some(ViewId(1)), Some(ViewId(2)), &[ViewId(1), ViewId(2)])
        .expect("valid header views");
    let mut c = QuickReturnController::quick_return(views, 100);
    c.on_global_layout(100, 400, 40, |_| 100);

    let mut sink = PrintSink;
    let mut animator = TweenAnimator::new();

    // Scroll down past the header, then back up until the reveal triggers.
    let samples = [(0usize, 0i32), (1, -60), (3, -20), (4, -80), (4, -30), (4, -40)];
    let mut now = 0u64;
    for (index, top) in samples {
        now += 16;
        c.on_scroll(
            ScrollSample {
                first_visible_index: index,
                first_visible_top: top,
            },
            100,
            &mut sink,
            &mut animator,
        )
        .expect("sample within the offset table");
        println!("t={now} phase={:?}", c.policy().phase());
    }

    while let Some(frame) = animator.tick(now) {
        now += 16;
        sink.set_translation_y(frame.y);
        if frame.done {
            c.on_animation_end(&mut sink, &mut animator);
        }
    }

    println!(
        "done: phase={:?} min_raw_y={}",
        c.policy().phase(),
        c.policy().min_raw_y()
    );
}

use quickreturn::{
    IndexOutOfRange, Placement, PlacementInput, PlacementPolicy, QuickReturnPolicy, ScrollSample,
    ScrollTracker, raw_header_y,
};

use crate::HeaderViews;

/// Receives the sticky view's vertical translation, once per processed scroll
/// sample (and once per animation frame, if the host drives frames through the
/// same sink).
pub trait TranslationSink {
    fn set_translation_y(&mut self, y: i32);
}

/// Receives tween-start requests.
///
/// The host must report completion back through
/// [`QuickReturnController::on_animation_end`] exactly once per started tween,
/// on the same execution context that delivers scroll samples. [`crate::TweenAnimator`]
/// is a ready-made implementation for tick-driven hosts.
pub trait AnimationDriver {
    fn start(&mut self, from: i32, to: i32, duration_ms: u64);
}

/// Wires a scroll tracker and a placement policy to a host's view layer.
///
/// This type does not hold any UI objects. The embedding drives it by calling:
/// - [`Self::on_global_layout`] once the list/header views are laid out (and
///   again whenever the item set or any item height may have changed)
/// - [`Self::on_scroll`] on every scroll notification
/// - [`Self::on_animation_end`] when a started tween finishes
///
/// Until the first layout call, scroll samples are silently skipped: nothing
/// is emitted, by design.
#[derive(Clone, Debug)]
pub struct QuickReturnController<P> {
    tracker: ScrollTracker,
    policy: P,
    views: HeaderViews,
    content_height: i32,
    viewport_height: i32,
    last_translation: i32,
}

impl QuickReturnController<QuickReturnPolicy> {
    /// A controller running the four-state quick-return policy.
    ///
    /// `header_height` may be 0 until the sticky view is measured; pass the
    /// real height via [`Self::on_global_layout`] once known.
    pub fn quick_return(views: HeaderViews, header_height: i32) -> Self {
        Self::new(views, QuickReturnPolicy::new(header_height))
    }
}

impl QuickReturnController<quickreturn::ClampPolicy> {
    /// A controller running the stateless clamp policy (no animation).
    pub fn clamping(views: HeaderViews) -> Self {
        Self::new(views, quickreturn::ClampPolicy::new())
    }
}

impl<P: PlacementPolicy> QuickReturnController<P> {
    pub fn new(views: HeaderViews, policy: P) -> Self {
        Self {
            tracker: ScrollTracker::new(),
            policy,
            views,
            content_height: 0,
            viewport_height: 0,
            last_translation: 0,
        }
    }

    pub fn views(&self) -> HeaderViews {
        self.views
    }

    pub fn tracker(&self) -> &ScrollTracker {
        &self.tracker
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// True once [`Self::on_global_layout`] has run; before that, scroll
    /// samples are no-ops.
    pub fn is_ready(&self) -> bool {
        self.tracker.is_computed()
    }

    pub fn content_height(&self) -> i32 {
        self.content_height
    }

    pub fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    /// The translation last pushed to the sink by a policy placement.
    ///
    /// Tween frames do not feed back into this value: the reveal trigger
    /// relies on the translation staying at its pre-animation value while a
    /// tween plays, the way view-level animations leave the underlying
    /// property alone.
    pub fn last_translation(&self) -> i32 {
        self.last_translation
    }

    /// Rebuilds the offset table and caches the measured geometry.
    ///
    /// Call on the first global layout and again whenever the item set or any
    /// item height may have changed. `height_of(i)` must return item `i`'s
    /// measured pixel height.
    ///
    /// Known limitation: a relayout does not cancel an in-flight tween; the
    /// completion that eventually arrives is applied to the new geometry.
    pub fn on_global_layout(
        &mut self,
        header_height: i32,
        viewport_height: i32,
        item_count: usize,
        height_of: impl FnMut(usize) -> u32,
    ) {
        self.tracker.rebuild(item_count, height_of);
        self.content_height = self.tracker.total_height();
        self.viewport_height = viewport_height;
        self.policy.on_header_resized(header_height);
        qdebug!(
            header_height,
            viewport_height,
            item_count,
            content_height = self.content_height,
            "QuickReturnController::on_global_layout"
        );
    }

    /// Processes one scroll notification.
    ///
    /// The host builds `sample` from its scroll callback (first visible index
    /// plus that item's top edge in viewport coordinates) and passes the
    /// placeholder's top edge within the non-scrolling container.
    ///
    /// Before the first layout this is a silent no-op. An out-of-table index
    /// is a caller ordering bug and is surfaced as [`IndexOutOfRange`].
    pub fn on_scroll(
        &mut self,
        sample: ScrollSample,
        placeholder_top: i32,
        sink: &mut impl TranslationSink,
        driver: &mut impl AnimationDriver,
    ) -> Result<(), IndexOutOfRange> {
        if !self.tracker.is_computed() {
            return Ok(());
        }
        let scroll_y = self.tracker.scroll_y(sample)?;
        let raw_y = raw_header_y(
            placeholder_top,
            self.content_height,
            self.viewport_height,
            scroll_y,
        );
        qtrace!(scroll_y, raw_y, "QuickReturnController::on_scroll");
        let placement = self.policy.on_scroll(PlacementInput {
            raw_y,
            placeholder_top,
            current_translation: self.last_translation,
        });
        self.apply(placement, sink, driver);
        Ok(())
    }

    /// Reports that the tween last handed to the [`AnimationDriver`] finished.
    ///
    /// Must be delivered exactly once per started tween, serialized with
    /// scroll delivery.
    pub fn on_animation_end(
        &mut self,
        sink: &mut impl TranslationSink,
        driver: &mut impl AnimationDriver,
    ) {
        let placement = self.policy.on_tween_done();
        self.apply(placement, sink, driver);
    }

    fn apply(
        &mut self,
        placement: Placement,
        sink: &mut impl TranslationSink,
        driver: &mut impl AnimationDriver,
    ) {
        if let Some(y) = placement.translation {
            self.last_translation = y;
            sink.set_translation_y(y);
        }
        if let Some(anim) = placement.animation {
            driver.start(anim.from, anim.to, anim.duration_ms);
        }
    }
}

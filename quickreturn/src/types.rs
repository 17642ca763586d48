/// One scroll notification, as reported by the list layer.
///
/// Produced once per scroll frame and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSample {
    /// Index of the topmost visible item (placeholder/header rows occupy low
    /// indexes).
    pub first_visible_index: usize,
    /// Top edge of that item relative to the viewport top, in pixels.
    /// 0 means flush; negative means the item is partially scrolled out.
    pub first_visible_top: i32,
}

/// Per-sample input handed to a [`crate::PlacementPolicy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementInput {
    /// The sticky header's natural position: where it would sit if it scrolled
    /// linearly with content. Negative once scrolled past the viewport top.
    pub raw_y: i32,
    /// The placeholder's top edge in viewport coordinates (the header's
    /// unscrolled resting position).
    pub placeholder_top: i32,
    /// The sticky view's current vertical translation, as last applied through
    /// the translation sink.
    pub current_translation: i32,
}

/// A tween the policy wants started on the sticky view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationRequest {
    pub from: i32,
    pub to: i32,
    pub duration_ms: u64,
}

/// What the host should apply after one policy step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// New vertical translation for the sticky view, if one was dispatched.
    pub translation: Option<i32>,
    /// A tween to start, if any. At most one is ever in flight per policy.
    pub animation: Option<AnimationRequest>,
}

impl Placement {
    pub fn is_empty(&self) -> bool {
        self.translation.is_none() && self.animation.is_none()
    }
}

use crate::machine::{self, Event, MachineState, Phase};
use crate::{Placement, PlacementInput};

/// Clamps an absolute scroll position to the scrollable range
/// `[0, max(0, content_height - viewport_height)]`.
pub fn clamp_scroll_y(content_height: i32, viewport_height: i32, scroll_y: i32) -> i32 {
    let max_scroll = content_height.saturating_sub(viewport_height).max(0);
    scroll_y.clamp(0, max_scroll)
}

/// The sticky header's natural position for a given scroll position: the
/// placeholder's top minus the (clamped) scroll distance.
pub fn raw_header_y(
    placeholder_top: i32,
    content_height: i32,
    viewport_height: i32,
    scroll_y: i32,
) -> i32 {
    placeholder_top.saturating_sub(clamp_scroll_y(content_height, viewport_height, scroll_y))
}

/// Decides where the sticky header sits for each scroll sample.
///
/// Policies are synchronous transformers: they hold no UI objects and perform
/// no I/O. The host applies each returned [`Placement`] to its view layer and
/// reports tween completion back via [`Self::on_tween_done`].
pub trait PlacementPolicy {
    /// Processes one scroll sample.
    fn on_scroll(&mut self, input: PlacementInput) -> Placement;

    /// Notifies the policy that the tween it requested has finished.
    fn on_tween_done(&mut self) -> Placement;

    /// Called when the sticky view's measured height becomes known or changes.
    fn on_header_resized(&mut self, _header_height: i32) {}
}

/// The stateless baseline: pins the header between 0 and the placeholder's
/// resting position, with no memory and no animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClampPolicy;

impl ClampPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl PlacementPolicy for ClampPolicy {
    fn on_scroll(&mut self, input: PlacementInput) -> Placement {
        let translation = if input.raw_y < 0 {
            0
        } else if input.raw_y < input.placeholder_top {
            input.raw_y
        } else {
            input.placeholder_top
        };
        Placement {
            translation: Some(translation),
            animation: None,
        }
    }

    fn on_tween_done(&mut self) -> Placement {
        Placement::default()
    }
}

/// The four-state policy: tracks scroll direction through a low-water mark
/// and slides the header back into view with a 250 ms tween when the user
/// scrolls upward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuickReturnPolicy {
    header_height: i32,
    state: MachineState,
}

impl QuickReturnPolicy {
    /// `header_height` may be 0 until the sticky view is first laid out; the
    /// off-screen guards then degenerate to `raw_y < 0`.
    pub fn new(header_height: i32) -> Self {
        Self {
            header_height,
            state: MachineState::default(),
        }
    }

    pub fn header_height(&self) -> i32 {
        self.header_height
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn min_raw_y(&self) -> i32 {
        self.state.min_raw_y
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Snapshot of the full machine state, replayable via [`Self::restore`].
    pub fn state(&self) -> MachineState {
        self.state
    }

    pub fn restore(&mut self, state: MachineState) {
        self.state = state;
    }
}

impl PlacementPolicy for QuickReturnPolicy {
    fn on_scroll(&mut self, input: PlacementInput) -> Placement {
        let (next, out) = machine::step(
            self.state,
            Event::Scroll {
                raw_y: input.raw_y,
                current_translation: input.current_translation,
            },
            self.header_height,
        );
        qtrace!(
            raw_y = input.raw_y,
            phase = ?next.phase,
            min_raw_y = next.min_raw_y,
            "QuickReturnPolicy::on_scroll"
        );
        self.state = next;
        out.into()
    }

    fn on_tween_done(&mut self) -> Placement {
        let (next, out) = machine::step(self.state, Event::TweenDone, self.header_height);
        qtrace!(phase = ?next.phase, "QuickReturnPolicy::on_tween_done");
        self.state = next;
        out.into()
    }

    fn on_header_resized(&mut self, header_height: i32) {
        self.header_height = header_height;
    }
}

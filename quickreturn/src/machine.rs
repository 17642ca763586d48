//! The four-state quick-return machine.
//!
//! The machine is an explicit transition function over immutable state: no
//! hidden fields, no stored callbacks. Animation completion is fed back in as
//! its own input event ([`Event::TweenDone`]) rather than mutating state from
//! a side channel, which keeps every transition independently testable.

use crate::{AnimationRequest, Placement};

/// Duration of the reveal/hide tween, in milliseconds.
pub const RETURN_TWEEN_MS: u64 = 250;

/// Slack, in pixels, below the low-water mark before an expanded header hides
/// again.
pub const HIDE_HYSTERESIS: i32 = 2;

/// Where the sticky header currently lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Tracking the placeholder; fully or partially visible.
    #[default]
    OnScreen,
    /// Scrolled out above the viewport.
    OffScreen,
    /// The user reversed direction; the header is a candidate for a reveal.
    Returning,
    /// Pinned at the viewport top after a reveal.
    Expanded,
}

/// The tween currently in flight, plus the data its completion commits.
///
/// Doubles as the re-entrancy guard: while this is `Some`, no second tween is
/// ever requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActiveTween {
    /// Slide down into view. Completion expands the header and re-anchors
    /// `min_raw_y` to the raw position sampled when the tween started.
    Reveal { raw_y_at_start: i32 },
    /// Slide up out of view. Completion parks the header off screen.
    Hide,
}

/// Complete machine state. `Copy`, so steps can be replayed and snapshotted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MachineState {
    pub phase: Phase,
    /// Running low-water mark of `raw_y`, the anchor for return/hide
    /// decisions.
    pub min_raw_y: i32,
    pub tween: Option<ActiveTween>,
}

impl Default for MachineState {
    fn default() -> Self {
        Self {
            phase: Phase::OnScreen,
            min_raw_y: 0,
            tween: None,
        }
    }
}

impl MachineState {
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }
}

/// An input to the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A scroll sample: the header's natural position plus its currently
    /// applied translation.
    Scroll {
        raw_y: i32,
        current_translation: i32,
    },
    /// The in-flight tween finished. Must be delivered exactly once per
    /// started tween, on the same execution context as scroll samples.
    TweenDone,
}

/// What one step wants the host to do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepOutput {
    /// Scroll events always dispatch a translation; completions never do.
    pub translation: Option<i32>,
    pub start: Option<AnimationRequest>,
}

impl From<StepOutput> for Placement {
    fn from(out: StepOutput) -> Self {
        Placement {
            translation: out.translation,
            animation: out.start,
        }
    }
}

/// Advances the machine by one event.
///
/// `header_height` is the sticky view's measured pixel height; 0 (not yet
/// measured) degenerates the off-screen guards to `raw_y < 0`, which is
/// accepted behavior rather than an error.
pub fn step(state: MachineState, event: Event, header_height: i32) -> (MachineState, StepOutput) {
    match event {
        Event::Scroll {
            raw_y,
            current_translation,
        } => step_scroll(state, raw_y, current_translation, header_height),
        Event::TweenDone => step_tween_done(state),
    }
}

fn step_scroll(
    state: MachineState,
    raw_y: i32,
    current_translation: i32,
    header_height: i32,
) -> (MachineState, StepOutput) {
    let mut next = state;
    let mut translation = 0i32;
    let mut start = None;

    match state.phase {
        Phase::OnScreen => {
            if raw_y < -header_height {
                next.phase = Phase::OffScreen;
                next.min_raw_y = raw_y;
            }
            translation = raw_y;
        }
        Phase::OffScreen => {
            if raw_y <= state.min_raw_y {
                next.min_raw_y = raw_y;
            } else {
                next.phase = Phase::Returning;
            }
            translation = raw_y;
        }
        Phase::Returning => {
            // `translation` is still 0 when the first and third guards run,
            // so they can never fire. They are kept in guard order because
            // the shipped behavior depends on the reveal branch below being
            // reachable; see DESIGN.md ("dead guards").
            if translation > 0 {
                translation = 0;
                next.min_raw_y = raw_y.saturating_sub(header_height);
            } else if raw_y > 0 {
                next.phase = Phase::OnScreen;
                translation = raw_y;
            } else if translation < -header_height {
                next.phase = Phase::OffScreen;
                next.min_raw_y = raw_y;
            } else if current_translation != 0 && state.tween.is_none() {
                next.tween = Some(ActiveTween::Reveal {
                    raw_y_at_start: raw_y,
                });
                start = Some(AnimationRequest {
                    from: -header_height,
                    to: 0,
                    duration_ms: RETURN_TWEEN_MS,
                });
            }
        }
        Phase::Expanded => {
            if raw_y < state.min_raw_y.saturating_sub(HIDE_HYSTERESIS) && state.tween.is_none() {
                next.tween = Some(ActiveTween::Hide);
                start = Some(AnimationRequest {
                    from: 0,
                    to: -header_height,
                    duration_ms: RETURN_TWEEN_MS,
                });
            } else if translation > 0 {
                // Unreachable for the same reason as in Returning.
                translation = 0;
                next.min_raw_y = raw_y.saturating_sub(header_height);
            } else if raw_y > 0 {
                next.phase = Phase::OnScreen;
                translation = raw_y;
            } else if translation < -header_height {
                next.phase = Phase::OffScreen;
                next.min_raw_y = raw_y;
            } else {
                next.min_raw_y = raw_y;
            }
        }
    }

    // The dispatched translation is emitted unconditionally, independent of
    // which branch ran.
    (
        next,
        StepOutput {
            translation: Some(translation),
            start,
        },
    )
}

fn step_tween_done(state: MachineState) -> (MachineState, StepOutput) {
    let mut next = state;
    match state.tween {
        Some(ActiveTween::Reveal { raw_y_at_start }) => {
            next.tween = None;
            next.min_raw_y = raw_y_at_start;
            next.phase = Phase::Expanded;
        }
        Some(ActiveTween::Hide) => {
            next.tween = None;
            next.phase = Phase::OffScreen;
        }
        // A completion with nothing in flight is ignored.
        None => {}
    }
    (next, StepOutput::default())
}

//! A headless quick-return header engine for scrolling lists.
//!
//! For host-level wiring (config validation, tween driving), see the
//! `quickreturn-adapter` crate.
//!
//! "Quick return" is the behavior where a secondary header sticks, hides, and
//! slides back into view depending on scroll direction and position. This
//! crate implements the two small state machines behind it:
//!
//! - [`ScrollTracker`]: converts "first visible item + its top offset" into an
//!   absolute scroll position, using a cumulative offset table over measured
//!   item heights.
//! - [`PlacementPolicy`] implementations: a stateless clamp ([`ClampPolicy`])
//!   and a four-state machine with a tween-based reveal ([`QuickReturnPolicy`]).
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - per-item measured heights
//! - scroll samples (first visible index + pixel offsets)
//! - a translation sink and an animation driver for the sticky view
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod machine;
mod offsets;
mod policy;
mod types;

#[cfg(test)]
mod tests;

pub use machine::{
    ActiveTween, Event, MachineState, Phase, StepOutput, HIDE_HYSTERESIS, RETURN_TWEEN_MS, step,
};
pub use offsets::{IndexOutOfRange, ScrollTracker};
pub use policy::{ClampPolicy, PlacementPolicy, QuickReturnPolicy, clamp_scroll_y, raw_header_y};
pub use types::{AnimationRequest, Placement, PlacementInput, ScrollSample};

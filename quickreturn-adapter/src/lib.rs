//! Host-facing adapter utilities for the `quickreturn` crate.
//!
//! The `quickreturn` crate is UI-agnostic and focuses on the core math and
//! state machines. This crate provides the plumbing a real embedding needs:
//!
//! - One-time binding/validation of the sticky and placeholder view handles
//! - A controller that turns layout + scroll notifications into translation
//!   and animation-start calls
//! - A tween helper that can stand in for a platform animation system
//!
//! This crate is intentionally framework-agnostic (no toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod controller;
mod tween;


pub use config::{ConfigError, HeaderViews, ViewId};
pub use controller::{AnimationDriver, QuickReturnController, TranslationSink};
pub use tween::{Easing, Tween, TweenAnimator, TweenFrame};

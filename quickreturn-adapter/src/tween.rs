use quickreturn::AnimationRequest;

use crate::AnimationDriver;

/// A small tween over signed translation space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: i32,
    pub to: i32,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: i32, to: i32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> i32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);

        let from = self.from as f32;
        let to = self.to as f32;
        (from + (to - from) * eased) as i32
    }

    /// Re-aims the tween at a new target, starting from the current sample.
    pub fn retarget(&mut self, now_ms: u64, new_to: i32, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    /// Closest match for a platform accelerate/decelerate interpolator.
    #[default]
    SmoothStep,
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}

/// One animation frame produced by [`TweenAnimator::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TweenFrame {
    pub y: i32,
    /// Set on the final frame, exactly once per started tween. The host must
    /// forward it to `QuickReturnController::on_animation_end`.
    pub done: bool,
}

/// An [`AnimationDriver`] for tick-driven hosts.
///
/// `start` only latches the request; the tween is stamped with the clock of
/// the next [`Self::tick`] call, so the animator needs no clock of its own. A
/// second `start` replaces the pending request — the placement policies never
/// issue one while a tween is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TweenAnimator {
    pending: Option<AnimationRequest>,
    tween: Option<Tween>,
    easing: Easing,
}

impl TweenAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_easing(easing: Easing) -> Self {
        Self {
            easing,
            ..Self::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some() || self.tween.is_some()
    }

    /// Drops any pending or running tween without producing a final frame.
    ///
    /// The policy that started the tween still expects a completion; prefer
    /// letting tweens finish unless the whole controller is being torn down.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.tween = None;
    }

    /// Advances the animator. Returns the frame to present, or `None` when
    /// idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<TweenFrame> {
        if let Some(req) = self.pending.take() {
            self.tween = Some(Tween::new(
                req.from,
                req.to,
                now_ms,
                req.duration_ms,
                self.easing,
            ));
        }
        let tween = self.tween?;
        let y = tween.sample(now_ms);
        let done = tween.is_done(now_ms);
        if done {
            self.tween = None;
        }
        Some(TweenFrame { y, done })
    }
}

impl AnimationDriver for TweenAnimator {
    fn start(&mut self, from: i32, to: i32, duration_ms: u64) {
        self.pending = Some(AnimationRequest {
            from,
            to,
            duration_ms,
        });
    }
}

use crate::*;

use alloc::string::ToString;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_i32(&mut self, start: i32, end_exclusive: i32) -> i32 {
        debug_assert!(start < end_exclusive);
        let span = (end_exclusive as i64 - start as i64) as u64;
        (start as i64 + (self.next_u64() % span) as i64) as i32
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as u32
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

fn tracker_for(heights: &[u32]) -> ScrollTracker {
    let mut t = ScrollTracker::new();
    t.rebuild(heights.len(), |i| heights[i]);
    t
}

#[test]
fn offset_table_matches_prefix_sums() {
    let mut rng = Lcg::new(7);
    for _ in 0..50 {
        let count = rng.gen_range_u32(0, 40) as usize;
        let heights: Vec<u32> = (0..count).map(|_| rng.gen_range_u32(0, 300)).collect();
        let t = tracker_for(&heights);

        assert_eq!(t.len(), count);
        let mut sum = 0i32;
        for (i, &h) in heights.iter().enumerate() {
            assert_eq!(t.offset_of(i).unwrap(), sum);
            sum += h as i32;
        }
        assert_eq!(t.total_height(), sum);
        if count > 0 {
            assert_eq!(t.offset_of(0).unwrap(), 0);
        }
    }
}

#[test]
fn tracker_starts_uncomputed() {
    let t = ScrollTracker::new();
    assert!(!t.is_computed());
    assert!(t.is_empty());
    assert_eq!(
        t.offset_of(0),
        Err(IndexOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn empty_rebuild_is_computed_with_zero_height() {
    let mut t = ScrollTracker::new();
    t.rebuild(0, |_| unreachable!());
    assert!(t.is_computed());
    assert!(t.is_empty());
    assert_eq!(t.total_height(), 0);
}

#[test]
fn rebuild_is_idempotent_for_unchanged_heights() {
    let heights = [10u32, 20, 30];
    let mut t = tracker_for(&heights);
    let before: Vec<i32> = (0..3).map(|i| t.offset_of(i).unwrap()).collect();
    t.rebuild(heights.len(), |i| heights[i]);
    let after: Vec<i32> = (0..3).map(|i| t.offset_of(i).unwrap()).collect();
    assert_eq!(before, after);
}

#[test]
fn scroll_y_is_offset_minus_item_top() {
    let t = tracker_for(&[10, 20, 30, 40]);
    // Item 2 starts at 30; its top is 5 px above the viewport top.
    let sample = ScrollSample {
        first_visible_index: 2,
        first_visible_top: -5,
    };
    assert_eq!(t.scroll_y(sample).unwrap(), 35);
    // Flush top edge.
    let flush = ScrollSample {
        first_visible_index: 2,
        first_visible_top: 0,
    };
    assert_eq!(t.scroll_y(flush).unwrap(), 30);
    // Same inputs, same output.
    assert_eq!(t.scroll_y(sample), t.scroll_y(sample));
}

#[test]
fn scroll_y_out_of_range_is_an_error() {
    let t = tracker_for(&[10, 20]);
    let err = t
        .scroll_y(ScrollSample {
            first_visible_index: 2,
            first_visible_top: 0,
        })
        .unwrap_err();
    assert_eq!(err, IndexOutOfRange { index: 2, len: 2 });
    assert!(err.to_string().contains("index 2"));
}

#[test]
fn clamp_scroll_y_stays_in_range() {
    let mut rng = Lcg::new(11);
    for _ in 0..200 {
        let content = rng.gen_range_i32(0, 100_000);
        let viewport = rng.gen_range_i32(0, 5_000);
        let scroll = rng.gen_range_i32(i32::MIN / 2, i32::MAX / 2);
        let clamped = clamp_scroll_y(content, viewport, scroll);
        assert!(clamped >= 0);
        assert!(clamped <= (content - viewport).max(0));
    }
    // Content shorter than the viewport never scrolls.
    assert_eq!(clamp_scroll_y(100, 400, 50), 0);
}

#[test]
fn raw_header_y_tracks_the_placeholder() {
    // Placeholder at 80, content 1000, viewport 400.
    assert_eq!(raw_header_y(80, 1000, 400, 0), 80);
    assert_eq!(raw_header_y(80, 1000, 400, 30), 50);
    assert_eq!(raw_header_y(80, 1000, 400, 200), -120);
    // Scroll past the end clamps to content - viewport.
    assert_eq!(raw_header_y(80, 1000, 400, 10_000), 80 - 600);
    // Overscroll above the top clamps to 0.
    assert_eq!(raw_header_y(80, 1000, 400, -50), 80);
}

fn input(raw_y: i32, placeholder_top: i32, current_translation: i32) -> PlacementInput {
    PlacementInput {
        raw_y,
        placeholder_top,
        current_translation,
    }
}

#[test]
fn clamp_policy_pins_between_zero_and_placeholder() {
    let mut p = ClampPolicy::new();
    assert_eq!(p.on_scroll(input(-40, 80, 0)).translation, Some(0));
    assert_eq!(p.on_scroll(input(25, 80, 0)).translation, Some(25));
    assert_eq!(p.on_scroll(input(80, 80, 0)).translation, Some(80));
    assert_eq!(p.on_scroll(input(300, 80, 0)).translation, Some(80));
    // Stateless: no animation, ever.
    assert_eq!(p.on_scroll(input(-40, 80, 0)).animation, None);
    assert!(p.on_tween_done().is_empty());
}

fn scroll(raw_y: i32, current_translation: i32) -> Event {
    Event::Scroll {
        raw_y,
        current_translation,
    }
}

#[test]
fn on_screen_goes_off_screen_past_header_height() {
    // header 100, raw -150: off screen, anchor at -150, translation -150.
    let (next, out) = step(MachineState::default(), scroll(-150, 0), 100);
    assert_eq!(next.phase, Phase::OffScreen);
    assert_eq!(next.min_raw_y, -150);
    assert_eq!(out.translation, Some(-150));
    assert_eq!(out.start, None);
}

#[test]
fn on_screen_tracks_raw_y_within_header_height() {
    let (next, out) = step(MachineState::default(), scroll(-100, 0), 100);
    assert_eq!(next.phase, Phase::OnScreen);
    assert_eq!(out.translation, Some(-100));
}

#[test]
fn zero_header_height_degenerates_to_raw_below_zero() {
    let (next, _) = step(MachineState::default(), scroll(-1, 0), 0);
    assert_eq!(next.phase, Phase::OffScreen);
    let (next, _) = step(MachineState::default(), scroll(0, 0), 0);
    assert_eq!(next.phase, Phase::OnScreen);
}

#[test]
fn off_screen_lowers_the_water_mark_or_returns() {
    let state = MachineState {
        phase: Phase::OffScreen,
        min_raw_y: -150,
        tween: None,
    };
    // Still scrolling down: anchor follows.
    let (down, out) = step(state, scroll(-180, 0), 100);
    assert_eq!(down.phase, Phase::OffScreen);
    assert_eq!(down.min_raw_y, -180);
    assert_eq!(out.translation, Some(-180));
    // Reversing direction: -50 > -150 enters Returning, anchor untouched.
    let (up, out) = step(state, scroll(-50, 0), 100);
    assert_eq!(up.phase, Phase::Returning);
    assert_eq!(up.min_raw_y, -150);
    assert_eq!(out.translation, Some(-50));
}

#[test]
fn returning_requests_one_reveal_tween() {
    let state = MachineState {
        phase: Phase::Returning,
        min_raw_y: -150,
        tween: None,
    };
    let (next, out) = step(state, scroll(-60, -50), 100);
    assert_eq!(next.phase, Phase::Returning);
    assert_eq!(
        next.tween,
        Some(ActiveTween::Reveal { raw_y_at_start: -60 })
    );
    assert_eq!(
        out.start,
        Some(AnimationRequest {
            from: -100,
            to: 0,
            duration_ms: RETURN_TWEEN_MS,
        })
    );
    // The dispatched translation is still emitted.
    assert_eq!(out.translation, Some(0));

    // While the tween is in flight, no second start regardless of input.
    let (busy, out) = step(next, scroll(-70, -50), 100);
    assert_eq!(out.start, None);
    assert_eq!(busy.tween, next.tween);

    // Completion commits the anchor sampled at trigger time and expands.
    let (done, out) = step(busy, Event::TweenDone, 100);
    assert_eq!(done.phase, Phase::Expanded);
    assert_eq!(done.min_raw_y, -60);
    assert_eq!(done.tween, None);
    assert!(out.translation.is_none() && out.start.is_none());
}

#[test]
fn returning_with_zero_translation_is_inert() {
    // current_translation == 0: nothing to reveal, no animation, stay put.
    let state = MachineState {
        phase: Phase::Returning,
        min_raw_y: -150,
        tween: None,
    };
    let (next, out) = step(state, scroll(-60, 0), 100);
    assert_eq!(next, state);
    assert_eq!(out.translation, Some(0));
    assert_eq!(out.start, None);
}

#[test]
fn returning_back_above_placeholder_goes_on_screen() {
    let state = MachineState {
        phase: Phase::Returning,
        min_raw_y: -150,
        tween: None,
    };
    let (next, out) = step(state, scroll(20, -50), 100);
    assert_eq!(next.phase, Phase::OnScreen);
    assert_eq!(out.translation, Some(20));
    assert_eq!(out.start, None);
}

#[test]
fn expanded_hides_with_hysteresis() {
    let state = MachineState {
        phase: Phase::Expanded,
        min_raw_y: -50,
        tween: None,
    };
    // Exactly at min - 2: not yet.
    let (at, out) = step(state, scroll(-52, 0), 100);
    assert_eq!(at.tween, None);
    assert_eq!(out.start, None);
    assert_eq!(at.min_raw_y, -52);

    // One pixel further: hide tween from 0 to -header.
    let (next, out) = step(state, scroll(-53, 0), 100);
    assert_eq!(next.tween, Some(ActiveTween::Hide));
    assert_eq!(
        out.start,
        Some(AnimationRequest {
            from: 0,
            to: -100,
            duration_ms: RETURN_TWEEN_MS,
        })
    );
    assert_eq!(out.translation, Some(0));

    // Completion parks off screen; the anchor is left untouched.
    let (done, _) = step(next, Event::TweenDone, 100);
    assert_eq!(done.phase, Phase::OffScreen);
    assert_eq!(done.min_raw_y, -50);
    assert_eq!(done.tween, None);
}

#[test]
fn expanded_back_above_placeholder_goes_on_screen() {
    let state = MachineState {
        phase: Phase::Expanded,
        min_raw_y: -50,
        tween: None,
    };
    let (next, out) = step(state, scroll(15, 0), 100);
    assert_eq!(next.phase, Phase::OnScreen);
    assert_eq!(out.translation, Some(15));
}

#[test]
fn expanded_otherwise_follows_the_anchor() {
    let state = MachineState {
        phase: Phase::Expanded,
        min_raw_y: -50,
        tween: None,
    };
    let (next, out) = step(state, scroll(-49, 0), 100);
    assert_eq!(next.phase, Phase::Expanded);
    assert_eq!(next.min_raw_y, -49);
    assert_eq!(out.translation, Some(0));
}

#[test]
fn spurious_tween_done_is_ignored() {
    let state = MachineState {
        phase: Phase::OffScreen,
        min_raw_y: -30,
        tween: None,
    };
    let (next, out) = step(state, Event::TweenDone, 100);
    assert_eq!(next, state);
    assert_eq!(out, StepOutput::default());
}

#[test]
fn every_event_takes_exactly_one_transition() {
    // Random event streams: the machine never panics, at most one tween is in
    // flight, and a start is only emitted when nothing was in flight.
    let mut rng = Lcg::new(42);
    for _ in 0..20 {
        let header = rng.gen_range_i32(0, 200);
        let mut state = MachineState::default();
        for _ in 0..500 {
            let was_animating = state.is_animating();
            let event = if rng.gen_bool() || !was_animating {
                scroll(rng.gen_range_i32(-1_000, 1_000), rng.gen_range_i32(-200, 200))
            } else {
                Event::TweenDone
            };
            let (next, out) = step(state, event, header);

            if out.start.is_some() {
                assert!(!was_animating);
                assert!(next.is_animating());
            }
            match event {
                Event::Scroll { .. } => assert!(out.translation.is_some()),
                Event::TweenDone => assert!(out.translation.is_none()),
            }
            state = next;
        }
    }
}

#[test]
fn quick_return_policy_wraps_the_machine() {
    let mut p = QuickReturnPolicy::new(100);
    assert_eq!(p.phase(), Phase::OnScreen);

    let out = p.on_scroll(input(-150, 0, 0));
    assert_eq!(p.phase(), Phase::OffScreen);
    assert_eq!(p.min_raw_y(), -150);
    assert_eq!(out.translation, Some(-150));

    p.on_scroll(input(-50, 0, -150));
    assert_eq!(p.phase(), Phase::Returning);

    let out = p.on_scroll(input(-60, 0, -50));
    assert!(p.is_animating());
    assert_eq!(
        out.animation,
        Some(AnimationRequest {
            from: -100,
            to: 0,
            duration_ms: 250,
        })
    );

    p.on_tween_done();
    assert_eq!(p.phase(), Phase::Expanded);
    assert_eq!(p.min_raw_y(), -60);
    assert!(!p.is_animating());
}

#[test]
fn quick_return_policy_state_round_trips() {
    let mut p = QuickReturnPolicy::new(100);
    p.on_scroll(input(-150, 0, 0));
    p.on_scroll(input(-50, 0, -150));
    let snapshot = p.state();

    let mut q = QuickReturnPolicy::new(100);
    q.restore(snapshot);
    assert_eq!(q.state(), snapshot);
    assert_eq!(q.phase(), Phase::Returning);
}

#[test]
fn header_resize_applies_to_later_samples() {
    let mut p = QuickReturnPolicy::new(0);
    p.on_header_resized(100);
    assert_eq!(p.header_height(), 100);
    // raw -100 is within the new header height, so the header stays on screen.
    p.on_scroll(input(-100, 0, 0));
    assert_eq!(p.phase(), Phase::OnScreen);
}

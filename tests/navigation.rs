//! Slide navigation: clamped and looped steps, scroll sync, swipes,
//! settle timing and progress.

mod common;

use common::*;
use std::time::{Duration, Instant};
use storyreel::nav::{
    Direction, NavIntent, NavReducer, NavSettings, NavState, ScrollSync, SlideNavigator, Swipe,
};
use storyreel::story::SlideSequence;
use storyreel::ui::mvi::Reducer;

fn reduce(state: NavState, intent: NavIntent) -> NavState {
    NavReducer::reduce(state, intent)
}

fn committed(state: NavState, intent: NavIntent) -> NavState {
    reduce(reduce(state, intent), NavIntent::Settle)
}

// -- reducer boundaries -------------------------------------------------------

#[test]
fn step_forward_at_last_index_is_clamped() {
    let last = NavState::Idle { len: 3, current: 2 };
    let state = reduce(
        last,
        NavIntent::Step {
            direction: Direction::Forward,
        },
    );
    assert_eq!(state, last);
}

#[test]
fn step_loop_forward_at_last_index_wraps_to_first() {
    let state = committed(
        NavState::Idle { len: 3, current: 2 },
        NavIntent::StepLoop {
            direction: Direction::Forward,
        },
    );
    assert_eq!(state.current_index(), Some(0));
}

#[test]
fn step_backward_at_first_index_is_clamped() {
    let first = NavState::Idle { len: 3, current: 0 };
    let state = reduce(
        first,
        NavIntent::Step {
            direction: Direction::Backward,
        },
    );
    assert_eq!(state, first);
}

#[test]
fn step_loop_backward_at_first_index_wraps_to_last() {
    let state = committed(
        NavState::Idle { len: 3, current: 0 },
        NavIntent::StepLoop {
            direction: Direction::Backward,
        },
    );
    assert_eq!(state.current_index(), Some(2));
}

#[test]
fn empty_sequence_never_activates() {
    let state = reduce(NavState::Inactive, NavIntent::Open { len: 0 });
    assert_eq!(state, NavState::Inactive);
    let state = reduce(
        state,
        NavIntent::Step {
            direction: Direction::Forward,
        },
    );
    assert_eq!(state, NavState::Inactive);
}

// -- scenarios ----------------------------------------------------------------

#[test]
fn arrow_down_walks_three_slides_and_clamps_at_end() {
    let mut now = Instant::now();
    let mut nav = open_navigator(mixed_sequence().snapshot(), now);
    assert_eq!(nav.current_index(), Some(0));

    nav.step(Direction::Forward, now);
    now = settle(&mut nav, now);
    nav.step(Direction::Forward, now);
    now = settle(&mut nav, now);
    assert_eq!(nav.current_index(), Some(2));

    nav.step(Direction::Forward, now);
    assert!(!nav.is_transitioning());
    settle(&mut nav, now);
    assert_eq!(nav.current_index(), Some(2));
}

#[test]
fn upward_swipe_advances_and_wraps() {
    let now = Instant::now();
    let mut nav = open_navigator(mixed_sequence().snapshot(), now);

    nav.touch_start(200.0);
    assert_eq!(nav.touch_end(150.0, now), Some(Swipe::Advance));
    let now = settle(&mut nav, now);
    assert_eq!(nav.current_index(), Some(1));

    nav.jump_to(2, now);
    let now = settle(&mut nav, now);
    nav.touch_start(200.0);
    nav.touch_end(150.0, now);
    settle(&mut nav, now);
    assert_eq!(nav.current_index(), Some(0));
}

#[test]
fn downward_swipe_retreats_with_wrap() {
    let now = Instant::now();
    let mut nav = open_navigator(mixed_sequence().snapshot(), now);
    nav.touch_start(100.0);
    assert_eq!(nav.touch_end(160.0, now), Some(Swipe::Retreat));
    settle(&mut nav, now);
    assert_eq!(nav.current_index(), Some(2));
}

#[test]
fn short_swipes_never_change_the_index() {
    let now = Instant::now();
    let mut nav = open_navigator(mixed_sequence().snapshot(), now);
    for end in [170.0_f32, 185.0, 200.0, 215.0, 230.0] {
        nav.touch_start(200.0);
        assert_eq!(nav.touch_end(end, now), Some(Swipe::SnapBack));
        assert_eq!(nav.current_index(), Some(0));
        assert!(!nav.is_transitioning());
        assert_eq!(nav.scroll_offset(), 0.0);
    }
}

#[test]
fn touch_end_without_start_is_ignored() {
    let now = Instant::now();
    let mut nav = open_navigator(mixed_sequence().snapshot(), now);
    assert_eq!(nav.touch_end(0.0, now), None);
    assert_eq!(nav.current_index(), Some(0));
}

#[test]
fn scrolling_past_the_last_slide_resets_to_start() {
    let mut now = Instant::now();
    let mut nav = open_navigator(mixed_sequence().snapshot(), now);
    nav.jump_to(2, now);
    now = settle(&mut nav, now);

    // round(260 / 100) == 3 == len
    assert_eq!(nav.scroll_to(260.0, now), ScrollSync::WrapToStart);
    assert_eq!(nav.current_index(), Some(0));
    assert_eq!(nav.scroll_offset(), 0.0);
}

#[test]
fn scrolling_above_the_first_slide_wraps_to_end() {
    let now = Instant::now();
    let mut nav = open_navigator(mixed_sequence().snapshot(), now);
    assert_eq!(nav.scroll_to(-60.0, now), ScrollSync::WrapToEnd);
    assert_eq!(nav.current_index(), Some(2));
    assert_eq!(nav.scroll_offset(), 2.0 * PAGE);
}

#[test]
fn scroll_sync_commits_without_settle() {
    let now = Instant::now();
    let mut nav = open_navigator(mixed_sequence().snapshot(), now);
    assert_eq!(nav.scroll_to(140.0, now), ScrollSync::Index(1));
    assert_eq!(nav.current_index(), Some(1));
    assert!(!nav.is_transitioning());
    assert!(nav.pending_settle().is_none());
}

#[test]
fn reopening_starts_again_at_first_slide() {
    let mut now = Instant::now();
    let slides = mixed_sequence().snapshot();
    let mut nav = open_navigator(slides.clone(), now);
    nav.jump_to(2, now);
    now = settle(&mut nav, now);
    assert_eq!(nav.current_index(), Some(2));
    nav.close(now);
    assert_eq!(nav.state(), NavState::Inactive);

    let nav = open_navigator(slides, now);
    assert_eq!(nav.current_index(), Some(0));
}

// -- transitions and timers ---------------------------------------------------

#[test]
fn input_during_transition_is_ignored() {
    let now = Instant::now();
    let mut nav = open_navigator(text_sequence(4).snapshot(), now);
    nav.step(Direction::Forward, now);
    assert!(nav.is_transitioning());

    nav.step(Direction::Forward, now);
    nav.jump_to(3, now);
    assert_eq!(nav.scroll_to(300.0, now), ScrollSync::Ignored);
    nav.touch_start(200.0);
    assert_eq!(nav.touch_end(100.0, now), None);

    settle(&mut nav, now);
    assert_eq!(nav.current_index(), Some(1));
}

#[test]
fn commit_waits_for_the_full_settle_delay() {
    let now = Instant::now();
    let mut nav = open_navigator(text_sequence(3).snapshot(), now);
    nav.step(Direction::Forward, now);

    nav.tick(now + Duration::from_millis(199));
    assert!(nav.is_transitioning());
    assert_eq!(nav.current_index(), Some(0));

    nav.tick(now + Duration::from_millis(200));
    assert!(!nav.is_transitioning());
    assert_eq!(nav.current_index(), Some(1));
}

#[test]
fn closing_cancels_pending_settle() {
    let now = Instant::now();
    let mut nav = open_navigator(text_sequence(3).snapshot(), now);
    nav.step(Direction::Forward, now);
    assert!(nav.pending_settle().is_some());

    nav.close(now);
    assert!(nav.pending_settle().is_none());
    nav.tick(now + Duration::from_secs(1));
    assert_eq!(nav.state(), NavState::Inactive);
}

#[test]
fn progress_pauses_during_transition_and_restarts_on_commit() {
    let start = Instant::now();
    let mut nav = open_navigator(text_sequence(3).snapshot(), start);
    let mid = start + Duration::from_millis(2500);
    assert!((nav.progress_ratio(mid) - 0.5).abs() < 1e-6);

    nav.step(Direction::Forward, mid);
    let paused = nav.progress_ratio(mid + Duration::from_millis(150));
    assert!((paused - 0.5).abs() < 1e-6);

    let committed_at = mid + SETTLE;
    nav.tick(committed_at);
    assert_eq!(nav.progress_ratio(committed_at), 0.0);
    assert_eq!(nav.segment_fill(0, committed_at), 1.0);
    assert_eq!(nav.segment_fill(2, committed_at), 0.0);
}

#[test]
fn progress_expiry_does_not_advance_by_default() {
    let now = Instant::now();
    let mut nav = open_navigator(text_sequence(3).snapshot(), now);
    let later = now + Duration::from_secs(6);
    nav.tick(later);
    assert_eq!(nav.current_index(), Some(0));
    assert_eq!(nav.progress_ratio(later), 1.0);
}

#[test]
fn auto_advance_steps_when_enabled() {
    let now = Instant::now();
    let settings = NavSettings {
        auto_advance: true,
        ..NavSettings::default()
    };
    let mut nav = SlideNavigator::open(text_sequence(2).snapshot(), settings, now);
    nav.set_page_height(PAGE);

    let expired = now + Duration::from_millis(5000);
    nav.tick(expired);
    assert!(nav.is_transitioning());
    nav.tick(expired + SETTLE);
    assert_eq!(nav.current_index(), Some(1));

    let expired = expired + SETTLE + Duration::from_millis(5000);
    nav.tick(expired);
    nav.tick(expired + SETTLE);
    assert_eq!(nav.current_index(), Some(0));
}

#[test]
fn empty_navigator_ignores_everything() {
    let now = Instant::now();
    let mut nav = open_navigator(SlideSequence::new().snapshot(), now);
    assert!(!nav.is_active());
    nav.step(Direction::Forward, now);
    nav.step_loop(Direction::Backward, now);
    assert_eq!(nav.scroll_to(500.0, now), ScrollSync::Ignored);
    nav.touch_start(0.0);
    assert_eq!(nav.touch_end(100.0, now), None);
    assert_eq!(nav.current_index(), None);
    assert_eq!(nav.progress_ratio(now), 0.0);
}

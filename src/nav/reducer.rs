//! Reducer for the navigation cursor.

use crate::ui::mvi::Reducer;

use super::intent::{Direction, NavIntent};
use super::state::NavState;

/// Pure cursor transitions.
///
/// Any navigation input received while a transition is running is dropped.
/// Scheduling the settle delay is the caller's job.
pub struct NavReducer;

impl Reducer for NavReducer {
    type State = NavState;
    type Intent = NavIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            NavIntent::Open { len: 0 } => NavState::Inactive,
            NavIntent::Open { len } => NavState::Idle { len, current: 0 },

            NavIntent::Close => NavState::Inactive,

            NavIntent::Step { direction } => match state {
                NavState::Idle { len, current } => {
                    begin_transition(len, current, clamped(current, direction, len))
                }
                other => other,
            },

            NavIntent::StepLoop { direction } => match state {
                NavState::Idle { len, current } => {
                    begin_transition(len, current, wrapped(current, direction, len))
                }
                other => other,
            },

            NavIntent::JumpTo { index } => match state {
                NavState::Idle { len, current } => {
                    begin_transition(len, current, index.min(len.saturating_sub(1)))
                }
                other => other,
            },

            NavIntent::SyncScroll { index } => match state {
                NavState::Idle { len, .. } => NavState::Idle {
                    len,
                    current: index.min(len.saturating_sub(1)),
                },
                other => other,
            },

            NavIntent::Settle => match state {
                NavState::Transitioning { len, to, .. } => NavState::Idle { len, current: to },
                other => other,
            },
        }
    }
}

fn begin_transition(len: usize, from: usize, to: usize) -> NavState {
    if from == to {
        NavState::Idle { len, current: from }
    } else {
        NavState::Transitioning { len, from, to }
    }
}

/// `current + direction`, held inside `[0, len - 1]`.
pub(crate) fn clamped(current: usize, direction: Direction, len: usize) -> usize {
    match direction {
        Direction::Forward => (current + 1).min(len.saturating_sub(1)),
        Direction::Backward => current.saturating_sub(1),
    }
}

/// `current + direction` modulo `len`.
pub(crate) fn wrapped(current: usize, direction: Direction, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + direction.delta()).rem_euclid(len) as usize
}

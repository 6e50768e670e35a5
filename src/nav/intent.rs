use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn delta(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Inputs understood by the navigation reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Preview opened over `len` slides. Always starts at index 0.
    Open { len: usize },

    /// Preview closed.
    Close,

    /// Move one slide, stopping at the boundaries (keyboard).
    Step { direction: Direction },

    /// Move one slide, wrapping past the boundaries (swipe).
    StepLoop { direction: Direction },

    /// Jump to an explicit index, clamped to the sequence.
    JumpTo { index: usize },

    /// Scroll position settled on `index`. Commits without a transition.
    SyncScroll { index: usize },

    /// Settle delay elapsed; commit the pending transition.
    Settle,
}

impl Intent for NavIntent {}

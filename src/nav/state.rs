use crate::ui::mvi::UiState;

/// Cursor over a fixed slide sequence of length `len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    /// Preview closed or the sequence is empty.
    #[default]
    Inactive,

    /// Showing `current`, accepting input.
    Idle { len: usize, current: usize },

    /// Animating from `from` to `to`; `from` stays current until settled.
    Transitioning { len: usize, from: usize, to: usize },
}

impl UiState for NavState {}

impl NavState {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Inactive)
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self, Self::Transitioning { .. })
    }

    /// Committed slide index. During a transition this is still `from`.
    pub fn current_index(&self) -> Option<usize> {
        match self {
            Self::Inactive => None,
            Self::Idle { current, .. } => Some(*current),
            Self::Transitioning { from, .. } => Some(*from),
        }
    }

    /// Index being moved to, if a transition is running.
    pub fn target_index(&self) -> Option<usize> {
        match self {
            Self::Transitioning { to, .. } => Some(*to),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Inactive => 0,
            Self::Idle { len, .. } | Self::Transitioning { len, .. } => *len,
        }
    }
}

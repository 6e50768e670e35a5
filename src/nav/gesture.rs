//! Scroll position and swipe classification.

/// What a scroll position means for the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollSync {
    /// Page height unusable; nothing to do.
    Ignored,
    /// Scroll rests on this slide.
    Index(usize),
    /// Scrolled past the last slide: reset offset to 0, show slide 0.
    WrapToStart,
    /// Scrolled before the first slide while on it: jump to the last slide.
    WrapToEnd,
}

/// Map a scroll offset onto the slide sequence.
///
/// The active slide is `round(offset / page_height)`. Reaching `len` (past
/// the midpoint between the last slide and the one after it) wraps to the
/// start; going below 0 while already on slide 0 wraps to the end.
pub fn scroll_sync(offset: f32, page_height: f32, len: usize, current: usize) -> ScrollSync {
    if len == 0 || !(page_height > 0.0) || !offset.is_finite() {
        return ScrollSync::Ignored;
    }
    let active = (offset / page_height).round() as i64;
    if active >= len as i64 {
        return ScrollSync::WrapToStart;
    }
    if active < 0 {
        return if current == 0 {
            ScrollSync::WrapToEnd
        } else {
            ScrollSync::Index(0)
        };
    }
    ScrollSync::Index(active as usize)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved up by more than the threshold.
    Advance,
    /// Finger moved down by more than the threshold.
    Retreat,
    /// Too short; restore the current slide's scroll position.
    SnapBack,
}

pub fn classify_swipe(start_y: f32, end_y: f32, threshold: f32) -> Swipe {
    let diff = start_y - end_y;
    if diff.abs() <= threshold {
        Swipe::SnapBack
    } else if diff > 0.0 {
        Swipe::Advance
    } else {
        Swipe::Retreat
    }
}

/// Remembers where a touch (or mouse drag) began.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchTracker {
    start_y: Option<f32>,
}

impl TouchTracker {
    pub fn begin(&mut self, y: f32) {
        self.start_y = Some(y);
    }

    pub fn is_tracking(&self) -> bool {
        self.start_y.is_some()
    }

    /// Finish the gesture. `None` when no gesture was started.
    pub fn finish(&mut self, end_y: f32, threshold: f32) -> Option<Swipe> {
        let start_y = self.start_y.take()?;
        Some(classify_swipe(start_y, end_y, threshold))
    }

    pub fn cancel(&mut self) {
        self.start_y = None;
    }
}

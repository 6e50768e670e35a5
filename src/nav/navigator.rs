use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::PreviewConfig;
use crate::story::SlideItem;
use crate::ui::mvi::Reducer;

use super::gesture::{scroll_sync, ScrollSync, Swipe, TouchTracker};
use super::intent::{Direction, NavIntent};
use super::progress::SlideProgress;
use super::reducer::NavReducer;
use super::state::NavState;

/// Timing and gesture parameters for a preview session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavSettings {
    /// Pause between starting a slide change and committing it.
    pub settle: Duration,
    /// Time for one slide's progress bar to fill.
    pub progress: Duration,
    /// Minimum swipe distance, exclusive.
    pub swipe_threshold: f32,
    /// Advance when the progress bar fills.
    pub auto_advance: bool,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(200),
            progress: Duration::from_millis(5000),
            swipe_threshold: 30.0,
            auto_advance: false,
        }
    }
}

impl From<&PreviewConfig> for NavSettings {
    fn from(config: &PreviewConfig) -> Self {
        Self {
            settle: Duration::from_millis(config.settle_ms),
            progress: Duration::from_millis(config.progress_ms),
            swipe_threshold: config.swipe_threshold,
            auto_advance: config.auto_advance,
        }
    }
}

/// Drives the navigation reducer for one preview session.
///
/// Owns everything with a lifetime: the settle deadline, the scroll
/// offset, the touch in progress and the progress timer. Time is always
/// passed in so callers (and tests) control the clock.
pub struct SlideNavigator {
    slides: Arc<[SlideItem]>,
    settings: NavSettings,
    state: NavState,
    settle_deadline: Option<Instant>,
    page_height: f32,
    scroll_offset: f32,
    touch: TouchTracker,
    progress: SlideProgress,
}

impl SlideNavigator {
    /// Open a session at slide 0. An empty sequence never activates.
    pub fn open(slides: Arc<[SlideItem]>, settings: NavSettings, now: Instant) -> Self {
        let state = NavReducer::reduce(NavState::Inactive, NavIntent::Open { len: slides.len() });
        let mut progress = SlideProgress::new(settings.progress);
        if state.is_active() {
            progress.restart(now);
        }
        tracing::info!(slides = slides.len(), "Preview opened");
        Self {
            slides,
            settings,
            state,
            settle_deadline: None,
            page_height: 0.0,
            scroll_offset: 0.0,
            touch: TouchTracker::default(),
            progress,
        }
    }

    /// End the session. Any pending settle is cancelled.
    pub fn close(&mut self, now: Instant) {
        if self.state.is_active() {
            tracing::info!(index = ?self.state.current_index(), "Preview closed");
        }
        self.dispatch(NavIntent::Close, now);
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn settings(&self) -> &NavSettings {
        &self.settings
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    pub fn current_slide(&self) -> Option<&SlideItem> {
        self.current_index().and_then(|index| self.slides.get(index))
    }

    pub fn slides(&self) -> &[SlideItem] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn pending_settle(&self) -> Option<Instant> {
        self.settle_deadline
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    /// Viewport height in gesture units. Re-snaps the scroll offset.
    pub fn set_page_height(&mut self, page_height: f32) {
        if !(page_height > 0.0) {
            return;
        }
        self.page_height = page_height;
        self.snap_to_current();
    }

    /// Clamped step (keyboard).
    pub fn step(&mut self, direction: Direction, now: Instant) {
        self.dispatch(NavIntent::Step { direction }, now);
    }

    /// Wrapping step (swipe).
    pub fn step_loop(&mut self, direction: Direction, now: Instant) {
        self.dispatch(NavIntent::StepLoop { direction }, now);
    }

    pub fn jump_to(&mut self, index: usize, now: Instant) {
        self.dispatch(NavIntent::JumpTo { index }, now);
    }

    /// Apply an absolute scroll offset. Ignored unless idle.
    pub fn scroll_to(&mut self, offset: f32, now: Instant) -> ScrollSync {
        let NavState::Idle { len, current } = self.state else {
            return ScrollSync::Ignored;
        };
        let sync = scroll_sync(offset, self.page_height, len, current);
        match sync {
            ScrollSync::Ignored => {}
            ScrollSync::Index(index) => {
                self.scroll_offset = offset.max(0.0);
                self.dispatch(NavIntent::SyncScroll { index }, now);
            }
            ScrollSync::WrapToStart => {
                self.scroll_offset = 0.0;
                self.dispatch(NavIntent::SyncScroll { index: 0 }, now);
            }
            ScrollSync::WrapToEnd => {
                let last = len - 1;
                self.scroll_offset = last as f32 * self.page_height;
                self.dispatch(NavIntent::SyncScroll { index: last }, now);
            }
        }
        sync
    }

    pub fn scroll_by(&mut self, delta: f32, now: Instant) -> ScrollSync {
        self.scroll_to(self.scroll_offset + delta, now)
    }

    pub fn touch_start(&mut self, y: f32) {
        if matches!(self.state, NavState::Idle { .. }) {
            self.touch.begin(y);
        }
    }

    /// Finish a gesture. Returns how it was classified; `None` without a
    /// start or when a transition is running.
    pub fn touch_end(&mut self, y: f32, now: Instant) -> Option<Swipe> {
        if self.state.is_transitioning() {
            self.touch.cancel();
            return None;
        }
        let swipe = self.touch.finish(y, self.settings.swipe_threshold)?;
        match swipe {
            Swipe::Advance => self.step_loop(Direction::Forward, now),
            Swipe::Retreat => self.step_loop(Direction::Backward, now),
            Swipe::SnapBack => self.snap_to_current(),
        }
        Some(swipe)
    }

    /// Advance timers: commit a due settle and, if enabled, auto-advance.
    pub fn tick(&mut self, now: Instant) {
        if self.settle_deadline.is_some_and(|deadline| now >= deadline) {
            self.dispatch(NavIntent::Settle, now);
        }

        if self.settings.auto_advance
            && matches!(self.state, NavState::Idle { .. })
            && self.progress.is_complete(now)
        {
            if self.len() > 1 {
                self.step_loop(Direction::Forward, now);
            } else {
                self.progress.restart(now);
            }
        }
    }

    /// Fill of the current slide's progress bar.
    pub fn progress_ratio(&self, now: Instant) -> f64 {
        if self.state.is_active() {
            self.progress.ratio(now)
        } else {
            0.0
        }
    }

    /// Fill of the progress segment for slide `index`.
    pub fn segment_fill(&self, index: usize, now: Instant) -> f64 {
        match self.current_index() {
            Some(current) if index < current => 1.0,
            Some(current) if index == current => self.progress_ratio(now),
            _ => 0.0,
        }
    }

    /// Restore the scroll offset to the current slide's page.
    pub fn snap_to_current(&mut self) {
        if let Some(current) = self.current_index() {
            self.scroll_offset = current as f32 * self.page_height;
        }
    }

    fn dispatch(&mut self, intent: NavIntent, now: Instant) {
        let before = self.state;
        self.state = NavReducer::reduce(before, intent);
        self.apply_effects(before, now);
    }

    fn apply_effects(&mut self, before: NavState, now: Instant) {
        match (before, self.state) {
            (_, NavState::Inactive) => {
                self.settle_deadline = None;
                self.touch.cancel();
                self.progress.stop();
            }
            (NavState::Idle { .. }, NavState::Transitioning { from, to, .. }) => {
                self.settle_deadline = Some(now + self.settings.settle);
                self.progress.pause(now);
                tracing::debug!(from, to, "Slide transition started");
            }
            (NavState::Transitioning { .. }, NavState::Idle { current, .. }) => {
                self.settle_deadline = None;
                self.snap_to_current();
                self.progress.restart(now);
                tracing::debug!(index = current, "Slide committed");
            }
            (NavState::Idle { current: old, .. }, NavState::Idle { current: new, .. })
                if old != new =>
            {
                self.progress.restart(now);
                tracing::debug!(index = new, "Slide synced from scroll");
            }
            _ => {}
        }
    }
}

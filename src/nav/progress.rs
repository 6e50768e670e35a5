use std::time::{Duration, Instant};

/// Per-slide progress timer driving the progress bar.
///
/// Purely visual: expiry does not navigate unless the caller decides so.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideProgress {
    duration: Duration,
    elapsed: Duration,
    running_since: Option<Instant>,
}

impl SlideProgress {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            running_since: None,
        }
    }

    /// Start from zero for a newly shown slide.
    pub fn restart(&mut self, now: Instant) {
        self.elapsed = Duration::ZERO;
        self.running_since = Some(now);
    }

    pub fn pause(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.elapsed += now.saturating_duration_since(since);
        }
    }

    pub fn stop(&mut self) {
        self.elapsed = Duration::ZERO;
        self.running_since = None;
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        let running = self
            .running_since
            .map(|since| now.saturating_duration_since(since))
            .unwrap_or_default();
        (self.elapsed + running).min(self.duration)
    }

    /// Fill fraction in `[0, 1]`.
    pub fn ratio(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        self.elapsed(now).as_secs_f64() / self.duration.as_secs_f64()
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        self.elapsed(now) >= self.duration
    }
}

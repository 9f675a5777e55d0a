//! Single-value animators

use crate::easing::Easing;

/// A float animator sweeping `from..to` over a fixed duration through an
/// easing curve.
///
/// Time is fed in externally via [`tick`](ValueAnimator::tick); the animator
/// has no clock of its own, which keeps it deterministic under test.
#[derive(Clone, Debug)]
pub struct ValueAnimator {
    duration_ms: u32,
    from: f32,
    to: f32,
    easing: Easing,
    current_time: f32,
    playing: bool,
}

impl ValueAnimator {
    pub fn new(duration_ms: u32, from: f32, to: f32, easing: Easing) -> Self {
        Self {
            duration_ms,
            from,
            to,
            easing,
            current_time: 0.0,
            playing: false,
        }
    }

    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Rewind to the initial value without starting playback.
    pub fn reset(&mut self) {
        self.current_time = 0.0;
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn progress(&self) -> f32 {
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Get the current eased value
    pub fn value(&self) -> f32 {
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Advance by delta time (in milliseconds).
    ///
    /// Returns the unconsumed portion of the delta when the animator finishes
    /// inside it, so a successor can pick up exactly where this one left off;
    /// returns 0.0 while still playing.
    pub fn tick(&mut self, dt_ms: f32) -> f32 {
        if !self.playing {
            return 0.0;
        }

        self.current_time += dt_ms;

        let duration = self.duration_ms as f32;
        if self.current_time >= duration {
            let leftover = self.current_time - duration;
            self.current_time = duration;
            self.playing = false;
            return leftover;
        }

        0.0
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }
}

//! The three-phase bounce sequence
//!
//! One cycle: the cord and ball sink together (descend), snap back up with a
//! damped oscillation (ascend), and the first time the cord returns to its
//! rest height the ball launches into a free-fall arc. When the arc lands the
//! whole sequence restarts. The ascend animator keeps ticking underneath the
//! free-fall so the cord continues to ring while the ball is airborne.

use tracing::debug;

use crate::animator::ValueAnimator;
use crate::easing::Easing;
use crate::freefall;

/// How far the ball and cord sink below the rest line.
pub const DROP_DISTANCE: f32 = 80.0;

const DESCEND_MS: u32 = 500;
const ASCEND_MS: u32 = 500;
const FREE_FALL_MS: u32 = 600;

/// Animation phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Descend,
    Ascend,
    FreeFall,
}

/// The looping descend → ascend → free-fall driver.
#[derive(Clone, Debug)]
pub struct BounceSequence {
    descend: ValueAnimator,
    ascend: ValueAnimator,
    free_fall: ValueAnimator,
    phase: Phase,
    showing: bool,
    launched: bool,
}

impl BounceSequence {
    pub fn new() -> Self {
        Self {
            descend: ValueAnimator::new(DESCEND_MS, 0.0, 1.0, Easing::Decelerate),
            ascend: ValueAnimator::new(ASCEND_MS, 0.0, 1.0, Easing::Shock),
            free_fall: ValueAnimator::new(
                FREE_FALL_MS,
                0.0,
                freefall::flight_time(),
                Easing::Linear,
            ),
            phase: Phase::Descend,
            showing: false,
            launched: false,
        }
    }

    /// Begin a cycle. Ignored while one is already showing.
    pub fn start(&mut self) {
        if self.showing {
            return;
        }

        self.descend.reset();
        self.ascend.reset();
        self.free_fall.reset();
        self.launched = false;
        self.showing = true;
        self.enter(Phase::Descend);
        self.descend.start();
    }

    /// Stop mid-cycle; a later [`start`](BounceSequence::start) begins fresh.
    pub fn stop(&mut self) {
        self.descend.stop();
        self.ascend.stop();
        self.free_fall.stop();
        self.showing = false;
    }

    pub fn is_showing(&self) -> bool {
        self.showing
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Downward offset of ball and cord while descending.
    pub fn down_offset(&self) -> f32 {
        DROP_DISTANCE * self.descend.value()
    }

    /// Upward travel of ball and cord while ascending.
    pub fn up_offset(&self) -> f32 {
        DROP_DISTANCE * self.ascend.value()
    }

    /// Height of the ball above the rest line during free-fall.
    pub fn free_fall_offset(&self) -> f32 {
        freefall::displacement(self.free_fall.value())
    }

    /// Advance the sequence by delta time (in milliseconds).
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.showing || dt_ms <= 0.0 {
            return;
        }

        let mut dt = dt_ms;
        if self.descend.is_playing() {
            // Leftover time is handed to the ascend so the cycle has no gaps.
            dt = self.descend.tick(dt);
            if self.descend.is_playing() {
                return;
            }
            self.enter(Phase::Ascend);
            self.ascend.start();
            if dt <= 0.0 {
                return;
            }
        }

        // The ascend and the free-fall share the same wall clock.
        let was_falling = self.free_fall.is_playing();
        self.ascend.tick(dt);

        if !self.launched && self.up_offset() >= DROP_DISTANCE {
            // First crossing of the rest height launches the ball, once per
            // cycle; the arc starts consuming time on the next tick.
            self.launched = true;
            self.enter(Phase::FreeFall);
            self.free_fall.start();
            return;
        }

        if was_falling {
            let leftover = self.free_fall.tick(dt);
            if !self.free_fall.is_playing() {
                debug!("bounce cycle complete, restarting");
                self.showing = false;
                self.start();
                if leftover > 0.0 {
                    self.tick(leftover);
                }
            }
        }
    }

    fn enter(&mut self, phase: Phase) {
        self.phase = phase;
        debug!(?phase, "bounce phase");
    }
}

impl Default for BounceSequence {
    fn default() -> Self {
        Self::new()
    }
}

//! Frame time model.
//!
//! # Design
//!
//! Time is continuous: `now` is seconds since the start of the run, held as
//! `f64` so long sessions do not lose sub-frame precision.  Each call to the
//! movement scheduler receives `(now, dt)` where `dt` is the time since the
//! previous call.
//!
//! Batched moves are aligned to **cycles**: half-open windows
//! `[k·d, (k+1)·d)` where `d` is the move duration.  Two instants are in the
//! same cycle when their [`cycle_index`] is equal.  Comparing integer indices
//! instead of float cycle starts keeps boundary detection exact.

use std::fmt;

// ── Cycle arithmetic ──────────────────────────────────────────────────────────

/// Index of the cycle containing `t` for cycles of length `duration`.
#[inline]
pub fn cycle_index(t: f64, duration: f64) -> i64 {
    (t / duration).floor() as i64
}

/// Start instant of the cycle containing `t`:
/// `floor(t / duration) · duration`.
#[inline]
pub fn cycle_start(t: f64, duration: f64) -> f64 {
    cycle_index(t, duration) as f64 * duration
}

// ── FrameStep ─────────────────────────────────────────────────────────────────

/// One frame as seen by the scheduler.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameStep {
    /// 1-based frame counter.
    pub frame: u64,
    /// Clock reading at the end of this frame, in seconds.
    pub now: f64,
    /// Seconds since the previous frame.
    pub dt: f64,
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Fixed-step frame clock.
///
/// Real applications usually take `(now, dt)` from their render loop.  This
/// clock is for headless drivers and tests, which want a reproducible step.
#[derive(Clone, Debug)]
pub struct FrameClock {
    /// Seconds per frame.
    pub frame_secs: f64,
    /// Current reading in seconds.
    pub now: f64,
    /// Frames advanced so far.
    pub frame: u64,
}

impl FrameClock {
    /// A clock at `t = 0` stepping by `frame_secs`.
    pub fn new(frame_secs: f64) -> Self {
        Self {
            frame_secs,
            now: 0.0,
            frame: 0,
        }
    }

    /// A clock stepping at `hz` frames per second.
    pub fn with_rate(hz: f64) -> Self {
        Self::new(1.0 / hz)
    }

    /// Advance by one frame and return the step to feed the scheduler.
    ///
    /// `now` is recomputed from the frame count rather than accumulated, so
    /// rounding error does not build up over long runs.
    #[inline]
    pub fn advance(&mut self) -> FrameStep {
        let prev = self.now;
        self.frame += 1;
        self.now = self.frame as f64 * self.frame_secs;
        FrameStep {
            frame: self.frame,
            now: self.now,
            dt: self.now - prev,
        }
    }

    /// Frames needed to cover `secs` seconds (rounds up).
    #[inline]
    pub fn frames_for_secs(&self, secs: f64) -> u64 {
        (secs / self.frame_secs).ceil() as u64
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{} ({:.3}s)", self.frame, self.now)
    }
}

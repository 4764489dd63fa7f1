//! A single in-flight move.

use std::fmt;

use grid_core::{GridPoint, WorldPos};

use crate::MoveObserver;

/// How a move is scheduled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum MoveKind {
    /// Starts on admission and runs its own timer.
    Immediate,
    /// Starts at the next cycle boundary and moves in lock-step with the
    /// rest of the batch.
    Batched,
}

impl MoveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MoveKind::Immediate => "immediate",
            MoveKind::Batched   => "batched",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a live job sits in its lifecycle.
///
/// `Queued → Active → (completed, removed)`.  Immediate jobs are created
/// `Active`.  Completed and cancelled jobs no longer exist, so they have no
/// phase.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum JobPhase {
    /// Batched only: waiting for the next cycle boundary.
    Queued,
    /// Moving.
    Active,
}

/// One actor's transition from `from` to `to`.
///
/// The actor keeps `from` as its committed point for the whole lifetime of
/// the job; `to` is committed only at completion.
pub(crate) struct MoveJob<A> {
    pub(crate) actor: A,
    pub(crate) from:  GridPoint,
    pub(crate) to:    GridPoint,
    pub(crate) kind:  MoveKind,

    /// Seconds this job has been advanced.  Only immediate jobs use it;
    /// batched progress comes from the shared cycle clock.
    pub(crate) elapsed_secs: f64,

    observer: Box<dyn MoveObserver>,
}

impl<A> MoveJob<A> {
    pub(crate) fn new(
        actor:    A,
        from:     GridPoint,
        to:       GridPoint,
        kind:     MoveKind,
        observer: Box<dyn MoveObserver>,
    ) -> Self {
        Self {
            actor,
            from,
            to,
            kind,
            elapsed_secs: 0.0,
            observer,
        }
    }

    /// Fraction of an immediate move completed after `elapsed_secs`.
    /// Not clamped: values `>= 1.0` mean the move is due to complete.
    #[inline]
    pub(crate) fn timer_progress(&self, move_duration_secs: f64) -> f64 {
        self.elapsed_secs / move_duration_secs
    }

    /// World position at `progress` along the move.
    #[inline]
    pub(crate) fn position_at(&self, progress: f32, cell_size: f32) -> WorldPos {
        WorldPos::lerp(self.from.to_world(cell_size), self.to.to_world(cell_size), progress)
    }

    pub(crate) fn notify_position(&mut self, position: WorldPos) {
        self.observer.on_position_updated(position);
    }

    pub(crate) fn notify_completed(&mut self) {
        self.observer.on_move_completed(self.to);
    }
}

impl<A: fmt::Debug> fmt::Debug for MoveJob<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveJob")
            .field("actor", &self.actor)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("kind", &self.kind)
            .field("elapsed_secs", &self.elapsed_secs)
            .finish_non_exhaustive()
    }
}

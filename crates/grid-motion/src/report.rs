//! What a single `advance` call did.

use grid_core::GridPoint;

use crate::MoveKind;

/// One finished move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Completion<A> {
    pub actor: A,
    pub kind:  MoveKind,
    /// The point the actor now occupies.
    pub point: GridPoint,
}

/// Summary returned by [`MoveScheduler::advance`][crate::MoveScheduler::advance].
///
/// Observers already received every callback; this is for callers that
/// prefer to poll, and for logging.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport<A> {
    /// A cycle boundary fell inside `(now - dt, now]`.
    pub cycle_crossed: bool,

    /// Queued batched moves that became active this frame.
    pub promoted: usize,

    /// Moves completed this frame, immediate ones first, each group in
    /// ascending actor order.
    pub completed: Vec<Completion<A>>,
}

impl<A> Default for FrameReport<A> {
    fn default() -> Self {
        Self {
            cycle_crossed: false,
            promoted:      0,
            completed:     Vec::new(),
        }
    }
}

impl<A> FrameReport<A> {
    /// Completions of one kind.
    pub fn completed_of(&self, kind: MoveKind) -> impl Iterator<Item = &Completion<A>> {
        self.completed.iter().filter(move |c| c.kind == kind)
    }
}

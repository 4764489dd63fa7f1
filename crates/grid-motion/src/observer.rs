//! Per-move callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use grid_core::{GridPoint, WorldPos};

/// Callbacks attached to a single admitted move.
///
/// The scheduler stores one observer with each job and invokes it from
/// [`MoveScheduler::advance`][crate::MoveScheduler::advance]:
///
/// - `on_position_updated` one or more times while the move is in flight;
/// - `on_move_completed` exactly once, after the actor's new point has been
///   committed.
///
/// A cancelled move (actor unregistered) is dropped without either call.
///
/// Both methods default to no-ops so implementors only override what they
/// care about.
///
/// # Example — a visual entity following its grid actor
///
/// ```rust,ignore
/// struct Sprite { pos: WorldPos, cell: GridPoint }
///
/// impl MoveObserver for Sprite {
///     fn on_position_updated(&mut self, position: WorldPos) { self.pos = position; }
///     fn on_move_completed(&mut self, point: GridPoint) { self.cell = point; }
/// }
///
/// let sprite = Rc::new(RefCell::new(Sprite { .. }));
/// scheduler.request_immediate_move(id, Direction::Right, sprite.clone())?;
/// ```
pub trait MoveObserver {
    /// The actor's interpolated world position for this frame.
    fn on_position_updated(&mut self, _position: WorldPos) {}

    /// The move finished and the actor now occupies `point`.
    fn on_move_completed(&mut self, _point: GridPoint) {}
}

/// Shared observers: the caller keeps one handle, the scheduler the other.
impl<O: MoveObserver> MoveObserver for Rc<RefCell<O>> {
    fn on_position_updated(&mut self, position: WorldPos) {
        self.borrow_mut().on_position_updated(position);
    }

    fn on_move_completed(&mut self, point: GridPoint) {
        self.borrow_mut().on_move_completed(point);
    }
}

/// A [`MoveObserver`] that does nothing.  For moves nobody needs to watch.
pub struct NoopObserver;

impl MoveObserver for NoopObserver {}

/// A [`MoveObserver`] built from a pair of closures.  See [`observer_fn`].
pub struct FnObserver<U, C> {
    on_update:   U,
    on_complete: C,
}

impl<U, C> MoveObserver for FnObserver<U, C>
where
    U: FnMut(WorldPos),
    C: FnMut(GridPoint),
{
    fn on_position_updated(&mut self, position: WorldPos) {
        (self.on_update)(position);
    }

    fn on_move_completed(&mut self, point: GridPoint) {
        (self.on_complete)(point);
    }
}

/// Build an observer from an update closure and a completion closure.
pub fn observer_fn<U, C>(on_update: U, on_complete: C) -> FnObserver<U, C>
where
    U: FnMut(WorldPos),
    C: FnMut(GridPoint),
{
    FnObserver { on_update, on_complete }
}

//! Walled room layout.
//!
//! Walls are ordinary grid actors that never move: the scheduler has no
//! notion of terrain, so anything that blocks a cell must occupy it.

use grid_core::{ActorId, GridPoint};
use grid_motion::MoveScheduler;

/// First ID handed to wall segments; walkers use IDs below this.
pub const WALL_ID_BASE: u32 = 1_000_000;

/// Register a ring of walls enclosing the interior `0..width × 0..height`.
///
/// Returns the number of wall segments placed.
pub fn build_walls(scheduler: &mut MoveScheduler<ActorId>, width: i32, height: i32) -> u32 {
    let mut next = WALL_ID_BASE;
    let mut place = |scheduler: &mut MoveScheduler<ActorId>, point: GridPoint| {
        scheduler.register_actor(ActorId(next), point);
        next += 1;
    };

    for x in -1..=width {
        place(scheduler, GridPoint::new(x, -1));
        place(scheduler, GridPoint::new(x, height));
    }
    for y in 0..height {
        place(scheduler, GridPoint::new(-1, y));
        place(scheduler, GridPoint::new(width, y));
    }

    next - WALL_ID_BASE
}

/// Interior cells in row-major order.
pub fn interior(width: i32, height: i32) -> impl Iterator<Item = GridPoint> {
    (0..height).flat_map(move |y| (0..width).map(move |x| GridPoint::new(x, y)))
}

//! The caller-side entity that follows a grid actor.

use grid_core::{ActorId, GridPoint, WorldPos};
use grid_motion::MoveObserver;

/// What a renderer would hold for one walker: the last world position it
/// was told about and the cell it last settled on.
#[derive(Debug)]
pub struct Walker {
    pub id:       ActorId,
    pub cell:     GridPoint,
    pub position: WorldPos,
    pub steps:    u32,
    /// Position updates received, for the summary table.
    pub updates:  u64,
}

impl Walker {
    pub fn new(id: ActorId, cell: GridPoint, position: WorldPos) -> Self {
        Self { id, cell, position, steps: 0, updates: 0 }
    }
}

impl MoveObserver for Walker {
    fn on_position_updated(&mut self, position: WorldPos) {
        self.position = position;
        self.updates += 1;
    }

    fn on_move_completed(&mut self, point: GridPoint) {
        self.cell = point;
        self.steps += 1;
    }
}

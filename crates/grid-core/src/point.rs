//! Grid and world coordinates.
//!
//! The grid lies on the world's XZ plane: grid `x` maps to world `x`, grid
//! `y` maps to world `z`, and world `y` (height) is always zero.

use crate::Direction;

// ── GridPoint ─────────────────────────────────────────────────────────────────

/// An integer grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub const ORIGIN: GridPoint = GridPoint { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step in `direction`, or `None` for
    /// [`Direction::None`].
    #[inline]
    pub fn step(self, direction: Direction) -> Option<GridPoint> {
        let (dx, dy) = direction.offset()?;
        Some(GridPoint::new(self.x + dx, self.y + dy))
    }

    /// World position of this cell's centre for a grid of `cell_size` units.
    #[inline]
    pub fn to_world(self, cell_size: f32) -> WorldPos {
        WorldPos::new(self.x as f32 * cell_size, 0.0, self.y as f32 * cell_size)
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── WorldPos ──────────────────────────────────────────────────────────────────

/// A world-space position, single precision.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPos {
    pub const ZERO: WorldPos = WorldPos { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Linear interpolation from `a` to `b`.  `t` is not clamped, so values
    /// outside `[0, 1]` extrapolate along the segment.
    #[inline]
    pub fn lerp(a: WorldPos, b: WorldPos, t: f32) -> WorldPos {
        WorldPos::new(
            a.x + (b.x - a.x) * t,
            a.y + (b.y - a.y) * t,
            a.z + (b.z - a.z) * t,
        )
    }
}

impl std::fmt::Display for WorldPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

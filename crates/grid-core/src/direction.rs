//! Movement direction enum shared by the occupancy and motion crates.

/// One of the four cardinal grid directions, or `None`.
///
/// `None` is what an input layer produces when there is nothing to do.  It
/// has no offset, and the scheduler rejects it as an invalid direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    None,
    /// −x
    Left,
    /// +x
    Right,
    /// +y (world +z)
    Forward,
    /// −y (world −z)
    Backward,
}

impl Direction {
    /// The four valid directions, in a fixed order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    /// Unit `(dx, dy)` grid offset, or `None` for [`Direction::None`].
    #[inline]
    pub fn offset(self) -> Option<(i32, i32)> {
        match self {
            Direction::None     => None,
            Direction::Left     => Some((-1, 0)),
            Direction::Right    => Some((1, 0)),
            Direction::Forward  => Some((0, 1)),
            Direction::Backward => Some((0, -1)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::None     => "none",
            Direction::Left     => "left",
            Direction::Right    => "right",
            Direction::Forward  => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

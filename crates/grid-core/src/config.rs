//! Per-scheduler configuration.

use crate::{GridError, GridResult};

/// Fixed settings for one movement scheduler.
///
/// Typically loaded from a JSON/TOML file by the application crate (enable
/// the `serde` feature) and handed to the scheduler at construction.  Values
/// cannot change while moves are in flight.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    /// World units per grid step.  Default: 1.0.
    pub cell_size: f32,

    /// Seconds for one full move, immediate or batched.  Also the length of
    /// a batched cycle.  Default: 0.25.
    pub move_duration_secs: f64,

    /// Treat the destination of every admitted, uncommitted move as taken.
    ///
    /// Also lets a queued batched step start from the destination of the
    /// actor's active one.  When `false`, admission only consults committed
    /// occupancy, so two requests in the same frame can target the same cell
    /// and every move starts from the committed point.  Default: `true`.
    pub reserve_destinations: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            move_duration_secs: 0.25,
            reserve_destinations: true,
        }
    }
}

impl GridConfig {
    /// Check every field is usable.
    pub fn validate(&self) -> GridResult<()> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(GridError::Config(format!(
                "cell_size must be finite and positive, got {}",
                self.cell_size
            )));
        }
        if !(self.move_duration_secs.is_finite() && self.move_duration_secs > 0.0) {
            return Err(GridError::Config(format!(
                "move_duration_secs must be finite and positive, got {}",
                self.move_duration_secs
            )));
        }
        Ok(())
    }
}

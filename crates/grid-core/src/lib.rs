//! `grid-core` — foundational types for the grid movement workspace.
//!
//! This crate is a dependency of every other `grid-*` crate.  It has no
//! `grid-*` dependencies and only `thiserror` externally, plus optional
//! `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ActorId`, the `ActorKey` bound                       |
//! | [`point`]       | `GridPoint`, `WorldPos`                               |
//! | [`direction`]   | `Direction` and its unit offsets                      |
//! | [`time`]        | `FrameClock`, `FrameStep`, cycle arithmetic           |
//! | [`config`]      | `GridConfig`                                          |
//! | [`error`]       | `GridError`, `GridResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod point;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::GridConfig;
pub use direction::Direction;
pub use error::{GridError, GridResult};
pub use ids::{ActorId, ActorKey};
pub use point::{GridPoint, WorldPos};
pub use time::{FrameClock, FrameStep, cycle_index, cycle_start};

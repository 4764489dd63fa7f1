//! `grid-occupancy` — which actor stands on which grid point.
//!
//! # Crate layout
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`map`]     | `OccupancyMap<A>` — actor → point and point → actor |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                               |
//! |-----------|------------------------------------------------------|
//! | `fx-hash` | Both indexes use `FxHashMap` instead of `HashMap`.   |

pub mod map;


pub use map::OccupancyMap;

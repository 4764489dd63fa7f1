//! Actor identity.
//!
//! The movement engine never owns the things it moves.  Callers hand it an
//! opaque key and keep the real entity on their side.  Any type that is
//! `Copy + Ord + Hash + Debug` qualifies through the blanket [`ActorKey`] impl;
//! `Ord` lets the scheduler visit jobs in a deterministic order.
//!
//! [`ActorId`] is the ready-made key for callers that have nothing better.

use std::fmt;
use std::hash::Hash;

/// Bound satisfied by every type usable as an actor identity.
pub trait ActorKey: Copy + Ord + Hash + fmt::Debug {}

impl<T: Copy + Ord + Hash + fmt::Debug> ActorKey for T {}

/// A caller-assigned actor handle.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({})", self.0)
    }
}

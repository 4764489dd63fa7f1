//! The `OccupancyMap` — authoritative record of who stands where.

use grid_core::{ActorKey, GridPoint};
use log::warn;

#[cfg(feature = "fx-hash")]
type Index<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type Index<K, V> = std::collections::HashMap<K, V>;

/// Two synchronized indexes: actor → point and point → actor.
///
/// # Invariants
///
/// - `occupant_at(coordinate_of(a)) == Some(a)` for every registered actor.
/// - Each point maps to at most one actor, each actor to at most one point.
///
/// Every mutating method updates both indexes before returning.  No method
/// checks whether a move is *allowed*; that is the scheduler's job.  This map
/// only records the outcome.
pub struct OccupancyMap<A: ActorKey> {
    by_actor: Index<A, GridPoint>,
    by_point: Index<GridPoint, A>,
}

impl<A: ActorKey> Default for OccupancyMap<A> {
    fn default() -> Self {
        Self {
            by_actor: Default::default(),
            by_point: Default::default(),
        }
    }
}

impl<A: ActorKey> OccupancyMap<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `actor` to `point`, dropping any previous binding of `actor`.
    ///
    /// If `point` is already bound to a different actor, that actor loses its
    /// binding and is returned.  This keeps both indexes consistent when a
    /// caller commits onto a cell without checking it first; the displacement
    /// is logged as a warning.
    pub fn set(&mut self, actor: A, point: GridPoint) -> Option<A> {
        if let Some(old) = self.by_actor.remove(&actor) {
            if self.by_point.get(&old) == Some(&actor) {
                self.by_point.remove(&old);
            }
        }

        let displaced = match self.by_point.insert(point, actor) {
            Some(prev) if prev != actor => {
                self.by_actor.remove(&prev);
                warn!("occupancy: {actor:?} displaced {prev:?} from {point}");
                Some(prev)
            }
            _ => None,
        };
        self.by_actor.insert(actor, point);

        debug_assert!(self.is_consistent());
        displaced
    }

    /// Remove `actor`'s binding, returning the point it held.
    ///
    /// Removing an actor that holds no binding changes nothing and logs a
    /// warning: the caller's bookkeeping has drifted from the map's.
    pub fn remove(&mut self, actor: A) -> Option<GridPoint> {
        let Some(point) = self.by_actor.remove(&actor) else {
            warn!("occupancy: remove of {actor:?}, which holds no grid point");
            return None;
        };
        if self.by_point.get(&point) == Some(&actor) {
            self.by_point.remove(&point);
        }

        debug_assert!(self.is_consistent());
        Some(point)
    }

    /// The point `actor` currently holds.
    #[inline]
    pub fn coordinate_of(&self, actor: A) -> Option<GridPoint> {
        self.by_actor.get(&actor).copied()
    }

    /// The actor currently holding `point`.
    #[inline]
    pub fn occupant_at(&self, point: GridPoint) -> Option<A> {
        self.by_point.get(&point).copied()
    }

    #[inline]
    pub fn is_occupied(&self, point: GridPoint) -> bool {
        self.by_point.contains_key(&point)
    }

    #[inline]
    pub fn contains(&self, actor: A) -> bool {
        self.by_actor.contains_key(&actor)
    }

    pub fn len(&self) -> usize {
        self.by_actor.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_actor.is_empty()
    }

    /// All `(actor, point)` bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (A, GridPoint)> + '_ {
        self.by_actor.iter().map(|(&a, &p)| (a, p))
    }

    /// `true` when the two indexes mirror each other exactly.
    pub fn is_consistent(&self) -> bool {
        self.by_actor.len() == self.by_point.len()
            && self
                .by_actor
                .iter()
                .all(|(actor, point)| self.by_point.get(point) == Some(actor))
    }
}

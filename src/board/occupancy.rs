//! Bidirectional actor ↔ cell mapping.
//!
//! Two hash maps are kept in lockstep so both "where is this actor" and
//! "who stands here" are O(1). Every mutating method updates both sides
//! before returning, so callers never observe a half-applied move.

use rustc_hash::FxHashMap;

use crate::core::{ActorId, Cell};

/// Tracks which actor occupies which cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    /// actor -> cell
    locations: FxHashMap<ActorId, Cell>,

    /// cell -> actor
    occupants: FxHashMap<Cell, ActorId>,
}

impl Occupancy {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an actor on the board for the first time.
    ///
    /// Panics if the actor is already placed or the cell is taken.
    pub fn place(&mut self, actor: ActorId, cell: Cell) {
        if self.locations.contains_key(&actor) {
            panic!("{actor} is already placed");
        }
        if let Some(other) = self.occupants.get(&cell) {
            panic!("cell {cell} is already held by {other}");
        }

        self.locations.insert(actor, cell);
        self.occupants.insert(cell, actor);
    }

    /// Move a placed actor to `cell`.
    ///
    /// Returns the cell the actor left, or `None` if it was never placed
    /// (in which case nothing changes). Callers validate that `cell` is free.
    pub fn relocate(&mut self, actor: ActorId, cell: Cell) -> Option<Cell> {
        let old = self.locations.get(&actor).copied()?;

        if old == cell {
            return Some(old);
        }

        debug_assert!(!self.occupants.contains_key(&cell), "relocating onto {cell}");

        self.occupants.remove(&old);
        self.occupants.insert(cell, actor);
        self.locations.insert(actor, cell);

        Some(old)
    }

    /// Cell an actor stands on.
    #[must_use]
    pub fn location_of(&self, actor: ActorId) -> Option<Cell> {
        self.locations.get(&actor).copied()
    }

    /// Actor standing on a cell.
    #[must_use]
    pub fn occupant_of(&self, cell: Cell) -> Option<ActorId> {
        self.occupants.get(&cell).copied()
    }

    /// Check whether any actor stands on `cell`.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupants.contains_key(&cell)
    }

    /// Number of placed actors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Check if no actors are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterate over (actor, cell) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (ActorId, Cell)> + '_ {
        self.locations.iter().map(|(&a, &c)| (a, c))
    }

    /// Check that both directions agree.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.locations.len() == self.occupants.len()
            && self
                .locations
                .iter()
                .all(|(actor, cell)| self.occupants.get(cell) == Some(actor))
    }
}

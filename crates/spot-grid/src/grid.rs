//! The populated grid.

use std::iter;

use spot_core::Position;

use crate::Person;

/// A square grid holding one indigenous person and the aliens, the latter in
/// placement order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    pub name:       String,
    pub width:      u32,
    pub height:     u32,
    pub indigenous: Person,
    pub aliens:     Vec<Person>,
}

impl Grid {
    /// All people: aliens first, then the indigenous person.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.aliens.iter().chain(iter::once(&self.indigenous))
    }

    /// Mutable variant of [`people`](Self::people), same order.
    pub fn people_mut(&mut self) -> impl Iterator<Item = &mut Person> {
        self.aliens.iter_mut().chain(iter::once(&mut self.indigenous))
    }

    #[inline]
    pub fn person_count(&self) -> usize {
        self.aliens.len() + 1
    }

    /// `true` once every trajectory queue is empty.
    pub fn is_drained(&self) -> bool {
        self.people().all(|p| !p.has_moves())
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.within(self.width, self.height)
    }
}

//! Coordinate-keyed lookup into a map's item list.
//!
//! The index maps each occupied [`Coordinate`] to the position of its
//! [`Item`] in the owning item vector. It is derived data: it can always be
//! rebuilt from the items, and lookups through it must agree with a linear
//! scan of the items for an equal coordinate.

use std::collections::HashMap;

use crate::models::{Coordinate, Item};

/// Coordinate to item-position lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileIndex {
    positions: HashMap<Coordinate, usize>,
}

impl TileIndex {
    pub fn new() -> Self {
        Self { positions: HashMap::new() }
    }

    /// Build an index over `items`.
    ///
    /// Items are expected to have unique coordinates; if they don't, the
    /// first occurrence wins, matching what a front-to-back scan would find.
    pub fn build(items: &[Item]) -> Self {
        let mut positions = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            positions.entry(item.coordinate).or_insert(position);
        }
        Self { positions }
    }

    /// Position of the item at `coordinate`, if any.
    pub fn get(&self, coordinate: Coordinate) -> Option<usize> {
        self.positions.get(&coordinate).copied()
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.positions.contains_key(&coordinate)
    }

    /// Record `coordinate` at `position`, returning the previous position.
    pub fn insert(&mut self, coordinate: Coordinate, position: usize) -> Option<usize> {
        self.positions.insert(coordinate, position)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

//! Items: the layered assets placed on one tile.

use super::asset::{AssetId, Level};
use super::coord::Coordinate;

/// Level-indexed asset slots of a single tile.
///
/// Holds at most one asset per [`Level`]. Setting a slot that is already
/// occupied replaces the previous asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Layers([Option<AssetId>; Level::COUNT]);

impl Layers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, level: Level) -> Option<&AssetId> {
        self.0[level.index()].as_ref()
    }

    /// Assign `asset` to `level`, returning the asset it replaced.
    pub fn set(&mut self, level: Level, asset: AssetId) -> Option<AssetId> {
        self.0[level.index()].replace(asset)
    }

    /// Empty the `level` slot, returning the asset that was there.
    pub fn clear(&mut self, level: Level) -> Option<AssetId> {
        self.0[level.index()].take()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    /// Occupied slots in ascending level order.
    pub fn iter(&self) -> impl Iterator<Item = (Level, &AssetId)> + '_ {
        Level::ALL.into_iter().filter_map(move |level| self.get(level).map(|asset| (level, asset)))
    }

    /// The highest occupied slot, i.e. the one drawn on top.
    pub fn top(&self) -> Option<(Level, &AssetId)> {
        self.iter().last()
    }
}

/// Everything placed at one coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub coordinate: Coordinate,
    pub layers: Layers,
}

impl Item {
    /// An item with no layers yet.
    pub fn new(coordinate: Coordinate) -> Self {
        Self { coordinate, layers: Layers::new() }
    }

    /// Builder-style helper that fills one slot.
    pub fn with_layer(mut self, level: Level, asset: impl Into<AssetId>) -> Self {
        self.layers.set(level, asset.into());
        self
    }

    /// An item without layers is logically absent.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

//! The map document: grid size plus placed items.

use thiserror::Error;
use tracing::debug;

use super::asset::{AssetId, Level};
use super::coord::{Coordinate, GridSize};
use super::item::Item;
use crate::catalog::{AssetCatalog, CatalogError};
use crate::index::TileIndex;

/// Two items were supplied for the same coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate item at ({0})")]
pub struct DuplicateCoordinate(pub Coordinate);

/// Outcome of a successful placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub coordinate: Coordinate,
    pub level: Level,
    pub asset: AssetId,
    /// Asset previously occupying the same level, if any
    pub replaced: Option<AssetId>,
    /// Whether a new item had to be created for the coordinate
    pub created: bool,
}

/// Authoritative editor document.
///
/// Items are kept in insertion order and never share a coordinate. Items
/// outside `size` are tolerated until a resize prunes them, since placement
/// performs no bounds check.
#[derive(Debug, Clone)]
pub struct MapState {
    size: GridSize,
    items: Vec<Item>,
    index: TileIndex,
}

impl MapState {
    /// An empty map of the given size.
    pub fn new(size: GridSize) -> Self {
        Self { size, items: Vec::new(), index: TileIndex::new() }
    }

    /// Build a map from pre-existing items, rejecting duplicate coordinates.
    ///
    /// Empty items are dropped.
    pub fn with_items(
        size: GridSize,
        items: impl IntoIterator<Item = Item>,
    ) -> Result<Self, DuplicateCoordinate> {
        let mut map = Self::new(size);
        for item in items {
            if item.is_empty() {
                continue;
            }
            if map.index.contains(item.coordinate) {
                return Err(DuplicateCoordinate(item.coordinate));
            }
            map.index.insert(item.coordinate, map.items.len());
            map.items.push(item);
        }
        Ok(map)
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Replace the grid size without touching items.
    ///
    /// Use [`crate::resize::resize`] to also drop items outside the new bounds.
    pub fn set_size(&mut self, size: GridSize) {
        self.size = size;
    }

    /// All items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The tile index kept in step with `items`.
    pub fn index(&self) -> &TileIndex {
        &self.index
    }

    /// The item at `coordinate`, if one exists.
    pub fn item_at(&self, coordinate: Coordinate) -> Option<&Item> {
        self.index.get(coordinate).map(|position| &self.items[position])
    }

    /// Put `asset_id` on the tile at `coordinate`.
    ///
    /// The asset's level is resolved through `catalog` before anything is
    /// modified, so an unknown id leaves the map untouched. Any asset already
    /// at that level is replaced; the other level is left alone.
    pub fn place_asset(
        &mut self,
        catalog: &AssetCatalog,
        coordinate: Coordinate,
        asset_id: &str,
    ) -> Result<Placement, CatalogError> {
        let asset = catalog.lookup(asset_id)?;
        let level = asset.level;

        let (position, created) = match self.index.get(coordinate) {
            Some(position) => (position, false),
            None => {
                let position = self.items.len();
                self.items.push(Item::new(coordinate));
                self.index.insert(coordinate, position);
                (position, true)
            }
        };

        let replaced = self.items[position].layers.set(level, asset.id.clone());
        debug!(%coordinate, asset = %asset.id, level = level.number(), created, "placed asset");

        Ok(Placement { coordinate, level, asset: asset.id.clone(), replaced, created })
    }

    /// Empty one level slot at `coordinate`.
    ///
    /// Returns the removed asset. An item left without layers is dropped.
    pub fn clear_level(&mut self, coordinate: Coordinate, level: Level) -> Option<AssetId> {
        let position = self.index.get(coordinate)?;
        let removed = self.items[position].layers.clear(level);

        if self.items[position].is_empty() {
            self.items.remove(position);
            self.index = TileIndex::build(&self.items);
        }
        if let Some(asset) = &removed {
            debug!(%coordinate, %asset, level = level.number(), "cleared level");
        }
        removed
    }

    /// Drop every item outside `bounds`, returning their coordinates in
    /// insertion order. Remaining items are untouched.
    pub fn retain_within(&mut self, bounds: GridSize) -> Vec<Coordinate> {
        let mut removed = Vec::new();
        self.items.retain(|item| {
            let keep = bounds.contains(item.coordinate);
            if !keep {
                removed.push(item.coordinate);
            }
            keep
        });
        if !removed.is_empty() {
            self.index = TileIndex::build(&self.items);
        }
        removed
    }

    /// Coordinates of items that lie outside the current size.
    pub fn out_of_bounds(&self) -> Vec<Coordinate> {
        self.items
            .iter()
            .map(|item| item.coordinate)
            .filter(|&coordinate| !self.size.contains(coordinate))
            .collect()
    }

}

impl Default for MapState {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}

/// Observational equality: same size and the same set of items, regardless
/// of insertion order.
impl PartialEq for MapState {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.items.len() == other.items.len()
            && self.items.iter().all(|item| other.item_at(item.coordinate) == Some(item))
    }
}

impl Eq for MapState {}

//! Asset catalog: the registry of placeable assets.

use std::collections::HashMap;
use thiserror::Error;

use crate::models::{Asset, AssetId, Level};

/// Error when resolving an asset that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// Referenced asset id is not registered
    #[error("Asset '{0}' not found in catalog")]
    UnknownAsset(AssetId),
}

/// Registry of assets, enumerated in registration order.
///
/// Registration order is palette display order only; it has no meaning for
/// the map itself.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    assets: Vec<Asset>,
    by_id: HashMap<AssetId, usize>,
}

impl AssetCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self { assets: Vec::new(), by_id: HashMap::new() }
    }

    /// The stock catalog: two ground assets followed by two decorations.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(Asset::new("grass", Level::Ground, "Grass", "/assets/grass.png"));
        catalog.register(Asset::new("sand", Level::Ground, "Sand", "/assets/sand.png"));
        catalog.register(Asset::new("barrel", Level::Decoration, "Barrel", "/assets/barrel.png"));
        catalog.register(Asset::new("tree", Level::Decoration, "Tree", "/assets/tree.png"));
        catalog
    }

    /// Register an asset.
    ///
    /// If an asset with the same id already exists, it is replaced and
    /// keeps its position in the enumeration order.
    pub fn register(&mut self, asset: Asset) {
        match self.by_id.get(&asset.id) {
            Some(&position) => self.assets[position] = asset,
            None => {
                self.by_id.insert(asset.id.clone(), self.assets.len());
                self.assets.push(asset);
            }
        }
    }

    /// Look up an asset by id.
    pub fn lookup(&self, id: &str) -> Result<&Asset, CatalogError> {
        self.by_id
            .get(id)
            .map(|&position| &self.assets[position])
            .ok_or_else(|| CatalogError::UnknownAsset(AssetId::new(id)))
    }

    /// The level slot the asset occupies.
    pub fn level_of(&self, id: &str) -> Result<Level, CatalogError> {
        self.lookup(id).map(|asset| asset.level)
    }

    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.lookup(id).ok()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Assets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> + '_ {
        self.assets.iter()
    }
}

//! Pure view model for tile-addressable front ends.
//!
//! [`render_view`] turns a map and the active selection into rows of
//! tiles, each listing its layers bottom to top. Front ends draw from the
//! view model and never read state back out of what they drew.

use thiserror::Error;

use crate::catalog::AssetCatalog;
use crate::models::{AssetId, Coordinate, GridSize, Level, MapState};

/// Glyph shown for a tile with no layers.
pub const EMPTY_GLYPH: char = '.';

/// Largest grid, in tiles, that [`render_view`] lays out.
pub const MAX_VIEW_TILES: u64 = 1 << 20;

/// Error when a grid cannot be turned into a view model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ViewError {
    #[error("Grid {size} is too large to display ({} tiles, limit {limit})", .size.area())]
    TooLarge { size: GridSize, limit: u64 },
}

/// One layer of a rendered tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerView {
    pub level: Level,
    pub asset: AssetId,
    /// Catalog label, or the asset id if the catalog doesn't know it
    pub label: String,
    /// Catalog image reference; `None` for assets missing from the catalog
    pub image: Option<String>,
}

/// One rendered tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub coordinate: Coordinate,
    pub active: bool,
    /// Layers in ascending level order
    pub layers: Vec<LayerView>,
}

impl TileView {
    /// Single-character summary: the first letter of the top layer's label,
    /// lowercase for ground and uppercase for decoration.
    pub fn glyph(&self) -> char {
        let Some(top) = self.layers.last() else {
            return EMPTY_GLYPH;
        };
        glyph_for(&top.label, top.level)
    }
}

fn glyph_for(label: &str, level: Level) -> char {
    let first = label.chars().next().unwrap_or('?');
    match level {
        Level::Ground => first.to_ascii_lowercase(),
        Level::Decoration => first.to_ascii_uppercase(),
    }
}

/// The full grid as the view should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub width: u32,
    pub height: u32,
    /// Row-major tiles: `rows[y][x]`
    pub rows: Vec<Vec<TileView>>,
}

/// Build the view model for `map`.
///
/// Only in-bounds tiles are produced. Items outside the grid (possible
/// before a resize prunes them) are not shown. Grids larger than
/// [`MAX_VIEW_TILES`] are refused before anything is allocated.
pub fn render_view(
    map: &MapState,
    catalog: &AssetCatalog,
    selection: Option<Coordinate>,
) -> Result<ViewModel, ViewError> {
    let size = map.size();
    if size.area() > MAX_VIEW_TILES {
        return Err(ViewError::TooLarge { size, limit: MAX_VIEW_TILES });
    }
    let rows: Vec<Vec<TileView>> = (0..size.height)
        .map(|y| {
            (0..size.width)
                .map(|x| {
                    let coordinate = Coordinate::new(x, y);
                    let layers: Vec<LayerView> = map
                        .item_at(coordinate)
                        .map(|item| {
                            item.layers
                                .iter()
                                .map(|(level, asset)| layer_view(catalog, level, asset))
                                .collect()
                        })
                        .unwrap_or_default();
                    TileView { coordinate, active: selection == Some(coordinate), layers }
                })
                .collect()
        })
        .collect();

    Ok(ViewModel { width: size.width, height: size.height, rows })
}

fn layer_view(catalog: &AssetCatalog, level: Level, asset: &AssetId) -> LayerView {
    match catalog.get(asset.as_str()) {
        Some(known) => LayerView {
            level,
            asset: asset.clone(),
            label: known.label.clone(),
            image: Some(known.image.clone()),
        },
        None => LayerView { level, asset: asset.clone(), label: asset.to_string(), image: None },
    }
}

impl ViewModel {
    /// The tile at `coordinate`, if it is inside the grid.
    pub fn tile(&self, coordinate: Coordinate) -> Option<&TileView> {
        self.rows.get(coordinate.y as usize)?.get(coordinate.x as usize)
    }

    /// Plain-text grid, one line per row and three columns per tile.
    ///
    /// The active tile is bracketed: `[g]`.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            for tile in row {
                let glyph = tile.glyph();
                if tile.active {
                    out.push('[');
                    out.push(glyph);
                    out.push(']');
                } else {
                    out.push(' ');
                    out.push(glyph);
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}

/// Legend lines for every catalog asset, e.g. `g  grass (Grass, level 1)`.
pub fn legend(catalog: &AssetCatalog) -> Vec<String> {
    catalog
        .iter()
        .map(|asset| {
            let glyph = glyph_for(&asset.label, asset.level);
            format!("{}  {} ({}, level {})", glyph, asset.id, asset.label, asset.level)
        })
        .collect()
}

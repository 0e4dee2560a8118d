//! Grid resizing.
//!
//! Resizing replaces the map's dimensions and permanently discards every
//! item that falls outside them. Growing the grid never removes anything.

use tracing::info;

use crate::models::{Coordinate, GridSize, MapState};

/// What a resize changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeReport {
    /// Size before the resize
    pub previous: GridSize,
    /// Size after the resize
    pub size: GridSize,
    /// Coordinates of the items that were discarded, in insertion order
    pub removed: Vec<Coordinate>,
}

impl ResizeReport {
    /// Whether any content was lost.
    pub fn is_lossy(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Set the map to `width` x `height` and prune out-of-range items.
///
/// A zero dimension is valid and leaves a grid with no tiles, which removes
/// every item.
pub fn resize(map: &mut MapState, width: u32, height: u32) -> ResizeReport {
    let previous = map.size();
    let size = GridSize::new(width, height);

    map.set_size(size);
    let removed = map.retain_within(size);

    if removed.is_empty() {
        info!(from = %previous, to = %size, "resized map");
    } else {
        info!(from = %previous, to = %size, removed = removed.len(), "resized map, discarded items");
    }

    ResizeReport { previous, size, removed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AssetCatalog;
    use crate::models::Level;

    fn sample_map() -> MapState {
        let catalog = AssetCatalog::builtin();
        let mut map = MapState::default();
        map.place_asset(&catalog, Coordinate::new(10, 5), "grass").unwrap();
        map.place_asset(&catalog, Coordinate::new(3, 3), "sand").unwrap();
        map.place_asset(&catalog, Coordinate::new(3, 3), "tree").unwrap();
        map.place_asset(&catalog, Coordinate::new(4, 9), "barrel").unwrap();
        map
    }

    #[test]
    fn test_shrink_prunes() {
        let mut map = sample_map();
        let report = resize(&mut map, 5, 5);

        assert_eq!(report.previous, GridSize::new(15, 10));
        assert_eq!(report.size, GridSize::new(5, 5));
        assert_eq!(report.removed, vec![Coordinate::new(10, 5), Coordinate::new(4, 9)]);
        assert!(report.is_lossy());

        assert!(map.item_at(Coordinate::new(10, 5)).is_none());
        let survivor = map.item_at(Coordinate::new(3, 3)).unwrap();
        assert_eq!(survivor.layers.get(Level::Ground).map(|a| a.as_str()), Some("sand"));
        assert_eq!(survivor.layers.get(Level::Decoration).map(|a| a.as_str()), Some("tree"));
        assert!(map.out_of_bounds().is_empty());
    }

    #[test]
    fn test_grow_preserves() {
        let mut map = sample_map();
        let before = map.items().to_vec();
        let report = resize(&mut map, 40, 40);

        assert!(!report.is_lossy());
        assert_eq!(map.items(), before.as_slice());
        assert_eq!(map.size(), GridSize::new(40, 40));
    }

    #[test]
    fn test_resize_to_zero_empties_map() {
        let mut map = sample_map();
        let report = resize(&mut map, 0, 7);
        assert_eq!(report.removed.len(), 3);
        assert!(map.is_empty());
        assert_eq!(map.size(), GridSize::new(0, 7));

        let report = resize(&mut map, 0, 0);
        assert!(report.removed.is_empty());
    }

    #[test]
    fn test_boundary_is_exclusive() {
        let catalog = AssetCatalog::builtin();
        let mut map = MapState::default();
        map.place_asset(&catalog, Coordinate::new(4, 0), "grass").unwrap();
        map.place_asset(&catalog, Coordinate::new(5, 0), "grass").unwrap();

        let report = resize(&mut map, 5, 1);
        assert_eq!(report.removed, vec![Coordinate::new(5, 0)]);
        assert!(map.item_at(Coordinate::new(4, 0)).is_some());
    }
}

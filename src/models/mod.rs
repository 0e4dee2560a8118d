//! Data models for the map editor (assets, coordinates, items, map state)

mod asset;
mod coord;
mod item;
mod map;

// Re-export all public types
pub use asset::{Asset, AssetId, Level, LevelError};
pub use coord::{CoordParseError, Coordinate, GridSize, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use item::{Item, Layers};
pub use map::{DuplicateCoordinate, MapState, Placement};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_numbers() {
        assert_eq!(Level::Ground.number(), 1);
        assert_eq!(Level::Decoration.number(), 2);
        assert_eq!(Level::from_number(2), Ok(Level::Decoration));
        assert_eq!(Level::from_number(0), Err(LevelError(0)));
        assert_eq!(Level::from_number(3), Err(LevelError(3)));
    }

    #[test]
    fn test_level_serialization() {
        assert_eq!(serde_json::to_string(&Level::Ground).unwrap(), "1");
        let level: Level = serde_json::from_str("2").unwrap();
        assert_eq!(level, Level::Decoration);
        assert!(serde_json::from_str::<Level>("7").is_err());
    }

    #[test]
    fn test_asset_id_is_transparent() {
        let id = AssetId::new("grass");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"grass\"");
        assert_eq!(id.to_string(), "grass");
    }

    #[test]
    fn test_empty_default_map() {
        let map = MapState::default();
        assert_eq!(map.size(), GridSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));
        assert!(map.is_empty());
        assert!(map.index().is_empty());
    }
}

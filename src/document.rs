//! Portable JSON map document.
//!
//! The document is the only persisted artifact:
//!
//! ```json
//! {
//!   "size": { "width": 1, "height": 1 },
//!   "items": [
//!     { "x": 0, "y": 0, "layers": { "1": { "asset": "grass" }, "2": { "asset": "barrel" } } }
//!   ]
//! }
//! ```
//!
//! Layer keys are level numbers. Serialization is deterministic: items keep
//! the map's insertion order and layer keys are ascending.

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::models::{AssetId, Coordinate, DuplicateCoordinate, GridSize, Item, Level, MapState};

/// Error produced while reading or writing a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// Input failed structural validation
    #[error("Malformed map document: {0}")]
    Malformed(String),
    /// Encoding the document failed
    #[error("Failed to encode map document: {0}")]
    Encode(String),
}

/// Wire form of a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub size: GridSize,
    pub items: Vec<DocumentItem>,
}

/// Wire form of one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentItem {
    pub x: u32,
    pub y: u32,
    /// Level number (as a string key) to layer entry
    #[serde(deserialize_with = "unique_layer_keys")]
    pub layers: BTreeMap<String, LayerEntry>,
}

/// Read a `layers` object, refusing a key that appears twice.
fn unique_layer_keys<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, LayerEntry>, D::Error> {
    struct LayersVisitor;

    impl<'de> Visitor<'de> for LayersVisitor {
        type Value = BTreeMap<String, LayerEntry>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object of level keys to layer entries")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut layers = BTreeMap::new();
            while let Some((key, entry)) = access.next_entry::<String, LayerEntry>()? {
                if layers.contains_key(&key) {
                    return Err(de::Error::custom(format!("level '{}' given more than once", key)));
                }
                layers.insert(key, entry);
            }
            Ok(layers)
        }
    }

    deserializer.deserialize_map(LayersVisitor)
}

/// Asset assignment for one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerEntry {
    pub asset: AssetId,
}

impl Document {
    /// Structural copy of `map`. Empty items are omitted.
    pub fn from_map(map: &MapState) -> Self {
        let items = map
            .items()
            .iter()
            .filter(|item| !item.is_empty())
            .map(|item| DocumentItem {
                x: item.coordinate.x,
                y: item.coordinate.y,
                layers: item
                    .layers
                    .iter()
                    .map(|(level, asset)| {
                        (level.number().to_string(), LayerEntry { asset: asset.clone() })
                    })
                    .collect(),
            })
            .collect();

        Self { size: map.size(), items }
    }

    /// Convert into a map, validating level keys and coordinate uniqueness.
    pub fn into_map(self) -> Result<MapState, DocumentError> {
        let mut items = Vec::with_capacity(self.items.len());
        let mut occupied: Vec<(usize, Coordinate)> = Vec::new();

        for (position, entry) in self.items.into_iter().enumerate() {
            let coordinate = Coordinate::new(entry.x, entry.y);
            let mut item = Item::new(coordinate);

            for (key, layer) in entry.layers {
                let level = parse_level_key(&key).ok_or_else(|| {
                    DocumentError::Malformed(format!(
                        "items[{}] at ({}): unknown level '{}' (expected 1 or 2)",
                        position, coordinate, key
                    ))
                })?;
                if item.layers.set(level, layer.asset).is_some() {
                    return Err(DocumentError::Malformed(format!(
                        "items[{}] at ({}): level {} given more than once",
                        position, coordinate, level
                    )));
                }
            }
            if !item.is_empty() {
                occupied.push((position, coordinate));
            }
            items.push(item);
        }

        MapState::with_items(self.size, items).map_err(|DuplicateCoordinate(coordinate)| {
            let mut seen = occupied.iter().filter(|(_, c)| *c == coordinate).map(|(p, _)| *p);
            let first = seen.next().unwrap_or_default();
            let position = seen.next().unwrap_or(first);
            DocumentError::Malformed(format!(
                "items[{}] at ({}): duplicate item (first given at items[{}])",
                position, coordinate, first
            ))
        })
    }
}

fn parse_level_key(key: &str) -> Option<Level> {
    key.trim().parse::<u8>().ok().and_then(|n| Level::from_number(n).ok())
}

/// Produce the portable document for `map`.
pub fn serialize(map: &MapState) -> Document {
    Document::from_map(map)
}

/// Encode `map` as pretty-printed JSON.
pub fn to_json(map: &MapState) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(&serialize(map)).map_err(|e| DocumentError::Encode(e.to_string()))
}

/// Encode `map` as single-line JSON.
pub fn to_json_compact(map: &MapState) -> Result<String, DocumentError> {
    serde_json::to_string(&serialize(map)).map_err(|e| DocumentError::Encode(e.to_string()))
}

/// Parse and validate an untrusted document.
///
/// Any structural problem (invalid JSON, missing or mistyped `size`,
/// `width`, `height`, `items`, `x`, `y`, `layers` or `asset`, unknown level
/// keys, duplicate coordinates) yields [`DocumentError::Malformed`]. The
/// result is a fresh map; no existing state is touched.
pub fn deserialize(text: &str) -> Result<MapState, DocumentError> {
    let document: Document =
        serde_json::from_str(text).map_err(|e| DocumentError::Malformed(e.to_string()))?;
    document.into_map()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AssetCatalog;
    use crate::resize::resize;

    fn malformed(text: &str) -> String {
        match deserialize(text) {
            Err(DocumentError::Malformed(msg)) => msg,
            other => panic!("Expected Malformed, got: {:?}", other),
        }
    }

    #[test]
    fn test_concrete_scenario() {
        let catalog = AssetCatalog::builtin();
        let mut map = MapState::default();
        map.place_asset(&catalog, Coordinate::new(0, 0), "grass").unwrap();
        map.place_asset(&catalog, Coordinate::new(0, 0), "barrel").unwrap();
        resize(&mut map, 1, 1);

        let json = to_json_compact(&map).unwrap();
        assert_eq!(
            json,
            r#"{"size":{"width":1,"height":1},"items":[{"x":0,"y":0,"layers":{"1":{"asset":"grass"},"2":{"asset":"barrel"}}}]}"#
        );

        let restored = deserialize(&json).unwrap();
        assert_eq!(restored, map);
        assert_eq!(restored.size(), GridSize::new(1, 1));
        let item = restored.item_at(Coordinate::ORIGIN).unwrap();
        assert_eq!(item.layers.get(Level::Ground), Some(&AssetId::new("grass")));
        assert_eq!(item.layers.get(Level::Decoration), Some(&AssetId::new("barrel")));
    }

    #[test]
    fn test_roundtrip_after_edits() {
        let catalog = AssetCatalog::builtin();
        let mut map = MapState::default();
        map.place_asset(&catalog, Coordinate::new(14, 9), "tree").unwrap();
        map.place_asset(&catalog, Coordinate::new(2, 1), "sand").unwrap();
        map.place_asset(&catalog, Coordinate::new(2, 1), "grass").unwrap();
        map.place_asset(&catalog, Coordinate::new(7, 3), "barrel").unwrap();
        resize(&mut map, 10, 10);

        let restored = deserialize(&to_json(&map).unwrap()).unwrap();
        assert_eq!(restored, map);
        let order: Vec<Coordinate> = restored.items().iter().map(|i| i.coordinate).collect();
        assert_eq!(order, vec![Coordinate::new(2, 1), Coordinate::new(7, 3)]);
    }

    #[test]
    fn test_empty_map() {
        let json = to_json_compact(&MapState::default()).unwrap();
        assert_eq!(json, r#"{"size":{"width":15,"height":10},"items":[]}"#);
        assert_eq!(deserialize(&json).unwrap(), MapState::default());
    }

    #[test]
    fn test_rejects_missing_size() {
        let msg = malformed(r#"{"items":[]}"#);
        assert!(msg.contains("size"), "{}", msg);
    }

    #[test]
    fn test_rejects_non_integer_width() {
        malformed(r#"{"size":{"width":2.5,"height":3},"items":[]}"#);
        malformed(r#"{"size":{"width":"15","height":3},"items":[]}"#);
        malformed(r#"{"size":{"width":-1,"height":3},"items":[]}"#);
    }

    #[test]
    fn test_rejects_structural_mismatch() {
        malformed("not json");
        malformed("[]");
        malformed("null");
        malformed(r#"{"size":{"width":2,"height":2}}"#);
        malformed(r#"{"size":{"width":2,"height":2},"items":{}}"#);
        malformed(r#"{"size":{"width":2,"height":2},"items":[{"x":0,"layers":{}}]}"#);
        malformed(r#"{"size":{"width":2,"height":2},"items":[{"x":0,"y":0}]}"#);
        malformed(r#"{"size":{"width":2,"height":2},"items":[{"x":0,"y":0,"layers":{"1":"grass"}}]}"#);
        malformed(r#"{"size":{"width":2,"height":2},"items":[{"x":0,"y":0,"layers":{"1":{}}}]}"#);
    }

    #[test]
    fn test_rejects_unknown_level() {
        let msg = malformed(
            r#"{"size":{"width":2,"height":2},"items":[{"x":0,"y":0,"layers":{"3":{"asset":"grass"}}}]}"#,
        );
        assert!(msg.contains("unknown level '3'"), "{}", msg);
        malformed(
            r#"{"size":{"width":2,"height":2},"items":[{"x":0,"y":0,"layers":{"ground":{"asset":"grass"}}}]}"#,
        );
    }

    #[test]
    fn test_rejects_repeated_level() {
        let msg = malformed(
            r#"{"size":{"width":2,"height":2},"items":[{"x":0,"y":0,"layers":{"1":{"asset":"grass"},"01":{"asset":"sand"}}}]}"#,
        );
        assert!(msg.contains("more than once"), "{}", msg);
    }

    #[test]
    fn test_rejects_literal_repeated_level_key() {
        let msg = malformed(
            r#"{"size":{"width":2,"height":2},"items":[{"x":0,"y":0,"layers":{"1":{"asset":"grass"},"1":{"asset":"sand"}}}]}"#,
        );
        assert!(msg.contains("level '1' given more than once"), "{}", msg);
    }

    #[test]
    fn test_rejects_duplicate_coordinates() {
        let msg = malformed(
            r#"{"size":{"width":2,"height":2},"items":[
                {"x":1,"y":1,"layers":{"1":{"asset":"grass"}}},
                {"x":1,"y":1,"layers":{"2":{"asset":"tree"}}}
            ]}"#,
        );
        assert!(msg.contains("items[1] at (1,1): duplicate item (first given at items[0])"), "{}", msg);

        let msg = malformed(
            r#"{"size":{"width":3,"height":3},"items":[
                {"x":2,"y":0,"layers":{"1":{"asset":"grass"}}},
                {"x":0,"y":0,"layers":{}},
                {"x":0,"y":0,"layers":{"1":{"asset":"sand"}}},
                {"x":2,"y":0,"layers":{"2":{"asset":"tree"}}}
            ]}"#,
        );
        assert!(msg.contains("items[3] at (2,0)"), "{}", msg);
        assert!(msg.contains("first given at items[0]"), "{}", msg);
    }

    #[test]
    fn test_empty_layers_are_dropped() {
        let map = deserialize(
            r#"{"size":{"width":2,"height":2},"items":[{"x":0,"y":0,"layers":{}},{"x":1,"y":0,"layers":{"2":{"asset":"tree"}}}]}"#,
        )
        .unwrap();
        assert_eq!(map.len(), 1);
        assert!(map.item_at(Coordinate::new(0, 0)).is_none());
    }

    #[test]
    fn test_keeps_out_of_bounds_items() {
        let map = deserialize(
            r#"{"size":{"width":2,"height":2},"items":[{"x":9,"y":9,"layers":{"1":{"asset":"grass"}}}]}"#,
        )
        .unwrap();
        assert_eq!(map.out_of_bounds(), vec![Coordinate::new(9, 9)]);
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let map = deserialize(
            r#"{"name":"town","size":{"width":3,"height":3,"unit":"tile"},"items":[]}"#,
        )
        .unwrap();
        assert_eq!(map.size(), GridSize::new(3, 3));
    }

    #[test]
    fn test_zero_size_roundtrips() {
        let mut map = MapState::default();
        resize(&mut map, 0, 0);
        let restored = deserialize(&to_json(&map).unwrap()).unwrap();
        assert_eq!(restored.size(), GridSize::new(0, 0));
    }
}

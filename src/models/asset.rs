//! Asset and level types.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// Identifier of a placeable asset (e.g. `"grass"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl Borrow<str> for AssetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for AssetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Error when a level number does not name one of the fixed slots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Level {0} does not exist (expected 1 = ground or 2 = decoration)")]
pub struct LevelError(pub u8);

/// Vertical slot an asset occupies on a tile.
///
/// Levels are a closed set: every tile holds at most one ground asset and
/// at most one decoration asset. The discriminant is the level number used
/// in documents and configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    /// Ground cover (grass, sand, ...)
    Ground = 1,
    /// Decoration drawn above the ground (barrels, trees, ...)
    Decoration = 2,
}

impl Level {
    /// Number of level slots per tile.
    pub const COUNT: usize = 2;

    /// All levels in ascending (draw) order.
    pub const ALL: [Level; Level::COUNT] = [Level::Ground, Level::Decoration];

    /// Resolve a level from its number.
    pub fn from_number(number: u8) -> Result<Self, LevelError> {
        match number {
            1 => Ok(Level::Ground),
            2 => Ok(Level::Decoration),
            other => Err(LevelError(other)),
        }
    }

    /// The level number (1 or 2).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based slot index used by [`Layers`](super::Layers).
    pub(crate) fn index(self) -> usize {
        self as usize - 1
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Ground => "ground",
            Level::Decoration => "decoration",
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Level::from_number(number)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.number()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A placeable asset as registered in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub level: Level,
    /// Human-readable name shown in the palette
    pub label: String,
    /// Image reference used by the view (path or URL)
    pub image: String,
}

impl Asset {
    pub fn new(
        id: impl Into<AssetId>,
        level: Level,
        label: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self { id: id.into(), level, label: label.into(), image: image.into() }
    }
}

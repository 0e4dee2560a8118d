//! Grid coordinates and dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default grid width for a new map.
pub const DEFAULT_WIDTH: u32 = 15;

/// Default grid height for a new map.
pub const DEFAULT_HEIGHT: u32 = 10;

/// Error when parsing a coordinate (`x,y`) or size (`WxH`) string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CoordParseError {
    #[error("invalid coordinate '{0}' (expected x,y with non-negative integers)")]
    Coordinate(String),
    #[error("invalid size '{0}' (expected WIDTHxHEIGHT, e.g. 15x10)")]
    Size(String),
}

/// A grid cell address. (0, 0) is the top-left tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Coordinate {
    fn from((x, y): (u32, u32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Coordinate {
    type Err = CoordParseError;

    /// Parse `x,y`, tolerating whitespace around each component.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CoordParseError::Coordinate(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Self { x, y })
    }
}

/// Grid dimensions. Valid coordinates satisfy `x < width && y < height`.
///
/// Zero is accepted for either dimension and describes a grid with no
/// tiles at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
}

impl GridSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Whether `coordinate` lies inside the grid.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.width && coordinate.y < self.height
    }

    /// Number of tiles in the grid.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// All coordinates in row-major order (y, then x).
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Coordinate::new(x, y)))
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT }
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for GridSize {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CoordParseError::Size(s.to_string());
        let (w, h) = s.split_once(['x', 'X']).ok_or_else(err)?;
        let width = w.trim().parse().map_err(|_| err())?;
        let height = h.trim().parse().map_err(|_| err())?;
        Ok(Self { width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!("3,4".parse::<Coordinate>(), Ok(Coordinate::new(3, 4)));
        assert_eq!(" 10 , 0 ".parse::<Coordinate>(), Ok(Coordinate::new(10, 0)));
        assert!("3".parse::<Coordinate>().is_err());
        assert!("-1,2".parse::<Coordinate>().is_err());
        assert!("a,b".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_parse_size() {
        assert_eq!("15x10".parse::<GridSize>(), Ok(GridSize::new(15, 10)));
        assert_eq!("1X1".parse::<GridSize>(), Ok(GridSize::new(1, 1)));
        assert_eq!("0x4".parse::<GridSize>(), Ok(GridSize::new(0, 4)));
        assert!("15,10".parse::<GridSize>().is_err());
    }

    #[test]
    fn test_contains() {
        let size = GridSize::new(5, 5);
        assert!(size.contains(Coordinate::new(0, 0)));
        assert!(size.contains(Coordinate::new(4, 4)));
        assert!(!size.contains(Coordinate::new(5, 0)));
        assert!(!size.contains(Coordinate::new(10, 5)));
    }

    #[test]
    fn test_zero_size_contains_nothing() {
        let size = GridSize::new(0, 3);
        assert!(size.is_empty());
        assert!(!size.contains(Coordinate::ORIGIN));
        assert_eq!(size.coordinates().count(), 0);
    }

    #[test]
    fn test_coordinates_row_major() {
        let coords: Vec<_> = GridSize::new(2, 2).coordinates().collect();
        assert_eq!(
            coords,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(1, 0),
                Coordinate::new(0, 1),
                Coordinate::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_default_size() {
        assert_eq!(GridSize::default(), GridSize::new(15, 10));
    }
}

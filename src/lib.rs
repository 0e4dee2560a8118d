//! Tilepaint - layered grid map editor core
//!
//! This library provides:
//! - An asset catalog assigning each asset to a fixed level (ground, decoration)
//! - The map state: grid size plus layered items, unique per coordinate
//! - A tile index for coordinate lookups
//! - Resizing that prunes items outside the new bounds
//! - A portable JSON document with strict validation on import
//! - An editor session tying map, active tile, import and export together
//! - A pure view model for tile-addressable front ends
//!
//! # Example
//!
//! ```
//! use tilepaint::editor::EditorSession;
//! use tilepaint::models::Coordinate;
//!
//! let mut session = EditorSession::default();
//! session.place(Coordinate::new(0, 0), "grass").unwrap();
//! session.place(Coordinate::new(0, 0), "barrel").unwrap();
//! session.resize(1, 1);
//!
//! let json = session.export().unwrap();
//! let mut copy = EditorSession::default();
//! copy.import(&json).unwrap();
//! assert_eq!(copy.map(), session.map());
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod document;
pub mod editor;
pub mod index;
pub mod logging;
pub mod models;
pub mod resize;
pub mod view;

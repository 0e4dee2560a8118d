//! Editor session: the map, the active tile and the import/export flow.
//!
//! All editing goes through an [`EditorSession`], which owns the asset
//! catalog, the [`MapState`] and the active selection. A session has no
//! global state, so several sessions (or tests) can run side by side.

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::{AssetCatalog, CatalogError};
use crate::config::TilepaintConfig;
use crate::document::{self, DocumentError};
use crate::models::{AssetId, Coordinate, GridSize, Level, MapState, Placement};
use crate::resize::{resize, ResizeReport};
use crate::view::{render_view, ViewError, ViewModel};

/// Default name offered for exported documents.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "map-config.json";

/// Ticket serials are unique across every session in the process.
static NEXT_IMPORT_SERIAL: AtomicU64 = AtomicU64::new(1);

/// Error type for editor operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EditorError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    /// Placement was requested with no active tile
    #[error("No tile selected: select a tile first")]
    NoSelection,
    /// A second import was started before the first one finished
    #[error("An import is already in progress")]
    ImportInProgress,
    /// The ticket does not belong to the pending import
    #[error("Import ticket is stale or was never issued by this session")]
    StaleImport,
}

/// Proof that an import was started; consumed when it completes.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "an import ticket must be finished or cancelled"]
pub struct ImportTicket {
    serial: u64,
}

/// A single editing session.
#[derive(Debug, Clone)]
pub struct EditorSession {
    catalog: AssetCatalog,
    map: MapState,
    selection: Option<Coordinate>,
    pending_import: Option<u64>,
    export_file_name: String,
}

impl EditorSession {
    /// Start with an empty map of `size` and the first tile selected.
    pub fn new(catalog: AssetCatalog, size: GridSize) -> Self {
        Self {
            catalog,
            map: MapState::new(size),
            selection: first_tile(size),
            pending_import: None,
            export_file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }

    /// Start a session from configuration (catalog, default size, export name).
    pub fn with_config(config: &TilepaintConfig) -> Self {
        let mut session = Self::new(config.catalog(), config.default_size());
        session.export_file_name = config.export.file_name.clone();
        session
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    pub fn map(&self) -> &MapState {
        &self.map
    }

    /// The tile targeted by the next palette action.
    pub fn selection(&self) -> Option<Coordinate> {
        self.selection
    }

    pub fn select(&mut self, coordinate: Coordinate) {
        self.selection = Some(coordinate);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Place `asset_id` on the active tile. The selection is kept.
    pub fn apply_to_selection(&mut self, asset_id: &str) -> Result<Placement, EditorError> {
        let coordinate = self.selection.ok_or(EditorError::NoSelection)?;
        self.place(coordinate, asset_id)
    }

    /// Place `asset_id` at `coordinate`.
    pub fn place(&mut self, coordinate: Coordinate, asset_id: &str) -> Result<Placement, EditorError> {
        Ok(self.map.place_asset(&self.catalog, coordinate, asset_id)?)
    }

    /// Empty one level at `coordinate`, returning what was removed.
    pub fn erase(&mut self, coordinate: Coordinate, level: Level) -> Option<AssetId> {
        self.map.clear_level(coordinate, level)
    }

    /// Resize the grid, discarding out-of-range items, and re-select the
    /// first tile.
    pub fn resize(&mut self, width: u32, height: u32) -> ResizeReport {
        let report = resize(&mut self.map, width, height);
        self.selection = first_tile(report.size);
        report
    }

    /// Begin an import. Only one import may be outstanding at a time.
    pub fn begin_import(&mut self) -> Result<ImportTicket, EditorError> {
        if self.pending_import.is_some() {
            return Err(EditorError::ImportInProgress);
        }
        let serial = NEXT_IMPORT_SERIAL.fetch_add(1, Ordering::Relaxed);
        self.pending_import = Some(serial);
        Ok(ImportTicket { serial })
    }

    /// Abandon an import (e.g. the file could not be read).
    pub fn cancel_import(&mut self, ticket: ImportTicket) {
        if self.pending_import == Some(ticket.serial) {
            self.pending_import = None;
        }
    }

    /// Complete an import with the document text.
    ///
    /// The document is fully validated, including that every asset it
    /// references is in the catalog, before the live map is replaced. On
    /// any error the current map stays in force. The selection is cleared
    /// on success.
    pub fn finish_import(&mut self, ticket: ImportTicket, text: &str) -> Result<(), EditorError> {
        if self.pending_import != Some(ticket.serial) {
            return Err(EditorError::StaleImport);
        }
        self.pending_import = None;

        let map = match self.validate_document(text) {
            Ok(map) => map,
            Err(e) => {
                warn!(error = %e, "rejected map import");
                return Err(e);
            }
        };

        info!(size = %map.size(), items = map.len(), "imported map");
        self.map = map;
        self.selection = None;
        Ok(())
    }

    /// Import in one step.
    pub fn import(&mut self, text: &str) -> Result<(), EditorError> {
        let ticket = self.begin_import()?;
        self.finish_import(ticket, text)
    }

    pub fn import_pending(&self) -> bool {
        self.pending_import.is_some()
    }

    fn validate_document(&self, text: &str) -> Result<MapState, EditorError> {
        let map = document::deserialize(text)?;
        for item in map.items() {
            for (level, asset) in item.layers.iter() {
                match self.catalog.lookup(asset.as_str()) {
                    Ok(known) if known.level == level => {}
                    Ok(known) => {
                        return Err(DocumentError::Malformed(format!(
                            "asset '{}' at ({}) is on level {} but belongs to level {}",
                            asset, item.coordinate, level, known.level
                        ))
                        .into());
                    }
                    Err(_) => {
                        return Err(DocumentError::Malformed(format!(
                            "unknown asset '{}' at ({})",
                            asset, item.coordinate
                        ))
                        .into());
                    }
                }
            }
        }
        Ok(map)
    }

    /// Serialize the current map to its JSON document.
    pub fn export(&self) -> Result<String, EditorError> {
        let json = document::to_json(&self.map)?;
        info!(size = %self.map.size(), items = self.map.len(), "exported map");
        Ok(json)
    }

    /// Name offered for the exported document.
    pub fn export_file_name(&self) -> &str {
        &self.export_file_name
    }

    /// View model for the current map and selection.
    pub fn view(&self) -> Result<ViewModel, ViewError> {
        render_view(&self.map, &self.catalog, self.selection)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(AssetCatalog::builtin(), GridSize::default())
    }
}

fn first_tile(size: GridSize) -> Option<Coordinate> {
    if size.is_empty() {
        None
    } else {
        Some(Coordinate::ORIGIN)
    }
}

//! Asset catalog mapping asset ids to their metadata and level slot.

mod assets;

pub use assets::{AssetCatalog, CatalogError};

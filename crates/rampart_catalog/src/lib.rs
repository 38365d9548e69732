//! # RAMPART Card Catalog
//!
//! Loads the authored card list and exports each card's art and record.
//!
//! ## Pipeline
//!
//! 1. `Catalog::load` parses and validates `cards.toml`
//! 2. `export_catalog` fans the cards out over a worker pool
//! 3. Each worker derives visuals, renders the SVG and writes both files
//! 4. The sorted `index.json` is written last
//!
//! Generation itself lives in `rampart_procedural`; this crate only moves
//! records and bytes.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod card;
pub mod catalog;
pub mod error;
pub mod export;
pub mod index;

pub use card::{CardAsset, CardRecord};
pub use catalog::{Catalog, MAX_ID_LEN};
pub use error::{CatalogError, CatalogResult};
pub use export::{
    export_card, export_catalog, AssetLayout, ExportFailure, ExportOptions, ExportReport,
};
pub use index::{CatalogIndex, IndexEntry, FORMAT_VERSION};

//! # RAMPART Procedural Card Art
//!
//! Deterministic visual identity for every card in the catalog.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same `(id, damage type, rarity)` always produces the same art
//! 2. **Pure**: No I/O, no global state, safe to call from any thread
//! 3. **Configurable**: Palette and rarity tables are passed in, never hidden globals
//! 4. **Byte-stable**: Re-rendering a parameter record yields identical markup
//!
//! ## Core Components
//!
//! - `SeededSequence`: String-keyed arithmetic stream
//! - `VisualParameterGenerator`: Derives the parameter record for one card
//! - `build_outline`: Base silhouette paths
//! - `build_barrels`: Weapon barrel primitives
//! - `ImageComposer`: Glow, base and barrel layers as one SVG document
//!
//! ## Example
//!
//! ```rust,ignore
//! use rampart_procedural::{generate_visual_parameters, render_image, DamageType, Rarity};
//!
//! let params = generate_visual_parameters("c01", DamageType::Kinetic, Rarity::Common);
//! let svg = render_image(&params);
//! assert!(svg.starts_with("<svg"));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod barrels;
pub mod composer;
pub mod config;
pub mod error;
mod format;
pub mod params;
pub mod sequence;
pub mod shapes;

pub use barrels::{build_barrels, resolve_barrel_tag, Barrel, BarrelPrimitive, BarrelShape};
pub use composer::{render_image, ImageComposer};
pub use config::{DamageType, Palette, Rarity, RarityProfile, RarityTable, VisualConfig};
pub use error::{VisualError, VisualResult};
pub use params::{
    generate_visual_parameters, CardIdentity, Draw, VisualParameterGenerator, VisualParameters,
};
pub use sequence::SeededSequence;
pub use shapes::{build_outline, BaseShape, LineStyle, Outline, PathCommand};

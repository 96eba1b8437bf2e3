//! Data model: grid cells, the bead grid, and the palette catalog.

pub mod catalog;
pub mod cell;
pub mod grid;

pub use catalog::{PaletteCatalog, PaletteDefinition};
pub use cell::{Cell, TRANSPARENT_HEX, TRANSPARENT_KEY};
pub use grid::BeadGrid;

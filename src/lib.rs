//! beadloom: bead pattern core
//!
//! Everything needed to turn a raster image into an editable grid of
//! bead colors: palette catalogs, pattern generation (pixelation or
//! dithering via the [`bead_quant`] crate), pixel-level grid editing, and
//! greedy palette reduction. The surrounding application -- UI shell,
//! file persistence, export rendering -- consumes these functions and
//! owns undo history; this crate holds the algorithms.
//!
//! # Flow
//!
//! ```text
//! catalog JSON ──> PaletteCatalog ──> Arc<Palette>
//!                                          │
//! RGBA buffer ──> PatternGenerator ────────┴──> BeadGrid
//!                                                  │
//!                     flood_fill / paint_* / ... ──┤  (new grid per edit,
//!                     plan_reduction + apply_plan ─┤   rows shared)
//!                                                  │
//!                     color_stats ──> ColorStats ──> export layer
//! ```
//!
//! # Editing model
//!
//! Grids are immutable values with reference-counted rows: every edit
//! operation returns a *new* [`BeadGrid`] sharing all untouched rows with
//! its input (or a "no change" sentinel for no-op edits). The caller
//! adopts the result by swapping its reference -- or discards it -- which
//! keeps caller-side undo snapshots at one `Arc` clone per row.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use bead_quant::{RgbaView, SampleMode};
//! use beadloom::{color_stats, flood_fill, Cell, PaletteCatalog, PatternGenerator};
//!
//! let catalog = PaletteCatalog::from_json(
//!     r##"[
//!         {"hex": "#000000", "keys": {"hama": "H18"}},
//!         {"hex": "#FFFFFF", "keys": {"hama": "H01"}}
//!     ]"##,
//! )
//! .unwrap();
//!
//! let mut generator = PatternGenerator::new(catalog.palette_for("hama"));
//! let pixels = [40u8; 6 * 6 * 4]; // dark grey, fully opaque
//! let source = RgbaView::new(&pixels, 6, 6);
//! let grid = generator.pixelate(&source, 3, 3, SampleMode::Average, None);
//!
//! // Paint the whole (uniform) grid white with one flood fill.
//! let grid = flood_fill(&grid, 0, 0, &Cell::bead("H01", "#FFFFFF"));
//! assert_eq!(color_stats(&grid).usage[0].key, "H01");
//! ```

pub mod editing;
pub mod error;
pub mod generate;
pub mod models;
pub mod reduce;

pub use editing::{
    circle_cells, color_stats, flood_erase, flood_fill, line_cells, paint_cell, paint_cells,
    rect_cells, replace_color, ColorStats, ColorUsage,
};
pub use error::CatalogError;
pub use generate::PatternGenerator;
pub use models::{BeadGrid, Cell, PaletteCatalog, PaletteDefinition, TRANSPARENT_HEX, TRANSPARENT_KEY};
pub use reduce::{apply_plan, plan_reduction, preview_reduction, MergePlan, MergeStep};

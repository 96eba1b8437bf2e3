//! Grid edit operations.
//!
//! Every operation here is a pure function from `(grid, parameters)` to a
//! new grid (or a "no change" sentinel): nothing carries state between
//! calls, input grids are never mutated, and untouched rows pass through
//! by reference. Out-of-bounds coordinates are dropped per cell, never
//! escalated -- a shape half off the grid paints its in-bounds half.

pub mod fill;
pub mod paint;
pub mod shapes;
pub mod stats;

pub use fill::{flood_erase, flood_fill};
pub use paint::{paint_cell, paint_cells, replace_color};
pub use shapes::{circle_cells, line_cells, rect_cells};
pub use stats::{color_stats, ColorStats, ColorUsage};

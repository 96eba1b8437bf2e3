//! Bead palettes and nearest-color matching.
//!
//! A [`Palette`] is an ordered list of bead colors, each carrying the
//! display key printed on the bead manufacturer's chart, the canonical hex
//! form, and the parsed RGB triple. Matching an arbitrary color against a
//! palette has two paths:
//!
//! - the exact path, [`Palette::nearest()`] -- a linear redmean scan;
//! - the fast path, [`NearestLut`] -- a precomputed 32,768-bucket table
//!   giving O(1) lookups after a one-time build.

mod error;
mod lut;
#[allow(clippy::module_inception)]
mod palette;

pub use error::ParseColorError;
pub use lut::NearestLut;
pub use palette::{Palette, PaletteEntry};

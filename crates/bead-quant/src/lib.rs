//! bead-quant: palette quantization and dithering for bead pattern grids
//!
//! This crate maps arbitrary RGB colors onto small, fixed bead palettes --
//! the per-pixel core behind turning a photo into a fuse-bead pattern.
//! It knows nothing about grids, editing, or files; it consumes raw RGBA
//! buffers and palettes and produces palette-entry references.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use bead_quant::{
//!     pixelate, NearestLut, Palette, PaletteEntry, Rgb, RgbaView, SampleMode,
//! };
//!
//! let palette = Arc::new(Palette::new(vec![
//!     PaletteEntry::new("K", Rgb::new(0, 0, 0)),
//!     PaletteEntry::new("W", Rgb::new(255, 255, 255)),
//! ]));
//!
//! // 2x2 opaque white source down to a single cell
//! let data = [255u8; 16];
//! let source = RgbaView::new(&data, 2, 2);
//!
//! let mut lut = NearestLut::new();
//! let fallback = PaletteEntry::new("W", Rgb::new(255, 255, 255));
//! let cells = pixelate(
//!     &source, 1, 1, &palette, &mut lut, SampleMode::Average, &fallback,
//! );
//! assert_eq!(cells[0].unwrap().key, "W");
//! ```
//!
//! # The Redmean Metric
//!
//! Every "nearest color" decision in this crate uses the redmean weighted
//! distance (see [`color::distance`]): a red-level-dependent weighting of
//! the squared channel differences that approximates perceived color
//! difference without leaving 8-bit sRGB. It is deliberately the *only*
//! perceptual device here -- bead palettes are small and hand-curated, and
//! a full color-space conversion buys nothing visible at that
//! granularity.
//!
//! # Exact and Fast Matching
//!
//! [`Palette::nearest()`] is the exact path: a linear scan over the
//! palette, short-circuiting on a perfect match. [`NearestLut`] is the
//! fast path: a 32,768-bucket table (5 bits per channel) precomputing the
//! exact answer at every bucket midpoint, giving O(1) lookups for the
//! per-cell inner loops. The table is cached by palette identity and
//! rebuilt -- fresh table, then swap -- whenever it is used with a
//! different palette instance. Near bucket boundaries the fast path may
//! differ from the exact path; that approximation is documented and
//! accepted.
//!
//! # Generation Strategies
//!
//! - [`pixelate()`](sampler::pixelate) -- direct mapping: downsample to
//!   the grid (dominant or average per cell), quantize each cell
//!   independently.
//! - [`DitherAlgorithm`](dither::DitherAlgorithm) -- dithered mapping:
//!   Floyd-Steinberg error diffusion or ordered Bayer thresholding over a
//!   grid-sized raster, for gradient-like results from small palettes.

pub mod color;
pub mod dither;
pub mod palette;
pub mod raster;
pub mod sampler;


pub use color::Rgb;
pub use dither::{Dither, DitherAlgorithm, FloydSteinberg, OrderedBayer};
pub use palette::{NearestLut, Palette, PaletteEntry, ParseColorError};
pub use raster::{RgbaView, ALPHA_OPAQUE_MIN};
pub use sampler::{pixelate, SampleMode};

//! Dithering algorithms for bead pattern generation.
//!
//! Dithering trades exact per-cell color fidelity for smoother-looking
//! gradients: instead of mapping each cell independently to its nearest
//! palette color, the quantization decision is perturbed so that small
//! palettes can fake intermediate tones across neighboring beads.
//!
//! Two strategies are provided:
//!
//! - [`FloydSteinberg`] -- error diffusion: the rounding error of each
//!   quantized cell is carried forward to its unprocessed neighbors.
//!   Strictly sequential within an image (later cells depend on earlier
//!   quantization results).
//! - [`OrderedBayer`] -- a fixed 4x4 threshold pattern added to each cell
//!   before quantizing. No state between cells.
//!
//! Both consume a raster already sized to the target grid (the import
//! layer resizes beforehand), skip transparent cells entirely, and are
//! fully deterministic. The output is a row-major grid of palette-entry
//! references; converting those into bead cells (and tagging transparent
//! cells) happens one layer up, in the pattern crate.

mod bayer;
mod floyd_steinberg;

pub use bayer::OrderedBayer;
pub use floyd_steinberg::FloydSteinberg;

use std::sync::Arc;

use crate::palette::{NearestLut, Palette, PaletteEntry};
use crate::raster::RgbaView;

/// Trait for dithering algorithms.
///
/// Implementors quantize a grid-sized raster against a palette, returning
/// one palette-entry reference per cell (`None` for transparent cells),
/// row-major. `strength` in `[0, 1]` scales how strongly the algorithm
/// perturbs the quantization; at `0.0` both algorithms degenerate to
/// plain nearest-color mapping.
pub trait Dither {
    /// Dither a raster to palette-entry references.
    ///
    /// Builds (or reuses) the nearest-color lookup table for `palette`
    /// before the main pass -- quantization runs once per opaque cell.
    fn dither<'p>(
        &self,
        source: &RgbaView<'_>,
        palette: &'p Arc<Palette>,
        lut: &mut NearestLut,
        strength: f32,
    ) -> Vec<Option<&'p PaletteEntry>>;
}

/// Dither algorithm selection for the pattern-generation facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherAlgorithm {
    /// Floyd-Steinberg error diffusion (default).
    #[default]
    FloydSteinberg,
    /// Ordered dithering with a fixed 4x4 Bayer threshold matrix.
    Ordered,
}

impl DitherAlgorithm {
    /// Run the selected algorithm.
    pub fn run<'p>(
        self,
        source: &RgbaView<'_>,
        palette: &'p Arc<Palette>,
        lut: &mut NearestLut,
        strength: f32,
    ) -> Vec<Option<&'p PaletteEntry>> {
        match self {
            DitherAlgorithm::FloydSteinberg => {
                FloydSteinberg.dither(source, palette, lut, strength)
            }
            DitherAlgorithm::Ordered => OrderedBayer.dither(source, palette, lut, strength),
        }
    }
}

/// Clamp a perturbed channel value back into the representable range and
/// round to the nearest integer channel value.
#[inline]
pub(crate) fn clamp_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

//! Ordered (Bayer) dithering.
//!
//! A fixed 4x4 threshold matrix is tiled over the image and added to each
//! channel before quantization. Unlike error diffusion there is no state
//! between cells, so the result has a regular crosshatch texture -- and
//! every cell is independent (the pass is data-parallel by construction,
//! though it runs serially here).

use std::sync::Arc;

use crate::color::Rgb;
use crate::palette::{NearestLut, Palette, PaletteEntry};
use crate::raster::RgbaView;

use super::{clamp_channel, Dither};

/// The standard 4x4 Bayer index matrix (values 0..=15).
const BAYER_4X4: [[u8; 4]; 4] = [[0, 8, 2, 10], [12, 4, 14, 6], [3, 11, 1, 9], [15, 7, 13, 5]];

/// Maximum perturbation amplitude at full strength, in channel units.
const AMPLITUDE: f32 = 64.0;

/// Ordered dithering with the fixed 4x4 Bayer matrix.
///
/// Each cell's channels are offset by
/// `(bayer[y % 4][x % 4] / 16 - 0.5) * strength * 64` -- the matrix value
/// normalized to a symmetric range around zero, scaled to at most ±32 of
/// a channel's 0..255 range at full strength -- then clamped and
/// quantized through the lookup table. Transparent cells are skipped.
pub struct OrderedBayer;

impl Dither for OrderedBayer {
    fn dither<'p>(
        &self,
        source: &RgbaView<'_>,
        palette: &'p Arc<Palette>,
        lut: &mut NearestLut,
        strength: f32,
    ) -> Vec<Option<&'p PaletteEntry>> {
        lut.ensure_built(palette);

        let width = source.width();
        let height = source.height();
        let mut cells = Vec::with_capacity(width * height);

        for y in 0..height {
            for x in 0..width {
                let Some(rgb) = source.opaque_rgb(x, y) else {
                    cells.push(None);
                    continue;
                };

                let offset = threshold(x, y) * strength * AMPLITUDE;
                let perturbed = Rgb::new(
                    clamp_channel(rgb.r as f32 + offset),
                    clamp_channel(rgb.g as f32 + offset),
                    clamp_channel(rgb.b as f32 + offset),
                );
                cells.push(Some(lut.nearest_entry(palette, perturbed)));
            }
        }

        cells
    }
}

/// Normalized threshold for a cell position: the tiled matrix value
/// mapped to `-0.5..=0.4375`.
#[inline]
fn threshold(x: usize, y: usize) -> f32 {
    BAYER_4X4[y % 4][x % 4] as f32 / 16.0 - 0.5
}

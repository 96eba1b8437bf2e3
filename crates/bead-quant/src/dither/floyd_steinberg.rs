//! Floyd-Steinberg error diffusion.
//!
//! The classic error diffusion algorithm: each cell's quantization error
//! is distributed to 4 unprocessed neighbors so that, over a region, the
//! average output color approaches the average input color.
//!
//! ```text
//!        X   7
//!    3   5   1      (out of 16)
//! ```

use std::sync::Arc;

use crate::color::Rgb;
use crate::palette::{NearestLut, Palette, PaletteEntry};
use crate::raster::RgbaView;

use super::{clamp_channel, Dither};

/// Floyd-Steinberg error diffusion dithering.
///
/// Processes cells in row-major order. For each opaque cell the
/// accumulated error is added to the raw channel values, the result is
/// quantized through the lookup table, and the remaining error -- scaled
/// by `strength` -- is diffused 7/16 right, 3/16 below-left, 5/16 below,
/// 1/16 below-right.
///
/// Transparent cells are skipped entirely: they neither receive nor
/// propagate error, so dithering never bleeds across the silhouette of a
/// cut-out subject.
///
/// # Memory
///
/// The kernel only ever reaches the current and the next row, so the
/// error state lives in two single-row buffers that swap at each row end
/// -- O(width) auxiliary memory regardless of image height.
pub struct FloydSteinberg;

/// Sliding pair of error rows for the 2-row Floyd-Steinberg kernel.
///
/// `current` holds error already diffused into the row being processed;
/// `next` collects error for the row below. [`advance_row()`] swaps the
/// two and clears the new collection row.
///
/// [`advance_row()`]: ErrorRows::advance_row
#[derive(Debug)]
struct ErrorRows {
    current: Vec<[f32; 3]>,
    next: Vec<[f32; 3]>,
    width: usize,
}

impl ErrorRows {
    fn new(width: usize) -> Self {
        Self {
            current: vec![[0.0; 3]; width],
            next: vec![[0.0; 3]; width],
            width,
        }
    }

    /// Accumulated error for a cell in the current row.
    #[inline]
    fn accumulated(&self, x: usize) -> [f32; 3] {
        self.current[x]
    }

    /// Add error to a cell in the current row. Silently ignores
    /// out-of-bounds columns.
    #[inline]
    fn add_current(&mut self, x: i64, error: [f32; 3], weight: f32) {
        if x >= 0 && (x as usize) < self.width {
            let slot = &mut self.current[x as usize];
            for c in 0..3 {
                slot[c] += error[c] * weight;
            }
        }
    }

    /// Add error to a cell in the next row. Silently ignores
    /// out-of-bounds columns.
    #[inline]
    fn add_next(&mut self, x: i64, error: [f32; 3], weight: f32) {
        if x >= 0 && (x as usize) < self.width {
            let slot = &mut self.next[x as usize];
            for c in 0..3 {
                slot[c] += error[c] * weight;
            }
        }
    }

    /// Swap the rows: the collected next-row error becomes current, and
    /// the new next row starts empty.
    fn advance_row(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.fill([0.0; 3]);
    }
}

impl Dither for FloydSteinberg {
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
        let mut errors = ErrorRows::new(width);

        for y in 0..height {
            for x in 0..width {
                let Some(rgb) = source.opaque_rgb(x, y) else {
                    // Transparent: no bead, and any error that happened to
                    // land in this slot is dropped, never forwarded.
                    cells.push(None);
                    continue;
                };

                // Clamp the error-adjusted value to the representable
                // range, but keep it in float: the sub-integer part of
                // the error must survive into the next diffusion step.
                let accumulated = errors.accumulated(x);
                let adjusted = [
                    (rgb.r as f32 + accumulated[0]).clamp(0.0, 255.0),
                    (rgb.g as f32 + accumulated[1]).clamp(0.0, 255.0),
                    (rgb.b as f32 + accumulated[2]).clamp(0.0, 255.0),
                ];

                let probe = Rgb::new(
                    clamp_channel(adjusted[0]),
                    clamp_channel(adjusted[1]),
                    clamp_channel(adjusted[2]),
                );
                let entry = lut.nearest_entry(palette, probe);
                cells.push(Some(entry));

                let error = [
                    (adjusted[0] - entry.rgb.r as f32) * strength,
                    (adjusted[1] - entry.rgb.g as f32) * strength,
                    (adjusted[2] - entry.rgb.b as f32) * strength,
                ];

                let xi = x as i64;
                errors.add_current(xi + 1, error, 7.0 / 16.0);
                errors.add_next(xi - 1, error, 3.0 / 16.0);
                errors.add_next(xi, error, 5.0 / 16.0);
                errors.add_next(xi + 1, error, 1.0 / 16.0);
            }
            errors.advance_row();
        }

        cells
    }
}

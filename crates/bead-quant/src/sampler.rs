//! Pixelation sampler: downsample a source raster into a bead grid.
//!
//! Each target cell is assigned a representative color from its source
//! rectangle (dominant or average), which is then quantized through the
//! nearest-color lookup table. The output is always a fully-populated
//! `rows x cols` grid -- transparent regions become blank cells, never
//! holes.

use std::collections::HashMap;
use std::sync::Arc;

use crate::color::Rgb;
use crate::palette::{NearestLut, Palette, PaletteEntry};
use crate::raster::RgbaView;

/// How a cell's representative color is chosen from its source rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleMode {
    /// The most frequent exact `(R, G, B)` triple in the rectangle.
    /// Ties go to the first-seen triple. Best for flat-color art where
    /// averaging would invent colors that never appear in the source.
    #[default]
    Dominant,
    /// Per-channel arithmetic mean, rounded to nearest. Best for
    /// photographic sources.
    Average,
}

/// Downsample `source` into a `rows x cols` grid of palette references.
///
/// Each cell's source rectangle spans `floor(i*src/target)` to
/// `ceil((i+1)*src/target)` on both axes. Adjacent cells may overlap by
/// one source pixel at a shared boundary; the floor/ceil pairing
/// guarantees every source pixel is covered with no gaps.
///
/// Pixels with alpha below the opacity threshold are excluded from
/// sampling. A rectangle whose pixels are *all* excluded produces a
/// transparent cell (`None`), not the fallback. `fallback` is used only
/// for degenerate zero-extent rectangles (an empty source raster).
///
/// The result is row-major, `rows * cols` long, one
/// `Option<&PaletteEntry>` per cell (`None` = transparent).
pub fn pixelate<'p>(
    source: &RgbaView<'_>,
    cols: usize,
    rows: usize,
    palette: &'p Arc<Palette>,
    lut: &mut NearestLut,
    mode: SampleMode,
    fallback: &'p PaletteEntry,
) -> Vec<Option<&'p PaletteEntry>> {
    lut.ensure_built(palette);

    let mut cells = Vec::with_capacity(cols * rows);
    let src_w = source.width();
    let src_h = source.height();

    for row in 0..rows {
        let y0 = span_start(row, src_h, rows);
        let y1 = span_end(row, src_h, rows);
        for col in 0..cols {
            let x0 = span_start(col, src_w, cols);
            let x1 = span_end(col, src_w, cols);

            if x0 >= x1 || y0 >= y1 {
                // Zero-extent rectangle: empty source, visible fallback.
                cells.push(Some(fallback));
                continue;
            }

            let representative = match mode {
                SampleMode::Average => average_color(source, x0, x1, y0, y1),
                SampleMode::Dominant => dominant_color(source, x0, x1, y0, y1),
            };

            match representative {
                Some(rgb) => cells.push(Some(lut.nearest_entry(palette, rgb))),
                // Every pixel in the rectangle was transparent.
                None => cells.push(None),
            }
        }
    }

    cells
}

#[inline]
fn span_start(index: usize, source_extent: usize, target_extent: usize) -> usize {
    index * source_extent / target_extent
}

#[inline]
fn span_end(index: usize, source_extent: usize, target_extent: usize) -> usize {
    // Ceiling division so the span reaches the next cell's start pixel.
    ((index + 1) * source_extent).div_ceil(target_extent)
}

/// Per-channel mean of the opaque pixels in the rectangle, rounded to
/// nearest. `None` when every pixel is transparent.
fn average_color(source: &RgbaView<'_>, x0: usize, x1: usize, y0: usize, y1: usize) -> Option<Rgb> {
    let mut sum = [0u64; 3];
    let mut count = 0u64;

    for y in y0..y1 {
        for x in x0..x1 {
            if let Some(rgb) = source.opaque_rgb(x, y) {
                sum[0] += rgb.r as u64;
                sum[1] += rgb.g as u64;
                sum[2] += rgb.b as u64;
                count += 1;
            }
        }
    }

    if count == 0 {
        return None;
    }
    // Round to nearest; the mean of u8 values is already in range.
    Some(Rgb::new(
        ((sum[0] + count / 2) / count) as u8,
        ((sum[1] + count / 2) / count) as u8,
        ((sum[2] + count / 2) / count) as u8,
    ))
}

/// Most frequent exact triple among the opaque pixels in the rectangle,
/// ties broken by first appearance in scan order. `None` when every pixel
/// is transparent.
fn dominant_color(source: &RgbaView<'_>, x0: usize, x1: usize, y0: usize, y1: usize) -> Option<Rgb> {
    // Count per triple, remembering the order each triple first appeared
    // so ties resolve deterministically to the earliest one.
    let mut counts: HashMap<Rgb, (u32, u32)> = HashMap::new();
    let mut next_rank = 0u32;

    for y in y0..y1 {
        for x in x0..x1 {
            let Some(rgb) = source.opaque_rgb(x, y) else {
                continue;
            };
            let entry = counts.entry(rgb).or_insert_with(|| {
                let rank = next_rank;
                next_rank += 1;
                (0, rank)
            });
            entry.0 += 1;
        }
    }

    counts
        .into_iter()
        .max_by(|(_, (count_a, rank_a)), (_, (count_b, rank_b))| {
            // Higher count wins; on equal counts the lower (earlier) rank
            // wins, so compare ranks reversed.
            count_a.cmp(count_b).then(rank_b.cmp(rank_a))
        })
        .map(|(rgb, _)| rgb)
}

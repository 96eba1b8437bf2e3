//! Pattern generation facade.
//!
//! [`PatternGenerator`] is the bridge between the quantization crate and
//! the grid model: it owns the active palette together with its
//! nearest-color lookup table (one long-lived instance per document, so
//! independent documents with different palettes never fight over a
//! shared cache), runs the sampler or a ditherer, and converts the raw
//! palette references into bead cells.

use std::sync::Arc;

use bead_quant::{
    pixelate, DitherAlgorithm, NearestLut, Palette, PaletteEntry, RgbaView, SampleMode,
};

use crate::models::{BeadGrid, Cell};

/// Long-lived generation service holding a palette and its lookup table.
///
/// The table is built lazily on first use and reused across passes;
/// swapping the palette retires it (identity change), and the next pass
/// pays one rebuild. Each generator is single-writer over its own table --
/// share documents, not generators, across threads.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use bead_quant::{Palette, PaletteEntry, Rgb, RgbaView, SampleMode};
/// use beadloom::PatternGenerator;
///
/// let palette = Arc::new(Palette::new(vec![
///     PaletteEntry::new("K", Rgb::new(0, 0, 0)),
///     PaletteEntry::new("W", Rgb::new(255, 255, 255)),
/// ]));
/// let mut generator = PatternGenerator::new(palette);
///
/// let data = [255u8; 4 * 4 * 4];
/// let source = RgbaView::new(&data, 4, 4);
/// let grid = generator.pixelate(&source, 2, 2, SampleMode::Average, None);
///
/// assert_eq!(grid.cols(), 2);
/// assert_eq!(grid.rows(), 2);
/// assert!(grid.cells().all(|c| c.key == "W"));
/// ```
#[derive(Debug)]
pub struct PatternGenerator {
    palette: Arc<Palette>,
    lut: NearestLut,
}

impl PatternGenerator {
    /// Create a generator for `palette`. No table is built yet.
    pub fn new(palette: Arc<Palette>) -> Self {
        Self {
            palette,
            lut: NearestLut::new(),
        }
    }

    /// The active palette.
    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    /// Swap the active palette (e.g. the user changed color systems).
    /// The lookup table rebuilds lazily on the next generation pass.
    pub fn set_palette(&mut self, palette: Arc<Palette>) {
        self.palette = palette;
    }

    /// Pixelate `source` onto a `rows x cols` grid.
    ///
    /// `fallback` is the entry used for degenerate empty sample
    /// rectangles; `None` uses the palette's first entry (or, for an
    /// empty palette, the error sentinel -- degraded but visible).
    pub fn pixelate(
        &mut self,
        source: &RgbaView<'_>,
        cols: usize,
        rows: usize,
        mode: SampleMode,
        fallback: Option<&PaletteEntry>,
    ) -> BeadGrid {
        let default_fallback;
        let fallback = match fallback {
            Some(entry) => entry,
            None => {
                default_fallback = self
                    .palette
                    .entries()
                    .first()
                    .cloned()
                    .unwrap_or_else(|| self.palette.nearest(bead_quant::Rgb::new(0, 0, 0)).clone());
                &default_fallback
            }
        };

        let cells = pixelate(
            source,
            cols,
            rows,
            &self.palette,
            &mut self.lut,
            mode,
            fallback,
        );
        tracing::debug!(
            cols,
            rows,
            ?mode,
            source_w = source.width(),
            source_h = source.height(),
            "pixelated source into grid"
        );
        grid_from_cells(&cells, cols)
    }

    /// Dither `source` -- already sized to the target grid -- onto a grid
    /// of the same dimensions. `strength` in `[0, 1]`.
    pub fn dither(
        &mut self,
        source: &RgbaView<'_>,
        algorithm: DitherAlgorithm,
        strength: f32,
    ) -> BeadGrid {
        let cols = source.width();
        let cells = algorithm.run(source, &self.palette, &mut self.lut, strength);
        tracing::debug!(
            cols,
            rows = source.height(),
            ?algorithm,
            strength,
            "dithered source into grid"
        );
        grid_from_cells(&cells, cols)
    }
}

/// Convert a row-major palette-reference buffer into a bead grid:
/// matched entries become bead cells, `None` becomes the transparent
/// sentinel.
fn grid_from_cells(cells: &[Option<&PaletteEntry>], cols: usize) -> BeadGrid {
    if cols == 0 {
        return BeadGrid::from_rows(Vec::new());
    }
    let rows = cells
        .chunks(cols)
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Some(entry) => Cell::from_entry(entry),
                    None => Cell::transparent(),
                })
                .collect()
        })
        .collect();
    BeadGrid::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bead_quant::Rgb;

    fn bw_palette() -> Arc<Palette> {
        Arc::new(Palette::new(vec![
            PaletteEntry::new("K", Rgb::new(0, 0, 0)),
            PaletteEntry::new("W", Rgb::new(255, 255, 255)),
        ]))
    }

    /// Checkerboard of opaque black/white pixels.
    fn checker(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size * size * 4);
        for y in 0..size {
            for x in 0..size {
                let v = if (x + y) % 2 == 0 { 0 } else { 255 };
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        data
    }

    #[test]
    fn test_pixelate_produces_full_grid() {
        let mut generator = PatternGenerator::new(bw_palette());
        let data = checker(8);
        let source = RgbaView::new(&data, 8, 8);

        let grid = generator.pixelate(&source, 4, 4, SampleMode::Dominant, None);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cells().count(), 16);
        assert!(grid.cells().all(|c| !c.is_transparent()));
    }

    #[test]
    fn test_dither_grid_matches_source_shape() {
        let mut generator = PatternGenerator::new(bw_palette());
        let data = checker(6);
        let source = RgbaView::new(&data, 6, 6);

        for algorithm in [DitherAlgorithm::FloydSteinberg, DitherAlgorithm::Ordered] {
            let grid = generator.dither(&source, algorithm, 0.7);
            assert_eq!(grid.cols(), 6);
            assert_eq!(grid.rows(), 6);
        }
    }

    #[test]
    fn test_transparent_source_becomes_sentinel_cells() {
        let mut generator = PatternGenerator::new(bw_palette());
        // Left pixel opaque, right pixel transparent.
        let data = [0, 0, 0, 255, 0, 0, 0, 0];
        let source = RgbaView::new(&data, 2, 1);

        let grid = generator.dither(&source, DitherAlgorithm::FloydSteinberg, 1.0);
        assert_eq!(grid.cell(0, 0).unwrap().key, "K");
        assert!(grid.cell(0, 1).unwrap().is_transparent());

        let pixelated = generator.pixelate(&source, 2, 1, SampleMode::Average, None);
        assert!(pixelated.cell(0, 1).unwrap().is_transparent());
    }

    #[test]
    fn test_set_palette_takes_effect_next_pass() {
        let mut generator = PatternGenerator::new(bw_palette());
        let data = checker(4);
        let source = RgbaView::new(&data, 4, 4);
        generator.pixelate(&source, 2, 2, SampleMode::Average, None);

        // Swap to a palette with different keys; the next pass must use it.
        let renamed = Arc::new(Palette::new(vec![
            PaletteEntry::new("BLACK", Rgb::new(0, 0, 0)),
            PaletteEntry::new("WHITE", Rgb::new(255, 255, 255)),
        ]));
        generator.set_palette(renamed);

        let grid = generator.pixelate(&source, 2, 2, SampleMode::Dominant, None);
        assert!(grid
            .cells()
            .all(|c| c.key == "BLACK" || c.key == "WHITE"));
    }

    #[test]
    fn test_empty_palette_degrades_to_error_cells() {
        let mut generator = PatternGenerator::new(Arc::new(Palette::new(Vec::new())));
        let data = checker(2);
        let source = RgbaView::new(&data, 2, 2);

        let grid = generator.pixelate(&source, 2, 2, SampleMode::Dominant, None);
        assert!(grid.cells().all(|c| c.key == "ERR" && !c.is_external));
    }

    #[test]
    fn test_empty_source_grid_is_all_fallback() {
        let mut generator = PatternGenerator::new(bw_palette());
        let source = RgbaView::new(&[], 0, 0);
        let fallback = PaletteEntry::new("W", Rgb::new(255, 255, 255));

        let grid = generator.pixelate(&source, 3, 2, SampleMode::Average, Some(&fallback));
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert!(grid.cells().all(|c| c.key == "W"));
    }
}

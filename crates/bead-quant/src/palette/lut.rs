//! Precomputed nearest-color lookup table.
//!
//! Quantization runs once per cell, so the per-query cost of the exact
//! linear scan adds up on large grids. [`NearestLut`] trades a one-time
//! build (32,768 exact scans) for O(1) lookups afterwards: each channel is
//! quantized to 5 bits, and every one of the 32x32x32 buckets stores the
//! exact-path answer probed at the bucket's midpoint color.
//!
//! # Accuracy
//!
//! The fast path is an approximation: for colors near a bucket boundary
//! that is also near a palette decision boundary, the bucket midpoint can
//! land on the other side and the table answer differs from the exact
//! scan. This is accepted -- it is visually insignificant at bead palette
//! granularity. Colors exactly equal to a palette entry always resolve to
//! that entry, because the entry's own bucket midpoint is within 4 per
//! channel of it.

use std::sync::Arc;

use crate::color::Rgb;

use super::palette::{Palette, PaletteEntry};

/// Bits kept per channel when bucketing.
const CHANNEL_BITS: u32 = 5;
/// Buckets per channel (32).
const LEVELS: usize = 1 << CHANNEL_BITS;
/// Total bucket count (32^3 = 32,768).
const TABLE_LEN: usize = LEVELS * LEVELS * LEVELS;

/// Lazily rebuilt nearest-color table, keyed by palette identity.
///
/// The cache is keyed on the *identity* of the `Arc<Palette>` it was built
/// from, not on palette contents: two distinct `Arc`s holding identical
/// colors each pay their own rebuild. Rebuilds construct a fresh table and
/// swap it in whole -- a published table is never mutated in place, so a
/// shared reader can never observe a half-built state. The struct itself
/// is not synchronized; wrap it in a lock (or keep one per thread) in
/// multi-threaded use.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use bead_quant::{NearestLut, Palette, PaletteEntry, Rgb};
///
/// let palette = Arc::new(Palette::new(vec![
///     PaletteEntry::new("A", Rgb::new(255, 0, 0)),
///     PaletteEntry::new("B", Rgb::new(0, 0, 255)),
/// ]));
///
/// let mut lut = NearestLut::new();
/// lut.ensure_built(&palette);
/// assert_eq!(lut.nearest_entry(&palette, Rgb::new(250, 10, 10)).key, "A");
/// ```
#[derive(Debug, Default)]
pub struct NearestLut {
    /// Address of the palette the table was built for (0 = never built).
    palette_id: usize,
    /// One entry index per RGB octant; empty for an empty palette.
    table: Vec<u16>,
}

impl NearestLut {
    /// Create an empty lookup table. The first [`ensure_built()`]
    /// call pays the build cost.
    ///
    /// [`ensure_built()`]: NearestLut::ensure_built
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table for `palette` if it was built for a different
    /// palette instance (or never built). No-op when the identity matches.
    pub fn ensure_built(&mut self, palette: &Arc<Palette>) {
        let id = Arc::as_ptr(palette) as usize;
        if id == self.palette_id {
            return;
        }

        // Build into a fresh table, then swap. Empty palettes get an
        // empty table; lookups fall through to the sentinel.
        let mut table = Vec::new();
        if !palette.is_empty() {
            table.reserve_exact(TABLE_LEN);
            for r_bucket in 0..LEVELS {
                for g_bucket in 0..LEVELS {
                    for b_bucket in 0..LEVELS {
                        let probe = Rgb::new(
                            bucket_midpoint(r_bucket),
                            bucket_midpoint(g_bucket),
                            bucket_midpoint(b_bucket),
                        );
                        // Non-empty palette: nearest_index is always Some.
                        let idx = palette.nearest_index(probe).unwrap_or(0);
                        table.push(idx as u16);
                    }
                }
            }
        }

        self.table = table;
        self.palette_id = id;
    }

    /// Returns true if the table is currently built for `palette`.
    pub fn is_built_for(&self, palette: &Arc<Palette>) -> bool {
        self.palette_id == Arc::as_ptr(palette) as usize
    }

    /// Look up the nearest palette entry index for `target`.
    ///
    /// O(1): truncates each channel to its 5-bit bucket and reads one
    /// table slot. Returns `None` when the palette the table was built
    /// for is empty.
    #[inline]
    pub fn nearest_index(&self, target: Rgb) -> Option<u16> {
        if self.table.is_empty() {
            return None;
        }
        let r = (target.r >> 3) as usize;
        let g = (target.g >> 3) as usize;
        let b = (target.b >> 3) as usize;
        Some(self.table[(r << (2 * CHANNEL_BITS)) | (g << CHANNEL_BITS) | b])
    }

    /// Look up the nearest entry for `target`, resolving indices against
    /// `palette`.
    ///
    /// `palette` must be the same instance the table was built for
    /// (checked in debug builds). For an empty palette this returns the
    /// sentinel entry, matching the exact path's behavior.
    #[inline]
    pub fn nearest_entry<'p>(&self, palette: &'p Palette, target: Rgb) -> &'p PaletteEntry {
        debug_assert_eq!(
            palette as *const Palette as usize, self.palette_id,
            "lookup table was built for a different palette instance"
        );
        match self.nearest_index(target) {
            Some(idx) => palette.entry(idx as usize),
            None => palette.nearest(target), // empty palette -> sentinel
        }
    }
}

/// Midpoint color value of a 5-bit bucket: the bucket covers 8 adjacent
/// channel values, and the probe sits at `base + 4`.
#[inline]
fn bucket_midpoint(bucket: usize) -> u8 {
    ((bucket << 3) + 4) as u8
}

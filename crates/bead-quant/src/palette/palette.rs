//! Palette struct with exact nearest-color matching.

use std::str::FromStr;

use crate::color::{self, Rgb};

use super::error::ParseColorError;

/// Display key of the sentinel entry returned for empty-palette lookups.
pub(crate) const ERROR_KEY: &str = "ERR";

/// One bead color in a palette.
///
/// Carries the display key (the code printed on the manufacturer's chart,
/// unique within one palette snapshot), the canonical upper-case `#RRGGBB`
/// hex form, and the parsed RGB triple. The constructors derive one of
/// hex/rgb from the other, so the two always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Display key, e.g. `"H18"`.
    pub key: String,
    /// Canonical upper-case hex form, e.g. `"#FF7E00"`.
    pub hex: String,
    /// Parsed channel values.
    pub rgb: Rgb,
}

impl PaletteEntry {
    /// Create an entry from a display key and channel values.
    ///
    /// The hex form is derived from `rgb`, keeping the two in agreement.
    pub fn new(key: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            key: key.into(),
            hex: rgb.to_hex(),
            rgb,
        }
    }

    /// Create an entry from a display key and a hex string.
    ///
    /// The stored hex is re-canonicalized (upper-case, `#`-prefixed), so
    /// `from_hex("A", "ff0000")` and `from_hex("A", "#FF0000")` produce
    /// identical entries.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] if the hex string is invalid.
    pub fn from_hex(key: impl Into<String>, hex: &str) -> Result<Self, ParseColorError> {
        let rgb = Rgb::from_str(hex)?;
        Ok(Self::new(key, rgb))
    }

    /// The sentinel entry returned when an empty palette is queried:
    /// visibly wrong (black, key `"ERR"`) but never a panic.
    pub(crate) fn error_sentinel() -> Self {
        Self::new(ERROR_KEY, Rgb::new(0, 0, 0))
    }
}

/// An ordered, immutable set of bead colors.
///
/// A palette is built once (from the catalog, for one color-coding system)
/// and never modified afterwards; callers hold it in an `Arc` so the
/// nearest-color lookup table can key its cache on palette *identity*
/// (see [`NearestLut`](super::NearestLut)).
///
/// Key uniqueness and color validity are the catalog's responsibility --
/// the only degenerate input this type handles itself is the empty
/// palette, for which lookups return a sentinel entry rather than failing
/// (a visible-but-wrong bead beats an aborted interactive operation).
///
/// # Example
///
/// ```
/// use bead_quant::{Palette, PaletteEntry, Rgb};
///
/// let palette = Palette::new(vec![
///     PaletteEntry::new("A", Rgb::new(255, 0, 0)),
///     PaletteEntry::new("B", Rgb::new(0, 0, 255)),
/// ]);
///
/// assert_eq!(palette.nearest(Rgb::new(250, 10, 10)).key, "A");
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    // Owned sentinel so nearest() can hand out a reference even when
    // `entries` is empty.
    error_entry: PaletteEntry,
}

impl Palette {
    /// Create a palette from entries, preserving their order.
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        Self {
            entries,
            error_entry: PaletteEntry::error_sentinel(),
        }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the palette has no colors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in palette order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// The entry at the given index.
    #[inline]
    pub fn entry(&self, idx: usize) -> &PaletteEntry {
        &self.entries[idx]
    }

    /// Find the index of the entry nearest to `target` under the redmean
    /// metric (exact path).
    ///
    /// Linear scan -- optimal for real palette sizes (tens of colors).
    /// Short-circuits on an exact match. Returns `None` only for an empty
    /// palette.
    pub fn nearest_index(&self, target: Rgb) -> Option<usize> {
        let mut best_idx = None;
        let mut best_dist = f64::MAX;

        for (i, entry) in self.entries.iter().enumerate() {
            let dist = color::distance_squared(target, entry.rgb);
            if dist == 0.0 {
                return Some(i);
            }
            if dist < best_dist {
                best_dist = dist;
                best_idx = Some(i);
            }
        }

        best_idx
    }

    /// Find the entry nearest to `target` under the redmean metric.
    ///
    /// For an empty palette this returns the sentinel entry (key `"ERR"`,
    /// black) -- callers get a visible-but-wrong result, not an error.
    pub fn nearest(&self, target: Rgb) -> &PaletteEntry {
        match self.nearest_index(target) {
            Some(idx) => &self.entries[idx],
            None => &self.error_entry,
        }
    }
}

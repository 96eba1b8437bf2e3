//! Grid cell type and the transparent sentinel.

use bead_quant::PaletteEntry;

/// Reserved key of the transparent sentinel cell ("no bead placed here").
pub const TRANSPARENT_KEY: &str = "EMPTY";

/// Display color of the transparent sentinel cell. The
/// [`is_external`](Cell::is_external) flag, not this hex, is what marks a
/// cell transparent -- the hex only gives renderers something to draw.
pub const TRANSPARENT_HEX: &str = "#FFFFFF";

/// One cell of a bead grid: a palette key, its hex color, and whether the
/// cell is "external" (transparent/erased -- not a real bead).
///
/// Invariant: when `is_external` is true, `key` and `color` hold the
/// transparent sentinel values. Statistics and palette merges skip
/// external cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Palette display key, e.g. `"H18"`.
    pub key: String,
    /// Hex color, canonical upper-case `#RRGGBB`.
    pub color: String,
    /// True for transparent/erased cells.
    pub is_external: bool,
}

impl Cell {
    /// A real bead cell.
    pub fn bead(key: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            color: color.into(),
            is_external: false,
        }
    }

    /// A bead cell carrying a palette entry's key and color.
    pub fn from_entry(entry: &PaletteEntry) -> Self {
        Self::bead(entry.key.clone(), entry.hex.clone())
    }

    /// The transparent sentinel cell.
    pub fn transparent() -> Self {
        Self {
            key: TRANSPARENT_KEY.to_string(),
            color: TRANSPARENT_HEX.to_string(),
            is_external: true,
        }
    }

    /// True if this is a transparent/erased cell.
    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.is_external
    }
}

//! Palette catalog: the externally-maintained color definitions.
//!
//! The catalog maps each canonical bead color to its display keys, one
//! per supported color-coding system (different bead manufacturers code
//! the same physical color differently). The core treats the catalog as
//! already curated -- the only validation on load is hex well-formedness.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use bead_quant::{Palette, PaletteEntry, Rgb};
use serde::Deserialize;

use crate::error::CatalogError;

/// One catalog color: a canonical hex value plus its display key in each
/// color-coding system that carries it.
#[derive(Debug, Clone, Deserialize)]
pub struct PaletteDefinition {
    /// Canonical hex color, e.g. `"#E02A2A"`.
    pub hex: String,

    /// Display key per color system, e.g. `{"hama": "H05", "perler": "P21"}`.
    /// A color absent from a system is simply not offered there.
    #[serde(default)]
    pub keys: BTreeMap<String, String>,
}

/// A loaded palette catalog.
///
/// Palettes are compiled per color system with [`palette_for()`] and are
/// immutable snapshots: switching the active system means building a new
/// `Arc<Palette>`, which in turn retires any nearest-color table built
/// for the old one (the table caches by palette identity).
///
/// [`palette_for()`]: PaletteCatalog::palette_for
#[derive(Debug, Clone, Default)]
pub struct PaletteCatalog {
    definitions: Vec<PaletteDefinition>,
}

impl PaletteCatalog {
    /// Load a catalog from its JSON form: an array of definitions.
    ///
    /// ```
    /// use beadloom::PaletteCatalog;
    ///
    /// let catalog = PaletteCatalog::from_json(
    ///     r##"[
    ///         {"hex": "#000000", "keys": {"hama": "H18"}},
    ///         {"hex": "#FFFFFF", "keys": {"hama": "H01"}}
    ///     ]"##,
    /// )
    /// .unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON and
    /// [`CatalogError::Color`] for a definition whose hex does not parse.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<PaletteDefinition> = serde_json::from_str(json)?;

        for definition in &definitions {
            if let Err(source) = Rgb::from_str(&definition.hex) {
                return Err(CatalogError::Color {
                    hex: definition.hex.clone(),
                    source,
                });
            }
        }

        tracing::debug!(colors = definitions.len(), "loaded palette catalog");
        Ok(Self { definitions })
    }

    /// Number of color definitions in the catalog.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True if the catalog has no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// All color definitions.
    pub fn definitions(&self) -> &[PaletteDefinition] {
        &self.definitions
    }

    /// Compile the palette for one color-coding system, in catalog order.
    ///
    /// Colors without a key in `system` are skipped. An unknown system
    /// yields an empty palette -- downstream lookups then return the
    /// error sentinel rather than failing, per the graceful-degradation
    /// contract.
    pub fn palette_for(&self, system: &str) -> Arc<Palette> {
        let entries: Vec<PaletteEntry> = self
            .definitions
            .iter()
            .filter_map(|definition| {
                let key = definition.keys.get(system)?;
                // Hexes were validated on load.
                PaletteEntry::from_hex(key.clone(), &definition.hex).ok()
            })
            .collect();

        tracing::debug!(system, entries = entries.len(), "compiled palette");
        Arc::new(Palette::new(entries))
    }
}

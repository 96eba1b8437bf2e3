//! Per-color usage statistics over a grid.
//!
//! A single pass tallies bead counts per normalized hex, excluding
//! external cells. The pass is cheap enough to recompute after every
//! structural change; callers that want to avoid even that should cache
//! by grid reference identity and invalidate when the reference changes
//! (grids are never mutated in place, so identity is a safe cache key).

use std::collections::HashMap;

use bead_quant::Rgb;

use crate::models::BeadGrid;

/// Usage of one color across a grid. Also the planner's input record.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorUsage {
    /// Normalized (upper-case) hex.
    pub hex: String,
    /// Representative display key: the first key seen with this hex.
    pub key: String,
    /// Parsed channel values.
    pub rgb: Rgb,
    /// Number of cells using this color.
    pub count: usize,
}

/// Result of a statistics pass: per-color usage plus the bead total.
#[derive(Debug, Clone, Default)]
pub struct ColorStats {
    /// One record per distinct color, in first-seen (row-major) order.
    pub usage: Vec<ColorUsage>,
    /// Total bead count (external cells excluded).
    pub total: usize,
}

/// Count color usage over `grid`, skipping external cells.
///
/// Hexes are normalized to upper case, so cells written with differing
/// case collapse into one record. A cell whose hex fails to parse is
/// tallied as black rather than dropped (consistent with the core's
/// visible-but-wrong posture; it cannot happen for palette-derived
/// grids).
pub fn color_stats(grid: &BeadGrid) -> ColorStats {
    let mut usage: Vec<ColorUsage> = Vec::new();
    let mut index_by_hex: HashMap<String, usize> = HashMap::new();
    let mut total = 0;

    for cell in grid.cells() {
        if cell.is_external {
            continue;
        }
        total += 1;

        let hex = cell.color.to_uppercase();
        if let Some(&i) = index_by_hex.get(&hex) {
            usage[i].count += 1;
            continue;
        }

        let rgb = hex.parse().unwrap_or(Rgb::new(0, 0, 0));
        index_by_hex.insert(hex.clone(), usage.len());
        usage.push(ColorUsage {
            hex,
            key: cell.key.clone(),
            rgb,
            count: 1,
        });
    }

    ColorStats { usage, total }
}

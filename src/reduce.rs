//! Palette reduction: greedy merging of near-duplicate colors.
//!
//! Quantizing a photo against a full bead chart routinely lands on 30+
//! colors where a buyable kit has 10. The planner collapses the two most
//! perceptually similar *used* colors, repeatedly, until the target count
//! is reached -- majority colors absorb minority ones, so the dominant
//! shapes of the pattern keep their identity.
//!
//! Planning and applying are separate steps: [`plan_reduction`] computes
//! a merge map without touching any grid (the UI can show "12 -> 8
//! colors, 4 merges" before committing), [`preview_reduction`] exposes
//! the individual merge steps for display, and [`apply_plan`] rewrites a
//! grid under a previously computed plan.

use std::collections::HashMap;

use bead_quant::color;

use crate::editing::ColorUsage;
use crate::models::BeadGrid;

/// A computed merge plan.
///
/// Both maps are keyed by *losing* hex and point directly at the final
/// surviving color -- never at an intermediate victim. That flattening is
/// maintained eagerly while planning: whenever a color that earlier
/// absorbed others is itself absorbed, the earlier entries are re-pointed
/// to the new survivor. Applying a plan therefore needs exactly one map
/// lookup per cell.
#[derive(Debug, Clone, Default)]
pub struct MergePlan {
    /// Losing hex -> surviving hex.
    pub color_map: HashMap<String, String>,
    /// Losing hex -> surviving display key.
    pub key_map: HashMap<String, String>,
    /// Number of merges performed.
    pub merges: usize,
    /// Distinct color count before reduction.
    pub before: usize,
    /// Distinct color count after reduction.
    pub after: usize,
}

impl MergePlan {
    /// True if the plan performs no merges (usage already at or under
    /// the target).
    pub fn is_noop(&self) -> bool {
        self.merges == 0
    }
}

/// One merge, as shown in a reduction preview.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeStep {
    /// Absorbed color.
    pub from_hex: String,
    /// Absorbed color's display key.
    pub from_key: String,
    /// Bead count the absorbed color had when merged.
    pub from_count: usize,
    /// Surviving color.
    pub to_hex: String,
    /// Surviving color's display key.
    pub to_key: String,
    /// Redmean distance between the pair.
    pub distance: f64,
}

/// Compute a merge plan reducing `usage` to at most `target` colors.
///
/// If `usage` already has `target` or fewer colors, the plan is an
/// explicit no-op with `before == after` -- a defined outcome, not an
/// error.
///
/// Each iteration scans all active pairs for the globally minimum
/// redmean distance (first-found wins ties), then absorbs the pair's
/// lower-count color into its higher-count one. On equal counts the
/// second element of the scanned pair is the victim; that tie-break is a
/// deterministic artifact, not a semantic choice. O(k³) overall for k
/// initial colors -- k is bounded by palette size, not grid size.
pub fn plan_reduction(usage: &[ColorUsage], target: usize) -> MergePlan {
    let mut plan = MergePlan::default();
    run_reduction(usage, target, &mut plan, |_| {});
    plan
}

/// Run the identical reduction, returning the ordered merge steps for
/// display instead of the plan. No grid is touched.
pub fn preview_reduction(usage: &[ColorUsage], target: usize) -> Vec<MergeStep> {
    let mut plan = MergePlan::default();
    let mut steps = Vec::new();
    run_reduction(usage, target, &mut plan, |step| steps.push(step));
    steps
}

/// Shared reduction engine: fills `plan` and reports each merge.
fn run_reduction(
    usage: &[ColorUsage],
    target: usize,
    plan: &mut MergePlan,
    mut on_merge: impl FnMut(MergeStep),
) {
    plan.before = usage.len();
    plan.after = usage.len();

    // Already small enough: explicit early exit, no degenerate loop.
    if usage.len() <= target {
        return;
    }

    let mut working: Vec<ColorUsage> = usage
        .iter()
        .map(|record| ColorUsage {
            hex: record.hex.to_uppercase(),
            ..record.clone()
        })
        .collect();

    while working.len() > target {
        // Globally minimum-distance pair; first found wins ties.
        let mut min_i = 0;
        let mut min_j = 1;
        let mut min_dist_sq = f64::MAX;
        for i in 0..working.len() {
            for j in (i + 1)..working.len() {
                let dist_sq = color::distance_squared(working[i].rgb, working[j].rgb);
                if dist_sq < min_dist_sq {
                    min_dist_sq = dist_sq;
                    min_i = i;
                    min_j = j;
                }
            }
        }

        // Lower count is absorbed into higher; equal counts absorb the
        // second element of the pair.
        let (survivor_idx, victim_idx) = if working[min_i].count >= working[min_j].count {
            (min_i, min_j)
        } else {
            (min_j, min_i)
        };

        let victim = working.remove(victim_idx);
        let survivor_idx = if survivor_idx > victim_idx {
            survivor_idx - 1
        } else {
            survivor_idx
        };
        let survivor = &mut working[survivor_idx];

        tracing::debug!(
            from = %victim.hex,
            to = %survivor.hex,
            distance = min_dist_sq.sqrt(),
            "merging palette color"
        );
        on_merge(MergeStep {
            from_hex: victim.hex.clone(),
            from_key: victim.key.clone(),
            from_count: victim.count,
            to_hex: survivor.hex.clone(),
            to_key: survivor.key.clone(),
            distance: min_dist_sq.sqrt(),
        });

        // Path compression at insert time: earlier losers that pointed at
        // the victim now point straight at the survivor, so the final map
        // never chains through removed colors.
        let repointed: Vec<String> = plan
            .color_map
            .iter()
            .filter(|(_, to)| **to == victim.hex)
            .map(|(from, _)| from.clone())
            .collect();
        for from in repointed {
            plan.color_map.insert(from.clone(), survivor.hex.clone());
            plan.key_map.insert(from, survivor.key.clone());
        }

        plan.color_map.insert(victim.hex.clone(), survivor.hex.clone());
        plan.key_map.insert(victim.hex, survivor.key.clone());
        survivor.count += victim.count;
        plan.merges += 1;
    }

    plan.after = working.len();
}

/// Apply a merge plan to a grid.
///
/// Every non-external cell whose (case-normalized) hex appears in the
/// plan takes the survivor's key and color; all other cells -- and all
/// rows containing only such cells -- are left as the same underlying row
/// reference. Idempotent: after one application no remaining cell
/// matches a losing hex, so a second application changes nothing.
pub fn apply_plan(grid: &BeadGrid, plan: &MergePlan) -> BeadGrid {
    let mut editor = grid.edit();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let Some(cell) = grid.cell(row, col) else {
                continue;
            };
            if cell.is_external {
                continue;
            }
            let hex = cell.color.to_uppercase();
            let (Some(to_hex), Some(to_key)) = (plan.color_map.get(&hex), plan.key_map.get(&hex))
            else {
                continue;
            };
            let mut merged = cell.clone();
            merged.key = to_key.clone();
            merged.color = to_hex.clone();
            editor.set(row, col, merged);
        }
    }

    editor.finish()
}

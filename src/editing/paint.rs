//! Direct paint operations: single cell, multi-cell, and global replace.

use crate::models::{BeadGrid, Cell};

/// Paint a single cell.
///
/// Returns `None` -- the "no change" sentinel -- when the target cell
/// already equals `value` (key, color, and external flag) or when the
/// coordinate is out of bounds. Callers must check for the sentinel
/// before committing the edit, so no-op paints do not pollute an undo
/// history.
pub fn paint_cell(grid: &BeadGrid, row: usize, col: usize, value: &Cell) -> Option<BeadGrid> {
    let current = grid.cell(row, col)?;
    if current == value {
        return None;
    }

    let mut editor = grid.edit();
    editor.set(row, col, value.clone());
    Some(editor.finish())
}

/// Paint every listed `(row, col)` cell with `value`.
///
/// The list may be unordered and may contain out-of-bounds coordinates
/// (skipped silently) or cells already equal to `value` (skipped, so a
/// shape stamped over its own previous application copies no rows).
/// Each touched row's storage is copied exactly once regardless of how
/// many of its cells are painted.
pub fn paint_cells(grid: &BeadGrid, cells: &[(i64, i64)], value: &Cell) -> BeadGrid {
    let mut editor = grid.edit();

    for &(row, col) in cells {
        if row < 0 || col < 0 {
            continue;
        }
        let (row, col) = (row as usize, col as usize);
        match grid.cell(row, col) {
            Some(current) if current != value => {
                editor.set(row, col, value.clone());
            }
            _ => {}
        }
    }

    editor.finish()
}

/// Replace one color across the whole grid.
///
/// Every non-external cell whose hex equals `from_hex` (case-insensitive)
/// gets `to_key`/`to_hex` and is forced non-external. Returns the new
/// grid and the number of cells changed; zero changes means the returned
/// grid shares every row with the input.
pub fn replace_color(
    grid: &BeadGrid,
    from_hex: &str,
    to_key: &str,
    to_hex: &str,
) -> (BeadGrid, usize) {
    let replacement = Cell::bead(to_key, to_hex);
    let mut editor = grid.edit();
    let mut changed = 0;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let Some(cell) = grid.cell(row, col) else {
                continue;
            };
            if cell.is_external || !cell.color.eq_ignore_ascii_case(from_hex) {
                continue;
            }
            if cell != &replacement {
                editor.set(row, col, replacement.clone());
            }
            changed += 1;
        }
    }

    (editor.finish(), changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn two_row_grid() -> BeadGrid {
        BeadGrid::from_rows(vec![
            vec![Cell::bead("A", "#FF0000"), Cell::bead("B", "#0000FF")],
            vec![Cell::bead("A", "#FF0000"), Cell::transparent()],
        ])
    }

    #[test]
    fn test_paint_cell_changes_one_cell() {
        let grid = two_row_grid();
        let painted = paint_cell(&grid, 0, 1, &Cell::bead("C", "#00FF00")).unwrap();

        assert_eq!(painted.cell(0, 1).unwrap().key, "C");
        // Every other cell unchanged.
        assert_eq!(painted.cell(0, 0).unwrap().key, "A");
        assert_eq!(painted.cell(1, 0).unwrap().key, "A");
        assert!(painted.cell(1, 1).unwrap().is_transparent());
    }

    #[test]
    fn test_paint_cell_noop_returns_sentinel() {
        let grid = two_row_grid();
        // Identical value: sentinel, no allocation.
        assert!(paint_cell(&grid, 0, 0, &Cell::bead("A", "#FF0000")).is_none());
        // Out of bounds: sentinel too.
        assert!(paint_cell(&grid, 5, 0, &Cell::bead("A", "#FF0000")).is_none());
    }

    #[test]
    fn test_paint_cell_shares_untouched_rows() {
        let grid = two_row_grid();
        let painted = paint_cell(&grid, 1, 0, &Cell::bead("Z", "#101010")).unwrap();
        assert!(!Arc::ptr_eq(grid.row(1).unwrap(), painted.row(1).unwrap()));
        assert!(Arc::ptr_eq(grid.row(0).unwrap(), painted.row(0).unwrap()));
    }

    #[test]
    fn test_paint_cells_skips_oob_and_equal() {
        let grid = two_row_grid();
        let value = Cell::bead("A", "#FF0000");
        // (0,0) and (1,0) already equal; (-1,0) and (9,9) out of bounds;
        // only (0,1) actually changes.
        let painted = paint_cells(&grid, &[(0, 0), (-1, 0), (9, 9), (0, 1), (1, 0)], &value);

        assert_eq!(painted.cell(0, 1).unwrap().key, "A");
        assert!(!Arc::ptr_eq(grid.row(0).unwrap(), painted.row(0).unwrap()));
        // Row 1 had only already-equal targets: storage stays shared.
        assert!(Arc::ptr_eq(grid.row(1).unwrap(), painted.row(1).unwrap()));
    }

    #[test]
    fn test_paint_cells_one_copy_per_row() {
        let grid = BeadGrid::filled(4, 4, Cell::transparent());
        let value = Cell::bead("K", "#000000");
        // Whole row 2 plus one cell of row 0.
        let targets = [(2, 0), (2, 1), (2, 2), (2, 3), (0, 2)];
        let painted = paint_cells(&grid, &targets, &value);

        assert!(!Arc::ptr_eq(grid.row(0).unwrap(), painted.row(0).unwrap()));
        assert!(Arc::ptr_eq(grid.row(1).unwrap(), painted.row(1).unwrap()));
        assert!(!Arc::ptr_eq(grid.row(2).unwrap(), painted.row(2).unwrap()));
        assert!(Arc::ptr_eq(grid.row(3).unwrap(), painted.row(3).unwrap()));
        assert_eq!(painted.cells().filter(|c| c.key == "K").count(), 5);
    }

    #[test]
    fn test_replace_color_case_insensitive() {
        let grid = BeadGrid::from_rows(vec![
            vec![Cell::bead("A", "#ff0000"), Cell::bead("B", "#0000FF")],
            vec![Cell::bead("A", "#FF0000"), Cell::transparent()],
        ]);

        let (replaced, changed) = replace_color(&grid, "#Ff0000", "H05", "#E02A2A");
        assert_eq!(changed, 2);
        assert_eq!(replaced.cell(0, 0).unwrap().key, "H05");
        assert_eq!(replaced.cell(0, 0).unwrap().color, "#E02A2A");
        assert_eq!(replaced.cell(1, 0).unwrap().key, "H05");
        // Blue and transparent cells untouched.
        assert_eq!(replaced.cell(0, 1).unwrap().key, "B");
        assert!(replaced.cell(1, 1).unwrap().is_transparent());
    }

    #[test]
    fn test_replace_color_ignores_external_cells() {
        // A transparent cell whose sentinel hex happens to equal the
        // source color must not be resurrected.
        let grid = BeadGrid::from_rows(vec![vec![
            Cell::transparent(),
            Cell::bead("W", "#FFFFFF"),
        ]]);

        let (replaced, changed) = replace_color(&grid, "#FFFFFF", "H01", "#FEFEFE");
        assert_eq!(changed, 1);
        assert!(replaced.cell(0, 0).unwrap().is_transparent());
        assert_eq!(replaced.cell(0, 1).unwrap().key, "H01");
        assert!(!replaced.cell(0, 1).unwrap().is_external);
    }

    #[test]
    fn test_replace_color_no_matches_shares_rows() {
        let grid = two_row_grid();
        let (replaced, changed) = replace_color(&grid, "#ABCDEF", "X", "#000001");
        assert_eq!(changed, 0);
        for i in 0..grid.rows() {
            assert!(Arc::ptr_eq(grid.row(i).unwrap(), replaced.row(i).unwrap()));
        }
    }
}

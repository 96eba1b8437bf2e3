//! Flood fill: paint and erase variants.
//!
//! Both variants walk the 4-connected region around the start cell with
//! an explicit stack (never recursion -- a 100x100 single-color grid would
//! blow the call stack) and a visited bitset, writing through the grid's
//! copy-on-first-write row editor so untouched rows stay shared.

use crate::models::{BeadGrid, Cell};

/// 4-directional neighbor offsets as (row, col) deltas.
const NEIGHBORS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Flood-fill the region around `(row, col)` with `fill`.
///
/// The region is every cell 4-connected to the start cell that matches
/// the start cell's color *and* external flag. Painting a region with a
/// value identical to what it already holds (same color and flag) is a
/// no-op and returns a grid sharing every row with the input; so does a
/// start coordinate outside the grid.
pub fn flood_fill(grid: &BeadGrid, row: usize, col: usize, fill: &Cell) -> BeadGrid {
    let Some(start) = grid.cell(row, col) else {
        return grid.clone();
    };

    // Matching on color + flag (not key): the fill tool replaces what the
    // user sees, and distinct keys can share a hex across color systems.
    let target_color = start.color.clone();
    let target_external = start.is_external;
    if fill.color == target_color && fill.is_external == target_external {
        return grid.clone();
    }

    let matches = |cell: &Cell| cell.color == target_color && cell.is_external == target_external;
    fill_region(grid, row, col, matches, fill)
}

/// Flood-erase the region of key `target_key` around `(row, col)`,
/// writing the transparent sentinel.
///
/// Unlike [`flood_fill`], matching is by palette key alone, and cells
/// that are already external are skipped (there is nothing to erase).
/// A start cell that is external or keyed differently is a no-op.
pub fn flood_erase(grid: &BeadGrid, row: usize, col: usize, target_key: &str) -> BeadGrid {
    let Some(start) = grid.cell(row, col) else {
        return grid.clone();
    };
    if start.is_external || start.key != target_key {
        return grid.clone();
    }

    let target_key = target_key.to_string();
    let matches = move |cell: &Cell| !cell.is_external && cell.key == target_key;
    fill_region(grid, row, col, matches, &Cell::transparent())
}

/// Shared traversal: write `value` into every cell 4-connected to the
/// start that satisfies `matches`.
fn fill_region(
    grid: &BeadGrid,
    start_row: usize,
    start_col: usize,
    matches: impl Fn(&Cell) -> bool,
    value: &Cell,
) -> BeadGrid {
    let cols = grid.cols();
    let rows = grid.rows();
    let mut visited = vec![false; cols * rows];
    let mut stack = vec![(start_row, start_col)];
    let mut editor = grid.edit();

    while let Some((row, col)) = stack.pop() {
        let index = row * cols + col;
        if visited[index] {
            continue;
        }
        visited[index] = true;
        editor.set(row, col, value.clone());

        for (dr, dc) in NEIGHBORS {
            let nr = row as i64 + dr;
            let nc = col as i64 + dc;
            if nr < 0 || nc < 0 || nr as usize >= rows || nc as usize >= cols {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if visited[nr * cols + nc] {
                continue;
            }
            // The editor reflects writes already made, but matching cells
            // are only ever visited once, so reads see original values.
            if grid.cell(nr, nc).is_some_and(&matches) {
                stack.push((nr, nc));
            }
        }
    }

    editor.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn uniform_grid(key: &str, color: &str, size: usize) -> BeadGrid {
        BeadGrid::filled(size, size, Cell::bead(key, color))
    }

    #[test]
    fn test_fill_whole_region() {
        let grid = uniform_grid("X1", "#112233", 3);
        let filled = flood_fill(&grid, 1, 1, &Cell::bead("H05", "#E02A2A"));
        assert!(filled.cells().all(|c| c.key == "H05" && !c.is_external));
        // Input untouched.
        assert!(grid.cells().all(|c| c.key == "X1"));
    }

    #[test]
    fn test_fill_stops_at_non_matching_cells() {
        // Vertical blue wall splits the red field; fill from the left
        // must not leak to the right side.
        let mut rows = Vec::new();
        for _ in 0..3 {
            rows.push(vec![
                Cell::bead("R", "#FF0000"),
                Cell::bead("B", "#0000FF"),
                Cell::bead("R", "#FF0000"),
            ]);
        }
        let grid = BeadGrid::from_rows(rows);

        let filled = flood_fill(&grid, 0, 0, &Cell::bead("G", "#00FF00"));
        for row in 0..3 {
            assert_eq!(filled.cell(row, 0).unwrap().key, "G");
            assert_eq!(filled.cell(row, 1).unwrap().key, "B");
            assert_eq!(filled.cell(row, 2).unwrap().key, "R", "wall must block the fill");
        }
    }

    #[test]
    fn test_fill_matches_external_flag() {
        // A transparent hole inside a colored field: filling from the
        // hole only fills the hole.
        let mut rows = vec![
            vec![Cell::bead("R", "#FF0000"); 3],
            vec![Cell::bead("R", "#FF0000"); 3],
            vec![Cell::bead("R", "#FF0000"); 3],
        ];
        rows[1][1] = Cell::transparent();
        let grid = BeadGrid::from_rows(rows);

        let filled = flood_fill(&grid, 1, 1, &Cell::bead("B", "#0000FF"));
        assert_eq!(filled.cell(1, 1).unwrap().key, "B");
        assert_eq!(filled.cells().filter(|c| c.key == "B").count(), 1);
    }

    #[test]
    fn test_fill_noop_when_value_matches_target() {
        let grid = uniform_grid("X1", "#112233", 3);
        // Same color and flag, different key: still a no-op by contract.
        let result = flood_fill(&grid, 0, 0, &Cell::bead("OTHER", "#112233"));
        assert!(result.same_cells(&grid));
        for i in 0..3 {
            assert!(Arc::ptr_eq(grid.row(i).unwrap(), result.row(i).unwrap()));
        }
    }

    #[test]
    fn test_fill_outside_grid_is_noop() {
        let grid = uniform_grid("X1", "#112233", 3);
        let result = flood_fill(&grid, 9, 9, &Cell::bead("H05", "#E02A2A"));
        assert!(result.same_cells(&grid));
    }

    #[test]
    fn test_erase_scenario_full_grid() {
        // 3x3 grid, all "#112233"/"X1"; erase from the center targeting
        // "X1" leaves all nine cells transparent.
        let grid = uniform_grid("X1", "#112233", 3);
        let erased = flood_erase(&grid, 1, 1, "X1");
        assert_eq!(erased.cells().filter(|c| c.is_transparent()).count(), 9);
    }

    #[test]
    fn test_erase_skips_already_external() {
        let mut rows = vec![
            vec![Cell::bead("X1", "#112233"); 3],
            vec![Cell::bead("X1", "#112233"); 3],
            vec![Cell::bead("X1", "#112233"); 3],
        ];
        rows[0][2] = Cell::transparent();
        let grid = BeadGrid::from_rows(rows);

        let erased = flood_erase(&grid, 1, 1, "X1");
        assert!(erased.cells().all(Cell::is_transparent));

        // Erasing from an already-external start is a no-op.
        let again = flood_erase(&erased, 1, 1, "X1");
        assert!(again.same_cells(&erased));
    }

    #[test]
    fn test_erase_wrong_key_is_noop() {
        let grid = uniform_grid("X1", "#112233", 3);
        let result = flood_erase(&grid, 1, 1, "Y2");
        assert!(result.same_cells(&grid));
        assert!(result.cells().all(|c| !c.is_transparent()));
    }

    #[test]
    fn test_fill_untouched_rows_stay_shared() {
        // A region confined to row 0: rows 1 and 2 must keep identity.
        let mut rows = vec![
            vec![Cell::bead("R", "#FF0000"), Cell::bead("R", "#FF0000")],
            vec![Cell::bead("B", "#0000FF"), Cell::bead("B", "#0000FF")],
            vec![Cell::bead("B", "#0000FF"), Cell::bead("B", "#0000FF")],
        ];
        rows[0][0] = Cell::bead("R", "#FF0000");
        let grid = BeadGrid::from_rows(rows);

        let filled = flood_fill(&grid, 0, 0, &Cell::bead("G", "#00FF00"));
        assert!(!Arc::ptr_eq(grid.row(0).unwrap(), filled.row(0).unwrap()));
        assert!(Arc::ptr_eq(grid.row(1).unwrap(), filled.row(1).unwrap()));
        assert!(Arc::ptr_eq(grid.row(2).unwrap(), filled.row(2).unwrap()));
    }
}

//! Shape rasterization: pure geometry producing cell coordinate lists.
//!
//! These functions know nothing about grids or cells -- they emit
//! `(col, row)` coordinates for the shape tools, and the multi-cell paint
//! operation handles bounds (coordinates may be negative or past the grid
//! edge; painting silently drops them, so a shape that partially exits
//! the grid still paints its in-bounds portion).

use std::collections::HashSet;

/// Cells of a line from `(x0, y0)` to `(x1, y1)`, inclusive.
///
/// Bresenham's algorithm, symmetric in all 8 octants. Both endpoints are
/// always emitted exactly once; consecutive cells are 8-connected.
pub fn line_cells(x0: i64, y0: i64, x1: i64, y1: i64) -> Vec<(i64, i64)> {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let step_x = if x0 < x1 { 1 } else { -1 };
    let step_y = if y0 < y1 { 1 } else { -1 };

    let mut cells = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        cells.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let doubled = 2 * err;
        if doubled >= dy {
            err += dy;
            x += step_x;
        }
        if doubled <= dx {
            err += dx;
            y += step_y;
        }
    }

    cells
}

/// Cells of an axis-aligned rectangle given two opposite corners, in any
/// order. `filled` selects every cell of the bounding box; otherwise only
/// the border cells are emitted.
pub fn rect_cells(x0: i64, y0: i64, x1: i64, y1: i64, filled: bool) -> Vec<(i64, i64)> {
    let (min_x, max_x) = (x0.min(x1), x0.max(x1));
    let (min_y, max_y) = (y0.min(y1), y0.max(y1));

    let mut cells = Vec::new();
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if filled || x == min_x || x == max_x || y == min_y || y == max_y {
                cells.push((x, y));
            }
        }
    }
    cells
}

/// Cells of a circle centered at `(cx, cy)` with radius `r`.
///
/// Filled mode tests `dx² + dy² <= r²` over the bounding box. Outline
/// mode runs the midpoint circle algorithm; its 8-way symmetric emission
/// repeats points where octants meet (on the axes and diagonals), so the
/// output is deduplicated through an insertion-ordered seen-set -- a
/// caller counting cells or stamping semi-transparent previews must see
/// each cell once.
pub fn circle_cells(cx: i64, cy: i64, r: i64, filled: bool) -> Vec<(i64, i64)> {
    if r < 0 {
        return Vec::new();
    }
    if filled {
        let r_sq = r * r;
        let mut cells = Vec::new();
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r_sq {
                    cells.push((cx + dx, cy + dy));
                }
            }
        }
        return cells;
    }

    let mut cells = Vec::new();
    let mut seen = HashSet::new();
    let mut push = |x: i64, y: i64| {
        if seen.insert((x, y)) {
            cells.push((x, y));
        }
    };

    let mut x = r;
    let mut y = 0;
    let mut err = 1 - r;

    while x >= y {
        push(cx + x, cy + y);
        push(cx + y, cy + x);
        push(cx - y, cy + x);
        push(cx - x, cy + y);
        push(cx - x, cy - y);
        push(cx - y, cy - x);
        push(cx + y, cy - x);
        push(cx + x, cy - y);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every consecutive pair differs by at most 1 in each axis.
    fn assert_8_connected(cells: &[(i64, i64)]) {
        for pair in cells.windows(2) {
            let (ax, ay) = pair[0];
            let (bx, by) = pair[1];
            assert!(
                (ax - bx).abs() <= 1 && (ay - by).abs() <= 1,
                "cells {pair:?} are not 8-connected"
            );
        }
    }

    #[test]
    fn test_line_scenario_shallow() {
        // (0,0) to (3,1): contiguous, endpoints included.
        let cells = line_cells(0, 0, 3, 1);
        assert_eq!(cells.first(), Some(&(0, 0)));
        assert_eq!(cells.last(), Some(&(3, 1)));
        assert_8_connected(&cells);
        assert_eq!(cells.len(), 4);
    }

    #[test]
    fn test_line_single_point() {
        assert_eq!(line_cells(5, 5, 5, 5), vec![(5, 5)]);
    }

    #[test]
    fn test_line_all_octants_symmetric() {
        // A line and its reverse visit the same cell set.
        let targets = [
            (6, 2),
            (2, 6),
            (-6, 2),
            (-2, 6),
            (-6, -2),
            (-2, -6),
            (6, -2),
            (2, -6),
        ];
        for (x, y) in targets {
            let forward = line_cells(0, 0, x, y);
            let mut backward = line_cells(x, y, 0, 0);
            backward.reverse();
            assert_eq!(forward, backward, "octant ({x},{y}) not symmetric");
            assert_eq!(forward.first(), Some(&(0, 0)));
            assert_eq!(forward.last(), Some(&(x, y)));
            assert_8_connected(&forward);
        }
    }

    #[test]
    fn test_line_endpoints_once() {
        let cells = line_cells(0, 0, 4, 4);
        assert_eq!(cells.iter().filter(|&&c| c == (0, 0)).count(), 1);
        assert_eq!(cells.iter().filter(|&&c| c == (4, 4)).count(), 1);
    }

    #[test]
    fn test_rect_filled() {
        let cells = rect_cells(1, 1, 3, 2, true);
        assert_eq!(cells.len(), 3 * 2);
        assert!(cells.contains(&(2, 1)));
        assert!(cells.contains(&(2, 2)));
    }

    #[test]
    fn test_rect_outline_excludes_interior() {
        let cells = rect_cells(0, 0, 3, 3, false);
        assert_eq!(cells.len(), 12); // 4x4 box minus 2x2 interior
        assert!(!cells.contains(&(1, 1)));
        assert!(!cells.contains(&(2, 2)));
        assert!(cells.contains(&(0, 2)));
        assert!(cells.contains(&(3, 0)));
    }

    #[test]
    fn test_rect_corner_order_irrelevant() {
        let a = rect_cells(3, 2, 1, 1, true);
        let b = rect_cells(1, 1, 3, 2, true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rect_degenerate_line_and_point() {
        assert_eq!(rect_cells(2, 2, 2, 2, false), vec![(2, 2)]);
        let row = rect_cells(0, 1, 3, 1, false);
        assert_eq!(row.len(), 4);
    }

    #[test]
    fn test_circle_filled_radius_check() {
        let cells = circle_cells(0, 0, 2, true);
        assert!(cells.contains(&(0, 0)));
        assert!(cells.contains(&(2, 0)));
        assert!(cells.contains(&(0, -2)));
        // Corner of the bounding box is outside r².
        assert!(!cells.contains(&(2, 2)));
        // dx²+dy² = 1+4 > 4
        assert!(!cells.contains(&(1, 2)));
    }

    #[test]
    fn test_circle_outline_no_duplicates() {
        for r in 0..=6 {
            let cells = circle_cells(0, 0, r, false);
            let unique: HashSet<_> = cells.iter().copied().collect();
            assert_eq!(
                unique.len(),
                cells.len(),
                "radius {r} outline emitted duplicate cells"
            );
        }
    }

    #[test]
    fn test_circle_outline_hits_axis_extremes() {
        let cells = circle_cells(10, 10, 3, false);
        for extreme in [(13, 10), (7, 10), (10, 13), (10, 7)] {
            assert!(cells.contains(&extreme), "missing axis point {extreme:?}");
        }
    }

    #[test]
    fn test_circle_radius_zero_is_center() {
        assert_eq!(circle_cells(4, 5, 0, false), vec![(4, 5)]);
        assert_eq!(circle_cells(4, 5, 0, true), vec![(4, 5)]);
    }

    #[test]
    fn test_circle_negative_radius_empty() {
        assert!(circle_cells(0, 0, -1, false).is_empty());
        assert!(circle_cells(0, 0, -1, true).is_empty());
    }
}

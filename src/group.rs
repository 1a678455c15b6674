//! Chain discovery and capture resolution.
//!
//! Groups are recomputed from the grid on every query rather than
//! maintained incrementally, so they can never go stale; the cost is
//! bounded by the board area.

use crate::board::{Color, Grid, Point, Stone, neighbors};
use crate::constants::{N, NUM_CELLS};

/// A maximal chain of same-color stones connected by 4-adjacency,
/// together with its liberties.
///
/// Both collections are duplicate-free; their order is an artifact of
/// the flood fill and carries no meaning.
#[derive(Clone, Debug)]
pub struct Group {
    pub color: Color,
    pub stones: Vec<Stone>,
    pub liberties: Vec<Point>,
}

impl Group {
    /// A group with no liberties is captured and must be removed.
    pub fn is_captured(&self) -> bool {
        self.liberties.is_empty()
    }
}

/// Partition the given color's stones into maximal connected chains.
///
/// Every stone of the color belongs to exactly one returned group. Two
/// stones are adjacent when exactly one of row/col differs by exactly 1.
pub fn groups_of(grid: &Grid, color: Color) -> Vec<Group> {
    let mut visited = [false; NUM_CELLS];
    let mut groups = Vec::new();

    for stone in grid.stones() {
        if stone.color != color || visited[stone.row * N + stone.col] {
            continue;
        }
        groups.push(flood_group(grid, stone.row, stone.col, color, &mut visited));
    }
    groups
}

/// Flood-fill one chain from a starting stone, collecting members and
/// deduplicated liberties in a single traversal.
fn flood_group(
    grid: &Grid,
    row: usize,
    col: usize,
    color: Color,
    visited: &mut [bool; NUM_CELLS],
) -> Group {
    let mut stack = vec![(row, col)];
    let mut stones = Vec::new();
    let mut liberties = Vec::new();
    let mut liberty_seen = [false; NUM_CELLS];

    while let Some((r, c)) = stack.pop() {
        let i = r * N + c;
        if visited[i] {
            continue;
        }
        visited[i] = true;
        stones.push(Stone { row: r, col: c, color });

        for (nr, nc) in neighbors(r, c) {
            let ni = nr * N + nc;
            match grid.get(nr, nc) {
                None => {
                    if !liberty_seen[ni] {
                        liberty_seen[ni] = true;
                        liberties.push((nr, nc));
                    }
                }
                Some(other) if other == color && !visited[ni] => stack.push((nr, nc)),
                _ => {}
            }
        }
    }

    Group {
        color,
        stones,
        liberties,
    }
}

/// Remove every zero-liberty group of the given color from the grid.
///
/// On a placement this must run for the opponent before the mover, so
/// that a capturing stone regains its liberties before its own group is
/// checked.
pub fn remove_dead_groups(grid: &mut Grid, color: Color) {
    for group in groups_of(grid, color) {
        if group.is_captured() {
            for stone in &group.stones {
                grid.set(stone.row, stone.col, None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(black: &[Point], white: &[Point]) -> Grid {
        let mut grid = Grid::new();
        for &(row, col) in black {
            grid.set(row, col, Some(Color::Black));
        }
        for &(row, col) in white {
            grid.set(row, col, Some(Color::White));
        }
        grid
    }

    #[test]
    fn test_single_stone_liberties() {
        let grid = grid_with(&[(9, 9)], &[]);
        let groups = groups_of(&grid, Color::Black);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].stones.len(), 1);
        assert_eq!(groups[0].liberties.len(), 4);
        assert!(!groups[0].is_captured());
    }

    #[test]
    fn test_row_of_stones_is_one_chain() {
        let grid = grid_with(&[(9, 8), (9, 9), (9, 10)], &[]);
        let groups = groups_of(&grid, Color::Black);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].stones.len(), 3);
        // 2 liberties at the ends + 3 above + 3 below.
        assert_eq!(groups[0].liberties.len(), 8);
    }

    #[test]
    fn test_diagonal_stones_stay_separate() {
        let grid = grid_with(&[(9, 9), (10, 10)], &[]);
        let groups = groups_of(&grid, Color::Black);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_colors_do_not_mix() {
        let grid = grid_with(&[(9, 9)], &[(9, 10)]);
        let black = groups_of(&grid, Color::Black);
        let white = groups_of(&grid, Color::White);
        assert_eq!(black.len(), 1);
        assert_eq!(white.len(), 1);
        assert_eq!(black[0].liberties.len(), 3);
        assert_eq!(white[0].liberties.len(), 3);
    }

    #[test]
    fn test_remove_dead_groups_keeps_live_ones() {
        // White (5,5) is surrounded; white (10,10) is not.
        let mut grid = grid_with(
            &[(4, 5), (6, 5), (5, 4), (5, 6)],
            &[(5, 5), (10, 10)],
        );
        remove_dead_groups(&mut grid, Color::White);

        assert_eq!(grid.get(5, 5), None);
        assert_eq!(grid.get(10, 10), Some(Color::White));
        assert_eq!(
            grid.stones().filter(|s| s.color == Color::Black).count(),
            4
        );
    }

    #[test]
    fn test_remove_dead_groups_noop_when_alive() {
        let mut grid = grid_with(&[(0, 0)], &[(5, 5)]);
        let before = grid.clone();
        remove_dead_groups(&mut grid, Color::Black);
        remove_dead_groups(&mut grid, Color::White);
        assert_eq!(grid, before);
    }
}

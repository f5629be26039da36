use std::collections::HashSet;

use super::Solution;
use crate::maze::{Coord, Grid, get_neighbors};

/// Stack-based depth-first search. Records the visitation order only; callers
/// that want a path run [`extract_optimal_path`](crate::path::extract_optimal_path)
/// over the trace.
pub fn solve_dfs(grid: &Grid, start: Coord, end: Coord) -> Solution {
    let mut stack = vec![start];
    let mut visited = HashSet::new();
    let mut trace = Vec::new();

    while let Some(cell) = stack.pop() {
        // Cells can be stacked more than once before their first visit
        if !visited.insert(cell) {
            continue;
        }
        trace.push(cell);

        if cell == end {
            return Solution {
                trace,
                optimal_path: Vec::new(),
            };
        }

        stack.extend(get_neighbors(cell, grid).filter(|n| !visited.contains(n)));
    }

    Solution::default()
}

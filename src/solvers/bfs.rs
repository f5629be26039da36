use std::collections::{HashMap, HashSet, VecDeque};

use super::Solution;
use crate::{
    maze::{Coord, Grid, get_neighbors},
    path::backtrack,
};

/// Queue-based breadth-first search.
///
/// The first discoverer of each cell is kept as its parent, so the path
/// rebuilt from the end is a shortest one.
pub fn solve_bfs(grid: &Grid, start: Coord, end: Coord) -> Solution {
    let mut queue = VecDeque::from([start]);
    let mut visited = HashSet::new();
    let mut parents: HashMap<Coord, Coord> = HashMap::new();
    let mut trace = Vec::new();

    while let Some(cell) = queue.pop_front() {
        if !visited.insert(cell) {
            continue;
        }
        trace.push(cell);

        if cell == end {
            let optimal_path = backtrack(&parents, start, end).unwrap_or_default();
            return Solution {
                trace,
                optimal_path,
            };
        }

        for neighbor in get_neighbors(cell, grid) {
            if visited.contains(&neighbor) {
                continue;
            }
            queue.push_back(neighbor);
            parents.entry(neighbor).or_insert(cell);
        }
    }

    Solution::default()
}

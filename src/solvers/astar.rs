use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
};

use super::Solution;
use crate::{
    maze::{Coord, Grid, get_neighbors, manhattan_distance},
    path::backtrack,
};

/// Open-set entry.
#[derive(Debug, PartialEq, Eq)]
struct TrackedCell {
    /// Coordinates of the cell in the maze
    coord: Coord,
    /// Cost to reach this cell from the start
    traveling_cost: usize,
    /// Estimated cost to reach the goal from this cell
    heuristic_cost: usize,
    /// Insertion counter, so that among equal costs the earlier entry wins
    order: usize,
}

impl TrackedCell {
    fn total_cost(&self) -> usize {
        self.traveling_cost + self.heuristic_cost
    }
}

impl Ord for TrackedCell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.total_cost(), self.order).cmp(&(other.total_cost(), other.order))
    }
}

impl PartialOrd for TrackedCell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search with unit step cost and the Manhattan distance heuristic.
///
/// The heuristic is consistent on a 4-connected grid, so the first time the
/// end is extracted its cost is optimal and the rebuilt path is a shortest one.
pub fn solve_astar(grid: &Grid, start: Coord, end: Coord) -> Solution {
    // Using Reverse to turn the max-heap into a min-heap
    let mut open_set: BinaryHeap<Reverse<TrackedCell>> = BinaryHeap::new();
    let mut g_score: HashMap<Coord, usize> = HashMap::from([(start, 0)]);
    let mut came_from: HashMap<Coord, Coord> = HashMap::new();
    let mut closed = HashSet::new();
    let mut trace = Vec::new();
    let mut order = 0;

    open_set.push(Reverse(TrackedCell {
        coord: start,
        traveling_cost: 0,
        heuristic_cost: manhattan_distance(start, end),
        order,
    }));

    while let Some(Reverse(current)) = open_set.pop() {
        // An improved score re-queues a cell instead of updating it in place,
        // so skip entries that were superseded or already extracted
        let is_stale = g_score
            .get(&current.coord)
            .is_some_and(|&g| g < current.traveling_cost);
        if is_stale || !closed.insert(current.coord) {
            continue;
        }
        trace.push(current.coord);

        if current.coord == end {
            let optimal_path = backtrack(&came_from, start, end).unwrap_or_default();
            return Solution {
                trace,
                optimal_path,
            };
        }

        let tentative_cost = current.traveling_cost + 1;
        for neighbor in get_neighbors(current.coord, grid) {
            // Relax only on strict improvement
            let is_cheaper = g_score
                .get(&neighbor)
                .is_none_or(|&existing_cost| tentative_cost < existing_cost);
            if !is_cheaper {
                continue;
            }
            came_from.insert(neighbor, current.coord);
            g_score.insert(neighbor, tentative_cost);
            order += 1;
            open_set.push(Reverse(TrackedCell {
                coord: neighbor,
                traveling_cost: tentative_cost,
                heuristic_cost: manhattan_distance(neighbor, end),
                order,
            }));
        }
    }

    Solution::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maze::Cell, solvers::tests::corridor};

    #[test]
    fn test_corridor_path() {
        let solution = solve_astar(&corridor(), (0, 0), (2, 2));
        assert_eq!(
            solution.optimal_path,
            vec![(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]
        );
        assert_eq!(solution.trace.last(), Some(&(2, 2)));
    }

    #[test]
    fn test_heads_straight_for_goal_on_open_grid() {
        // With an exact heuristic only cells on some shortest path are extracted
        let grid = Grid::square(5, Cell::Open);
        let solution = solve_astar(&grid, (0, 0), (0, 4));
        assert_eq!(solution.trace, vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_eq!(solution.optimal_path, solution.trace);
    }

    #[test]
    fn test_lowest_total_cost_wins() {
        let a = TrackedCell {
            coord: (0, 0),
            traveling_cost: 3,
            heuristic_cost: 1,
            order: 5,
        };
        let b = TrackedCell {
            coord: (1, 1),
            traveling_cost: 1,
            heuristic_cost: 4,
            order: 1,
        };
        let c = TrackedCell {
            coord: (2, 2),
            traveling_cost: 2,
            heuristic_cost: 2,
            order: 2,
        };
        let mut heap = BinaryHeap::from([Reverse(a), Reverse(b), Reverse(c)]);
        assert_eq!(heap.pop().map(|Reverse(t)| t.coord), Some((2, 2)));
        assert_eq!(heap.pop().map(|Reverse(t)| t.coord), Some((0, 0)));
        assert_eq!(heap.pop().map(|Reverse(t)| t.coord), Some((1, 1)));
    }

    #[test]
    fn test_detour_is_optimal() {
        // 0 0 0 0 0
        // 0 1 1 1 0
        // 0 0 0 1 0
        // 1 1 0 1 0
        // 0 0 0 1 0
        let grid = Grid::try_from(vec![
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 0, 0, 1, 0],
            vec![1, 1, 0, 1, 0],
            vec![0, 0, 0, 1, 0],
        ])
        .unwrap();
        let solution = solve_astar(&grid, (4, 0), (4, 4));
        // (4,0) -> (4,2) -> (2,2) -> (2,0) -> (0,0) -> (0,4) -> (4,4)
        assert_eq!(solution.optimal_path.len(), 2 + 2 + 2 + 2 + 4 + 4 + 1);
        assert_eq!(solution.optimal_path.first(), Some(&(4, 0)));
        assert_eq!(solution.optimal_path.last(), Some(&(4, 4)));
    }
}

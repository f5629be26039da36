//! Path reconstruction from parent links or from a visitation trace.

use std::collections::HashMap;

use crate::{
    error::{MazeError, Result},
    maze::{Coord, is_adjacent},
};

/// Walks `parents` from `end` back to `start` and returns the path in
/// start-to-end order.
///
/// Returns `None` if the chain breaks before reaching `start`, or if it runs
/// longer than there are links (which can only happen on a cycle).
pub(crate) fn backtrack(
    parents: &HashMap<Coord, Coord>,
    start: Coord,
    end: Coord,
) -> Option<Vec<Coord>> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = *parents.get(&current)?;
        path.push(current);
        if path.len() > parents.len() + 1 {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

/// Reconstructs a start-to-end path from any solver's visitation trace.
///
/// Every consecutive pair of the trace that is Manhattan-adjacent links the
/// later cell to the earlier one; the first link recorded for a cell wins.
/// The trace must be a walk that reaches `end` and connects back to `start`
/// through adjacent steps, otherwise this fails with
/// [`MazeError::BacktrackingFailed`]. It is not a shortest-path search.
pub fn extract_optimal_path(trace: &[Coord], start: Coord, end: Coord) -> Result<Vec<Coord>> {
    let mut parents = HashMap::new();
    for pair in trace.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        if is_adjacent(prev, curr) {
            parents.entry(curr).or_insert(prev);
        }
    }

    let path = backtrack(&parents, start, end);
    tracing::debug!(
        "[path] {} links from a trace of {} cells, path found: {}",
        parents.len(),
        trace.len(),
        path.is_some()
    );
    path.ok_or(MazeError::BacktrackingFailed { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_walk() {
        let trace = [(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)];
        let path = extract_optimal_path(&trace, (0, 0), (2, 2)).unwrap();
        assert_eq!(path, trace.to_vec());
    }

    #[test]
    fn test_first_link_wins() {
        // (1, 1) is first reached from (0, 1); the later visit from (1, 0)
        // must not replace that link
        let trace = [(0, 0), (0, 1), (1, 1), (1, 0), (1, 1), (2, 1)];
        let path = extract_optimal_path(&trace, (0, 0), (2, 1)).unwrap();
        assert_eq!(path, vec![(0, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_jump_in_trace_breaks_backtracking() {
        // (2, 0) follows (0, 2) without being adjacent to it
        let trace = [(0, 0), (0, 1), (0, 2), (2, 0), (2, 1)];
        assert_eq!(
            extract_optimal_path(&trace, (0, 0), (2, 1)),
            Err(MazeError::BacktrackingFailed {
                start: (0, 0),
                end: (2, 1)
            })
        );
    }

    #[test]
    fn test_end_missing_from_trace() {
        let trace = [(0, 0), (0, 1)];
        assert!(matches!(
            extract_optimal_path(&trace, (0, 0), (3, 3)),
            Err(MazeError::BacktrackingFailed { .. })
        ));
        assert!(extract_optimal_path(&[], (0, 0), (0, 1)).is_err());
    }

    #[test]
    fn test_start_equals_end() {
        assert_eq!(extract_optimal_path(&[], (2, 2), (2, 2)), Ok(vec![(2, 2)]));
    }

    #[test]
    fn test_backtrack_stops_on_cycle() {
        let parents = HashMap::from([((0, 1), (0, 2)), ((0, 2), (0, 1))]);
        assert_eq!(backtrack(&parents, (0, 0), (0, 1)), None);
    }
}

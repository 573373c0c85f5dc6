use std::collections::VecDeque;

use crate::network::Network;

/// Breadth-first search from `source` over edges with strictly positive
/// residual capacity.
///
/// Returns whether the sink was reached, plus the predecessor map of the BFS
/// tree. FIFO expansion in ascending neighbor order makes the result
/// deterministic and guarantees the recorded sink path has the fewest edges
/// among all residual-positive paths.
pub(crate) fn augmenting_path(
    network: &Network,
    source: usize,
    sink: usize,
) -> (bool, Vec<Option<usize>>) {
    let mut visited = vec![false; network.num_vertices()];
    let mut predecessors: Vec<Option<usize>> = vec![None; network.num_vertices()];
    let mut queue = VecDeque::from([source]);
    visited[source] = true;

    while let Some(current) = queue.pop_front() {
        for neighbor in network.neighbors(current) {
            if !visited[neighbor] && network.capacity(current, neighbor) > 0 {
                visited[neighbor] = true;
                predecessors[neighbor] = Some(current);
                queue.push_back(neighbor);
            }
        }
    }

    log::trace!(
        "BFS from {source}: sink {sink} {}reached, predecessors {predecessors:?}",
        if visited[sink] { "" } else { "not " }
    );
    (visited[sink], predecessors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_fewest_edges() {
        // Both 0 -> 1 -> 2 -> 3 and the shortcut 0 -> 3 exist.
        let mut network = Network::new(4).unwrap();
        network.set_capacity(0, 1, 5).unwrap();
        network.set_capacity(1, 2, 5).unwrap();
        network.set_capacity(2, 3, 5).unwrap();
        network.set_capacity(0, 3, 1).unwrap();

        let (reached, predecessors) = augmenting_path(&network, 0, 3);
        assert!(reached);
        assert_eq!(Some(0), predecessors[3]);
    }

    #[test]
    fn test_reports_missing_path() {
        let mut network = Network::new(4).unwrap();
        network.set_capacity(0, 1, 5).unwrap();
        network.set_capacity(2, 3, 5).unwrap();

        let (reached, _) = augmenting_path(&network, 0, 3);
        assert!(!reached);
    }

    #[test]
    fn test_ignores_non_positive_residuals() {
        let mut network = Network::new(3).unwrap();
        network.set_capacity(0, 1, -4).unwrap();
        network.set_capacity(1, 2, 6).unwrap();

        let (reached, _) = augmenting_path(&network, 0, 2);
        assert!(!reached);
    }

    #[test]
    fn test_ties_break_by_visitation_order() {
        // Two equal-length paths to the sink; the lower-indexed intermediate
        // vertex is expanded first and claims the predecessor slot.
        let mut network = Network::new(4).unwrap();
        network.set_capacity(0, 1, 5).unwrap();
        network.set_capacity(0, 2, 5).unwrap();
        network.set_capacity(1, 3, 5).unwrap();
        network.set_capacity(2, 3, 5).unwrap();

        let (reached, predecessors) = augmenting_path(&network, 0, 3);
        assert!(reached);
        assert_eq!(Some(1), predecessors[3]);
    }
}

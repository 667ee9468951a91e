use tracing::{debug, debug_span};

use super::lattice::Lattice;

/// Find the lowest-cost path of lattice nodes covering the whole input.
///
/// Forward pass over positions, then a backtrace. Costs sit on nodes, not
/// transitions, so one best entry per position is enough. Candidates are
/// visited in a fixed order and only a strictly lower cost replaces the
/// incumbent, which makes equal-cost ties, and therefore the whole search,
/// deterministic.
///
/// Returns node indices in input order; empty only for empty input.
pub fn best_path(lattice: &Lattice) -> Vec<usize> {
    let len = lattice.len;
    let _span = debug_span!("best_path", len).entered();

    let mut best_cost = vec![i64::MAX; len + 1];
    let mut best_node: Vec<Option<usize>> = vec![None; len + 1];
    best_cost[0] = 0;

    for pos in 1..=len {
        for &idx in &lattice.nodes_by_end[pos] {
            let node = &lattice.nodes[idx];
            if best_cost[node.start] == i64::MAX {
                continue;
            }
            let cost = best_cost[node.start] + node.cost;
            if cost < best_cost[pos] {
                best_cost[pos] = cost;
                best_node[pos] = Some(idx);
            }
        }
    }

    let mut path = Vec::new();
    let mut pos = len;
    while pos > 0 {
        let Some(idx) = best_node[pos] else {
            // Unreachable when the lattice has fallback nodes; bail rather
            // than loop.
            return Vec::new();
        };
        path.push(idx);
        pos = lattice.nodes[idx].start;
    }
    path.reverse();

    debug!(pieces = path.len(), cost = best_cost[len]);
    path
}

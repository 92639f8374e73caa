//! Bellman-Ford algorithm for general EdgeWeight
//!
//! It works for any EdgeWeight satisfying FloatWeight,
//! and negative edge weights are permitted.

use super::common::FloatWeight;
use super::error::{Error, Result};
use super::graph::Graph;
use super::paths::{initialize_single_source, relax, Paths};
use log::{debug, trace, warn};
use petgraph::prelude::*;
use petgraph::visit::{VisitMap, Visitable};

/// Compute shortest paths from node `source` to all other.
///
/// Using the [Bellman–Ford algorithm][bf]; negative edge costs are
/// permitted, but the graph must not have a cycle of negative weights
/// reachable from `source` (in that case it will return `Error::NegativeCycle`).
///
/// [bf]: https://en.wikipedia.org/wiki/Bellman%E2%80%93Ford_algorithm
///
/// # Example
/// ```rust
/// use clrs_algos::bellman_ford::bellman_ford;
/// use clrs_algos::common::ni;
/// use clrs_algos::graph::Graph;
///
/// // Graph represented with the weight of each edge
/// //
/// //     2       1
/// // a ----> b ----> c
/// // | 4     | 7     |
/// // v       v       | 5
/// // d       f       |
/// // | 1     ^ 1     |
/// // \-----> e <-----/
///
/// let g: Graph<f64> = Graph::from_edges(&[
///     (0, 1, 2.0),
///     (0, 3, 4.0),
///     (1, 2, 1.0),
///     (1, 5, 7.0),
///     (2, 4, 5.0),
///     (4, 5, 1.0),
///     (3, 4, 1.0),
/// ]);
/// let paths = bellman_ford(&g, ni(0)).unwrap();
/// assert_eq!(paths.distances, vec![0.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// assert_eq!(paths.path_to(ni(5)), Some(vec![ni(0), ni(3), ni(4), ni(5)]));
/// ```
pub fn bellman_ford<E: FloatWeight>(graph: &Graph<E>, source: NodeIndex) -> Result<Paths> {
    graph.check(source)?;

    // Step 1 and Step 2: initialize and relax
    let paths = bellman_ford_initialize_relax(graph, source);

    // Step 3: check for negative weight cycle
    if let Some((u, v)) = find_relaxable_edge(graph, &paths) {
        warn!(
            "negative cycle detected: edge {}->{} can still be relaxed",
            graph.label(u),
            graph.label(v)
        );
        return Err(Error::NegativeCycle);
    }

    Ok(paths)
}

/// Find the path of a negative cycle reachable from node `source`.
///
/// If no negative cycle is found the function will return `Ok(None)`.
///
/// If a negative cycle is found from source, return the nodes of the cycle
/// in the order of its edges: `[v0, v1, ..., vk]` for the cycle `v0 -> v1 -> ... -> vk -> v0`.
///
/// The time complexity of this algorithm should be the same as the Bellman-Ford (O(|V|·|E|)).
pub fn find_negative_cycle<E: FloatWeight>(
    graph: &Graph<E>,
    source: NodeIndex,
) -> Result<Option<Vec<NodeIndex>>> {
    graph.check(source)?;
    let mut paths = bellman_ford_initialize_relax(graph, source);

    //
    // The relaxing function above checks all shortest paths whose edge count <= |V|-1
    // If the shortest paths can be relaxed more, there should be a negative cycle.
    //
    match find_relaxable_edge(graph, &paths) {
        Some((u, v)) => {
            // A new shortest path from source to v was found
            // ending with this edge u->v
            //
            // Length of this path is |V|, so there should be a duplicate node (that was visited
            // twice by this path). `traceback_cycle` will find the cyclic subpath.
            let w = graph.weight(u, v).map_or(0.0, |w| w.float_weight());
            paths.distances[v.index()] = paths.distances[u.index()] + w;
            paths.predecessors[v.index()] = Some(u);
            Ok(traceback_cycle(graph, &paths.predecessors, v))
        }
        None => Ok(None),
    }
}

///
/// Find a cycle in the predecessor chain of `target`
///
/// by using Bellman-Ford's pred (shortest path tree) on graph `g`.
/// None if the chain reaches a node without predecessor.
///
fn traceback_cycle<E>(
    graph: &Graph<E>,
    pred: &[Option<NodeIndex>],
    target: NodeIndex,
) -> Option<Vec<NodeIndex>> {
    let mut path = Vec::new();
    let mut node = target;
    let mut visited = graph.as_digraph().visit_map();
    path.push(node);
    visited.visit(node);

    loop {
        trace!("traceback node={}", node.index());
        node = pred[node.index()]?;

        // loop detected
        if visited.is_visited(&node) {
            let pos = path.iter().position(|&p| p == node)?;
            path = path[pos..].to_vec();
            break;
        }

        path.push(node);
        visited.visit(node);
    }

    // path was collected backward along the predecessors
    path.reverse();
    Some(path)
}

///
/// An edge `u -> v` with `d[u] + w < d[v]`, if any.
///
fn find_relaxable_edge<E: FloatWeight>(
    graph: &Graph<E>,
    paths: &Paths,
) -> Option<(NodeIndex, NodeIndex)> {
    graph
        .edges()
        .find(|&(_, u, v, w)| {
            paths.distances[u.index()] + w.float_weight() + E::epsilon()
                < paths.distances[v.index()]
        })
        .map(|(_, u, v, _)| (u, v))
}

// Perform Step 1 and Step 2 of the Bellman-Ford algorithm.
#[inline(always)]
fn bellman_ford_initialize_relax<E: FloatWeight>(graph: &Graph<E>, source: NodeIndex) -> Paths {
    // Step 1: initialize graph
    let mut paths = initialize_single_source(graph.vertex_count(), source);

    // Step 2: relax edges repeatedly
    for i in 1..graph.vertex_count() {
        let mut did_update = false;
        for (_, u, v, w) in graph.edges() {
            if relax(&mut paths, u, v, w) {
                trace!(
                    "updated\tu={}\tv={}\td[v]={}",
                    graph.label(u),
                    graph.label(v),
                    paths.distances[v.index()]
                );
                did_update = true;
            }
        }
        if !did_update {
            debug!("bellman-ford converged after {} passes", i);
            break;
        }
    }
    paths
}

//
// test
//

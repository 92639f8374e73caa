//!
//! Single-source shortest paths in a directed acyclic graph
//!
use super::common::FloatWeight;
use super::error::Result;
use super::graph::Graph;
use super::paths::{initialize_single_source, relax, Paths};
use super::traversal::topological_sort;
use log::debug;
use petgraph::graph::NodeIndex;

///
/// Relax the outgoing edges of every vertex once, in topological order.
///
/// Negative edge weights are allowed. The graph must be acyclic;
/// with a cycle the distances are not guaranteed to be shortest.
///
pub fn dag_shortest_paths<E: FloatWeight>(graph: &Graph<E>, source: NodeIndex) -> Result<Paths> {
    graph.check(source)?;
    let order = topological_sort(graph);
    let mut paths = initialize_single_source(graph.vertex_count(), source);

    for u in order {
        for (_, v, w) in graph.children(u) {
            if relax(&mut paths, u, v, w) {
                debug!(
                    "relaxed {}->{} d={}",
                    graph.label(u),
                    graph.label(v),
                    paths.distances[v.index()]
                );
            }
        }
    }
    Ok(paths)
}

//
// tests
//

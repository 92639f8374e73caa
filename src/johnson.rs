//!
//! Johnson's algorithm for all-pairs shortest paths in sparse graphs
//!
//! # References
//!
//! * Introduction to algorithms, 25.3
//!
use super::bellman_ford::bellman_ford;
use super::common::FloatWeight;
use super::dijkstra::dijkstra;
use super::error::Result;
use super::graph::{Graph, Vertex};
use log::debug;

///
/// Compute `D[u][v]`, the shortest path distance from u to v for all pairs.
///
/// 1. add a new node `s` with zero-weight edges to all nodes
/// 2. `h(v)` = distance from `s` by Bellman-Ford (fails on a negative cycle)
/// 3. reweight every edge `w(u,v) + h(u) - h(v)`, which is non-negative
/// 4. Dijkstra from every node on the reweighted graph
/// 5. restore `D[u][v] = d(u,v) - h(u) + h(v)`
///
/// The input graph is left untouched.
///
pub fn johnson<E: FloatWeight>(graph: &Graph<E>) -> Result<Vec<Vec<f64>>> {
    let n = graph.vertex_count();

    // (1) augmented graph G' with the extra source
    let mut augmented: Graph<f64> = graph.reweighted(|_, _, w| w.float_weight());
    let s = augmented.add_vertex(Vertex::new("s"));
    for v in graph.vertices() {
        augmented.add_edge(s, v, 0.0)?;
    }

    // (2) potential h
    let h = bellman_ford(&augmented, s)?.distances;
    debug!("johnson potential h={:?}", h);

    // (3) reweight
    let reweighted: Graph<f64> =
        graph.reweighted(|u, v, w| w.float_weight() + h[u.index()] - h[v.index()]);

    // (4) and (5)
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for u in graph.vertices() {
        let paths = dijkstra(&reweighted, u)?;
        for v in graph.vertices() {
            let d = paths.distances[v.index()];
            if d != f64::INFINITY {
                dist[u.index()][v.index()] = d + h[v.index()] - h[u.index()];
            }
        }
    }

    Ok(dist)
}

//
// tests
//

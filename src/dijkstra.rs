//!
//! Dijkstra's single-source shortest paths with the crate `MinHeap`
//!
use super::common::FloatWeight;
use super::error::Result;
use super::graph::Graph;
use super::heap::MinHeap;
use super::paths::{initialize_single_source, relax, Paths};
use log::{debug, trace};
use petgraph::graph::NodeIndex;

///
/// Compute shortest paths from `source` to all other nodes.
///
/// All edge weights must be non-negative;
/// otherwise the distances are not guaranteed to be shortest.
///
/// The priority queue holds `(d[v], v)` ordered by distance.
/// When an edge relaxation lowers `d[v]`, the entry of `v` is found by a linear scan
/// and moved up with `decrease_key`.
///
pub fn dijkstra<E: FloatWeight>(graph: &Graph<E>, source: NodeIndex) -> Result<Paths> {
    graph.check(source)?;
    let mut paths = initialize_single_source(graph.vertex_count(), source);
    let mut queue = MinHeap::with_order(
        graph.vertices().map(|v| (paths.distances[v.index()], v)),
        |a: &(f64, NodeIndex), b: &(f64, NodeIndex)| a.0 < b.0,
    );

    while !queue.is_empty() {
        let (d, u) = queue.extract_min()?;
        trace!("extracted {} d={}", graph.label(u), d);
        for (_, v, w) in graph.children(u) {
            if relax(&mut paths, u, v, w) {
                let dv = paths.distances[v.index()];
                debug!("relaxed {}->{} d={}", graph.label(u), graph.label(v), dv);
                // v has already been extracted if it is not in the queue
                if let Some(i) = queue.position(|&(_, node)| node == v) {
                    queue.decrease_key(i, (dv, v))?;
                }
            }
        }
    }
    Ok(paths)
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bellman_ford::bellman_ford;
    use crate::common::ni;
    use crate::error::Error;
    use crate::graph::Vertex;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    ///
    /// Introduction to algorithms Figure 24.6
    ///
    fn figure_24_6() -> Graph<i32> {
        let mut g = Graph::from_vertices(["s", "t", "x", "y", "z"].iter().map(|&n| Vertex::new(n)));
        for &(a, b, w) in &[
            (0, 1, 10),
            (0, 3, 5),
            (1, 2, 1),
            (1, 3, 2),
            (2, 4, 4),
            (3, 1, 3),
            (3, 2, 9),
            (3, 4, 2),
            (4, 0, 7),
            (4, 2, 6),
        ] {
            g.add_edge(ni(a), ni(b), w).unwrap();
        }
        g
    }

    #[test]
    fn dijkstra_figure_24_6() {
        let g = figure_24_6();
        let paths = dijkstra(&g, ni(0)).unwrap();
        assert_eq!(paths.distances, vec![0.0, 8.0, 9.0, 5.0, 7.0]);
        assert_eq!(
            paths.predecessors,
            vec![None, Some(ni(3)), Some(ni(1)), Some(ni(0)), Some(ni(3))]
        );
        assert_eq!(paths.path_to(ni(2)), Some(vec![ni(0), ni(3), ni(1), ni(2)]));
    }

    #[test]
    fn dijkstra_unreachable_and_foreign() {
        let g: Graph<f64> = Graph::from_edges(&[(0, 1, 1.5), (2, 0, 1.0)]);
        let paths = dijkstra(&g, ni(0)).unwrap();
        assert_eq!(paths.distances, vec![0.0, 1.5, f64::INFINITY]);
        assert_eq!(dijkstra(&g, ni(5)), Err(Error::VertexNotFound(5)));
    }

    #[test]
    fn dijkstra_matches_bellman_ford_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(24);
        for _ in 0..30 {
            let n = rng.gen_range(1..12);
            let mut g: Graph<i64> = Graph::from_vertices(vec![Vertex::anonymous(); n]);
            for _ in 0..rng.gen_range(0..3 * n) {
                let (u, v) = (rng.gen_range(0..n), rng.gen_range(0..n));
                g.add_edge(ni(u), ni(v), rng.gen_range(0..20)).unwrap();
            }
            for s in g.vertices() {
                let d1 = dijkstra(&g, s).unwrap().distances;
                let d2 = bellman_ford(&g, s).unwrap().distances;
                assert_eq!(d1, d2);
            }
        }
    }
}

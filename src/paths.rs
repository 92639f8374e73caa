//!
//! Single-source shortest path state shared by
//! Bellman-Ford, DAG shortest paths and Dijkstra
//!
use super::common::{traceback, FloatWeight};
use petgraph::graph::NodeIndex;

///
/// Distance estimates and shortest path tree from one source.
///
/// The vectors are indexed by `NodeIndex::index()`.
/// `f64::INFINITY` means the node is not reachable from the source.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Paths {
    pub source: NodeIndex,
    pub distances: Vec<f64>,
    pub predecessors: Vec<Option<NodeIndex>>,
}

impl Paths {
    ///
    /// Distance from the source; None for a node outside of the graph
    ///
    pub fn distance(&self, node: NodeIndex) -> Option<f64> {
        self.distances.get(node.index()).copied()
    }

    ///
    /// Vertices on the shortest path from the source to `target`
    ///
    /// None if target is unreachable
    ///
    pub fn path_to(&self, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        if self.distance(target)? == f64::INFINITY {
            return None;
        }
        traceback(&self.predecessors, target)
    }
}

///
/// Every distance is infinity except `d[source] = 0`, and no predecessors.
///
pub fn initialize_single_source(n_nodes: usize, source: NodeIndex) -> Paths {
    let mut distances = vec![f64::INFINITY; n_nodes];
    distances[source.index()] = 0.0;
    Paths {
        source,
        distances,
        predecessors: vec![None; n_nodes],
    }
}

///
/// Relax the edge `u -> v`
///
/// if `d[u] + w < d[v]`, set `d[v] = d[u] + w` and `p[v] = u`.
/// Returns true if `v` was updated.
///
pub fn relax<E: FloatWeight>(paths: &mut Paths, u: NodeIndex, v: NodeIndex, weight: &E) -> bool {
    let w = weight.float_weight();
    let du = paths.distances[u.index()];
    if du + w + E::epsilon() < paths.distances[v.index()] {
        paths.distances[v.index()] = du + w;
        paths.predecessors[v.index()] = Some(u);
        true
    } else {
        false
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ni;

    #[test]
    fn relax_updates_only_shorter() {
        let mut paths = initialize_single_source(3, ni(0));
        assert_eq!(paths.distances, vec![0.0, f64::INFINITY, f64::INFINITY]);

        assert!(relax(&mut paths, ni(0), ni(1), &5.0));
        assert_eq!(paths.distance(ni(1)), Some(5.0));
        assert_eq!(paths.predecessors[1], Some(ni(0)));

        // not shorter
        assert!(!relax(&mut paths, ni(0), ni(1), &5.0));
        // unreachable u never relaxes
        assert!(!relax(&mut paths, ni(2), ni(1), &-100.0));

        assert!(relax(&mut paths, ni(1), ni(2), &-2));
        assert_eq!(paths.distance(ni(2)), Some(3.0));
        assert_eq!(paths.path_to(ni(2)), Some(vec![ni(0), ni(1), ni(2)]));
    }

    #[test]
    fn unreachable_has_no_path() {
        let paths = initialize_single_source(2, ni(1));
        assert_eq!(paths.path_to(ni(0)), None);
        assert_eq!(paths.path_to(ni(1)), Some(vec![ni(1)]));

        // foreign node
        assert_eq!(paths.distance(ni(2)), None);
        assert_eq!(paths.path_to(ni(2)), None);
    }
}

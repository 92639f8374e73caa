//!
//! Floyd-Warshall algorithm
//! to find shortest paths of all pairs of nodes
//!
use super::common::FloatWeight;
use super::graph::Graph;
use itertools::Itertools;
use log::debug;
use petgraph::prelude::*;

///
/// All-pairs shortest path distances and predecessors.
///
/// `distances[i][j]` is the distance from node i to node j (INFINITY if unreachable)
/// and `predecessors[i][j]` is the node before j on a shortest path from i.
///
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairs {
    pub distances: Vec<Vec<f64>>,
    pub predecessors: Vec<Vec<Option<NodeIndex>>>,
}

impl AllPairs {
    ///
    /// Vertices on a shortest path from `source` to `target`
    ///
    pub fn path(&self, source: NodeIndex, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        let i = source.index();
        let distance = *self.distances.get(i)?.get(target.index())?;
        if distance == f64::INFINITY {
            return None;
        }
        let n = self.distances.len();
        let mut nodes = vec![target];
        let mut node = target;
        while node != source {
            node = self.predecessors[i][node.index()]?;
            nodes.push(node);
            // a negative cycle makes the predecessors loop
            if nodes.len() > n {
                return None;
            }
        }
        nodes.reverse();
        Some(nodes)
    }
}

///
/// `W[u][v]` = weight of the edge u->v, 0 on the diagonal, INFINITY otherwise
///
pub fn weight_matrix<E: FloatWeight>(graph: &Graph<E>) -> Vec<Vec<f64>> {
    let n = graph.vertex_count();
    let mut w = vec![vec![f64::INFINITY; n]; n];
    for i in 0..n {
        w[i][i] = 0.0;
    }
    for (_, u, v, weight) in graph.edges() {
        // self-loops do not shorten the empty path
        if u != v {
            w[u.index()][v.index()] = weight.float_weight();
        }
    }
    w
}

///
/// `P[u][v] = u` for every edge u->v, None otherwise
///
pub fn predecessor_matrix<E>(graph: &Graph<E>) -> Vec<Vec<Option<NodeIndex>>> {
    let n = graph.vertex_count();
    let mut p = vec![vec![None; n]; n];
    for (_, u, v, _) in graph.edges() {
        if u != v {
            p[u.index()][v.index()] = Some(u);
        }
    }
    p
}

///
/// Floyd-Warshall algorithm
/// to find a shortest path distance of all pairs of nodes.
///
/// Negative edges are allowed, but negative cycles are not detected.
///
pub fn floyd_warshall<E: FloatWeight>(graph: &Graph<E>) -> AllPairs {
    let n = graph.vertex_count();
    let mut dist = weight_matrix(graph);
    let mut pred = predecessor_matrix(graph);

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                // min(d[i,j], d[i,k]+d[k,j])
                let through_k = dist[i][k] + dist[k][j];
                if through_k < dist[i][j] {
                    dist[i][j] = through_k;
                    pred[i][j] = pred[k][j];
                }
            }
        }
        debug!("D for k = {}\n{}", k + 1, format_matrix(&dist));
    }

    AllPairs {
        distances: dist,
        predecessors: pred,
    }
}

fn format_matrix(matrix: &[Vec<f64>]) -> String {
    matrix.iter().map(|row| row.iter().join("\t")).join("\n")
}

//
// tests
//

//!
//! Minimum spanning trees
//!
//! * kruskal: sorted edges + union-find
//! * prim: grow a tree from a root with the crate `MinHeap`
//!
//! Undirected graphs are given with edges in both directions.
//!
use super::common::FloatWeight;
use super::error::Result;
use super::graph::Graph;
use super::heap::MinHeap;
use itertools::Itertools;
use log::debug;
use petgraph::graph::NodeIndex;
use petgraph::visit::{VisitMap, Visitable};
use std::cmp::Ordering;

///
/// Disjoint sets over `0..n` with path compression and union by rank
///
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    /// make_set for every element
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    ///
    /// Root of the set containing x
    ///
    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    ///
    /// Merge the sets of x and y. Returns false if they were already the same set.
    ///
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let (x, y) = (self.find(x), self.find(y));
        if x == y {
            return false;
        }
        // link: the root with smaller rank goes under the other
        match self.rank[x].cmp(&self.rank[y]) {
            Ordering::Greater => self.parent[y] = x,
            Ordering::Less => self.parent[x] = y,
            Ordering::Equal => {
                self.parent[x] = y;
                self.rank[y] += 1;
            }
        }
        true
    }
}

///
/// Edges `(u, v, w(u,v))` of a minimum spanning tree (or forest)
///
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    pub edges: Vec<(NodeIndex, NodeIndex, f64)>,
    pub total_weight: f64,
}

impl SpanningTree {
    fn from_edges(edges: Vec<(NodeIndex, NodeIndex, f64)>) -> Self {
        let total_weight = edges.iter().map(|&(_, _, w)| w).sum();
        SpanningTree {
            edges,
            total_weight,
        }
    }
}

impl std::fmt::Display for SpanningTree {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "[{}] Minimal weight: {}",
            self.edges
                .iter()
                .map(|(u, v, w)| format!("({}, {}, {})", u.index(), v.index(), w))
                .join(", "),
            self.total_weight
        )
    }
}

///
/// Kruskal's algorithm
///
/// Take edges in increasing order of weight (ties in edge list order),
/// skipping an edge if both ends are already connected.
///
pub fn kruskal<E: FloatWeight>(graph: &Graph<E>) -> SpanningTree {
    let mut sets = UnionFind::new(graph.vertex_count());
    let edges = graph
        .edges()
        .map(|(_, u, v, w)| (u, v, w.float_weight()))
        .sorted_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(Ordering::Equal));

    let mut tree = Vec::new();
    for (u, v, w) in edges {
        if sets.union(u.index(), v.index()) {
            debug!("kruskal takes {}-{} w={}", graph.label(u), graph.label(v), w);
            tree.push((u, v, w));
        }
    }
    SpanningTree::from_edges(tree)
}

///
/// Prim's algorithm starting from `root`
///
/// `key[v]` is the lightest edge connecting v to the tree. Extracted vertices
/// are recorded in a settled set; only unsettled neighbors are updated.
///
/// A vertex unreachable from the tree is extracted with key INFINITY
/// and starts a new tree, so a disconnected graph gives a spanning forest.
///
pub fn prim<E: FloatWeight>(graph: &Graph<E>, root: NodeIndex) -> Result<SpanningTree> {
    graph.check(root)?;
    let n = graph.vertex_count();
    let mut key = vec![f64::INFINITY; n];
    let mut parent: Vec<Option<NodeIndex>> = vec![None; n];
    key[root.index()] = 0.0;

    let mut queue = MinHeap::with_order(
        graph.vertices().map(|v| (key[v.index()], v)),
        |a: &(f64, NodeIndex), b: &(f64, NodeIndex)| a.0 < b.0,
    );
    let mut settled = graph.as_digraph().visit_map();

    while !queue.is_empty() {
        let (_, u) = queue.extract_min()?;
        settled.visit(u);
        for (_, v, w) in graph.children(u) {
            let w = w.float_weight();
            if !settled.is_visited(&v) && w < key[v.index()] {
                key[v.index()] = w;
                parent[v.index()] = Some(u);
                if let Some(i) = queue.position(|&(_, node)| node == v) {
                    queue.decrease_key(i, (w, v))?;
                }
            }
        }
    }

    // tree edges from the parent pointers
    let edges = graph
        .vertices()
        .filter_map(|v| parent[v.index()].map(|u| (u, v, key[v.index()])))
        .collect();
    Ok(SpanningTree::from_edges(edges))
}

//
// tests
//

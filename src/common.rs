//!
//! Common definition and utility functions for graphs
//!

use super::graph::Graph;
use fnv::FnvHashSet as HashSet;
use petgraph::prelude::*;

///
/// FloatWeight is generalized type of f64.
///
/// It represents a type for which
/// * f64 convertable
/// * epsilon is defined
///
/// Every shortest path and spanning tree algorithm in this crate accepts
/// edge weights of any FloatWeight type and computes distances in f64.
///
pub trait FloatWeight {
    fn float_weight(&self) -> f64;
    fn epsilon() -> f64;
}

impl FloatWeight for f64 {
    fn float_weight(&self) -> f64 {
        *self
    }
    fn epsilon() -> f64 {
        f64::EPSILON
    }
}

// f32 converts to f64 exactly and distances are summed in f64
impl FloatWeight for f32 {
    fn float_weight(&self) -> f64 {
        *self as f64
    }
    fn epsilon() -> f64 {
        f64::EPSILON
    }
}

// integer weights are exact, so no tolerance is needed
impl FloatWeight for i32 {
    fn float_weight(&self) -> f64 {
        *self as f64
    }
    fn epsilon() -> f64 {
        0.0
    }
}

impl FloatWeight for i64 {
    fn float_weight(&self) -> f64 {
        *self as f64
    }
    fn epsilon() -> f64 {
        0.0
    }
}

///
/// short-hand of `NodeIndex::new`
///
pub fn ni(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

///
/// short-hand of `EdgeIndex::new`
///
pub fn ei(index: usize) -> EdgeIndex {
    EdgeIndex::new(index)
}

///
/// Calculate total weight of path (a list of nodes)
///
/// Returns None if two adjacent nodes in the path are not connected by an edge.
///
pub fn path_weight<E: FloatWeight>(graph: &Graph<E>, nodes: &[NodeIndex]) -> Option<f64> {
    nodes
        .windows(2)
        .map(|pair| graph.weight(pair[0], pair[1]).map(|w| w.float_weight()))
        .sum()
}

///
/// Calculate total weight of a cycle (a list of nodes, the last node connects to the first)
///
pub fn cycle_weight<E: FloatWeight>(graph: &Graph<E>, nodes: &[NodeIndex]) -> Option<f64> {
    let n = nodes.len();
    (0..n)
        .map(|i| {
            graph
                .weight(nodes[i], nodes[(i + 1) % n])
                .map(|w| w.float_weight())
        })
        .sum()
}

///
/// determine if the path (= a list of nodes) is node-simple
///
pub fn is_node_simple(nodes: &[NodeIndex]) -> bool {
    let mut used: HashSet<NodeIndex> = HashSet::default();
    nodes.iter().all(|&node| used.insert(node))
}

///
/// Follow a predecessor array backward from `target` and return the path
/// `source -> ... -> target` in forward order.
///
/// `source` is the node whose predecessor is None.
/// Returns None if the chain runs into a loop before reaching it.
///
pub fn traceback(predecessors: &[Option<NodeIndex>], target: NodeIndex) -> Option<Vec<NodeIndex>> {
    let mut path = vec![target];
    let mut node = target;
    while let Some(pred) = predecessors[node.index()] {
        // a chain longer than |V| must contain a loop
        if path.len() > predecessors.len() {
            return None;
        }
        path.push(pred);
        node = pred;
    }
    path.reverse();
    Some(path)
}

//
// tests
//

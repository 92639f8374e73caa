//!
//! Iterators over the vertices and edges of `Graph`
//!
//! * nodes()
//! * edges()
//! * adjacency() / children()
//!
use super::graph::Vertex;
use petgraph::graph::{DiGraph, EdgeIndex, EdgeReference, NodeIndex, NodeIndices, NodeReferences};
use petgraph::visit::{EdgeRef, IntoNodeReferences};
use petgraph::Direction;

///
/// Iterator struct for `nodes()`
///
/// implements Iterator whose item is
/// `(node: NodeIndex, vertex: &Vertex)`
///
/// wrapper of DiGraph::node_references()
///
pub struct NodesIterator<'a> {
    nodes: NodeReferences<'a, Vertex>,
}

impl<'a> NodesIterator<'a> {
    ///
    /// Create NodesIterator from DiGraph
    ///
    pub fn new<E>(graph: &'a DiGraph<Vertex, E>) -> Self {
        NodesIterator {
            nodes: graph.node_references(),
        }
    }
}

impl<'a> Iterator for NodesIterator<'a> {
    type Item = (NodeIndex, &'a Vertex);
    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next()
    }
}

///
/// Iterator for `children()`
///
/// implements Iterator whose item is
/// `(edge: EdgeIndex, child: NodeIndex, edge_weight: &E)`
///
/// petgraph walks the outgoing list newest-first,
/// so the references are collected and replayed in insertion order.
///
pub struct ChildEdges<'a, E: 'a> {
    edges: std::iter::Rev<std::vec::IntoIter<EdgeReference<'a, E>>>,
}

impl<'a, E> ChildEdges<'a, E> {
    ///
    /// Create ChildEdges from the reference of DiGraph
    ///
    pub fn new<N>(graph: &'a DiGraph<N, E>, node: NodeIndex) -> Self {
        let edges: Vec<_> = graph.edges_directed(node, Direction::Outgoing).collect();
        ChildEdges {
            edges: edges.into_iter().rev(),
        }
    }
}

impl<'a, E> Iterator for ChildEdges<'a, E> {
    type Item = (EdgeIndex, NodeIndex, &'a E);
    fn next(&mut self) -> Option<Self::Item> {
        // er.source() = the given node
        // er.target() = child
        self.edges
            .next()
            .map(|er| (er.id(), er.target(), er.weight()))
    }
}

///
/// Iterator struct for `edges()`
///
/// implements Iterator whose item is
/// `(edge: EdgeIndex, source: NodeIndex, target: NodeIndex, edge_weight: &E)`
///
/// The adjacency lists of all nodes flattened in node order,
/// each list in insertion order.
///
pub struct EdgesIterator<'a, E: 'a> {
    graph: &'a DiGraph<Vertex, E>,
    nodes: NodeIndices,
    current: Option<(NodeIndex, ChildEdges<'a, E>)>,
}

impl<'a, E> EdgesIterator<'a, E> {
    ///
    /// Create EdgesIterator from the reference of DiGraph
    ///
    pub fn new(graph: &'a DiGraph<Vertex, E>) -> Self {
        EdgesIterator {
            graph,
            nodes: graph.node_indices(),
            current: None,
        }
    }
}

impl<'a, E> Iterator for EdgesIterator<'a, E> {
    type Item = (EdgeIndex, NodeIndex, NodeIndex, &'a E);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((source, children)) = self.current.as_mut() {
                if let Some((edge, target, weight)) = children.next() {
                    return Some((edge, *source, target, weight));
                }
            }
            // move on to the adjacency list of the next node
            let node = self.nodes.next()?;
            self.current = Some((node, ChildEdges::new(self.graph, node)));
        }
    }
}

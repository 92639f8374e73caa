//!
//! Vertex and Graph
//!
//! `Graph` is a directed weighted graph backed by `petgraph::graph::DiGraph`.
//! Undirected graphs are modeled by adding an edge in both directions.
//!
//! Vertices carry only their identity. The state each algorithm needs
//! (colors, distances, predecessors, keys) is returned by that algorithm
//! in its own result struct, so a graph can be reused across runs.
//!
use super::error::{Error, Result};
use super::iterators::{ChildEdges, EdgesIterator, NodesIterator};
use fnv::FnvHashMap as HashMap;
use itertools::Itertools;
use petgraph::graph::{DiGraph, NodeIndex, NodeIndices};

///
/// A vertex with an optional name
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vertex {
    pub name: Option<String>,
}

impl Vertex {
    pub fn new<S: Into<String>>(name: S) -> Vertex {
        Vertex {
            name: Some(name.into()),
        }
    }
    pub fn anonymous() -> Vertex {
        Vertex { name: None }
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "Vertex"),
        }
    }
}

///
/// Directed graph with edge weight `E`
///
#[derive(Debug, Clone)]
pub struct Graph<E = f64> {
    graph: DiGraph<Vertex, E>,
    names: HashMap<String, NodeIndex>,
}

impl<E> Default for Graph<E> {
    fn default() -> Self {
        Graph {
            graph: DiGraph::new(),
            names: HashMap::default(),
        }
    }
}

impl<E> Graph<E> {
    pub fn new() -> Self {
        Graph::default()
    }

    ///
    /// Create a graph without edges from a list of vertices.
    /// The i-th vertex gets `NodeIndex` i.
    ///
    pub fn from_vertices<I: IntoIterator<Item = Vertex>>(vertices: I) -> Self {
        let mut graph = Graph::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        graph
    }

    ///
    /// Create a graph from a list of `(source, target, weight)`.
    ///
    /// Anonymous vertices are created for every index up to the largest one used.
    ///
    pub fn from_edges(edges: &[(usize, usize, E)]) -> Self
    where
        E: Clone,
    {
        let mut graph = Graph::new();
        for (s, t, w) in edges.iter() {
            while graph.vertex_count() <= *s.max(t) {
                graph.add_vertex(Vertex::anonymous());
            }
            graph.insert_edge(NodeIndex::new(*s), NodeIndex::new(*t), w.clone());
        }
        graph
    }

    ///
    /// Add a vertex and return its index.
    ///
    pub fn add_vertex(&mut self, vertex: Vertex) -> NodeIndex {
        let name = vertex.name.clone();
        let node = self.graph.add_node(vertex);
        if let Some(name) = name {
            self.names.entry(name).or_insert(node);
        }
        node
    }

    ///
    /// Add a directed edge `from -> to` unless the same edge already exists.
    ///
    /// Returns whether the edge was added.
    ///
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, weight: E) -> Result<bool> {
        self.check(from)?;
        self.check(to)?;
        Ok(self.insert_edge(from, to, weight))
    }

    ///
    /// Add edges `u -> v` and `v -> u` with the same weight.
    ///
    pub fn add_undirected_edge(&mut self, u: NodeIndex, v: NodeIndex, weight: E) -> Result<()>
    where
        E: Clone,
    {
        self.add_edge(u, v, weight.clone())?;
        self.add_edge(v, u, weight)?;
        Ok(())
    }

    fn insert_edge(&mut self, from: NodeIndex, to: NodeIndex, weight: E) -> bool {
        // linear scan over the adjacency of `from`
        if self.graph.find_edge(from, to).is_some() {
            false
        } else {
            self.graph.add_edge(from, to, weight);
            true
        }
    }

    pub fn contains(&self, node: NodeIndex) -> bool {
        node.index() < self.graph.node_count()
    }

    ///
    /// Error if the node is not a member of the graph
    ///
    pub fn check(&self, node: NodeIndex) -> Result<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(Error::VertexNotFound(node.index()))
        }
    }

    ///
    /// The outgoing edges of `node` in the order they were added.
    ///
    pub fn adjacency(&self, node: NodeIndex) -> Result<ChildEdges<'_, E>> {
        self.check(node)?;
        Ok(self.children(node))
    }

    ///
    /// Unchecked version of `adjacency`; a foreign node has no children.
    ///
    pub fn children(&self, node: NodeIndex) -> ChildEdges<'_, E> {
        ChildEdges::new(&self.graph, node)
    }

    pub fn vertex(&self, node: NodeIndex) -> Result<&Vertex> {
        self.graph
            .node_weight(node)
            .ok_or(Error::VertexNotFound(node.index()))
    }

    ///
    /// Find the first vertex added with the name
    ///
    pub fn find_vertex(&self, name: &str) -> Option<NodeIndex> {
        self.names.get(name).copied()
    }

    ///
    /// Display label of a node: its name, or its index for anonymous vertices
    ///
    pub fn label(&self, node: NodeIndex) -> String {
        match self.graph.node_weight(node).and_then(|v| v.name.as_ref()) {
            Some(name) => name.clone(),
            None => node.index().to_string(),
        }
    }

    /// vertex indices in insertion order
    pub fn vertices(&self) -> NodeIndices {
        self.graph.node_indices()
    }

    pub fn nodes(&self) -> NodesIterator<'_> {
        NodesIterator::new(&self.graph)
    }

    ///
    /// Edge list: adjacency lists of all vertices, flattened in vertex order.
    ///
    pub fn edges(&self) -> EdgesIterator<'_, E> {
        EdgesIterator::new(&self.graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    ///
    /// Weight of the edge `u -> v` if it exists
    ///
    pub fn weight(&self, u: NodeIndex, v: NodeIndex) -> Option<&E> {
        self.graph
            .find_edge(u, v)
            .and_then(|e| self.graph.edge_weight(e))
    }

    ///
    /// Copy of the graph with the same vertices and edges (in the same order)
    /// whose weights are `f(source, target, weight)`.
    ///
    pub fn reweighted<E2, F>(&self, mut f: F) -> Graph<E2>
    where
        F: FnMut(NodeIndex, NodeIndex, &E) -> E2,
    {
        let endpoints: Vec<(NodeIndex, NodeIndex)> = self
            .graph
            .raw_edges()
            .iter()
            .map(|e| (e.source(), e.target()))
            .collect();
        let graph = self.graph.map(
            |_, vertex| vertex.clone(),
            |e, w| {
                let (s, t) = endpoints[e.index()];
                f(s, t, w)
            },
        );
        Graph {
            graph,
            names: self.names.clone(),
        }
    }

    pub fn as_digraph(&self) -> &DiGraph<Vertex, E> {
        &self.graph
    }
}

impl<E: std::fmt::Display> std::fmt::Display for Graph<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Graph:")?;
        for node in self.vertices() {
            let adjacency = self
                .children(node)
                .map(|(_, child, w)| format!("{}({})", self.label(child), w))
                .join(", ");
            writeln!(f, "{} -> [{}]", self.label(node), adjacency)?;
        }
        Ok(())
    }
}

//
// tests
//

//!
//! Textbook graph algorithms, heaps, sorting and dynamic programming
//!
//! # Structures
//!
//! * graph: Vertex and Graph (directed, weighted, on petgraph::DiGraph)
//! * heap: MinHeap with a custom ordering
//!
//! # Algorithms
//!
//! * traversal: bfs, dfs, topological_sort
//! * bellman_ford: Bellman Ford using FloatWeight, negative cycle detection
//! * dag_shortest_paths: shortest paths in a DAG in topological order
//! * dijkstra: Dijkstra using MinHeap
//! * floyd: Floyd-Warshall with predecessor matrix
//! * johnson: Johnson's all-pairs shortest paths
//! * mst: Kruskal and Prim
//! * sorting: comparison sorts, randomized select, counting/bucket sort
//! * dynamic_programming: LCS, rod cutting, 0/1 knapsack
//!
//! # Wrappers
//!
//! * iterators
//!
pub mod bellman_ford;
pub mod common;
pub mod dag_shortest_paths;
pub mod dijkstra;
pub mod dynamic_programming;
pub mod error;
pub mod floyd;
pub mod graph;
pub mod heap;
pub mod iterators;
pub mod johnson;
pub mod mst;
pub mod paths;
pub mod sorting;
pub mod traversal;

pub use error::{Error, Result};
pub use graph::{Graph, Vertex};
pub use heap::MinHeap;

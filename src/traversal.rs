//!
//! Graph traversal
//!
//! * bfs: Breadth first search from a source vertex
//! * dfs: Depth first search over all vertices with discovery/finish times
//! * topological_sort: vertices ordered by decreasing finish time of dfs
//!
use super::error::Result;
use super::graph::Graph;
use super::iterators::ChildEdges;
use itertools::Itertools;
use log::{debug, trace};
use petgraph::graph::NodeIndex;
use std::cmp::Reverse;
use std::collections::VecDeque;

///
/// Traversal state of a vertex
///
/// white (undiscovered) -> gray (discovered) -> black (finished)
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Gray,
    Black,
}

///
/// Result of `bfs`. All vectors are indexed by `NodeIndex::index()`.
///
#[derive(Debug, Clone, PartialEq)]
pub struct BfsTree {
    pub colors: Vec<Color>,
    /// number of edges from the source; None if unreachable
    pub distances: Vec<Option<usize>>,
    pub predecessors: Vec<Option<NodeIndex>>,
}

impl BfsTree {
    ///
    /// Vertices on a shortest (in edge count) path from the source to `target`
    ///
    pub fn path_to(&self, target: NodeIndex) -> Option<Vec<NodeIndex>> {
        self.distances.get(target.index()).copied().flatten()?;
        super::common::traceback(&self.predecessors, target)
    }
}

///
/// Breadth first search from `source`
///
pub fn bfs<E>(graph: &Graph<E>, source: NodeIndex) -> Result<BfsTree> {
    graph.check(source)?;
    let n = graph.vertex_count();
    let mut tree = BfsTree {
        colors: vec![Color::White; n],
        distances: vec![None; n],
        predecessors: vec![None; n],
    };
    tree.colors[source.index()] = Color::Gray;
    tree.distances[source.index()] = Some(0);

    let mut queue = VecDeque::new();
    queue.push_back(source);
    while let Some(u) = queue.pop_front() {
        trace!("searching {}", graph.label(u));
        let d = tree.distances[u.index()].map(|d| d + 1);
        for (_, v, _) in graph.children(u) {
            if tree.colors[v.index()] == Color::White {
                tree.colors[v.index()] = Color::Gray;
                tree.distances[v.index()] = d;
                tree.predecessors[v.index()] = Some(u);
                queue.push_back(v);
                debug!(
                    "found {}, distance from {} is {:?}",
                    graph.label(v),
                    graph.label(source),
                    d
                );
            }
        }
        tree.colors[u.index()] = Color::Black;
        trace!("finished {}", graph.label(u));
    }
    Ok(tree)
}

///
/// Result of `dfs`. All vectors are indexed by `NodeIndex::index()`.
///
/// The intervals `[discovery[v], finish[v]]` of any two vertices
/// are either nested or disjoint.
///
#[derive(Debug, Clone, PartialEq)]
pub struct DfsForest {
    pub colors: Vec<Color>,
    pub discovery: Vec<usize>,
    pub finish: Vec<usize>,
    pub predecessors: Vec<Option<NodeIndex>>,
}

impl DfsForest {
    ///
    /// `(discovery, finish)` times; None for a node outside of the graph
    ///
    pub fn interval(&self, node: NodeIndex) -> Option<(usize, usize)> {
        let i = node.index();
        Some((*self.discovery.get(i)?, *self.finish.get(i)?))
    }

    ///
    /// `u` is a proper ancestor of `v` in the depth first forest
    ///
    pub fn is_ancestor(&self, u: NodeIndex, v: NodeIndex) -> bool {
        match (self.interval(u), self.interval(v)) {
            (Some((du, fu)), Some((dv, fv))) => du < dv && fv < fu,
            _ => false,
        }
    }
}

///
/// Running state of a depth first search
///
/// `time` is the clock shared by all visits of one search.
///
struct DfsState {
    time: usize,
    forest: DfsForest,
}

impl DfsState {
    fn new(n: usize) -> Self {
        DfsState {
            time: 0,
            forest: DfsForest {
                colors: vec![Color::White; n],
                discovery: vec![0; n],
                finish: vec![0; n],
                predecessors: vec![None; n],
            },
        }
    }
    fn is_white(&self, node: NodeIndex) -> bool {
        self.forest.colors[node.index()] == Color::White
    }
    fn discover(&mut self, node: NodeIndex) {
        self.time += 1;
        self.forest.discovery[node.index()] = self.time;
        self.forest.colors[node.index()] = Color::Gray;
    }
    fn finish(&mut self, node: NodeIndex) {
        self.time += 1;
        self.forest.finish[node.index()] = self.time;
        self.forest.colors[node.index()] = Color::Black;
    }
}

///
/// Visit every vertex reachable from `root` that is still white
///
/// Explicit stack of (node, remaining children) so deep graphs do not overflow.
///
fn dfs_visit<E>(graph: &Graph<E>, state: &mut DfsState, root: NodeIndex) {
    state.discover(root);
    let mut stack: Vec<(NodeIndex, ChildEdges<'_, E>)> = vec![(root, graph.children(root))];

    while let Some((node, children)) = stack.last_mut() {
        let node = *node;
        match children.find(|&(_, child, _)| state.is_white(child)) {
            Some((_, child, _)) => {
                trace!("found {} at time {}", graph.label(child), state.time);
                state.forest.predecessors[child.index()] = Some(node);
                state.discover(child);
                stack.push((child, graph.children(child)));
            }
            None => {
                state.finish(node);
                trace!("finished {} at time {}", graph.label(node), state.time);
                stack.pop();
            }
        }
    }
}

///
/// Depth first search over all vertices in vertex order
///
pub fn dfs<E>(graph: &Graph<E>) -> DfsForest {
    let mut state = DfsState::new(graph.vertex_count());
    for root in graph.vertices() {
        if state.is_white(root) {
            debug!("new dfs tree from {} at time {}", graph.label(root), state.time);
            dfs_visit(graph, &mut state, root);
        }
    }
    state.forest
}

///
/// Vertices sorted by strictly decreasing dfs finish time.
///
/// The graph must be acyclic; for a cyclic graph the order has no meaning.
///
pub fn topological_sort<E>(graph: &Graph<E>) -> Vec<NodeIndex> {
    let forest = dfs(graph);
    graph
        .vertices()
        .sorted_by_key(|v| Reverse(forest.finish[v.index()]))
        .collect()
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ni;
    use crate::error::Error;
    use crate::graph::Vertex;

    ///
    /// 1 -> 2, 1 -> 3, 2 -> 3, 1 -> 5, 5 -> 4, 4 -> 3, 6 -> 7
    /// (0-indexed)
    ///
    fn seven() -> Graph<i32> {
        let mut g = Graph::from_vertices((1..=7).map(|i| Vertex::new(i.to_string())));
        for &(s, t) in &[(0, 1), (0, 2), (1, 2), (0, 4), (4, 3), (3, 2), (5, 6)] {
            g.add_edge(ni(s), ni(t), 0).unwrap();
        }
        g
    }

    #[test]
    fn bfs_seven() {
        let g = seven();
        let tree = bfs(&g, ni(0)).unwrap();
        assert_eq!(
            tree.distances,
            vec![Some(0), Some(1), Some(1), Some(2), Some(1), None, None]
        );
        assert_eq!(
            tree.predecessors,
            vec![None, Some(ni(0)), Some(ni(0)), Some(ni(4)), Some(ni(0)), None, None]
        );
        assert_eq!(tree.colors[0], Color::Black);
        assert_eq!(tree.colors[5], Color::White);
        assert_eq!(tree.path_to(ni(3)), Some(vec![ni(0), ni(4), ni(3)]));
        assert_eq!(tree.path_to(ni(6)), None);
    }

    #[test]
    fn bfs_foreign_source() {
        let g = seven();
        assert_eq!(bfs(&g, ni(7)), Err(Error::VertexNotFound(7)));
    }

    #[test]
    fn dfs_seven() {
        let g = seven();
        let forest = dfs(&g);
        // 1 -> 2 -> 3 first, then 5 -> 4, then the second tree 6 -> 7
        assert_eq!(forest.discovery, vec![1, 2, 3, 7, 6, 11, 12]);
        assert_eq!(forest.finish, vec![10, 5, 4, 8, 9, 14, 13]);
        assert_eq!(
            forest.predecessors,
            vec![None, Some(ni(0)), Some(ni(1)), Some(ni(4)), Some(ni(0)), None, Some(ni(5))]
        );
        assert!(forest.colors.iter().all(|&c| c == Color::Black));
        assert!(forest.is_ancestor(ni(0), ni(3)));
        assert!(!forest.is_ancestor(ni(1), ni(3)));
        assert_eq!(forest.interval(ni(4)), Some((6, 9)));
        assert_eq!(forest.interval(ni(7)), None);
        assert!(!forest.is_ancestor(ni(0), ni(7)));
    }

    #[test]
    fn dfs_parenthesis_structure() {
        let g: Graph<i32> = Graph::from_edges(&[
            (0, 1, 0),
            (1, 2, 0),
            (2, 0, 0),
            (2, 3, 0),
            (4, 3, 0),
            (4, 5, 0),
            (5, 5, 0),
        ]);
        let forest = dfs(&g);
        for u in g.vertices() {
            for v in g.vertices() {
                let (du, fu) = forest.interval(u).unwrap();
                let (dv, fv) = forest.interval(v).unwrap();
                assert!(du < fu);
                let nested = (du <= dv && fv <= fu) || (dv <= du && fu <= fv);
                let disjoint = fu < dv || fv < du;
                assert!(nested || disjoint);
            }
        }
    }

    #[test]
    fn topological_sort_seven() {
        let g = seven();
        let order = topological_sort(&g);
        assert_eq!(
            order,
            vec![ni(5), ni(6), ni(0), ni(4), ni(3), ni(1), ni(2)]
        );
    }

    #[test]
    fn topological_sort_clrs_clothes() {
        // undershorts, pants, belt, shirt, tie, jacket, socks, shoes, watch
        let mut g: Graph<i32> = Graph::from_vertices(
            [
                "undershorts",
                "pants",
                "belt",
                "shirt",
                "tie",
                "jacket",
                "socks",
                "shoes",
                "watch",
            ]
            .iter()
            .map(|&name| Vertex::new(name)),
        );
        let e = |g: &Graph<i32>, name: &str| g.find_vertex(name).unwrap();
        for (s, t) in [
            ("undershorts", "pants"),
            ("undershorts", "shoes"),
            ("pants", "belt"),
            ("pants", "shoes"),
            ("belt", "jacket"),
            ("shirt", "belt"),
            ("shirt", "tie"),
            ("tie", "jacket"),
            ("socks", "shoes"),
        ] {
            let (s, t) = (e(&g, s), e(&g, t));
            g.add_edge(s, t, 0).unwrap();
        }
        let order = topological_sort(&g);
        let position = |v: NodeIndex| order.iter().position(|&x| x == v).unwrap();
        assert_eq!(order.len(), 9);
        for (_, s, t, _) in g.edges() {
            assert!(position(s) < position(t));
        }
    }
}

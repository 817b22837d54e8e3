//! A* shortest-path search over [`Graph`].
//!
//! Grounded on the same Dijkstra-style relaxation loop the teacher used in
//! its router, generalized with the admissible heuristic from
//! [`Graph::heuristic`] and backed by [`IndexedMinHeap`] instead of a plain
//! `BinaryHeap` so that edge relaxations decrease a node's key in place
//! rather than pushing duplicate entries.

use routing_core::{EdgeId, NodeId};

use crate::error::GraphError;
use crate::graph::Graph;
use crate::heap::IndexedMinHeap;

/// A computed route: total cost plus the ordered edges traversed.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub cost: f64,
    pub nodes: Vec<NodeId>,
    pub edges: Vec<EdgeId>,
}

impl Route {
    /// A route from a node to itself: zero cost, one node, no edges.
    pub fn trivial(node: NodeId) -> Self {
        Self {
            cost: 0.0,
            nodes: vec![node],
            edges: Vec::new(),
        }
    }
}

/// Search strategy abstraction, so the engine can swap in a reference
/// implementation (Dijkstra, i.e. a zero heuristic) for testing optimality
/// without duplicating the relaxation loop.
pub trait Router {
    fn route(&self, graph: &Graph, from: NodeId, to: NodeId) -> Result<Route, GraphError>;
}

/// A* search using [`Graph::heuristic`] as the lower-bound estimate.
pub struct AStarRouter;

/// Dijkstra search: identical relaxation loop with a heuristic pinned to
/// zero. Used as a reference implementation in tests to check that A*
/// never returns a costlier route (heuristic admissibility implies
/// optimality).
pub struct DijkstraRouter;

impl Router for AStarRouter {
    fn route(&self, graph: &Graph, from: NodeId, to: NodeId) -> Result<Route, GraphError> {
        search(graph, from, to, true)
    }
}

impl Router for DijkstraRouter {
    fn route(&self, graph: &Graph, from: NodeId, to: NodeId) -> Result<Route, GraphError> {
        search(graph, from, to, false)
    }
}

fn search(
    graph: &Graph,
    from: NodeId,
    to: NodeId,
    use_heuristic: bool,
) -> Result<Route, GraphError> {
    graph.validate_node(from)?;
    graph.validate_node(to)?;

    if from == to {
        return Ok(Route::trivial(from));
    }

    let n = graph.node_count();
    let mut g_score = vec![f64::INFINITY; n];
    let mut came_from: Vec<Option<EdgeId>> = vec![None; n];
    let mut closed = vec![false; n];

    g_score[from.index()] = 0.0;

    let mut open = IndexedMinHeap::with_capacity(n);
    let h0 = if use_heuristic {
        graph.heuristic(from, to)?
    } else {
        0.0
    };
    open.insert(from, h0);

    while let Some((u, _)) = open.extract_min() {
        if u == to {
            return reconstruct(graph, from, to, &came_from, g_score[to.index()]);
        }
        if closed[u.index()] {
            continue;
        }
        closed[u.index()] = true;

        for &e in graph.out_edges(u) {
            let edge = graph.edge(e)?;
            let v = edge.to_node;
            if closed[v.index()] {
                continue;
            }
            let tentative = g_score[u.index()] + edge.current_travel_time;
            if tentative < g_score[v.index()] {
                g_score[v.index()] = tentative;
                came_from[v.index()] = Some(e);
                let h = if use_heuristic {
                    graph.heuristic(v, to)?
                } else {
                    0.0
                };
                let f = tentative + h;
                if open.contains(v) {
                    open.decrease_key(v, f);
                } else {
                    open.insert(v, f);
                }
            }
        }
    }

    Err(GraphError::NoRoute { from, to })
}

fn reconstruct(
    graph: &Graph,
    from: NodeId,
    to: NodeId,
    came_from: &[Option<EdgeId>],
    cost: f64,
) -> Result<Route, GraphError> {
    let mut edges = Vec::new();
    let mut nodes = vec![to];
    let mut cur = to;

    while cur != from {
        let e = came_from[cur.index()].ok_or(GraphError::Inconsistent { from, to: cur })?;
        edges.push(e);
        cur = graph.edge(e)?.from_node;
        nodes.push(cur);
    }

    edges.reverse();
    nodes.reverse();
    Ok(Route { cost, nodes, edges })
}

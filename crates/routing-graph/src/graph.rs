//! Road graph representation and builder.
//!
//! # Data layout
//!
//! Outgoing adjacency uses **Compressed Sparse Row (CSR)** layout: given a
//! `NodeId n`, its outgoing edge ids occupy the slice
//!
//! ```text
//! out_edges[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! `EdgeId`s are assigned by the loader (external collaborator, see
//! [`crate::loader`]) and never reassigned — `edges[e.index()]` is always
//! the edge with id `e`, independent of adjacency order. This keeps the
//! mapping from wire-protocol edge ids to storage stable across the
//! process lifetime, which matters because clients reference edge ids
//! directly in `UPD`/`PRED` requests.
//!
//! # Mutability
//!
//! Node positions, edge endpoints, `base_length` and `base_speed_limit` are
//! set once at load time and never change. Only `current_travel_time`,
//! `ema_travel_time` and `observation_count` on each [`EdgeModel`] mutate at
//! runtime, and only under the caller's lock discipline (see
//! `routing-engine`'s coordinator) — `Graph` itself enforces nothing about
//! locking; it is a plain data structure.

use routing_core::{EdgeId, NodeId, Point};

use crate::edge::EdgeModel;
use crate::error::GraphError;

/// Directed road graph: fixed-size node/edge tables plus CSR adjacency.
///
/// Construct via [`GraphBuilder`]; never mutate topology after `build()`.
pub struct Graph {
    node_pos: Vec<Point>,
    node_out_start: Vec<u32>,
    out_edges: Vec<EdgeId>,
    edges: Vec<EdgeModel>,
    /// Maximum `base_speed_limit` seen at load time; `0.0` if no edges (or
    /// no positive speed limit existed, which should not happen given the
    /// loader rejects non-positive speed limits — kept for completeness).
    max_speed_limit: f64,
}

impl Graph {
    // ── dimensions ──────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ── validation ──────────────────────────────────────────────────────

    pub fn validate_node(&self, id: NodeId) -> Result<(), GraphError> {
        if id.index() < self.node_count() {
            Ok(())
        } else {
            Err(GraphError::BadNode(id))
        }
    }

    pub fn validate_edge(&self, id: EdgeId) -> Result<(), GraphError> {
        if id.index() < self.edge_count() {
            Ok(())
        } else {
            Err(GraphError::BadEdge(id))
        }
    }

    // ── accessors (pure reads; caller must hold the coordinator lock) ────

    /// Current travel time of edge `e`.
    pub fn edge_weight(&self, e: EdgeId) -> Result<f64, GraphError> {
        self.validate_edge(e)?;
        Ok(self.edges[e.index()].current_travel_time)
    }

    pub fn edge(&self, e: EdgeId) -> Result<&EdgeModel, GraphError> {
        self.validate_edge(e)?;
        Ok(&self.edges[e.index()])
    }

    pub fn edge_mut(&mut self, e: EdgeId) -> Result<&mut EdgeModel, GraphError> {
        self.validate_edge(e)?;
        Ok(&mut self.edges[e.index()])
    }

    pub fn node_pos(&self, n: NodeId) -> Result<Point, GraphError> {
        self.validate_node(n)?;
        Ok(self.node_pos[n.index()])
    }

    /// Admissible heuristic lower bound on travel time from `u` to `v`:
    /// straight-line distance divided by the maximum `base_speed_limit`
    /// observed at load time. Falls back to raw straight-line distance
    /// (documented as non-admissible in time units) if no positive speed
    /// limit exists.
    pub fn heuristic(&self, u: NodeId, v: NodeId) -> Result<f64, GraphError> {
        let a = self.node_pos(u)?;
        let b = self.node_pos(v)?;
        let d = a.distance(b);
        Ok(if self.max_speed_limit > 0.0 {
            d / self.max_speed_limit
        } else {
            d
        })
    }

    /// Iterate the outgoing edge ids of `node`. No heap allocation — a
    /// contiguous slice of the CSR array.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> &[EdgeId] {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        &self.out_edges[start..end]
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

struct RawEdge {
    id: EdgeId,
    from: NodeId,
    to: NodeId,
    base_length: f64,
    base_speed_limit: f64,
}

/// Incrementally construct a [`Graph`] from loader-provided counts and
/// records, then call [`build`](Self::build).
///
/// Mirrors the external loader interface: `new` plays the role of
/// `graph_init(num_nodes, num_edges)`, `set_node`/`add_edge` play the role
/// of `graph_set_node_coordinates`/`graph_add_edge`.
pub struct GraphBuilder {
    num_nodes: usize,
    node_pos: Vec<Option<Point>>,
    raw_edges: Vec<Option<RawEdge>>,
}

impl GraphBuilder {
    /// `num_nodes`/`num_edges` must both be representable and nonzero node
    /// count is not required (an empty graph is legal, if useless).
    pub fn new(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            num_nodes,
            node_pos: vec![None; num_nodes],
            raw_edges: (0..num_edges).map(|_| None).collect(),
        }
    }

    pub fn set_node(&mut self, id: NodeId, pos: Point) -> Result<(), GraphError> {
        let slot = self
            .node_pos
            .get_mut(id.index())
            .ok_or(GraphError::BadNode(id))?;
        *slot = Some(pos);
        Ok(())
    }

    pub fn add_edge(
        &mut self,
        id: EdgeId,
        from: NodeId,
        to: NodeId,
        base_length: f64,
        base_speed_limit: f64,
    ) -> Result<(), GraphError> {
        if from.index() >= self.num_nodes {
            return Err(GraphError::BadNode(from));
        }
        if to.index() >= self.num_nodes {
            return Err(GraphError::BadNode(to));
        }
        if base_length < 0.0 {
            return Err(GraphError::Parse(format!(
                "edge {id}: base_length must be non-negative, got {base_length}"
            )));
        }
        if base_speed_limit <= 0.0 {
            return Err(GraphError::BadSpeed(base_speed_limit));
        }
        let slot = self
            .raw_edges
            .get_mut(id.index())
            .ok_or(GraphError::BadEdge(id))?;
        *slot = Some(RawEdge {
            id,
            from,
            to,
            base_length,
            base_speed_limit,
        });
        Ok(())
    }

    /// Validate that every node and edge slot was filled, then build the
    /// CSR adjacency and the max-speed-limit heuristic scale.
    pub fn build(self) -> Result<Graph, GraphError> {
        let node_pos: Vec<Point> = self
            .node_pos
            .into_iter()
            .enumerate()
            .map(|(i, p)| p.ok_or_else(|| GraphError::Parse(format!("node {i} never set"))))
            .collect::<Result<_, _>>()?;

        let raw: Vec<RawEdge> = self
            .raw_edges
            .into_iter()
            .enumerate()
            .map(|(i, e)| e.ok_or_else(|| GraphError::Parse(format!("edge {i} never set"))))
            .collect::<Result<_, _>>()?;

        let node_count = node_pos.len();
        let edge_count = raw.len();

        // edges[e.index()] always holds the edge with id e, regardless of
        // adjacency order — callers index by the wire-protocol edge id.
        let mut edges: Vec<Option<EdgeModel>> = (0..edge_count).map(|_| None).collect();
        let mut max_speed_limit = 0.0f64;
        for r in &raw {
            max_speed_limit = max_speed_limit.max(r.base_speed_limit);
            edges[r.id.index()] = Some(EdgeModel::new(
                r.id,
                r.from,
                r.to,
                r.base_length,
                r.base_speed_limit,
            ));
        }
        let edges: Vec<EdgeModel> = edges.into_iter().map(|e| e.unwrap()).collect();

        // Build CSR adjacency: sort edge ids by source node. `raw` is
        // indexed by insertion position, not by EdgeId, so look endpoints
        // up through a by-id table rather than assuming contiguity.
        let from_of: Vec<NodeId> = {
            let mut v = vec![NodeId::INVALID; edge_count];
            for r in &raw {
                v[r.id.index()] = r.from;
            }
            v
        };
        let mut order: Vec<EdgeId> = raw.iter().map(|r| r.id).collect();
        order.sort_by_key(|&id| from_of[id.index()].index());

        let mut node_out_start = vec![0u32; node_count + 1];
        for &id in &order {
            node_out_start[from_of[id.index()].index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }

        Ok(Graph {
            node_pos,
            node_out_start,
            out_edges: order,
            edges,
            max_speed_limit,
        })
    }
}

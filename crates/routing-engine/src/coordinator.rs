//! Reader/writer coordinator: a single graph-wide lock guarding all
//! mutable edge state.
//!
//! Routing and prediction acquire the lock in shared mode; traffic updates
//! acquire it in exclusive mode. Immutable topology (node coordinates,
//! adjacency, edge endpoints, `base_length`, `base_speed_limit`) never
//! changes after load, so nothing besides the mutable per-edge fields
//! needs to live behind the lock — but since [`Graph`] bundles both, the
//! whole structure sits behind one [`parking_lot::RwLock`], matching the
//! single process-wide lock the design calls for.
//!
//! `parking_lot::RwLock` is used rather than `std::sync::RwLock` for the
//! same reason the teacher pack's cache and network layers reach for it:
//! no poisoning to thread through error types, and a smaller, faster
//! implementation under contention.

use std::sync::Arc;

use parking_lot::RwLock;

use routing_core::{EdgeId, NodeId};
use routing_graph::{AStarRouter, Graph, Route, Router};

use crate::error::EngineError;

/// Shared handle to the graph, cheaply cloneable across worker threads.
#[derive(Clone)]
pub struct GraphHandle {
    inner: Arc<RwLock<Graph>>,
}

impl GraphHandle {
    pub fn new(graph: Graph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(graph)),
        }
    }

    /// Run a full A* search under the shared lock. The lock is held for
    /// the entire search so the weights observed form a consistent
    /// snapshot (spec §9: "holding a shared lock across the entire A*
    /// run gives each query a consistent snapshot").
    pub fn route(&self, src: NodeId, dst: NodeId) -> Result<Route, EngineError> {
        let graph = self.inner.read();
        AStarRouter.route(&graph, src, dst).map_err(EngineError::from)
    }

    /// Apply a speed observation under the exclusive lock.
    pub fn update(&self, edge: EdgeId, speed: f64) -> Result<(), EngineError> {
        let mut graph = self.inner.write();
        graph.edge_mut(edge)?.observe(speed)?;
        Ok(())
    }

    /// Read an edge's short-term prediction under the shared lock.
    pub fn predict(&self, edge: EdgeId) -> Result<f64, EngineError> {
        let graph = self.inner.read();
        Ok(graph.edge(edge)?.predict())
    }
}

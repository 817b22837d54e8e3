//! Wires a [`Graph`](routing_graph::Graph) into a running [`Engine`]: the
//! coordinator, the two task queues, and their worker pools.

use crossbeam_channel::bounded;

use routing_core::{EdgeId, NodeId};
use routing_graph::{Graph, Route};

use crate::coordinator::GraphHandle;
use crate::error::EngineError;
use crate::pool::WorkerPool;
use crate::queue::TaskQueue;
use crate::task::Task;

/// Default size of the routing worker pool (spec §4.7).
pub const DEFAULT_ROUTING_WORKERS: usize = 8;
/// Default size of the traffic worker pool (spec §4.7).
pub const DEFAULT_TRAFFIC_WORKERS: usize = 2;

/// Configures and builds an [`Engine`].
pub struct EngineBuilder {
    routing_workers: usize,
    traffic_workers: usize,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            routing_workers: DEFAULT_ROUTING_WORKERS,
            traffic_workers: DEFAULT_TRAFFIC_WORKERS,
        }
    }
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// No correctness depends on either count being nonzero in principle,
    /// but a pool of zero workers means its queue is never drained — the
    /// caller is responsible for choosing a sane value.
    pub fn routing_workers(mut self, n: usize) -> Self {
        self.routing_workers = n;
        self
    }

    pub fn traffic_workers(mut self, n: usize) -> Self {
        self.traffic_workers = n;
        self
    }

    /// Build the engine, spawning both worker pools. Fails if the OS
    /// refuses to spawn a worker thread (spec §6: worker spawn failure is
    /// one of the named non-zero-exit conditions).
    pub fn build(self, graph: Graph) -> Result<Engine, EngineError> {
        let handle = GraphHandle::new(graph);

        let (routing_queue, routing_rx) = TaskQueue::new();
        let (traffic_queue, traffic_rx) = TaskQueue::new();

        let routing_pool =
            WorkerPool::spawn("routing", self.routing_workers, routing_rx, handle.clone())?;
        let traffic_pool = WorkerPool::spawn("traffic", self.traffic_workers, traffic_rx, handle)?;

        Ok(Engine {
            routing_queue,
            traffic_queue,
            routing_pool,
            traffic_pool,
        })
    }
}

/// A running routing service: two task queues feeding dedicated worker
/// pools over a shared, lock-coordinated graph.
///
/// Cloning a `TaskQueue` is cheap, so connection handlers are handed
/// `Engine::routing_queue()`/`traffic_queue()` clones rather than the
/// `Engine` itself — the worker pools stay owned by this struct for
/// lifetime management.
pub struct Engine {
    routing_queue: TaskQueue,
    traffic_queue: TaskQueue,
    routing_pool: WorkerPool,
    traffic_pool: WorkerPool,
}

impl Engine {
    pub fn routing_queue(&self) -> TaskQueue {
        self.routing_queue.clone()
    }

    pub fn traffic_queue(&self) -> TaskQueue {
        self.traffic_queue.clone()
    }

    /// Submit a route request and block until a worker completes it.
    /// This is the per-connection "enqueue, then wait on the completion
    /// signal" handshake from spec §4.9.
    pub fn submit_route(&self, src: NodeId, dst: NodeId) -> Result<Route, EngineError> {
        let (respond, result) = bounded(1);
        self.routing_queue.push(Task::Route { src, dst, respond });
        result.recv().map_err(|_| EngineError::Disconnected)?
    }

    pub fn submit_update(&self, edge: EdgeId, speed: f64) -> Result<(), EngineError> {
        let (respond, result) = bounded(1);
        self.traffic_queue.push(Task::Update { edge, speed, respond });
        result.recv().map_err(|_| EngineError::Disconnected)?
    }

    /// Predictions flow through the routing queue (spec §4.7: read-only,
    /// reuses the routing path for uniformity).
    pub fn submit_predict(&self, edge: EdgeId) -> Result<f64, EngineError> {
        let (respond, result) = bounded(1);
        self.routing_queue.push(Task::Predict { edge, respond });
        result.recv().map_err(|_| EngineError::Disconnected)?
    }

    /// Drop this engine's queue handles and wait for every worker thread
    /// to exit. Only terminates workers once every other clone of
    /// `routing_queue()`/`traffic_queue()` (e.g. ones held by connection
    /// handlers) has also been dropped — used in tests and for an offline
    /// shutdown path; a live server's normal lifetime is the process
    /// lifetime.
    pub fn shutdown(self) {
        drop(self.routing_queue);
        drop(self.traffic_queue);
        self.routing_pool.join();
        self.traffic_pool.join();
    }
}

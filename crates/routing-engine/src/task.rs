//! Transient task records passed from a connection handler to a worker.
//!
//! A task is owned by the handler that created it: the handler builds it,
//! pushes it onto the appropriate queue, then blocks on `respond.recv()`.
//! The worker only ever produces exactly one value on `respond` before
//! moving to the next task — the queue + one-shot completion channel is
//! the "completion handshake" the handler waits on (see the `Engine`
//! in [`crate::builder`]).

use crossbeam_channel::Sender;

use routing_core::{EdgeId, NodeId};
use routing_graph::Route;

use crate::error::EngineError;

/// A single request waiting to be serviced by a worker, carrying its own
/// one-shot reply channel.
pub enum Task {
    /// Find the shortest path from `src` to `dst`. Serviced under the
    /// coordinator's shared (read) lock.
    Route {
        src: NodeId,
        dst: NodeId,
        respond: Sender<Result<Route, EngineError>>,
    },
    /// Apply a speed observation to an edge. Serviced under the
    /// coordinator's exclusive (write) lock.
    Update {
        edge: EdgeId,
        speed: f64,
        respond: Sender<Result<(), EngineError>>,
    },
    /// Query an edge's short-term travel-time prediction. Serviced under
    /// the coordinator's shared (read) lock — predictions flow through
    /// the routing queue for uniformity (spec §4.7).
    Predict {
        edge: EdgeId,
        respond: Sender<Result<f64, EngineError>>,
    },
}

//! Engine-subsystem error type: domain errors from `routing-graph` plus the
//! engine's own dispatch failures.

use thiserror::Error;

use routing_graph::GraphError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// A worker thread panicked while servicing a task. The panic is
    /// caught at the worker boundary (never propagated across the
    /// process) and surfaced to the caller as this variant.
    #[error("worker panicked while servicing a task")]
    WorkerPanic,

    /// The task was submitted but no worker was able to return a result
    /// — the completion channel was dropped without a response, which
    /// only happens if the owning worker pool has already shut down.
    #[error("task queue closed before a response was produced")]
    Disconnected,

    /// The OS refused to spawn a worker thread (e.g. resource limits).
    #[error("failed to spawn worker thread {name:?}: {source}")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;

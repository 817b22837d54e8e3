//! Top-level server error and the process exit codes it maps to (spec §6:
//! "0 on clean shutdown; non-zero for load failure, socket bind/listen
//! failure, worker spawn failure").

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load graph: {0}")]
    Load(#[from] routing_graph::GraphError),

    #[error("failed to bind/listen on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Engine construction failed — in practice this only happens when a
    /// worker thread fails to spawn (`EngineBuilder::build` has no other
    /// fallible step).
    #[error("failed to start the routing engine: {0}")]
    EngineStartup(#[from] routing_engine::EngineError),
}

impl ServerError {
    /// Process exit code for this failure. Distinct codes are not required
    /// by the spec beyond "non-zero"; splitting them out helps operators
    /// distinguish a bad graph file from a port conflict at a glance.
    pub fn exit_code(&self) -> i32 {
        match self {
            ServerError::Load(_) => 1,
            ServerError::Bind { .. } => 2,
            ServerError::EngineStartup(_) => 3,
        }
    }
}

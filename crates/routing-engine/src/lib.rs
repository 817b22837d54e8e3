//! `routing-engine` — concurrency layer: task queues, worker pools, and
//! the reader/writer coordinator that let routing and traffic-update
//! workloads run in parallel over one shared [`Graph`](routing_graph::Graph).
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|-----------------------------------------------------------|
//! | [`task`]        | `Task` — a request plus its one-shot reply channel        |
//! | [`queue`]       | `TaskQueue` — MPMC channel wrapper                         |
//! | [`pool`]        | `WorkerPool` — fixed OS-thread pool draining one queue     |
//! | [`coordinator`] | `GraphHandle` — the rw-lock around the shared `Graph`      |
//! | [`builder`]     | `EngineBuilder`, `Engine` — wires everything together      |
//! | [`error`]       | `EngineError`, `EngineResult<T>`                           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use routing_engine::EngineBuilder;
//! use routing_graph::load_graph_csv;
//!
//! let graph = load_graph_csv("nodes.csv".as_ref(), "edges.csv".as_ref())?;
//! let engine = EngineBuilder::new()
//!     .routing_workers(8)
//!     .traffic_workers(2)
//!     .build(graph)?;
//! let route = engine.submit_route(NodeId(0), NodeId(4))?;
//! ```

pub mod builder;
pub mod coordinator;
pub mod error;
pub mod pool;
pub mod queue;
pub mod task;


pub use builder::{Engine, EngineBuilder, DEFAULT_ROUTING_WORKERS, DEFAULT_TRAFFIC_WORKERS};
pub use coordinator::GraphHandle;
pub use error::{EngineError, EngineResult};
pub use pool::WorkerPool;
pub use queue::TaskQueue;
pub use task::Task;

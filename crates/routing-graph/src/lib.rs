//! `routing-graph` — road graph representation, CSV loading, and A* routing.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                |
//! |-----------|-----------------------------------------------------------|
//! | [`graph`] | `Graph` (CSR adjacency + `EdgeModel` table), `GraphBuilder` |
//! | [`edge`]  | `EdgeModel` — per-edge EMA travel-time filter             |
//! | [`heap`]  | `IndexedMinHeap` — decrease-key binary heap for A*         |
//! | [`astar`] | `Router` trait, `Route`, `AStarRouter`, `DijkstraRouter`   |
//! | [`loader`]| CSV loading into a `Graph`                                 |
//! | [`error`] | `GraphError`, `GraphResult<T>`                             |

pub mod astar;
pub mod edge;
pub mod error;
pub mod graph;
pub mod heap;
pub mod loader;

#[cfg(test)]
mod tests;

pub use astar::{AStarRouter, DijkstraRouter, Route, Router};
pub use edge::EdgeModel;
pub use error::{GraphError, GraphResult};
pub use graph::{Graph, GraphBuilder};
pub use loader::{load_graph_csv, load_graph_readers};

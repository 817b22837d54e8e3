//! `routing-core` — foundational types shared by every crate in the
//! routing workspace.
//!
//! This crate is a dependency of every other crate in the workspace. It
//! intentionally has no workspace-internal dependencies and a minimal
//! external footprint (only optional `serde`).
//!
//! # What lives here
//!
//! | Module  | Contents                           |
//! |---------|-------------------------------------|
//! | [`ids`] | `NodeId`, `EdgeId`                 |
//! | [`geo`] | `Point`, planar Euclidean distance |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.   |

pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::Point;
pub use ids::{EdgeId, NodeId};

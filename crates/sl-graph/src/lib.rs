//! sl-graph: graph layer for starlabel.
//!
//! Provides:
//! - Core graph data structures (Vertex, Role, EdgeKey, StarGraph)
//! - Incremental star builder with validation
//! - Topology construction for the amalgamated and snowflake families
//!
//! # Example
//!
//! ```
//! use sl_core::StarParams;
//! use sl_graph::build_topology;
//!
//! let params = StarParams::amalgamated(4, 4).unwrap();
//! let graph = build_topology(&params).unwrap();
//!
//! assert_eq!(graph.order(), 17);
//! assert_eq!(graph.size(), 16);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod topology;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::StarBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{EdgeKey, Role, StarGraph, Vertex};
pub use topology::build_topology;

//! Uninformed and informed search over a small directed graph.
//!
//! ```
//! use minilab::prelude::*;
//!
//! let graph = Graph::example();
//! let ucs = search(&graph, "S", "Z", Strategy::Ucs).unwrap();
//! let bfs = search(&graph, "S", "Z", Strategy::Bfs).unwrap();
//! assert_eq!(ucs.cost, Some(8.0));
//! assert!(bfs.path.unwrap().len() <= ucs.path.unwrap().len());
//! ```

/// Defines the graph.
pub mod graph;
/// Defines the five search strategies.
pub mod strategy;
/// Defines the frontier.
pub mod frontier;
/// Defines the step-wise search session.
pub mod session;


pub use graph::{Graph, GraphNode, Edge, NodeIndex};
pub use strategy::Strategy;
pub use frontier::{Frontier, FrontierEntry};
pub use session::{
    SearchSession,
    SearchStatus,
    StepOutcome,
    SearchOutcome,
    search,
};

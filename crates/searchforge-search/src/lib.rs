//! SearchForge Search Engines
//!
//! This crate provides the search algorithms that run against a
//! [`SearchProblem`](searchforge_core::SearchProblem):
//! - Breadth-first search (unit-cost optimal, also the reference oracle)
//! - Layer-synchronized bidirectional search
//! - A* with a best-known-cost table and lazy deletion
//! - Rapidly-exploring random trees for sampling-based planning
//!
//! Every call owns its frontier, arena and tables; nothing survives
//! between calls.

pub mod astar;
pub mod bfs;
pub mod bidirectional;
pub mod engine;
pub mod result;
pub mod rrt;
pub mod stats;

#[cfg(test)]
mod tests;

pub use astar::{a_star_search, AStarSearch};
pub use bfs::{breadth_first_search, BreadthFirstSearch};
pub use bidirectional::{bidirectional_search, BidirectionalSearch};
pub use engine::SearchEngine;
pub use result::SearchResult;
pub use rrt::{RrtPlanner, RrtProblem, RrtResult};
pub use stats::SearchStats;

//! SearchForge Core - Core types and traits for state-space search
//!
//! This crate provides the fundamental abstractions shared by every
//! SearchForge algorithm:
//! - The [`SearchProblem`] and [`Heuristic`] capability traits
//! - An index arena of search nodes with parent links
//! - Concrete graph and grid problems
//! - The crate-wide error type

pub mod error;
pub mod node;
pub mod problem;

pub use error::{Result, SearchForgeError};
pub use node::{Node, NodeArena, NodeId};
pub use problem::{
    path_cost, ActionList, Cost, GraphProblem, GridAction, GridProblem, Heuristic, SearchProblem,
    UniformCost, WeightedEdge, WeightedGraphProblem,
};

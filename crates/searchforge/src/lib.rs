//! SearchForge - State-space search and local search in Rust
//!
//! One import for the whole toolkit: problems, search engines, the N-Queens
//! solver, forward chaining and configuration.
//!
//! # Example
//!
//! ```rust
//! use searchforge::prelude::*;
//!
//! let problem = GraphProblem::new(&[0, 1, 2], &[(0, 1), (1, 2)], 0, vec![2]).unwrap();
//! let result = breadth_first_search(&problem);
//! assert_eq!(result.path, vec![0, 1, 2]);
//! ```

pub use searchforge_config::{
    ConfigError, EnvironmentMode, LocalSearchConfig, RrtConfig, SearchConfig, SearchForgeConfig,
    TrivialPathPolicy,
};
pub use searchforge_core::{
    path_cost, GraphProblem, GridAction, GridProblem, Heuristic, Node, NodeArena, NodeId, Result,
    SearchForgeError, SearchProblem, UniformCost, WeightedEdge, WeightedGraphProblem,
};
pub use searchforge_logic::{DefiniteClause, KnowledgeBase, LogicError, Symbol};
pub use searchforge_search::{
    a_star_search, bidirectional_search, breadth_first_search, AStarSearch, BidirectionalSearch,
    BreadthFirstSearch, RrtPlanner, RrtProblem, RrtResult, SearchEngine, SearchResult,
    SearchStats,
};
pub use searchforge_solver::{
    initialize_greedy_n_queens, min_conflicts_n_queens, ConflictBoard, NQueensResult,
    NQueensSolver, RepairOutcome,
};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        a_star_search, bidirectional_search, breadth_first_search, SearchEngine, SearchResult,
    };
    pub use super::{GraphProblem, GridProblem, Heuristic, SearchProblem, UniformCost};
    pub use super::{NQueensSolver, RepairOutcome};
    pub use super::{SearchForgeConfig, SearchForgeError};
}

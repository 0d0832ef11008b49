//! Error types for knowledge base construction and queries.

use searchforge_core::SearchForgeError;
use thiserror::Error;

use crate::clause::Symbol;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicError {
    /// A clause, fact or query names a symbol the knowledge base does not declare
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(Symbol),

    /// A definite clause needs at least one premise
    #[error("Clause concluding {conclusion} has an empty body")]
    EmptyBody { conclusion: Symbol },
}

impl From<LogicError> for SearchForgeError {
    fn from(err: LogicError) -> Self {
        SearchForgeError::InvalidProblem(err.to_string())
    }
}

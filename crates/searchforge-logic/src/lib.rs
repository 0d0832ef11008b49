//! SearchForge Logic
//!
//! Propositional forward chaining over definite clauses (Horn clauses with
//! exactly one positive literal). Symbols are plain integers.

pub mod clause;
pub mod error;
pub mod knowledge_base;

pub use clause::{DefiniteClause, Symbol};
pub use error::LogicError;
pub use knowledge_base::KnowledgeBase;

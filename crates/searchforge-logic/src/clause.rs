//! Definite clauses.

use std::fmt;

use smallvec::SmallVec;

use crate::error::LogicError;

/// Propositional symbol.
pub type Symbol = u32;

/// `b1 ∧ b2 ∧ ... ∧ bk ⇒ conclusion`.
///
/// The body keeps first-occurrence order and holds each symbol once.
///
/// # Example
///
/// ```
/// use searchforge_logic::DefiniteClause;
///
/// let clause = DefiniteClause::new([9, 4, 9], 5).unwrap();
/// assert_eq!(clause.body(), &[9, 4]);
/// assert_eq!(clause.conclusion(), 5);
/// assert_eq!(clause.to_string(), "9 ∧ 4 ⇒ 5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DefiniteClause {
    body: SmallVec<[Symbol; 4]>,
    conclusion: Symbol,
}

impl DefiniteClause {
    /// # Errors
    ///
    /// Returns [`LogicError::EmptyBody`] if `body` yields no symbol.
    pub fn new(
        body: impl IntoIterator<Item = Symbol>,
        conclusion: Symbol,
    ) -> Result<Self, LogicError> {
        let mut deduped: SmallVec<[Symbol; 4]> = SmallVec::new();
        for symbol in body {
            if !deduped.contains(&symbol) {
                deduped.push(symbol);
            }
        }
        if deduped.is_empty() {
            return Err(LogicError::EmptyBody { conclusion });
        }
        Ok(Self {
            body: deduped,
            conclusion,
        })
    }

    pub fn body(&self) -> &[Symbol] {
        &self.body
    }

    pub fn conclusion(&self) -> Symbol {
        self.conclusion
    }

    /// All symbols the clause mentions.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.body.iter().copied().chain(std::iter::once(self.conclusion))
    }
}

impl fmt::Display for DefiniteClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.body.iter().enumerate() {
            if i > 0 {
                write!(f, " ∧ ")?;
            }
            write!(f, "{symbol}")?;
        }
        write!(f, " ⇒ {}", self.conclusion)
    }
}

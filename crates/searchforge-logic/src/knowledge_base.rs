//! Knowledge base and forward chaining.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, trace};

use crate::clause::{DefiniteClause, Symbol};
use crate::error::LogicError;

/// Declared symbols plus definite clauses, indexed by premise.
///
/// # Example
///
/// ```
/// use searchforge_logic::{DefiniteClause, KnowledgeBase};
///
/// let kb = KnowledgeBase::new(
///     &[1, 2, 9, 4, 5],
///     vec![
///         DefiniteClause::new([1, 2], 9).unwrap(),
///         DefiniteClause::new([9, 4], 5).unwrap(),
///         DefiniteClause::new([1], 4).unwrap(),
///     ],
/// )
/// .unwrap();
///
/// assert!(kb.entails(&[1, 2], 5).unwrap());
/// assert!(!kb.entails(&[2], 5).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    symbols: BTreeSet<Symbol>,
    clauses: Vec<DefiniteClause>,
    // Clauses whose body contains the symbol.
    clauses_by_premise: HashMap<Symbol, Vec<usize>>,
}

impl KnowledgeBase {
    /// # Errors
    ///
    /// Returns [`LogicError::UnknownSymbol`] if a clause mentions a symbol
    /// missing from `symbols`.
    pub fn new(symbols: &[Symbol], clauses: Vec<DefiniteClause>) -> Result<Self, LogicError> {
        let symbols: BTreeSet<Symbol> = symbols.iter().copied().collect();
        let mut clauses_by_premise: HashMap<Symbol, Vec<usize>> = HashMap::new();

        for (index, clause) in clauses.iter().enumerate() {
            if let Some(unknown) = clause.symbols().find(|s| !symbols.contains(s)) {
                return Err(LogicError::UnknownSymbol(unknown));
            }
            for &premise in clause.body() {
                clauses_by_premise.entry(premise).or_default().push(index);
            }
        }

        Ok(Self {
            symbols,
            clauses,
            clauses_by_premise,
        })
    }

    pub fn symbols(&self) -> &BTreeSet<Symbol> {
        &self.symbols
    }

    pub fn clauses(&self) -> &[DefiniteClause] {
        &self.clauses
    }

    /// Returns true if `known` facts plus the clauses entail `query`.
    ///
    /// Stops as soon as `query` comes off the agenda.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::UnknownSymbol`] for undeclared facts or query.
    pub fn entails(&self, known: &[Symbol], query: Symbol) -> Result<bool, LogicError> {
        self.check_symbols(known.iter().copied().chain(std::iter::once(query)))?;
        let (found, inferred) = self.forward_chain(known, Some(query));
        debug!(
            event = "entailment",
            query = query,
            entailed = found,
            inferred = inferred.len() as u64,
        );
        Ok(found)
    }

    /// Every symbol derivable from `known`, facts included.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::UnknownSymbol`] for undeclared facts.
    pub fn infer_all(&self, known: &[Symbol]) -> Result<BTreeSet<Symbol>, LogicError> {
        self.check_symbols(known.iter().copied())?;
        Ok(self.forward_chain(known, None).1)
    }

    fn check_symbols(&self, mut symbols: impl Iterator<Item = Symbol>) -> Result<(), LogicError> {
        match symbols.find(|s| !self.symbols.contains(s)) {
            Some(unknown) => Err(LogicError::UnknownSymbol(unknown)),
            None => Ok(()),
        }
    }

    fn forward_chain(&self, known: &[Symbol], query: Option<Symbol>) -> (bool, BTreeSet<Symbol>) {
        let mut remaining: Vec<usize> = self.clauses.iter().map(|c| c.body().len()).collect();
        let mut inferred = BTreeSet::new();
        let mut agenda: Vec<Symbol> = known.to_vec();

        while let Some(symbol) = agenda.pop() {
            if query == Some(symbol) {
                return (true, inferred);
            }
            if !inferred.insert(symbol) {
                continue;
            }
            trace!(event = "inferred", symbol = symbol);

            let Some(indices) = self.clauses_by_premise.get(&symbol) else {
                continue;
            };
            for &index in indices {
                remaining[index] -= 1;
                if remaining[index] == 0 {
                    agenda.push(self.clauses[index].conclusion());
                }
            }
        }
        (false, inferred)
    }
}

#[cfg(test)]
#[path = "knowledge_base_tests.rs"]
mod tests;

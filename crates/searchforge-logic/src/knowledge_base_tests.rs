//! Tests for forward chaining.

use super::*;

fn clause(body: &[Symbol], conclusion: Symbol) -> DefiniteClause {
    DefiniteClause::new(body.iter().copied(), conclusion).unwrap()
}

fn sample_kb() -> KnowledgeBase {
    KnowledgeBase::new(
        &[1, 2, 9, 4, 5],
        vec![clause(&[1, 2], 9), clause(&[9, 4], 5), clause(&[1], 4)],
    )
    .unwrap()
}

#[test]
fn test_sample_entailment() {
    let kb = sample_kb();

    assert!(kb.entails(&[1, 2], 5).unwrap());
    assert!(kb.entails(&[1, 2], 9).unwrap());
}

#[test]
fn test_missing_premise() {
    let kb = sample_kb();

    assert!(!kb.entails(&[1], 5).unwrap());
    assert!(kb.entails(&[1], 4).unwrap());
}

#[test]
fn test_known_symbol_is_entailed() {
    assert!(sample_kb().entails(&[2], 2).unwrap());
}

#[test]
fn test_no_facts() {
    assert!(!sample_kb().entails(&[], 1).unwrap());
}

#[test]
fn test_infer_all() {
    let kb = sample_kb();

    let derived: Vec<Symbol> = kb.infer_all(&[1, 2]).unwrap().into_iter().collect();
    assert_eq!(derived, vec![1, 2, 4, 5, 9]);

    let derived: Vec<Symbol> = kb.infer_all(&[2]).unwrap().into_iter().collect();
    assert_eq!(derived, vec![2]);
}

#[test]
fn test_duplicate_body_symbols_fire() {
    let kb = KnowledgeBase::new(&[1, 2], vec![clause(&[1, 1, 1], 2)]).unwrap();

    assert!(kb.entails(&[1], 2).unwrap());
}

#[test]
fn test_duplicate_facts() {
    let kb = KnowledgeBase::new(&[1, 2, 3], vec![clause(&[1, 2], 3)]).unwrap();

    assert!(!kb.entails(&[1, 1, 1], 3).unwrap());
    assert!(kb.entails(&[1, 1, 2], 3).unwrap());
}

#[test]
fn test_cycle_terminates() {
    let kb = KnowledgeBase::new(
        &[1, 2, 3, 4],
        vec![clause(&[1], 2), clause(&[2], 3), clause(&[3], 1)],
    )
    .unwrap();

    assert!(kb.entails(&[1], 3).unwrap());
    assert!(!kb.entails(&[1], 4).unwrap());
}

#[test]
fn test_unknown_clause_symbol() {
    let err = KnowledgeBase::new(&[1, 2], vec![clause(&[1], 7)]).unwrap_err();

    assert_eq!(err, LogicError::UnknownSymbol(7));
}

#[test]
fn test_unknown_query_symbol() {
    let err = sample_kb().entails(&[1], 42).unwrap_err();

    assert_eq!(err, LogicError::UnknownSymbol(42));
    assert_eq!(err.to_string(), "Unknown symbol: 42");
}

#[test]
fn test_empty_body_rejected() {
    let err = DefiniteClause::new([], 3).unwrap_err();

    assert_eq!(err, LogicError::EmptyBody { conclusion: 3 });
}

#[test]
fn test_error_converts_to_search_forge_error() {
    let err: searchforge_core::SearchForgeError = LogicError::UnknownSymbol(5).into();

    assert!(err.to_string().contains("Unknown symbol: 5"));
}

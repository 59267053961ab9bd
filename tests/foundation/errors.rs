//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use tether::foundation::{Error, ErrorContext, ErrorKind, ListId, NodeId};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_index_out_of_range() {
    let err = Error::index_out_of_range(7, 3);
    assert_eq!(err.kind, ErrorKind::IndexOutOfRange { index: 7, len: 3 });
    let msg = format!("{err}");
    assert!(msg.contains('7'));
    assert!(msg.contains('3'));
}

#[test]
fn error_node_already_linked() {
    let err = Error::node_already_linked(NodeId::new(4, 1), ListId::new(2, 1));
    assert!(matches!(err.kind, ErrorKind::NodeAlreadyLinked { .. }));
    let msg = format!("{err}");
    assert!(msg.contains("already linked"));
}

#[test]
fn error_node_not_in_list() {
    let err = Error::node_not_in_list(NodeId::new(9, 3), ListId::new(1, 1));
    assert!(matches!(err.kind, ErrorKind::NodeNotInList { .. }));
    assert!(format!("{err}").contains("not a member"));
}

#[test]
fn error_stale_handles() {
    let node = Error::stale_node(NodeId::new(5, 2));
    assert!(matches!(node.kind, ErrorKind::StaleNode(_)));
    assert!(format!("{node}").contains('5'));

    let list = Error::stale_list(ListId::new(6, 4));
    assert!(matches!(list.kind, ErrorKind::StaleList(_)));
    assert!(format!("{list}").contains('6'));
}

#[test]
fn error_allocation_failed() {
    let err = Error::allocation_failed(1 << 40);
    assert!(matches!(err.kind, ErrorKind::AllocationFailed { .. }));
    assert!(format!("{err}").contains("allocation failed"));
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn caller_mistakes_are_contract_violations() {
    assert!(Error::index_out_of_range(0, 0).is_contract_violation());
    assert!(Error::invalid_argument("bad").is_contract_violation());
    assert!(Error::stale_node(NodeId::new(0, 1)).is_contract_violation());
}

#[test]
fn environment_failures_are_not_contract_violations() {
    assert!(!Error::allocation_failed(10).is_contract_violation());
    assert!(!Error::corrupt_list(ListId::new(0, 1), "cycle").is_contract_violation());
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_is_attached() {
    let err = Error::index_out_of_range(2, 1)
        .with_context(ErrorContext::new("set_at").with_note("while rebuilding"));
    let context = err.context.expect("context");
    assert_eq!(context.operation, "set_at");
    assert_eq!(context.notes, vec!["while rebuilding".to_string()]);
}

#[test]
fn context_display() {
    let context = ErrorContext::new("insert_after")
        .with_note("first")
        .with_note("second");
    assert_eq!(format!("{context}"), "in insert_after; first; second");
}

#[test]
fn in_operation_is_shorthand() {
    let err = Error::invalid_argument("x").in_operation("add");
    assert_eq!(err.context, Some(ErrorContext::new("add")));
}

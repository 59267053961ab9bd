//! Error types for the Tether collections.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Not-found outcomes are never errors; they surface as `Option` or `bool`.

use std::fmt;

use thiserror::Error;

use crate::handle::{ListId, NodeId};

/// The main error type for Tether operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Shorthand for attaching the name of the failing operation.
    #[must_use]
    pub fn in_operation(self, operation: &'static str) -> Self {
        self.with_context(ErrorContext::new(operation))
    }

    /// Creates an index out of range error.
    #[must_use]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfRange { index, len })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(message.into()))
    }

    /// Creates a node already linked error.
    #[must_use]
    pub fn node_already_linked(node: NodeId, owner: ListId) -> Self {
        Self::new(ErrorKind::NodeAlreadyLinked { node, owner })
    }

    /// Creates a node not in list error.
    #[must_use]
    pub fn node_not_in_list(node: NodeId, list: ListId) -> Self {
        Self::new(ErrorKind::NodeNotInList { node, list })
    }

    /// Creates a stale node handle error.
    #[must_use]
    pub fn stale_node(node: NodeId) -> Self {
        Self::new(ErrorKind::StaleNode(node))
    }

    /// Creates a stale list handle error.
    #[must_use]
    pub fn stale_list(list: ListId) -> Self {
        Self::new(ErrorKind::StaleList(list))
    }

    /// Creates a corrupt list error.
    #[must_use]
    pub fn corrupt_list(list: ListId, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::CorruptList {
            list,
            reason: reason.into(),
        })
    }

    /// Creates an allocation failure error.
    #[must_use]
    pub fn allocation_failed(requested: usize) -> Self {
        Self::new(ErrorKind::AllocationFailed { requested })
    }

    /// Returns true if this error is a contract violation by the caller.
    #[must_use]
    pub fn is_contract_violation(&self) -> bool {
        !matches!(
            self.kind,
            ErrorKind::AllocationFailed { .. } | ErrorKind::CorruptList { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// Index outside `[0, len)`.
    #[error("index out of range: {index} (length {len})")]
    IndexOutOfRange {
        /// The index that was accessed.
        index: usize,
        /// The logical length of the array.
        len: usize,
    },

    /// An argument violated an operation's precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The node is already a member of a list.
    #[error("node {node:?} is already linked into {owner:?}")]
    NodeAlreadyLinked {
        /// The node being inserted.
        node: NodeId,
        /// The list that currently owns it.
        owner: ListId,
    },

    /// The anchor node does not belong to the target list.
    #[error("node {node:?} is not a member of {list:?}")]
    NodeNotInList {
        /// The anchor node.
        node: NodeId,
        /// The list the caller named.
        list: ListId,
    },

    /// Node handle does not refer to a live node.
    #[error("stale node handle: {0:?}")]
    StaleNode(NodeId),

    /// List handle does not refer to a live list.
    #[error("stale list handle: {0:?}")]
    StaleList(ListId),

    /// A list failed its link-consistency check.
    #[error("corrupt list {list:?}: {reason}")]
    CorruptList {
        /// The list that failed the check.
        list: ListId,
        /// What was inconsistent.
        reason: String,
    },

    /// The allocator could not satisfy a growth request.
    #[error("allocation failed: could not reserve {requested} elements")]
    AllocationFailed {
        /// Number of elements requested.
        requested: usize,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Name of the operation that failed, e.g. `"insert_at"`.
    pub operation: &'static str,
    /// Free-form notes added by callers further up the stack.
    pub notes: Vec<String>,
}

impl ErrorContext {
    /// Creates a context for the named operation.
    #[must_use]
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            notes: Vec::new(),
        }
    }

    /// Adds a note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "in {}", self.operation)?;
        for note in &self.notes {
            write!(f, "; {note}")?;
        }
        Ok(())
    }
}

/// Result type alias for Tether operations.
pub type Result<T> = std::result::Result<T, Error>;

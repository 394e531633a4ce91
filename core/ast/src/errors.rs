//! Error types for the AST crate.
//!
//! Malformed input, structurally broken snapshots and kind mismatches are distinct
//! variants. An unrecognized node kind is not an error at all.

use thiserror::Error;

use crate::nodes::{NodeId, NodeKind};

/// Errors raised while loading or traversing an AST snapshot.
#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum AstError {
    /// The input text is not valid JSON or does not match the snapshot shape.
    #[error("malformed AST snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A `NodeId` points outside the snapshot's groups.
    #[error("node {id} is out of range ({})", describe_bounds(*group_count, *group_len))]
    OutOfRange {
        id: NodeId,
        group_count: usize,
        /// Length of the addressed group, when the group itself exists.
        group_len: Option<usize>,
    },

    /// A node is reachable from itself.
    #[error("node {id} is part of a reference cycle")]
    Cycle { id: NodeId },

    #[error(transparent)]
    KindMismatch(#[from] KindMismatchError),
}

fn describe_bounds(group_count: usize, group_len: Option<usize>) -> String {
    match group_len {
        Some(len) => format!("group holds {len} nodes"),
        None => format!("snapshot has {group_count} groups"),
    }
}

/// A kind-specific accessor was called on a node of another kind.
///
/// This is a programming error: dispatch on [`crate::nodes::AstNode::kind`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected a `{expected}` node, found `{actual}`")]
pub struct KindMismatchError {
    pub expected: NodeKind,
    pub actual: NodeKind,
}

/// Text could not be read as a `group:offset` node id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid node id `{0}`, expected `group:offset`")]
pub struct ParseNodeIdError(pub String);

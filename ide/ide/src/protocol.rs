//! Messages exchanged between the explorer tree and its host editor.
//!
//! The UI reports gestures as [`UiEvent`]s; the explorer answers with at most one
//! [`HostMessage`] per event over a one-directional channel. Nothing is acknowledged.

use explorer_ast::nodes::{NodeId, SourceRange};
use serde::{Deserialize, Serialize};

use crate::display::NodeAction;

/// A user gesture on the displayed tree.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "event", rename_all_fields = "camelCase")]
pub enum UiEvent {
    /// The entry for `node` became the selection.
    Selected { node: NodeId },
    /// An action was invoked on the entry for `node`.
    Invoked { node: NodeId, action: NodeAction },
}

impl UiEvent {
    #[must_use]
    pub fn node(&self) -> NodeId {
        match self {
            UiEvent::Selected { node } | UiEvent::Invoked { node, .. } => *node,
        }
    }
}

/// Navigation command consumed by the host editor.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all_fields = "camelCase")]
pub enum HostMessage {
    OpenSourceFile { file_url: String },
    HighlightFullDeclaration { range: SourceRange },
}

/// Zero-based position as editors address text.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct EditorPosition {
    pub line: u32,
    pub character: u32,
}

/// The span a host selects when asked to highlight a declaration.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSelection {
    pub file_url: String,
    pub start: EditorPosition,
    pub end: EditorPosition,
}

impl From<&SourceRange> for EditorSelection {
    /// Converts the compiler's 1-based coordinates to zero-based ones.
    fn from(range: &SourceRange) -> Self {
        let position = |line: u32, column: u32| EditorPosition {
            line: line.saturating_sub(1),
            character: column.saturating_sub(1),
        };
        Self {
            file_url: range.file_url.clone(),
            start: position(range.start.line, range.start.column),
            end: position(range.end.line, range.end.column),
        }
    }
}

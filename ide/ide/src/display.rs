//! Displayable tree nodes produced by projection.

use std::fmt::Write as _;

use explorer_ast::nodes::NodeId;
use serde::{Deserialize, Serialize};

/// Label shown for placeholders and kinds without a renderer.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Label of the synthetic child grouping a function's parameters.
pub const PARAMETERS_LABEL: &str = "parameters";

/// Icon category of a display node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Module,
    SourceFile,
    Function,
    Parameters,
    ProductType,
    Parameter,
    Unknown,
}

/// A named operation the user can invoke on a display node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeAction {
    OpenSourceFile,
    HighlightDeclaration,
}

impl NodeAction {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            NodeAction::OpenSourceFile => "Open source file",
            NodeAction::HighlightDeclaration => "Highlight declaration",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNode {
    pub label: String,
    pub category: Category,
    /// The AST node this entry stands for; `None` for synthetic groupings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<NodeId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    /// Why the node could not be rendered normally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DisplayNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<NodeAction>,
}

impl DisplayNode {
    #[must_use]
    pub fn new(label: impl Into<String>, category: Category) -> Self {
        Self {
            label: label.into(),
            category,
            node: None,
            tooltip: None,
            diagnostic: None,
            children: Vec::new(),
            actions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_node(mut self, id: NodeId) -> Self {
        self.node = Some(id);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    #[must_use]
    pub fn with_diagnostic(mut self, diagnostic: impl Into<String>) -> Self {
        self.diagnostic = Some(diagnostic.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<DisplayNode>) -> Self {
        self.children = children;
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: NodeAction) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub fn has_action(&self, action: NodeAction) -> bool {
        self.actions.contains(&action)
    }

    /// Depth-first search for the first entry whose label is `label`.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<&DisplayNode> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.label == label {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// Number of entries on the longest path from this node down to a leaf.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Indented outline of this node and its descendants, one entry per line.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self, 0)];
        while let Some((node, depth)) = stack.pop() {
            let _ = write!(out, "{:indent$}{}", "", node.label, indent = depth * 2);
            if let Some(diagnostic) = &node.diagnostic {
                let _ = write!(out, "  [{diagnostic}]");
            }
            out.push('\n');
            stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }
        out
    }
}

impl Drop for DisplayNode {
    /// Releases descendants from a flat worklist so that dropping a deep tree does not
    /// recurse once per level.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut child) = pending.pop() {
            pending.append(&mut child.children);
        }
    }
}

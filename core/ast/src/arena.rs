//! The AST snapshot: a flat, group-partitioned node store.
//!
//! Nodes refer to each other only through [`NodeId`] handles, so the snapshot owns every
//! node and never changes after construction. A new compiler run yields a new `Ast`.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{
    errors::AstError,
    nodes::{AstNode, NodeId},
};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ast {
    module_ids: Vec<NodeId>,
    groups: Vec<Vec<AstNode>>,
}

impl Ast {
    #[must_use]
    pub fn new(module_ids: Vec<NodeId>, groups: Vec<Vec<AstNode>>) -> Self {
        Self { module_ids, groups }
    }

    /// Parses a snapshot from its JSON wire form.
    ///
    /// Unknown top-level and payload fields are ignored; unknown node kinds are kept.
    ///
    /// # Errors
    ///
    /// Returns [`AstError::Malformed`] if `input` is not JSON or not shaped like a snapshot.
    pub fn from_json(input: &str) -> Result<Self, AstError> {
        let ast: Ast = serde_json::from_str(input)?;
        tracing::debug!(
            modules = ast.module_ids.len(),
            groups = ast.groups.len(),
            nodes = ast.node_count(),
            "parsed AST snapshot"
        );
        Ok(ast)
    }

    /// Ids of the root module declarations.
    #[must_use]
    pub fn module_ids(&self) -> &[NodeId] {
        &self.module_ids
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Looks up the node addressed by `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AstError::OutOfRange`] when `id` lies outside the snapshot. This is
    /// distinct from a [`AstNode::Missing`] node, which is a legitimate placeholder.
    pub fn resolve(&self, id: NodeId) -> Result<&AstNode, AstError> {
        let Some(group) = self.groups.get(id.group as usize) else {
            return Err(AstError::OutOfRange {
                id,
                group_count: self.groups.len(),
                group_len: None,
            });
        };
        group
            .get(id.offset as usize)
            .ok_or_else(|| AstError::OutOfRange {
                id,
                group_count: self.groups.len(),
                group_len: Some(group.len()),
            })
    }

    /// Resolves every root module id.
    ///
    /// # Errors
    ///
    /// Returns the first [`AstError::OutOfRange`] among the roots.
    pub fn modules(&self) -> Result<Vec<(NodeId, &AstNode)>, AstError> {
        self.module_ids
            .iter()
            .map(|&id| self.resolve(id).map(|node| (id, node)))
            .collect()
    }

    /// Every stored node with its id, group by group.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &AstNode)> + '_ {
        self.groups.iter().enumerate().flat_map(|(group, nodes)| {
            nodes.iter().enumerate().map(move |(offset, node)| {
                (NodeId::new(index_u32(group), index_u32(offset)), node)
            })
        })
    }

    /// Checks that everything reachable from the roots resolves and that no node
    /// reaches itself.
    ///
    /// # Errors
    ///
    /// Returns the first [`AstError::OutOfRange`] or [`AstError::Cycle`] found in
    /// depth-first order.
    pub fn validate(&self) -> Result<(), AstError> {
        let mut finished = FxHashSet::default();
        let mut on_path = FxHashSet::default();
        let mut stack: Vec<(NodeId, bool)> =
            self.module_ids.iter().rev().map(|&id| (id, false)).collect();

        while let Some((id, leaving)) = stack.pop() {
            if leaving {
                on_path.remove(&id);
                finished.insert(id);
                continue;
            }
            if finished.contains(&id) {
                continue;
            }
            if !on_path.insert(id) {
                return Err(AstError::Cycle { id });
            }
            let node = self.resolve(id)?;
            stack.push((id, true));
            stack.extend(node.children().iter().rev().map(|&child| (child, false)));
        }
        Ok(())
    }
}

/// Converts a group or offset position back into its id component.
///
/// # Panics
///
/// Panics if the snapshot holds more than `u32::MAX` groups or nodes in one group,
/// which no [`NodeId`] could address.
fn index_u32(index: usize) -> u32 {
    u32::try_from(index).expect("snapshot positions are addressed by u32 node ids")
}

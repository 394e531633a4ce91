//! The explorer session: the current snapshot, its projection, and the outbound
//! channel to the host.

use std::sync::mpsc::Sender;

use explorer_ast::{
    arena::Ast,
    nodes::{AstNode, NodeId},
    site::site_of,
};

use crate::{
    display::{DisplayNode, NodeAction},
    projection::project,
    protocol::{HostMessage, UiEvent},
};

/// Holds one snapshot at a time and turns UI events into host navigation.
///
/// Loading a snapshot discards the previous one before the new tree is built, so
/// readers never observe a mix of the two.
pub struct Explorer {
    snapshot: Option<Ast>,
    tree: Vec<DisplayNode>,
    outbox: Sender<HostMessage>,
}

impl Explorer {
    #[must_use]
    pub fn new(outbox: Sender<HostMessage>) -> Self {
        Self {
            snapshot: None,
            tree: Vec::new(),
            outbox,
        }
    }

    /// Replaces the current snapshot with one parsed from `input`.
    ///
    /// Malformed input leaves no snapshot and an empty tree; the error is logged and
    /// not returned.
    pub fn load(&mut self, input: &str) -> &[DisplayNode] {
        self.clear();
        match Ast::from_json(input) {
            Ok(ast) => self.install(ast),
            Err(e) => tracing::error!(error = %e, "discarding malformed AST snapshot"),
        }
        &self.tree
    }

    /// Replaces the current snapshot with an already parsed one.
    pub fn replace(&mut self, ast: Ast) -> &[DisplayNode] {
        self.clear();
        self.install(ast);
        &self.tree
    }

    #[must_use]
    pub fn tree(&self) -> &[DisplayNode] {
        &self.tree
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<&Ast> {
        self.snapshot.as_ref()
    }

    /// Translates `event` into a host message and sends it.
    ///
    /// Events that name a node outside the current snapshot, or that have no
    /// navigation for the node's kind, yield `None`. A closed host channel is logged.
    pub fn handle(&self, event: UiEvent) -> Option<HostMessage> {
        let message = self.navigation_for(event)?;
        if self.outbox.send(message.clone()).is_err() {
            tracing::warn!(?message, "host channel closed, dropping navigation message");
        }
        Some(message)
    }

    fn clear(&mut self) {
        self.snapshot = None;
        self.tree = Vec::new();
    }

    fn install(&mut self, ast: Ast) {
        match project(&ast) {
            Ok(tree) => {
                self.tree = tree;
                self.snapshot = Some(ast);
            }
            Err(e) => tracing::error!(error = %e, "AST snapshot violates its structure"),
        }
    }

    fn navigation_for(&self, event: UiEvent) -> Option<HostMessage> {
        let id = event.node();
        let node = self.resolve_current(id)?;
        match event {
            UiEvent::Selected { .. }
            | UiEvent::Invoked {
                action: NodeAction::OpenSourceFile,
                ..
            } => match node {
                AstNode::TranslationUnit(unit) => Some(HostMessage::OpenSourceFile {
                    file_url: unit.site.file_url.clone(),
                }),
                _ => None,
            },
            UiEvent::Invoked {
                action: NodeAction::HighlightDeclaration,
                ..
            } => site_of(node).map(|range| HostMessage::HighlightFullDeclaration {
                range: range.clone(),
            }),
        }
    }

    fn resolve_current(&self, id: NodeId) -> Option<&AstNode> {
        let Some(ast) = &self.snapshot else {
            tracing::warn!(%id, "ignoring interaction, no snapshot is loaded");
            return None;
        };
        match ast.resolve(id) {
            Ok(node) => Some(node),
            Err(e) => {
                tracing::warn!(%id, error = %e, "ignoring interaction with a stale node reference");
                None
            }
        }
    }
}

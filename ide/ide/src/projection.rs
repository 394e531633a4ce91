//! Projection of an AST snapshot into a displayable tree.
//!
//! Every root module is expanded depth first with an explicit stack, so the depth of
//! the snapshot is not bounded by the thread's stack. Each node is rendered by its kind;
//! placeholders and kinds without a renderer become an `Unknown` entry that carries
//! the raw kind tag and never stops its siblings from rendering. References that fall
//! outside the snapshot, or that loop back onto the current path, abort the projection
//! with the corresponding [`AstError`].

use std::slice;

use explorer_ast::{
    arena::Ast,
    errors::AstError,
    nodes::{AstNode, FunctionDecl, ModuleDecl, NodeId, ParameterDecl, ProductTypeDecl, TranslationUnit},
};
use rustc_hash::FxHashSet;

use crate::display::{Category, DisplayNode, NodeAction, PARAMETERS_LABEL, UNKNOWN_LABEL};

/// Builds one display tree per entry of the snapshot's `moduleIds`.
///
/// The snapshot is only read.
///
/// # Errors
///
/// Returns [`AstError::OutOfRange`] for a reference outside the snapshot and
/// [`AstError::Cycle`] for a node that is its own ancestor.
pub fn project(ast: &Ast) -> Result<Vec<DisplayNode>, AstError> {
    let mut projector = Projector::new(ast);
    let mut roots = Vec::with_capacity(ast.module_ids().len());
    for &id in ast.module_ids() {
        projector.expand(id, &mut roots)?;
    }
    tracing::debug!(
        roots = roots.len(),
        unknown = projector.unknown,
        "projected AST snapshot"
    );
    Ok(roots)
}

/// An entry whose children are still being expanded.
struct Frame<'a> {
    /// Released from the ancestor set once the frame is finished; `None` for groupings.
    id: Option<NodeId>,
    entry: DisplayNode,
    pending: slice::Iter<'a, NodeId>,
}

impl<'a> Frame<'a> {
    fn new(id: Option<NodeId>, entry: DisplayNode, children: &'a [NodeId]) -> Self {
        Self {
            id,
            entry,
            pending: children.iter(),
        }
    }
}

struct Projector<'a> {
    ast: &'a Ast,
    ancestors: FxHashSet<NodeId>,
    unknown: usize,
}

impl<'a> Projector<'a> {
    fn new(ast: &'a Ast) -> Self {
        Self {
            ast,
            ancestors: FxHashSet::default(),
            unknown: 0,
        }
    }

    /// Projects the tree rooted at `root` and appends it to `roots`.
    fn expand(&mut self, root: NodeId, roots: &mut Vec<DisplayNode>) -> Result<(), AstError> {
        let mut stack: Vec<Frame<'a>> = Vec::new();
        let mut finished = self.enter(root, &mut stack)?;
        while let Some(frame) = stack.last_mut() {
            if let Some(entry) = finished.take() {
                frame.entry.children.push(entry);
            }
            finished = match frame.pending.next() {
                Some(&child) => self.enter(child, &mut stack)?,
                None => stack.pop().map(|frame| self.leave(frame)),
            };
        }
        roots.extend(finished);
        Ok(())
    }

    /// Renders the node at `id`. Leaves are returned finished; nodes with children
    /// are pushed onto `stack` and `None` is returned.
    fn enter(
        &mut self,
        id: NodeId,
        stack: &mut Vec<Frame<'a>>,
    ) -> Result<Option<DisplayNode>, AstError> {
        let ast = self.ast;
        let node = ast.resolve(id)?;
        if self.ancestors.contains(&id) {
            return Err(AstError::Cycle { id });
        }
        let frame = match node {
            AstNode::ModuleDecl(module) => {
                Frame::new(Some(id), module_entry(id, module), &module.sources)
            }
            AstNode::TranslationUnit(unit) => {
                Frame::new(Some(id), translation_unit(id, unit), &unit.decls)
            }
            AstNode::FunctionDecl(function) => {
                stack.push(Frame::new(Some(id), function_entry(id, function), &[]));
                Frame::new(
                    None,
                    DisplayNode::new(PARAMETERS_LABEL, Category::Parameters),
                    &function.parameters,
                )
            }
            AstNode::ProductTypeDecl(product) => return Ok(Some(product_type(id, product))),
            AstNode::ParameterDecl(parameter) => return Ok(Some(parameter_entry(id, parameter))),
            AstNode::Missing(_) | AstNode::Unrecognized(_) => {
                return Ok(Some(self.unknown(id, node)));
            }
        };
        self.ancestors.insert(id);
        stack.push(frame);
        Ok(None)
    }

    fn leave(&mut self, frame: Frame<'a>) -> DisplayNode {
        if let Some(id) = frame.id {
            self.ancestors.remove(&id);
        }
        frame.entry
    }

    fn unknown(&mut self, id: NodeId, node: &AstNode) -> DisplayNode {
        self.unknown += 1;
        tracing::debug!(%id, kind = node.raw_kind(), "no renderer for node kind");
        DisplayNode::new(UNKNOWN_LABEL, Category::Unknown)
            .with_node(id)
            .with_diagnostic(format!("unsupported node kind `{}`", node.raw_kind()))
    }
}

fn module_entry(id: NodeId, module: &ModuleDecl) -> DisplayNode {
    DisplayNode::new(&module.base_name, Category::Module).with_node(id)
}

fn translation_unit(id: NodeId, unit: &TranslationUnit) -> DisplayNode {
    DisplayNode::new(unit.site.file_name(), Category::SourceFile)
        .with_node(id)
        .with_tooltip(&unit.site.file_url)
        .with_action(NodeAction::OpenSourceFile)
        .with_action(NodeAction::HighlightDeclaration)
}

fn function_entry(id: NodeId, function: &FunctionDecl) -> DisplayNode {
    DisplayNode::new(&function.identifier, Category::Function)
        .with_node(id)
        .with_action(NodeAction::HighlightDeclaration)
}

fn product_type(id: NodeId, product: &ProductTypeDecl) -> DisplayNode {
    DisplayNode::new(&product.identifier, Category::ProductType)
        .with_node(id)
        .with_action(NodeAction::HighlightDeclaration)
}

fn parameter_entry(id: NodeId, parameter: &ParameterDecl) -> DisplayNode {
    DisplayNode::new(
        format!("{} {}", parameter.label_or_sentinel(), parameter.identifier),
        Category::Parameter,
    )
    .with_node(id)
    .with_action(NodeAction::HighlightDeclaration)
}

//! Source-site resolution.
//!
//! Maps a node to the span of text an editor can navigate to. Module declarations
//! aggregate several files and placeholders have no text, so both resolve to `None`.

use crate::nodes::{AstNode, SourceRange};

/// Returns the navigable source range of `node`, if it has one.
///
/// The match is exhaustive: a new variant does not compile until it is mapped here.
#[must_use]
pub fn site_of(node: &AstNode) -> Option<&SourceRange> {
    match node {
        AstNode::FunctionDecl(function) => Some(&function.site),
        AstNode::TranslationUnit(unit) => Some(&unit.site),
        AstNode::ProductTypeDecl(product) => Some(&product.site),
        AstNode::ParameterDecl(parameter) => Some(&parameter.site),
        AstNode::ModuleDecl(_) | AstNode::Missing(_) | AstNode::Unrecognized(_) => None,
    }
}

use core::fmt;
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::{
    errors::ParseNodeIdError,
    nodes::{
        AstNode, FunctionDecl, ModuleDecl, NodeId, ParameterDecl, ProductTypeDecl, SourcePosition,
        SourceRange, TranslationUnit,
    },
    site::site_of,
};

/// Sentinel rendered in place of a parameter label when none is declared.
pub const NO_LABEL: &str = "_";

impl NodeId {
    #[must_use]
    pub const fn new(group: u32, offset: u32) -> Self {
        Self { group, offset }
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.offset)
    }
}

impl FromStr for NodeId {
    type Err = ParseNodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseNodeIdError(s.to_string());
        let (group, offset) = s.split_once(':').ok_or_else(invalid)?;
        Ok(NodeId {
            group: group.trim().parse().map_err(|_| invalid())?,
            offset: offset.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl SourcePosition {
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Display for SourcePosition {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl SourceRange {
    #[must_use]
    pub fn new(start: SourcePosition, end: SourcePosition, file_url: impl Into<String>) -> Self {
        Self {
            start,
            end,
            file_url: file_url.into(),
        }
    }

    /// Last path segment of `file_url`, or the whole URL when it has none.
    #[must_use]
    pub fn file_name(&self) -> &str {
        let path = self
            .file_url
            .split(['?', '#'])
            .next()
            .unwrap_or(&self.file_url);
        match path.rsplit('/').next() {
            Some(name) if !name.is_empty() => name,
            _ => &self.file_url,
        }
    }
}

impl Display for SourceRange {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}-{}", self.file_url, self.start, self.end)
    }
}

impl AstNode {
    /// Node ids this node refers to, in declaration order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        match self {
            AstNode::ModuleDecl(module) => &module.sources,
            AstNode::TranslationUnit(unit) => &unit.decls,
            AstNode::FunctionDecl(function) => &function.parameters,
            AstNode::ProductTypeDecl(product) => &product.members,
            AstNode::ParameterDecl(_) | AstNode::Missing(_) | AstNode::Unrecognized(_) => &[],
        }
    }

    #[must_use]
    pub fn site(&self) -> Option<&SourceRange> {
        site_of(self)
    }
}

impl ModuleDecl {
    #[must_use]
    pub fn new(base_name: impl Into<String>, sources: Vec<NodeId>) -> Self {
        Self {
            base_name: base_name.into(),
            sources,
        }
    }
}

impl TranslationUnit {
    #[must_use]
    pub fn new(site: SourceRange, decls: Vec<NodeId>) -> Self {
        Self { site, decls }
    }
}

impl FunctionDecl {
    #[must_use]
    pub fn new(site: SourceRange, identifier: impl Into<String>, parameters: Vec<NodeId>) -> Self {
        Self {
            site,
            identifier: identifier.into(),
            parameters,
        }
    }
}

impl ProductTypeDecl {
    #[must_use]
    pub fn new(site: SourceRange, identifier: impl Into<String>, members: Vec<NodeId>) -> Self {
        Self {
            site,
            identifier: identifier.into(),
            members,
        }
    }
}

impl ParameterDecl {
    #[must_use]
    pub fn new(site: SourceRange, identifier: impl Into<String>, label: Option<String>) -> Self {
        Self {
            site,
            identifier: identifier.into(),
            label,
        }
    }

    /// The declared argument label, or [`NO_LABEL`].
    #[must_use]
    pub fn label_or_sentinel(&self) -> &str {
        self.label.as_deref().unwrap_or(NO_LABEL)
    }
}

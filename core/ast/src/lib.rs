#![warn(clippy::pedantic)]
//! Immutable AST snapshots produced by an external compiler.
//!
//! A snapshot ([`arena::Ast`]) stores every node in flat groups, one group per source
//! the compiler parsed, and nodes reference each other by [`nodes::NodeId`]. The node
//! model ([`nodes::AstNode`]) is a closed sum type with `is_*`/`as_*` accessors;
//! [`site::site_of`] maps a node to its navigable source range.
//!
//! ```
//! use explorer_ast::{arena::Ast, nodes::NodeKind};
//!
//! let ast = Ast::from_json(r#"{
//!     "moduleIds": [{ "group": 0, "offset": 0 }],
//!     "groups": [[{ "ModuleDecl": { "baseName": "M", "sources": [] } }]]
//! }"#)?;
//! let (_, module) = ast.modules()?[0];
//! assert_eq!(module.kind(), NodeKind::ModuleDecl);
//! assert!(module.site().is_none());
//! # Ok::<(), explorer_ast::errors::AstError>(())
//! ```
pub mod arena;
pub(crate) mod enums_impl;
pub mod errors;
pub mod nodes;
pub(crate) mod nodes_impl;
pub mod site;
pub(crate) mod wire;

pub use nodes_impl::NO_LABEL;

#![warn(clippy::pedantic)]
//! Interactive exploration of AST snapshots.
//!
//! [`projection::project`] turns a snapshot into a tree of [`display::DisplayNode`]s.
//! [`explorer::Explorer`] keeps the current snapshot and answers UI gestures
//! ([`protocol::UiEvent`]) with navigation commands ([`protocol::HostMessage`]) sent to
//! the host editor over a channel.
//!
//! ```
//! use std::sync::mpsc;
//!
//! use explorer_ast::nodes::NodeId;
//! use explorer_ide::{explorer::Explorer, protocol::{HostMessage, UiEvent}};
//!
//! let (tx, rx) = mpsc::channel();
//! let mut explorer = Explorer::new(tx);
//! explorer.load(r#"{
//!     "moduleIds": [{ "group": 0, "offset": 0 }],
//!     "groups": [[
//!         { "ModuleDecl": { "baseName": "M", "sources": [{ "group": 0, "offset": 1 }] } },
//!         { "TranslationUnit": {
//!             "site": {
//!                 "start": { "line": 1, "column": 1 },
//!                 "end": { "line": 3, "column": 1 },
//!                 "fileUrl": "file:///a.src"
//!             },
//!             "decls": []
//!         } }
//!     ]]
//! }"#);
//! assert_eq!(explorer.tree()[0].children[0].label, "a.src");
//!
//! explorer.handle(UiEvent::Selected { node: NodeId::new(0, 1) });
//! assert_eq!(
//!     rx.try_recv().unwrap(),
//!     HostMessage::OpenSourceFile { file_url: "file:///a.src".to_string() }
//! );
//! ```
pub mod display;
pub mod explorer;
pub mod projection;
pub mod protocol;

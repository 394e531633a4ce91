//! JSON wire format of AST nodes.
//!
//! A node is an object with exactly one key, the kind tag, whose value is the payload:
//!
//! ```text
//! { "FunctionDecl": { "site": { ... }, "identifier": "main", "parameters": [] } }
//! { "missing": {} }
//! ```
//!
//! Tags outside the known set are kept as [`AstNode::Unrecognized`] so that a newer
//! compiler can still be explored. Objects with zero or several keys are rejected.

use serde::{
    Deserialize,
    de::{self, Deserializer},
};
use serde_json::{Map, Value};

use crate::nodes::AstNode;

impl<'de> Deserialize<'de> for AstNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Map::<String, Value>::deserialize(deserializer)?;
        let len = entries.len();
        let mut entries = entries.into_iter();
        match (entries.next(), entries.next()) {
            (Some((tag, payload)), None) => {
                AstNode::from_tagged(tag, payload).map_err(de::Error::custom)
            }
            _ => Err(de::Error::invalid_length(
                len,
                &"a node object with exactly one kind key",
            )),
        }
    }
}

/// Payload-less kinds may be written with a `null` payload.
pub(crate) fn non_null(payload: Value) -> Value {
    if payload.is_null() {
        Value::Object(Map::new())
    } else {
        payload
    }
}

use serde::{
    Deserialize, Serialize,
    ser::{SerializeMap, Serializer},
};

use crate::errors::KindMismatchError;

/// Handle of a node inside one snapshot: the group (one per parsed translation unit
/// or module source) and the position within that group.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct NodeId {
    pub group: u32,
    pub offset: u32,
}

/// 1-based line and column, as emitted by the compiler.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceRange {
    pub start: SourcePosition,
    pub end: SourcePosition,
    pub file_url: String,
}

macro_rules! sited_node {
    (
        $(#[$outer:meta])*
        $struct_vis:vis struct $name:ident {
            $(
                $(#[$field_attr:meta])*
                $field_vis:vis $field_name:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        $struct_vis struct $name {
            pub site: $crate::nodes::SourceRange,
            $(
                $(#[$field_attr])*
                $field_vis $field_name : $field_ty,
            )*
        }
    };
}

macro_rules! sited_nodes {
    (
        $(
            $(#[$outer:meta])*
            $struct_vis:vis struct $name:ident { $($fields:tt)* }
        )+
    ) => {
        $(
            sited_node! {
                $(#[$outer])*
                $struct_vis struct $name { $($fields)* }
            }
        )+
    };
}

/// Declares the closed node variant set.
///
/// Each arm names the variant, its payload, the wire tag (plus accepted aliases) and the
/// `is_*`/`as_*` accessor pair. `AstNode::Unrecognized` is appended to every expansion.
macro_rules! ast_node_kinds {
    (
        $(
            $(#[$arm_attr:meta])*
            $arm:ident($payload:ident) => $tag:literal $(| $alias:literal)*, $is:ident, $as_:ident;
        )+
    ) => {
        #[derive(Clone, PartialEq, Eq, Debug)]
        pub enum AstNode {
            $(
                $(#[$arm_attr])*
                $arm($payload),
            )+
            /// A node whose kind tag is outside the known set.
            Unrecognized(UnrecognizedNode),
        }

        /// Discriminant of [`AstNode`].
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub enum NodeKind {
            $(
                $arm,
            )+
            Unrecognized,
        }

        impl NodeKind {
            /// Every kind with a defined payload, in declaration order.
            pub const KNOWN: &'static [NodeKind] = &[$(NodeKind::$arm,)+];

            /// Canonical wire tag of the kind.
            #[must_use]
            pub fn tag(self) -> &'static str {
                match self {
                    $(
                        NodeKind::$arm => $tag,
                    )+
                    NodeKind::Unrecognized => "unrecognized",
                }
            }
        }

        impl AstNode {
            #[must_use]
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(
                        AstNode::$arm(_) => NodeKind::$arm,
                    )+
                    AstNode::Unrecognized(_) => NodeKind::Unrecognized,
                }
            }

            /// The kind tag exactly as it appeared on the wire.
            #[must_use]
            pub fn raw_kind(&self) -> &str {
                match self {
                    $(
                        AstNode::$arm(_) => $tag,
                    )+
                    AstNode::Unrecognized(node) => &node.kind,
                }
            }

            $(
                #[must_use]
                pub fn $is(&self) -> bool {
                    matches!(self, AstNode::$arm(_))
                }

                /// # Errors
                ///
                /// Returns [`KindMismatchError`] when the node is of another kind.
                pub fn $as_(&self) -> Result<&$payload, KindMismatchError> {
                    match self {
                        AstNode::$arm(node) => Ok(node),
                        other => Err(KindMismatchError {
                            expected: NodeKind::$arm,
                            actual: other.kind(),
                        }),
                    }
                }
            )+

            pub(crate) fn from_tagged(
                tag: String,
                payload: serde_json::Value,
            ) -> Result<Self, serde_json::Error> {
                match tag.as_str() {
                    $(
                        $tag $(| $alias)* => serde_json::from_value::<$payload>(
                            $crate::wire::non_null(payload),
                        )
                        .map(AstNode::$arm),
                    )+
                    _ => Ok(AstNode::Unrecognized(UnrecognizedNode { kind: tag, payload })),
                }
            }
        }

        impl Serialize for AstNode {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(1))?;
                match self {
                    $(
                        AstNode::$arm(node) => map.serialize_entry($tag, node)?,
                    )+
                    AstNode::Unrecognized(node) => map.serialize_entry(&node.kind, &node.payload)?,
                }
                map.end()
            }
        }
    };
}

ast_node_kinds! {
    /// Placeholder the compiler emits where a construct could not be produced.
    Missing(MissingNode) => "missing" | "Missing", is_missing, as_missing;
    FunctionDecl(FunctionDecl) => "FunctionDecl", is_function_decl, as_function_decl;
    /// Synthetic grouping of translation units; has no source site.
    ModuleDecl(ModuleDecl) => "ModuleDecl", is_module_decl, as_module_decl;
    TranslationUnit(TranslationUnit) => "TranslationUnit", is_translation_unit, as_translation_unit;
    ProductTypeDecl(ProductTypeDecl) => "ProductTypeDecl", is_product_type_decl, as_product_type_decl;
    ParameterDecl(ParameterDecl) => "ParameterDecl", is_parameter_decl, as_parameter_decl;
}

#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct MissingNode {}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct UnrecognizedNode {
    pub kind: String,
    pub payload: serde_json::Value,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDecl {
    pub base_name: String,
    #[serde(default)]
    pub sources: Vec<NodeId>,
}

sited_nodes! {
    pub struct TranslationUnit {
        #[serde(default)]
        pub decls: Vec<NodeId>,
    }

    pub struct FunctionDecl {
        pub identifier: String,
        #[serde(default)]
        pub parameters: Vec<NodeId>,
    }

    pub struct ProductTypeDecl {
        pub identifier: String,
        #[serde(default)]
        pub members: Vec<NodeId>,
    }

    pub struct ParameterDecl {
        pub identifier: String,
        #[serde(default)]
        pub label: Option<String>,
    }
}

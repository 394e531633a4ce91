//! Implementation methods for AST enum types.

use std::fmt::{self, Display, Formatter};

use crate::nodes::NodeKind;

impl NodeKind {
    /// Returns `true` for every kind except [`NodeKind::Unrecognized`].
    #[must_use]
    pub fn is_known(self) -> bool {
        !matches!(self, NodeKind::Unrecognized)
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

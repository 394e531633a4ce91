//! Command line argument parsing for the explorer host.

use clap::{Parser, ValueEnum};
use explorer_ast::nodes::NodeId;

/// Output encoding for the tree and the navigation messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Indented outline and one human-readable line per navigation.
    Text,
    /// Pretty JSON tree and one JSON object per navigation.
    Json,
}

/// Reads an AST snapshot, prints its projected tree, then replays UI gestures and
/// prints the navigation they produce.
///
/// ## Examples
///
/// ```bash
/// ast-explorer ast.json
/// compiler --emit-ast | ast-explorer - --select 1:0 --highlight 1:3
/// ```
#[derive(Parser)]
#[command(
    name = "ast-explorer",
    author,
    version,
    about = "Explore a compiler AST snapshot",
    long_about = "Reads a JSON AST snapshot from a file (or `-` for stdin) and prints its projected tree. \
--select and --highlight replay tree gestures by node id (`group:offset`) and print the resulting editor navigation."
)]
pub(crate) struct Cli {
    /// Path to the JSON snapshot, or `-` to read standard input.
    pub(crate) path: std::path::PathBuf,

    /// Output format.
    #[clap(long, value_enum, default_value_t = Format::Text)]
    pub(crate) format: Format,

    /// Select the tree entry of a node (`group:offset`). Repeatable.
    #[clap(long = "select", value_name = "NODE")]
    pub(crate) select: Vec<NodeId>,

    /// Invoke "highlight declaration" on a node (`group:offset`). Repeatable.
    #[clap(long = "highlight", value_name = "NODE")]
    pub(crate) highlight: Vec<NodeId>,

    /// Fail with a non-zero exit code if the snapshot is malformed or structurally broken.
    #[clap(long = "strict", action = clap::ArgAction::SetTrue)]
    pub(crate) strict: bool,
}

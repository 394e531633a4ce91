#![warn(clippy::pedantic)]

//! # AST Explorer
//!
//! Command line host for the explorer engine. It plays the editor's part of the
//! navigation protocol: the projected tree is printed instead of drawn, and every
//! navigation message is printed instead of moving a cursor.
//!
//! Logs go to stderr and are filtered with `RUST_LOG`; stdout carries only the tree and
//! the navigation output.
//!
//! ## Exit codes
//! * 0 – success, including a malformed snapshot outside `--strict` (the tree is empty).
//! * 1 – unreadable input, or a rejected snapshot under `--strict`.

mod parser;

use std::{
    io::{self, Read},
    path::Path,
    sync::mpsc,
};

use anyhow::{Context, Result};
use clap::Parser;
use explorer_ast::arena::Ast;
use explorer_ide::{
    display::NodeAction,
    explorer::Explorer,
    protocol::{EditorSelection, HostMessage, UiEvent},
};
use parser::{Cli, Format};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "ast_explorer=info,explorer_ide=info,explorer_ast=info";

fn main() -> Result<()> {
    init_tracing();
    let args = Cli::parse();
    let input = read_input(&args.path)?;

    let (tx, rx) = mpsc::channel();
    let mut explorer = Explorer::new(tx);
    if args.strict {
        let ast = Ast::from_json(&input).context("rejected AST snapshot")?;
        ast.validate().context("rejected AST snapshot")?;
        explorer.replace(ast);
    } else {
        explorer.load(&input);
    }
    tracing::info!(roots = explorer.tree().len(), "loaded {}", args.path.display());

    match args.format {
        Format::Text => {
            for root in explorer.tree() {
                print!("{}", root.render_text());
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(explorer.tree())?),
    }

    for node in args.select {
        explorer.handle(UiEvent::Selected { node });
    }
    for node in args.highlight {
        explorer.handle(UiEvent::Invoked {
            node,
            action: NodeAction::HighlightDeclaration,
        });
    }
    drop(explorer);

    for message in rx {
        apply(&message, args.format)?;
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read AST snapshot from stdin")?;
        Ok(input)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read AST snapshot {}", path.display()))
    }
}

/// Performs the host side of a navigation message by printing it.
fn apply(message: &HostMessage, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::to_string(message)?),
        Format::Text => match message {
            HostMessage::OpenSourceFile { file_url } => println!("open {file_url}"),
            HostMessage::HighlightFullDeclaration { range } => {
                let selection = EditorSelection::from(range);
                println!(
                    "select {} {}:{}-{}:{}",
                    selection.file_url,
                    selection.start.line,
                    selection.start.character,
                    selection.end.line,
                    selection.end.character
                );
            }
        },
    }
    Ok(())
}

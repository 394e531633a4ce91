use std::sync::mpsc::{self, Receiver};

use explorer_ast::arena::Ast;
use explorer_ide::{
    display::NodeAction,
    explorer::Explorer,
    protocol::{EditorPosition, EditorSelection, HostMessage, UiEvent},
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::utils::{id, load_fixture, range, read_fixture};

fn explorer_with(fixture: &str) -> (Explorer, Receiver<HostMessage>) {
    let (tx, rx) = mpsc::channel();
    let mut explorer = Explorer::new(tx);
    explorer.load(&read_fixture(fixture));
    (explorer, rx)
}

/// A snapshot of `len` modules in one group, each listing the next one as its source.
/// With `close_loop` the last module points back at the first.
fn module_chain(len: u32, close_loop: bool) -> String {
    let modules: Vec<_> = (0..len)
        .map(|offset| {
            let next = if offset + 1 < len {
                vec![json!({ "group": 0, "offset": offset + 1 })]
            } else if close_loop {
                vec![json!({ "group": 0, "offset": 0 })]
            } else {
                vec![]
            };
            json!({ "ModuleDecl": { "baseName": format!("m{offset}"), "sources": next } })
        })
        .collect();
    json!({ "moduleIds": [{ "group": 0, "offset": 0 }], "groups": [modules] }).to_string()
}

fn highlight(node: explorer_ast::nodes::NodeId) -> UiEvent {
    UiEvent::Invoked {
        node,
        action: NodeAction::HighlightDeclaration,
    }
}

#[test]
fn test_scenario_b_selecting_translation_unit_opens_file() {
    let (explorer, rx) = explorer_with("scenario_a");
    let unit = explorer.tree()[0].children[0].node.unwrap();

    let message = explorer.handle(UiEvent::Selected { node: unit });

    let expected = HostMessage::OpenSourceFile {
        file_url: "file:///a.src".to_string(),
    };
    assert_eq!(message, Some(expected.clone()));
    assert_eq!(rx.try_recv().unwrap(), expected);
}

#[test]
fn test_open_action_on_translation_unit() {
    let (explorer, rx) = explorer_with("scenario_a");
    explorer.handle(UiEvent::Invoked {
        node: id(1, 0),
        action: NodeAction::OpenSourceFile,
    });
    assert!(matches!(
        rx.try_recv().unwrap(),
        HostMessage::OpenSourceFile { file_url } if file_url == "file:///a.src"
    ));
}

#[test]
fn test_selecting_other_kinds_is_inert() {
    let (explorer, rx) = explorer_with("mixed_kinds");
    for node in [id(0, 0), id(1, 1), id(1, 2), id(1, 4), id(1, 5), id(1, 6)] {
        assert_eq!(explorer.handle(UiEvent::Selected { node }), None);
    }
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_scenario_c_highlight_parameter() {
    let (explorer, rx) = explorer_with("mixed_kinds");
    explorer.handle(highlight(id(1, 2)));

    let HostMessage::HighlightFullDeclaration { range: site } = rx.try_recv().unwrap() else {
        panic!("expected a highlight message");
    };
    assert_eq!(site, range((8, 8), (8, 18), "file:///b.src"));

    let selection = EditorSelection::from(&site);
    assert_eq!(selection.start, EditorPosition { line: 7, character: 7 });
    assert_eq!(selection.end, EditorPosition { line: 7, character: 17 });
}

#[test]
fn test_highlight_without_site_is_inert() {
    let (explorer, rx) = explorer_with("mixed_kinds");
    for node in [id(0, 0), id(1, 5), id(1, 6)] {
        assert_eq!(explorer.handle(highlight(node)), None);
    }
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_highlight_every_sited_declaration() {
    let (explorer, rx) = explorer_with("mixed_kinds");
    for node in [id(1, 0), id(1, 1), id(1, 3), id(1, 4), id(2, 0)] {
        explorer.handle(highlight(node));
    }
    assert_eq!(rx.try_iter().count(), 5);
}

#[test]
fn test_scenario_e_malformed_input_yields_empty_tree() {
    let (mut explorer, _rx) = explorer_with("scenario_a");
    assert_eq!(explorer.tree().len(), 1);

    let tree = explorer.load("{not json");
    assert!(tree.is_empty());
    assert!(explorer.snapshot().is_none());
}

#[test]
fn test_broken_snapshot_yields_empty_tree() {
    let (explorer, _rx) = explorer_with("broken_reference");
    assert!(explorer.tree().is_empty());
    assert!(explorer.snapshot().is_none());
}

#[test]
fn test_stale_reference_is_ignored() {
    let (mut explorer, rx) = explorer_with("mixed_kinds");
    let stale = id(2, 0);
    explorer.load(&read_fixture("scenario_a"));

    assert_eq!(explorer.handle(UiEvent::Selected { node: stale }), None);
    assert_eq!(explorer.handle(highlight(id(7, 7))), None);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_events_without_snapshot_are_ignored() {
    let (tx, rx) = mpsc::channel();
    let explorer = Explorer::new(tx);
    assert_eq!(explorer.handle(UiEvent::Selected { node: id(0, 0) }), None);
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_reload_replaces_whole_tree() {
    let (mut explorer, _rx) = explorer_with("mixed_kinds");
    assert_eq!(explorer.tree()[0].label, "Geometry");

    explorer.replace(load_fixture("scenario_a"));
    assert_eq!(explorer.tree().len(), 1);
    assert_eq!(explorer.tree()[0].label, "M");
    assert_eq!(explorer.snapshot(), Some(&load_fixture("scenario_a")));
}

#[test]
fn test_closed_host_channel_does_not_fail() {
    let (explorer, rx) = explorer_with("scenario_a");
    drop(rx);
    let message = explorer.handle(UiEvent::Selected { node: id(1, 0) });
    assert!(message.is_some());
}

#[test]
fn test_replace_with_empty_snapshot() {
    let (mut explorer, _rx) = explorer_with("scenario_a");
    assert!(explorer.replace(Ast::default()).is_empty());
    assert!(explorer.snapshot().is_some());
}

#[test]
fn test_deep_reference_chain_loads() {
    let (tx, _rx) = mpsc::channel();
    let mut explorer = Explorer::new(tx);

    let tree = explorer.load(&module_chain(20_000, false));

    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].depth(), 20_000);
    let last = tree[0].find("m19999").unwrap();
    assert_eq!(last.node, Some(id(0, 19_999)));
    assert!(last.children.is_empty());

    explorer.load(&read_fixture("scenario_a"));
    assert_eq!(explorer.tree()[0].label, "M");
}

#[test]
fn test_deep_reference_loop_is_rejected() {
    let (tx, _rx) = mpsc::channel();
    let mut explorer = Explorer::new(tx);

    assert!(explorer.load(&module_chain(20_000, true)).is_empty());
    assert!(explorer.snapshot().is_none());
}

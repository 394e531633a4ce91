use explorer_ast::{
    arena::Ast,
    errors::AstError,
    nodes::{AstNode, MissingNode, ModuleDecl, NodeKind},
};

use crate::utils::{id, load_fixture, reachable, read_fixture};

#[test]
fn test_reachable_nodes_resolve_to_known_kinds() {
    let ast = load_fixture("scenario_a");
    let ids = reachable(&ast);
    assert_eq!(ids, vec![id(0, 0), id(1, 0), id(1, 1)]);
    for node_id in ids {
        let node = ast.resolve(node_id).unwrap();
        assert!(NodeKind::KNOWN.contains(&node.kind()));
    }
}

#[test]
fn test_resolve_group_out_of_range() {
    let ast = load_fixture("scenario_a");
    let err = ast.resolve(id(2, 0)).unwrap_err();
    assert!(matches!(
        err,
        AstError::OutOfRange {
            group_count: 2,
            group_len: None,
            ..
        }
    ));
    assert_eq!(err.to_string(), "node 2:0 is out of range (snapshot has 2 groups)");
}

#[test]
fn test_resolve_offset_out_of_range() {
    let ast = load_fixture("scenario_a");
    let err = ast.resolve(id(1, 2)).unwrap_err();
    assert!(matches!(
        err,
        AstError::OutOfRange {
            group_len: Some(2),
            ..
        }
    ));
}

#[test]
fn test_missing_node_is_not_out_of_range() {
    let ast = Ast::new(vec![], vec![vec![AstNode::Missing(MissingNode {})]]);
    assert!(ast.resolve(id(0, 0)).unwrap().is_missing());
}

#[test]
fn test_malformed_inputs_are_rejected() {
    for input in [
        "{not json",
        "[]",
        "{}",
        r#"{ "moduleIds": [] }"#,
        r#"{ "moduleIds": [{ "group": 0 }], "groups": [] }"#,
        r#"{ "moduleIds": [], "groups": [[{ "missing": {}, "ModuleDecl": {} }]] }"#,
    ] {
        assert!(
            matches!(Ast::from_json(input), Err(AstError::Malformed(_))),
            "accepted {input}"
        );
    }
}

#[test]
fn test_unknown_top_level_fields_are_ignored() -> anyhow::Result<()> {
    let ast = Ast::from_json(&read_fixture("mixed_kinds"))?;
    assert_eq!(ast.module_ids(), &[id(0, 0)]);
    assert_eq!(ast.group_count(), 3);
    assert_eq!(ast.node_count(), 9);
    Ok(())
}

#[test]
fn test_nodes_carry_their_ids() {
    let ast = load_fixture("mixed_kinds");
    let ids: Vec<_> = ast.nodes().map(|(id, _)| id).collect();
    assert_eq!(ids.len(), ast.node_count());
    assert_eq!(ids.first(), Some(&id(0, 0)));
    assert_eq!(ids.last(), Some(&id(2, 0)));
    for (node_id, node) in ast.nodes() {
        assert_eq!(ast.resolve(node_id).unwrap(), node);
    }

    let placeholders: Vec<_> = ast.nodes().filter(|(_, node)| node.is_missing()).collect();
    assert_eq!(placeholders, vec![(id(1, 5), &AstNode::Missing(MissingNode {}))]);
}

#[test]
fn test_validate_accepts_well_formed_snapshots() {
    assert!(load_fixture("scenario_a").validate().is_ok());
    assert!(load_fixture("mixed_kinds").validate().is_ok());
}

#[test]
fn test_validate_reports_broken_reference() {
    let err = load_fixture("broken_reference").validate().unwrap_err();
    assert!(matches!(err, AstError::OutOfRange { id, .. } if id == self::id(0, 9)));
}

#[test]
fn test_validate_reports_cycle_through_members() {
    let err = load_fixture("cycle").validate().unwrap_err();
    assert!(matches!(err, AstError::Cycle { id } if id == self::id(0, 1)));
}

#[test]
fn test_validate_allows_shared_nodes() {
    let ast = Ast::new(
        vec![id(0, 0), id(0, 1)],
        vec![vec![
            AstNode::ModuleDecl(ModuleDecl::new("A", vec![id(0, 2)])),
            AstNode::ModuleDecl(ModuleDecl::new("B", vec![id(0, 2)])),
            AstNode::Missing(MissingNode {}),
        ]],
    );
    assert!(ast.validate().is_ok());
}

#[test]
fn test_snapshot_round_trips_through_json() -> anyhow::Result<()> {
    let ast = load_fixture("mixed_kinds");
    let json = serde_json::to_string(&ast)?;
    assert_eq!(Ast::from_json(&json)?, ast);
    Ok(())
}

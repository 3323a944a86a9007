// tests/unit_session.rs
use collabnet_core::config::Config;
use collabnet_core::graph::{GraphStore, Node};
use collabnet_core::ports::{CanvasCommand, CommandLog, ViewLog};
use collabnet_core::present::View;
use collabnet_core::session::{ControllerState, Operation, Session};
use collabnet_core::GraphError;

fn sample() -> GraphStore {
    let mut b = GraphStore::builder();
    b.add_node(Node::new("a", "Ada").with_paper_count(3));
    b.add_node(Node::new("b", "Bob").with_paper_count(5));
    b.add_node(Node::new("c", "Cy").with_paper_count(1));
    b.add_node(Node::new("d", "Dee").with_paper_count(5));
    b.add_node(Node::new("e", "Eve"));
    b.add_edge("a", "b", 1).unwrap();
    b.add_edge("b", "c", 2).unwrap();
    b.add_edge("c", "d", 1).unwrap();
    b.add_edge("a", "d", 10).unwrap();
    b.add_edge("b", "d", 7).unwrap();
    b.build()
}

fn session() -> Session {
    Session::new(sample(), Config::default())
}

#[test]
fn test_shortest_path_highlights_route() {
    let mut s = session();
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    let view = s
        .run(Operation::ShortestPath, &["a", "d"], &mut canvas, &mut panel)
        .unwrap();

    let View::ShortestPath(summary) = view else {
        panic!("wrong view");
    };
    let route = summary.route.unwrap();
    assert_eq!(route.path, vec!["a", "b", "c", "d"]);
    assert_eq!(route.total_weight, 4);
    assert!(matches!(canvas.commands.last(), Some(CanvasCommand::Fit { .. })));
    assert_eq!(s.state(), ControllerState::Idle);
    assert_eq!(s.last_highlighted(), None);
}

#[test]
fn test_unreachable_target_reports_no_route() {
    let mut s = session();
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    let view = s
        .run(Operation::ShortestPath, &["a", "e"], &mut canvas, &mut panel)
        .unwrap();
    assert!(matches!(view, View::ShortestPath(p) if p.route.is_none()));
    assert!(canvas.is_empty());
}

#[test]
fn test_unknown_id_changes_nothing() {
    let mut s = session();
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    s.run(Operation::ConnectionCount, &["b"], &mut canvas, &mut panel)
        .unwrap();
    canvas.take();

    let err = s
        .run(Operation::ConnectionCount, &["ghost"], &mut canvas, &mut panel)
        .unwrap_err();
    assert!(matches!(err, GraphError::IdentifierNotFound(ref id) if id == "ghost"));
    assert!(canvas.is_empty());
    assert_eq!(s.last_highlighted(), Some("b"));
    assert_eq!(s.state(), ControllerState::Idle);
    assert_eq!(panel.messages.len(), 1);
}

#[test]
fn test_missing_source_checked_before_lookup() {
    let mut s = session();
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    let err = s
        .run(Operation::ShortestPath, &["ghost", ""], &mut canvas, &mut panel)
        .unwrap_err();
    assert!(matches!(err, GraphError::InputInvalid(_)));
    let err = s
        .run(Operation::ShortestPath, &["ghost"], &mut canvas, &mut panel)
        .unwrap_err();
    assert!(matches!(err, GraphError::InputInvalid(_)));
}

#[test]
fn test_too_many_inputs_rejected() {
    let mut s = session();
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    let err = s
        .run(Operation::MostConnected, &["a"], &mut canvas, &mut panel)
        .unwrap_err();
    assert!(matches!(err, GraphError::InputInvalid(_)));
}

#[test]
fn test_resolve_without_request() {
    let mut s = session();
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    let err = s.resolve(&["a"], &mut canvas, &mut panel).unwrap_err();
    assert!(matches!(err, GraphError::NoPendingOperation));
}

#[test]
fn test_two_phase_contract() {
    let mut s = session();
    let request = s.request_inputs(Operation::DistanceTable);
    assert_eq!(request.prompts.len(), 1);
    assert_eq!(s.state(), ControllerState::AwaitingInput(Operation::DistanceTable));

    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    s.resolve(&["a"], &mut canvas, &mut panel).unwrap();
    assert_eq!(s.state(), ControllerState::Idle);

    let err = s.resolve(&["a"], &mut canvas, &mut panel).unwrap_err();
    assert!(matches!(err, GraphError::NoPendingOperation));
}

#[test]
fn test_highlight_restored_between_operations() {
    let mut s = session();
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();

    s.run(Operation::ConnectionCount, &["a"], &mut canvas, &mut panel)
        .unwrap();
    assert_eq!(canvas.commands.len(), 2);
    canvas.take();

    let view = s
        .run(Operation::MostConnected, &[], &mut canvas, &mut panel)
        .unwrap();
    let View::MostConnected(report) = view else {
        panic!("wrong view");
    };
    assert_eq!(report.id, "b");
    assert_eq!(report.connections, 3);

    let cmds = canvas.take();
    assert_eq!(cmds.len(), 3);
    assert!(matches!(&cmds[0], CanvasCommand::RecolorNode { id, color } if id == "a" && color == "#00ff00"));
    assert!(matches!(&cmds[1], CanvasCommand::RecolorNode { id, color } if id == "b" && color == "#ff0000"));
    assert!(matches!(&cmds[2], CanvasCommand::Focus { id, .. } if id == "b"));
    assert_eq!(s.last_highlighted(), Some("b"));
}

#[test]
fn test_isolated_author_has_no_queue_or_tree() {
    let mut s = session();
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    for op in [Operation::CooperationQueue, Operation::CollaboratorTree] {
        let err = s.run(op, &["e"], &mut canvas, &mut panel).unwrap_err();
        assert!(matches!(err, GraphError::NoConnections(ref id) if id == "e"));
    }
    assert!(panel.views.is_empty());
}

#[test]
fn test_cooperation_queue_order() {
    let mut s = session();
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    let view = s
        .run(Operation::CooperationQueue, &["a"], &mut canvas, &mut panel)
        .unwrap();
    let View::CooperationQueue(trace) = view else {
        panic!("wrong view");
    };
    let order: Vec<&str> = trace.final_order.iter().map(|e| e.id.as_str()).collect();
    // a(3), then b(5) and d(5) in arrival order.
    assert_eq!(order, vec!["b", "d", "a"]);
    assert_eq!(trace.steps.len(), 3);
    assert!(canvas.is_empty());
}

#[test]
fn test_collaborator_tree_levels() {
    let mut s = session();
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    let view = s
        .run(Operation::CollaboratorTree, &["b"], &mut canvas, &mut panel)
        .unwrap();
    let View::CollaboratorTree(tree) = view else {
        panic!("wrong view");
    };
    assert_eq!(tree.levels, vec![vec!["Ada".to_string()], vec!["Cy".to_string(), "Dee".to_string()]]);
}

#[test]
fn test_live_table_frames() {
    let mut s = session();
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    s.run(Operation::DistanceTable, &["a"], &mut canvas, &mut panel)
        .unwrap();

    let frames = panel
        .views
        .iter()
        .filter(|v| matches!(v, View::TableFrame(_)))
        .count();
    assert_eq!(frames, 4);
    let Some(View::DistanceTable(table)) = panel.views.last() else {
        panic!("final table missing");
    };
    assert_eq!(table.distance_to("d"), Some(4));
    assert_eq!(table.distance_to("e"), None);
}

#[test]
fn test_live_table_disabled() {
    let mut config = Config::default();
    config.display.live_table = false;
    let mut s = Session::new(sample(), config);
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    s.run(Operation::DistanceTable, &["a"], &mut canvas, &mut panel)
        .unwrap();
    assert_eq!(panel.views.len(), 1);
}

#[test]
fn test_longest_path_and_limit() {
    let mut s = session();
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    let view = s
        .run(Operation::LongestPath, &["a"], &mut canvas, &mut panel)
        .unwrap();
    assert!(matches!(view, View::LongestPath(p) if p.length == 4));

    let mut config = Config::default();
    config.limits.longest_path_max_nodes = Some(3);
    let mut s = Session::new(sample(), config);
    let err = s
        .run(Operation::LongestPath, &["a"], &mut canvas, &mut panel)
        .unwrap_err();
    assert!(matches!(err, GraphError::SearchTooLarge { size: 4, limit: 3, .. }));
    // The isolated author is still within the limit.
    assert!(s.run(Operation::LongestPath, &["e"], &mut canvas, &mut panel).is_ok());
}

#[test]
fn test_most_connected_on_edgeless_graph() {
    let mut b = GraphStore::builder();
    b.add_node(Node::new("x", "X"));
    let mut s = Session::new(b.build(), Config::default());
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    let err = s
        .run(Operation::MostConnected, &[], &mut canvas, &mut panel)
        .unwrap_err();
    assert!(matches!(err, GraphError::EmptyGraph));
}

#[test]
fn test_describe() {
    let s = session();
    let View::AuthorCard(card) = s.describe("d").unwrap() else {
        panic!("wrong view");
    };
    assert_eq!(card.label, "Dee");
    assert_eq!(card.connections, 3);
    assert_eq!(card.paper_count, 5);
    assert!(matches!(s.describe(""), Err(GraphError::InputInvalid(_))));
}

#[test]
fn test_unknown_id_rejected_by_every_operation() {
    let mut s = session();
    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    s.run(Operation::ConnectionCount, &["c"], &mut canvas, &mut panel)
        .unwrap();
    canvas.take();

    for op in Operation::ALL {
        let inputs: &[&str] = match op.prompts().len() {
            0 => continue,
            1 => &["ghost"],
            _ => &["a", "ghost"],
        };
        let err = s.run(op, inputs, &mut canvas, &mut panel).unwrap_err();
        assert!(
            matches!(err, GraphError::IdentifierNotFound(ref id) if id == "ghost"),
            "{op}: {err}"
        );
        assert!(canvas.is_empty(), "{op}");
        assert_eq!(s.last_highlighted(), Some("c"), "{op}");
        assert_eq!(s.state(), ControllerState::Idle);
    }
}

#[test]
fn test_cancel_drops_pending_operation() {
    let mut s = session();
    s.request_inputs(Operation::ShortestPath);
    s.cancel();
    assert_eq!(s.state(), ControllerState::Idle);

    let mut canvas = CommandLog::new();
    let mut panel = ViewLog::new();
    let err = s.resolve(&["a", "d"], &mut canvas, &mut panel).unwrap_err();
    assert!(matches!(err, GraphError::NoPendingOperation));
    assert!(canvas.is_empty());

    s.cancel();
    assert_eq!(s.state(), ControllerState::Idle);
}

// Integration tests for the traversal engine

use graphwalk::config::Config;
use graphwalk::graph::{Graph, GraphError, Position, VertexId};
use graphwalk::player::{ControlGate, Player, PlayerError, PlayerState};
use graphwalk::session::{Command, Session, SessionError};
use graphwalk::traversal::{compute, TraversalMode};
use std::time::Instant;

struct Gate(Vec<bool>);

impl ControlGate for Gate {
    fn set_controls_enabled(&mut self, enabled: bool) {
        self.0.push(enabled);
    }
}

fn build(vertex_count: usize, edges: &[(VertexId, VertexId)]) -> Graph {
    let mut graph = Graph::new();
    for _ in 0..vertex_count {
        graph.add_vertex(Position::default());
    }
    for &(u, v) in edges {
        graph.add_edge(u, v).expect("edge insertion failed");
    }
    graph
}

#[test]
fn test_path_of_three() {
    let graph = build(3, &[(1, 2), (2, 3)]);
    assert_eq!(compute(&graph, 1, TraversalMode::Bfs).ids(), &[1, 2, 3]);
    assert_eq!(compute(&graph, 1, TraversalMode::Dfs).ids(), &[1, 2, 3]);
}

#[test]
fn test_two_components() {
    let graph = build(4, &[(1, 2), (3, 4)]);
    let order = compute(&graph, 1, TraversalMode::Bfs);
    assert_eq!(order.ids(), &[1, 2]);
    assert!(!order.contains(3));
    assert!(!order.contains(4));
}

#[test]
fn test_self_loop_leaves_adjacency_unchanged() {
    let mut graph = build(2, &[(1, 2)]);
    let before = graph.edges();
    assert_eq!(graph.add_edge(1, 1), Err(GraphError::SelfLoop { id: 1 }));
    assert_eq!(graph.edges(), before);
    assert_eq!(graph.neighbors(1), &[2]);
}

#[test]
fn test_second_start_is_rejected() {
    let mut graph = build(3, &[(1, 2), (2, 3)]);
    let mut gate = Gate(Vec::new());
    let mut sink: Vec<String> = Vec::new();
    let mut player = Player::new();

    player
        .start(
            TraversalMode::Bfs,
            compute(&graph, 1, TraversalMode::Bfs),
            &mut gate,
            &mut sink,
        )
        .expect("first start failed");
    player.tick(&mut graph, &mut gate, &mut sink);

    let second = player.start(
        TraversalMode::Dfs,
        compute(&graph, 1, TraversalMode::Dfs),
        &mut gate,
        &mut sink,
    );
    assert!(matches!(second, Err(PlayerError::AlreadyRunning { .. })));
    assert_eq!(player.cursor(), 1);
    assert_eq!(gate.0, vec![false]);
}

#[test]
fn test_history_matches_operation_order() {
    let mut session = Session::new(Config {
        seed: Some(5),
        ..Config::default()
    });
    for line in ["v 3", "edge 1 2", "edge 2 3", "bfs 1"] {
        session
            .execute(line.parse::<Command>().expect("parse failed"))
            .expect("command failed");
    }
    while session.step(Instant::now()) == PlayerState::Running {}

    let steps: Vec<_> = session.history().steps().collect();
    assert_eq!(
        steps,
        vec![
            "Added vertex 1",
            "Added vertex 2",
            "Added vertex 3",
            "Added edge 1 - 2",
            "Added edge 2 - 3",
            "BFS traversal order computed, starting animation",
            "BFS: Visiting node 1",
            "BFS: Visiting node 2",
            "BFS: Visiting node 3",
            "BFS traversal animation completed",
        ]
    );
    assert!(session.controls_enabled());
}

#[test]
fn test_mutation_during_playback_is_refused() {
    let mut session = Session::default();
    session.execute(Command::AddVertices(3)).unwrap();
    session.add_edge(1, 2).unwrap();
    session.start_traversal(TraversalMode::Dfs, 1).unwrap();
    session.step(Instant::now());

    assert_eq!(
        session.remove_vertex(1),
        Err(SessionError::Graph(GraphError::TraversalActive))
    );
    assert!(session.graph().contains(1));
    assert_eq!(session.graph().vertex(1).map(|v| v.highlighted), Some(true));

    session.stop();
    assert!(session.remove_vertex(1).is_ok());
}

#[test]
fn test_traversal_on_random_graph_covers_component() {
    let mut session = Session::new(Config {
        seed: Some(2024),
        ..Config::default()
    });
    session.randomize_with(15, 0.25).unwrap();

    let start = session.graph().vertices()[0].id();
    let bfs = compute(session.graph(), start, TraversalMode::Bfs);
    let dfs = compute(session.graph(), start, TraversalMode::Dfs);

    let mut bfs_sorted = bfs.ids().to_vec();
    let mut dfs_sorted = dfs.ids().to_vec();
    bfs_sorted.sort_unstable();
    dfs_sorted.sort_unstable();
    assert_eq!(bfs_sorted, dfs_sorted);
    assert_eq!(bfs.get(0), Some(start));
    assert_eq!(dfs.get(0), Some(start));
}

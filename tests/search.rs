use minilab::prelude::*;


// The example graph, heuristics in parentheses.
//
//   S(7) -> A(6) [2]    S -> B(5) [3]
//   A -> C(4) [2]       A -> D(3) [3]
//   B -> D [1]          B -> E(4) [4]
//   C -> F(2) [2]       D -> F [3]
//   D -> G(1) [2]       E -> G [2]
//   F -> Z(0) [3]       G -> Z [2]
//
// Cheapest path: S -> B -> D -> G -> Z, cost 8.


fn run(strategy: Strategy) -> SearchOutcome {
    search(&Graph::example(), "S", "Z", strategy).unwrap()
}


#[test]
fn ucs_and_astar_agree_on_the_cheapest_path() {
    let ucs = run(Strategy::Ucs);
    let astar = run(Strategy::AStar);

    assert_eq!(ucs.path.clone().unwrap(), vec!["S", "B", "D", "G", "Z"]);
    assert_eq!(ucs.path, astar.path);
    assert_eq!(ucs.cost, Some(8.0));
    assert_eq!(astar.cost, Some(8.0));

    // The heuristic saves A* some pops on this graph.
    assert!(astar.steps_taken <= ucs.steps_taken);
}


#[test]
fn bfs_finds_the_fewest_edges() {
    // Unit costs turn UCS into an edge-count oracle.
    let weighted = Graph::example();
    let mut unit = Graph::new();
    for node in weighted.nodes() {
        unit.add_node(node.id.clone(), node.x, node.y, 0.0).unwrap();
    }
    for e in weighted.edges() {
        let from = &weighted.node(e.from).unwrap().id;
        let to = &weighted.node(e.to).unwrap().id;
        unit.add_edge(from, to, 1.0).unwrap();
    }

    let bfs = search(&unit, "S", "Z", Strategy::Bfs).unwrap();
    let shortest = search(&unit, "S", "Z", Strategy::Ucs).unwrap();
    assert_eq!(bfs.cost, shortest.cost);
    assert_eq!(bfs.path.unwrap().len(), 5);
}


#[test]
fn bfs_expands_in_insertion_order() {
    let bfs = run(Strategy::Bfs);
    assert_eq!(
        bfs.path.unwrap(),
        vec!["S", "A", "C", "F", "Z"],
    );
    assert_eq!(bfs.cost, Some(9.0));
}


#[test]
fn gbfs_follows_the_heuristic() {
    let gbfs = run(Strategy::Gbfs);
    // S(7) -> B(5) -> D(3) -> G(1) -> Z(0)
    assert_eq!(gbfs.path.unwrap(), vec!["S", "B", "D", "G", "Z"]);
    assert_eq!(gbfs.steps_taken, 5);
}


#[test]
fn every_strategy_reaches_the_goal() {
    for strategy in Strategy::ALL {
        let outcome = run(strategy);
        let path = outcome.path.expect("the goal is reachable");
        assert_eq!(path.first().map(String::as_str), Some("S"));
        assert_eq!(path.last().map(String::as_str), Some("Z"));
        assert!(outcome.nodes_generated >= outcome.steps_taken);
        assert_eq!(outcome.nodes_expanded + 1, outcome.steps_taken);
    }
}


#[test]
fn no_path_is_not_an_error() {
    // Edges point from S towards Z only.
    let outcome = search(&Graph::example(), "Z", "S", Strategy::AStar).unwrap();
    assert_eq!(outcome.path, None);
    assert_eq!(outcome.cost, None);
    assert_eq!(outcome.steps_taken, 1);
}


#[test]
fn strategies_parse_from_their_names() {
    let strategy: Strategy = "A*".parse().unwrap();
    assert_eq!(strategy, Strategy::AStar);
    assert!("astar".parse::<Strategy>().is_err());

    let json = serde_json::to_string(&Strategy::Gbfs).unwrap();
    assert_eq!(json, "\"GBFS\"");
}


#[test]
fn stepping_by_hand_matches_run() {
    let graph = Graph::example();
    let mut session = SearchSession::new(&graph, "S", "Z", Strategy::Ucs)
        .unwrap();
    assert!(session.step().is_err());

    session.initialize();
    let mut popped = Vec::new();
    loop {
        match session.step().unwrap() {
            StepOutcome::Expanded { current } => popped.push(current),
            StepOutcome::GoalReached { current } => {
                popped.push(current);
                break;
            },
            StepOutcome::Exhausted => panic!("the goal is reachable"),
        }
    }
    assert_eq!(session.status(), SearchStatus::Complete);
    assert_eq!(session.outcome(), run(Strategy::Ucs));
    assert_eq!(popped.len(), session.outcome().steps_taken);
    assert!(popped.iter().all(|&n| session.is_explored(n)));

    // Re-initializing starts over.
    session.initialize();
    assert_eq!(session.status(), SearchStatus::FrontierPopulated);
    assert_eq!(session.outcome().steps_taken, 0);
}


#[test]
fn random_graphs_are_searchable() {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    for seed in 0..20 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let graph = Graph::random(&mut rng);
        let ucs = search(&graph, "A", "H", Strategy::Ucs).unwrap();
        for strategy in Strategy::ALL {
            let outcome = search(&graph, "A", "H", strategy).unwrap();
            assert_eq!(outcome.path.is_some(), ucs.path.is_some());
            if let (Some(cost), Some(best)) = (outcome.cost, ucs.cost) {
                assert!(cost >= best - 1e-9);
            }
        }
    }
}

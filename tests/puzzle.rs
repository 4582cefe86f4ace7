use minilab::prelude::*;
use minilab::puzzle::DEFAULT_SHUFFLE_MOVES;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use std::collections::{HashSet, VecDeque};


/// Number of moves to the solved board, by breadth-first search.
fn true_distance(start: PuzzleState) -> Option<usize> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0)]);
    while let Some((state, d)) = queue.pop_front() {
        if state.is_goal() { return Some(d); }
        for s in state.successors() {
            if seen.insert(s.state) {
                queue.push_back((s.state, d + 1));
            }
        }
    }
    None
}


//  1 2 3        1 2 3
//  4 5 6   ->   4 5 6
//  _ 7 8        7 8 _
#[test]
fn two_moves_from_the_goal() {
    let start = PuzzleState::new([1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
    assert!(hamming(&start) <= 2);
    assert!(manhattan(&start) <= 2);

    for kind in [HeuristicKind::Hamming, HeuristicKind::Manhattan] {
        let solution = solve(start, kind);
        assert_eq!(solution.depth, Some(2));
        let path = solution.path.unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], start);
        assert!(path[2].is_goal());
        assert!(solution.nodes_generated >= 3);
    }
}


#[test]
fn solutions_are_optimal_on_shuffled_boards() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..5 {
        let start = PuzzleState::shuffled(&mut rng, 12);
        let distance = true_distance(start).unwrap();

        let h1 = solve(start, HeuristicKind::Hamming);
        let h2 = solve(start, HeuristicKind::Manhattan);
        assert_eq!(h1.depth, Some(distance));
        assert_eq!(h2.depth, Some(distance));
        assert_eq!(h2.moves.len(), distance);
    }
}


#[test]
fn consecutive_boards_differ_by_one_move() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let start = PuzzleState::shuffled(&mut rng, DEFAULT_SHUFFLE_MOVES);
    let solution = solve(start, HeuristicKind::Manhattan);
    let path = solution.path.unwrap();

    for (pair, &(action, tile)) in path.windows(2).zip(solution.moves.iter()) {
        let next = pair[0].apply(action).unwrap();
        assert_eq!(next.state, pair[1]);
        assert_eq!(next.tile, tile);
    }
}


#[test]
fn unsolvable_boards_have_no_path() {
    let start = PuzzleState::new([1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
    assert!(!start.is_solvable());

    let solution = solve(start, HeuristicKind::Manhattan);
    assert!(solution.path.is_none());
    assert!(solution.depth.is_none());
    assert_eq!(solution.nodes_expanded, 0);
}


#[test]
fn custom_heuristics_plug_in() {
    let start = PuzzleState::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();

    // h = 0 turns A* into uniform-cost search.
    let blind = solve(start, |_: &PuzzleState| 0u32);
    let informed = solve(start, HeuristicKind::Manhattan);
    assert_eq!(blind.depth, informed.depth);
    assert!(blind.nodes_expanded >= informed.nodes_expanded);
}


#[test]
fn stepwise_solver_exposes_its_lists() {
    let start = PuzzleState::new([1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
    let mut solver = PuzzleSolver::new(start, HeuristicKind::Manhattan);
    assert_eq!(solver.status(), SolverStatus::Searching);
    assert_eq!(solver.open_list().len(), 1);

    assert_eq!(solver.step(), SolverStatus::Searching);
    assert_eq!(solver.current().unwrap().state, start);
    assert_eq!(solver.closed_len(), 1);
    // Blank at the bottom-left corner: up and right.
    assert_eq!(solver.open_list().len(), 2);

    let solution = solver.run();
    assert_eq!(solver.status(), SolverStatus::Solved);
    assert_eq!(solution.depth, Some(2));

    // Finished solvers stay finished.
    assert_eq!(solver.step(), SolverStatus::Solved);
    assert_eq!(solver.solution(), solution);
}


#[test]
fn branching_factor_of_a_solution() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let start = PuzzleState::shuffled(&mut rng, 20);
    let solution = solve(start, HeuristicKind::Manhattan);

    let depth = solution.depth.unwrap();
    let b = solution.effective_branching_factor.unwrap();
    if depth == 0 {
        assert_eq!(b, 0.0);
    } else {
        assert!((1.0..=10.0).contains(&b));
        assert_eq!(b, effective_branching_factor(solution.nodes_generated, depth));
    }
}

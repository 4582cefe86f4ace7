//! Property-based tests for the engines.

use minilab::decision_tree::{entropy, gini, find_best_split, impurity};
use minilab::puzzle::{hamming, manhattan};
use minilab::{
    Classifier,
    Criterion,
    DecisionTreeBuilder,
    LabeledPoint,
    PuzzleState,
    effective_branching_factor,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use std::collections::{HashSet, VecDeque};

/// Tolerance for floating point comparisons.
const EPS: f64 = 1e-9;

// =============================================================================
// Strategies for generating test inputs
// =============================================================================

/// Labels from up to 4 classes.
fn arb_labels() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..4, 1..40)
}

/// Points in the unit square with up to 3 classes.
fn arb_points() -> impl Strategy<Value = Vec<LabeledPoint>> {
    prop::collection::vec((0.0..1.0f64, 0.0..1.0f64, 0i64..3), 1..60)
        .prop_map(|raw| {
            raw.into_iter()
                .map(|(x, y, c)| LabeledPoint::new(x, y, c))
                .collect()
        })
}

fn arb_criterion() -> impl Strategy<Value = Criterion> {
    prop_oneof![Just(Criterion::Gini), Just(Criterion::Entropy)]
}

fn n_classes(labels: &[i64]) -> usize {
    labels.iter().collect::<HashSet<_>>().len()
}

/// Moves to the solved board, by breadth-first search.
fn true_distance(start: PuzzleState) -> usize {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0)]);
    while let Some((state, d)) = queue.pop_front() {
        if state.is_goal() { return d; }
        for s in state.successors() {
            if seen.insert(s.state) {
                queue.push_back((s.state, d + 1));
            }
        }
    }
    unreachable!("shuffled boards are solvable")
}

// =============================================================================
// Impurity
// =============================================================================

proptest! {
    #[test]
    fn prop_entropy_bounds(labels in arb_labels()) {
        let k = n_classes(&labels) as f64;
        let e = entropy(&labels);
        prop_assert!(e >= -EPS);
        prop_assert!(e <= k.log2() + EPS);
        prop_assert_eq!(e.abs() < EPS, k == 1.0);
    }

    #[test]
    fn prop_gini_bounds(labels in arb_labels()) {
        let k = n_classes(&labels) as f64;
        let g = gini(&labels);
        prop_assert!(g >= -EPS);
        prop_assert!(g <= 1.0 - 1.0 / k + EPS);
        prop_assert_eq!(g.abs() < EPS, k == 1.0);
    }
}

// =============================================================================
// Split evaluator and tree builder
// =============================================================================

proptest! {
    #[test]
    fn prop_gain_never_exceeds_parent_impurity(
        points in arb_points(),
        criterion in arb_criterion(),
    ) {
        let labels = points.iter().map(|p| p.class).collect::<Vec<_>>();
        let parent = criterion.impurity(&labels);
        let split = find_best_split(&points, criterion);
        if split.is_valid() {
            prop_assert!(split.gain <= parent + EPS);
            prop_assert_eq!(split.left.len() + split.right.len(), points.len());
        } else {
            prop_assert_eq!(split.gain, f64::NEG_INFINITY);
        }
    }

    #[test]
    fn prop_depth_bound_and_determinism(
        points in arb_points(),
        criterion in arb_criterion(),
        max_depth in 0usize..7,
        min_samples_split in 1usize..6,
    ) {
        let tree = DecisionTreeBuilder::new()
            .max_depth(max_depth)
            .min_samples_split(min_samples_split)
            .criterion(criterion)
            .build()
            .unwrap();
        let f = tree.fit(&points).unwrap();
        let g = tree.fit(&points).unwrap();

        prop_assert!(f.stats().depth <= max_depth);
        prop_assert_eq!(f.stats().nodes, 2 * f.stats().leaves - 1);
        prop_assert_eq!(&f, &g);
    }

    #[test]
    fn prop_separable_points_are_fit_exactly(
        raw in prop::collection::vec((0.0..1.0f64, 0.0..1.0f64), 2..60),
        cut in 0.1..0.9f64,
    ) {
        let points = raw.into_iter()
            .map(|(x, y)| LabeledPoint::new(x, y, i64::from(x > cut)))
            .collect::<Vec<_>>();
        let f = DecisionTreeBuilder::new()
            .max_depth(10)
            .min_samples_split(2)
            .build()
            .unwrap()
            .fit(&points)
            .unwrap();
        prop_assert_eq!(f.accuracy(&points), 1.0);
    }

    #[test]
    fn prop_string_criterion_matches_typed(labels in arb_labels()) {
        prop_assert_eq!(impurity(&labels, "gini").unwrap(), gini(&labels));
        prop_assert_eq!(impurity(&labels, "entropy").unwrap(), entropy(&labels));
    }
}

// =============================================================================
// Puzzle heuristics and branching factor
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_heuristics_are_admissible(seed in any::<u64>(), moves in 0usize..10) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = PuzzleState::shuffled(&mut rng, moves);
        let distance = true_distance(state) as u32;

        prop_assert!(manhattan(&state) >= hamming(&state));
        prop_assert!(hamming(&state) <= distance);
        prop_assert!(manhattan(&state) <= distance);
    }

    #[test]
    fn prop_branching_factor_is_monotone(
        depth in 1usize..12,
        n in 1usize..5_000,
        extra in 0usize..5_000,
    ) {
        let b1 = effective_branching_factor(n, depth);
        let b2 = effective_branching_factor(n + extra, depth);
        prop_assert!((1.0..=10.0).contains(&b1));
        prop_assert!(b1 <= b2 + 0.01);
    }
}

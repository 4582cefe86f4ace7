//! A* on the 8-puzzle.
//!
//! ```
//! use minilab::prelude::*;
//!
//! let start = PuzzleState::new([1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
//! let solution = solve(start, HeuristicKind::Manhattan);
//! assert_eq!(solution.depth, Some(2));
//! ```

/// Defines the board and its moves.
pub mod state;
/// Defines the heuristics.
pub mod heuristic;
/// Defines the A* solver.
pub mod solver;
/// Defines the effective branching factor.
pub mod branching;


pub use state::{PuzzleState, Move, Successor, GOAL, DEFAULT_SHUFFLE_MOVES};
pub use heuristic::{PuzzleHeuristic, HeuristicKind, hamming, manhattan};
pub use solver::{PuzzleSolver, SearchNode, SolverStatus, Solution, solve};
pub use branching::effective_branching_factor;

#![warn(missing_docs)]

//!
//! A crate that provides some classic AI algorithms
//! for interactive teaching and visualization.
//! Every algorithm in this crate is a pure, synchronous computation
//! over an explicit state representation,
//! so that a presentation layer can drive it one step at a time.
//!
//! This crate includes the following engines.
//!
//! - Decision tree (CART)
//!     Grows an axis-aligned binary tree over 2-D labeled points
//!     by maximizing the information gain
//!     measured with the Gini index or the entropy.
//!     See [`DecisionTreeBuilder`].
//!
//!
//! - Graph search
//!     BFS, DFS, Uniform-Cost, Greedy-Best-First and A* search
//!     over a directed, positively weighted graph,
//!     unified by a single frontier.
//!     See [`SearchSession`].
//!
//!
//! - 8-puzzle solver
//!     A* over the 3x3 sliding tile puzzle
//!     with the Hamming and the Manhattan heuristics.
//!     See [`PuzzleSolver`].
//!
//!
//! - Q-learning
//!     Tabular Q-learning over a grid world with obstacles.
//!     See [`QLearningSession`].

pub mod error;
pub mod config;
pub mod sample;
pub mod classifier;
pub mod decision_tree;
pub mod search;
pub mod puzzle;
pub mod qlearning;
pub mod research;
pub mod prelude;

pub(crate) mod common;


pub use error::{MiniLabError, Result};
pub use config::{TreeParams, QLearningParams};

pub use sample::{
    Feature,
    Label,
    Point,
    LabeledPoint,
    DataGenerator,
    Region,
};

pub use classifier::Classifier;

pub use decision_tree::{
    Criterion,
    ClassDistribution,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Node,
    TreeStats,
    TreeSession,
};

pub use search::{
    Graph,
    Strategy,
    SearchSession,
    SearchOutcome,
    search,
};

pub use puzzle::{
    PuzzleState,
    HeuristicKind,
    PuzzleHeuristic,
    PuzzleSolver,
    Solution,
    solve,
    effective_branching_factor,
};

pub use qlearning::{
    Action,
    Cell,
    GridWorld,
    QTable,
    QLearningSession,
    EpisodeReport,
    train_episode,
};

pub use research::Logger;

//! Exports the engines, their sessions and traits.
//!
pub use crate::error::MiniLabError;


pub use crate::config::{
    TreeParams,
    QLearningParams,
};


pub use crate::sample::{
    Feature,
    Label,
    Point,
    LabeledPoint,
    DataGenerator,
    Region,
};


pub use crate::classifier::Classifier;


pub use crate::decision_tree::{
    // Learner and its output ------------------
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    TreeSession,
    TrainingSummary,


    // Building blocks --------------------------
    Criterion,
    ClassDistribution,
    Node,
    TreeStats,
    Splitter,
    BestSplit,
    find_best_split,
    entropy,
    gini,
    impurity,
};


pub use crate::search::{
    Graph,
    Strategy,
    Frontier,
    FrontierEntry,
    SearchSession,
    SearchStatus,
    StepOutcome,
    SearchOutcome,
    search,
};


pub use crate::puzzle::{
    PuzzleState,
    Move,
    HeuristicKind,
    PuzzleHeuristic,
    PuzzleSolver,
    SolverStatus,
    Solution,
    solve,
    hamming,
    manhattan,
    effective_branching_factor,
};


pub use crate::qlearning::{
    Action,
    Cell,
    GridWorld,
    Rewards,
    QTable,
    QLearningSession,
    EpisodeReport,
    train_episode,
};


pub use crate::research::Logger;

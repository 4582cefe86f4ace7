//! The CART decision tree engine.
//!
//! ```
//! use minilab::prelude::*;
//!
//! let points = vec![
//!     LabeledPoint::new(0.1, 0.1, 0),
//!     LabeledPoint::new(0.2, 0.2, 0),
//!     LabeledPoint::new(0.8, 0.8, 1),
//!     LabeledPoint::new(0.9, 0.9, 1),
//! ];
//! let tree = DecisionTreeBuilder::new()
//!     .max_depth(3)
//!     .min_samples_split(2)
//!     .criterion(Criterion::Gini)
//!     .build()
//!     .unwrap();
//! let f = tree.fit(&points).unwrap();
//! assert_eq!(f.accuracy(&points), 1.0);
//! assert_eq!(f.stats().leaves, 2);
//! ```

/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the decision tree learner.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;
/// Defines the stateful training session.
pub mod session;

/// Defines the nodes of `DecisionTreeClassifier`.
pub mod node;
/// Defines the impurity measures.
pub mod criterion;
/// Defines the class distribution of a node.
pub mod distribution;
/// Defines the split rule and the split evaluator.
pub mod split_rule;


pub use builder::DecisionTreeBuilder;
pub use dtree::DecisionTree;
pub use dtree_classifier::DecisionTreeClassifier;
pub use session::{TreeSession, TrainingSummary};
pub use node::{Node, NodeInfo, BranchNode, LeafNode, TreeStats};
pub use criterion::{Criterion, entropy, gini, impurity};
pub use distribution::ClassDistribution;
pub use split_rule::{LR, Splitter, BestSplit, find_best_split, information_gain};

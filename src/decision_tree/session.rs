//! A stateful training session around the decision tree engine.
use serde::{Serialize, Deserialize};

use crate::{
    Classifier,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    LabeledPoint,
    MiniLabError,
    Result,
};


/// Grid resolution of the decision boundary set as default.
pub const DEFAULT_GRID_SIZE: usize = 30;


/// Everything a presentation layer shows after training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Number of levels of the tree (`stats.depth + 1`).
    pub depth: usize,
    /// Number of nodes.
    pub nodes: usize,
    /// Number of leaves.
    pub leaves: usize,
    /// Accuracy over the training points.
    pub accuracy: f64,
    /// Predictions on the `(grid_size + 1)²` lattice over `[0, 1]²`.
    pub predictions: Vec<LabeledPoint>,
}


/// Owns the current tree and its summary.
/// A session starts untrained; `train` replaces the tree,
/// `reset` drops it.
///
/// ```
/// use minilab::prelude::*;
///
/// let points = DataGenerator::seed(7).clustered(10);
/// let mut session = TreeSession::new(DecisionTreeBuilder::new());
/// assert_eq!(session.accuracy(&points), 0.0);
///
/// let summary = session.train(&points).unwrap();
/// assert_eq!(summary.predictions.len(), 31 * 31);
/// ```
#[derive(Debug, Clone)]
pub struct TreeSession {
    builder: DecisionTreeBuilder,
    grid_size: usize,
    tree: Option<DecisionTreeClassifier>,
    summary: Option<TrainingSummary>,
}


impl TreeSession {
    /// Construct an untrained session.
    pub fn new(builder: DecisionTreeBuilder) -> Self {
        Self {
            builder,
            grid_size: DEFAULT_GRID_SIZE,
            tree: None,
            summary: None,
        }
    }


    /// Set the grid resolution of the decision boundary.
    pub fn grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }


    /// Replace the hyperparameters.
    /// The current tree is kept until the next `train`.
    pub fn set_builder(&mut self, builder: DecisionTreeBuilder) {
        self.builder = builder;
    }


    /// Grow a new tree on `points` and summarize it.
    /// Fails if there are fewer points than `min_samples_split`.
    pub fn train(&mut self, points: &[LabeledPoint])
        -> Result<&TrainingSummary>
    {
        let learner = self.builder.build()?;
        let needed = learner.min_samples_split();
        if points.len() < needed {
            return Err(MiniLabError::invalid(
                format!("need at least {needed} data points to train")
            ));
        }

        let tree = learner.fit(points)?;
        let stats = tree.stats();
        let summary = TrainingSummary {
            depth: stats.display_depth(),
            nodes: stats.nodes,
            leaves: stats.leaves,
            accuracy: tree.accuracy(points),
            predictions: tree.grid_predictions(self.grid_size),
        };

        self.tree = Some(tree);
        Ok(self.summary.insert(summary))
    }


    /// Drop the tree and its summary.
    pub fn reset(&mut self) {
        self.tree = None;
        self.summary = None;
    }


    /// Returns the current tree.
    #[inline]
    pub fn tree(&self) -> Option<&DecisionTreeClassifier> {
        self.tree.as_ref()
    }


    /// Returns the summary of the last training.
    #[inline]
    pub fn summary(&self) -> Option<&TrainingSummary> {
        self.summary.as_ref()
    }
}


impl Classifier for TreeSession {
    #[inline]
    fn predict(&self, point: &crate::Point) -> crate::Label {
        self.tree().predict(point)
    }


    fn accuracy(&self, points: &[LabeledPoint]) -> f64 {
        self.tree().accuracy(points)
    }


    fn grid_predictions(&self, grid_size: usize) -> Vec<LabeledPoint> {
        self.tree().grid_predictions(grid_size)
    }
}

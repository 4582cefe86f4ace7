use crate::common::checker;
use crate::{LabeledPoint, MiniLabError, Result};

use super::{
    node::*,
    criterion::*,
    distribution::*,
    split_rule::*,
    dtree_classifier::DecisionTreeClassifier,
};


/// Grows a [`DecisionTreeClassifier`] with the CART algorithm.
/// Construct it with [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
///
/// A node becomes a leaf, checked in this order, if
/// 1. all points share the same label,
/// 2. its depth reached `max_depth`, or
/// 3. it holds fewer than `min_samples_split` points.
///
/// Otherwise the best split is computed;
/// a split without a positive gain is never materialized
/// and the node becomes a leaf as well.
/// A leaf predicts the majority label,
/// ties going to the label seen first in the point sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionTree {
    criterion: Criterion,
    max_depth: usize,
    min_samples_split: usize,
}


impl DecisionTree {
    #[inline]
    pub(super) fn from_components(
        criterion: Criterion,
        max_depth: usize,
        min_samples_split: usize,
    ) -> Self
    {
        Self { criterion, max_depth, min_samples_split }
    }


    /// Returns the name of this learner.
    pub fn name(&self) -> &str {
        "Decision Tree"
    }


    /// Returns the hyperparameters as `(name, value)` pairs.
    pub fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Criterion", format!("{}", self.criterion)),
            ("Max depth", format!("{}", self.max_depth)),
            ("Min samples split", format!("{}", self.min_samples_split)),
        ]);
        Some(info)
    }


    /// Returns the impurity measure.
    #[inline]
    pub fn criterion(&self) -> Criterion {
        self.criterion
    }


    /// Returns the maximal depth.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }


    /// Returns the minimal number of points to split a node.
    #[inline]
    pub fn min_samples_split(&self) -> usize {
        self.min_samples_split
    }


    /// Grow a tree on `points`.
    /// Every call builds a brand-new tree;
    /// the same points and parameters always yield the same tree.
    pub fn fit(&self, points: &[LabeledPoint])
        -> Result<DecisionTreeClassifier>
    {
        if points.is_empty() {
            return Err(MiniLabError::invalid("need at least 1 sample"));
        }
        for p in points {
            checker::check_finite_point(p.x, p.y)?;
        }

        let root = self.full_tree(points.to_vec(), 0);
        Ok(DecisionTreeClassifier::from(root))
    }


    /// Construct the sub-tree for the points that reached depth `depth`.
    fn full_tree(&self, points: Vec<LabeledPoint>, depth: usize) -> Node {
        let distribution = ClassDistribution::from_labels(
            points.iter().map(|p| p.class)
        );
        let info = NodeInfo {
            samples: points.len(),
            impurity: self.criterion.impurity_of(&distribution),
            distribution,
            depth,
        };


        let stop = info.distribution.is_pure()
            || depth >= self.max_depth
            || points.len() < self.min_samples_split;
        if stop {
            return leaf(info);
        }


        // Find the best pair of feature and threshold
        // based on the `criterion`.
        let split = find_best_split(&points[..], self.criterion);
        drop(points);

        // If the split has no meaning, construct a leaf node.
        let rule = match split.rule {
            Some(rule) if split.is_valid() => rule,
            _ => { return leaf(info); },
        };


        // Grow the tree.
        let left = self.full_tree(split.left, depth + 1);
        let right = self.full_tree(split.right, depth + 1);

        Node::Branch(BranchNode::from_raw(
            rule, split.gain, info, Box::new(left), Box::new(right),
        ))
    }
}


#[inline]
fn leaf(info: NodeInfo) -> Node {
    // `fit` rejects empty samples and every split has two
    // non-empty children, so a node always holds a point.
    let class = info.distribution.majority()
        .unwrap_or(crate::classifier::DEFAULT_LABEL);
    Node::Leaf(LeafNode::from_raw(class, info))
}

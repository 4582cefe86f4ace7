use crate::{DecisionTree, MiniLabError, Result, TreeParams};
use super::criterion::Criterion;


/// The maximal depth set as default.
pub const DEFAULT_MAX_DEPTH: usize = 3;
/// The minimal number of samples to split a node set as default.
pub const DEFAULT_MIN_SAMPLES_SPLIT: usize = 2;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```
/// use minilab::prelude::*;
///
/// let tree = DecisionTreeBuilder::new()
///     .max_depth(2)
///     .min_samples_split(4)
///     .criterion(Criterion::Entropy)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionTreeBuilder {
    max_depth: usize,
    min_samples_split: usize,
    criterion: Criterion,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_depth: DEFAULT_MAX_DEPTH == 3,
    /// min_samples_split: DEFAULT_MIN_SAMPLES_SPLIT == 2,
    /// criterion: Criterion::Gini,
    /// ```
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            min_samples_split: DEFAULT_MIN_SAMPLES_SPLIT,
            criterion: Criterion::Gini,
        }
    }


    /// Construct a builder from parameters read from outside.
    pub fn from_params(params: &TreeParams) -> Result<Self> {
        params.validate()?;
        let builder = Self::new()
            .max_depth(params.max_depth as usize)
            .min_samples_split(params.min_samples_split as usize)
            .criterion(params.criterion()?);
        Ok(builder)
    }


    /// Specify the maximal depth of the tree.
    /// A node at this depth is always a leaf,
    /// so `0` yields a single leaf.
    /// Default maximal depth is `3`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }


    /// Specify the minimal number of points a node needs to be split.
    /// Must be at least `1`. Default value is `2`.
    pub fn min_samples_split(mut self, n: usize) -> Self {
        self.min_samples_split = n;
        self
    }


    /// Set the impurity measure.
    /// Default value is `Criterion::Gini`.
    /// See [`Criterion`] for other rules.
    #[inline]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> Result<DecisionTree> {
        if self.min_samples_split < 1 {
            return Err(MiniLabError::invalid(
                "`min_samples_split` must be at least 1"
            ));
        }

        let dtree = DecisionTree::from_components(
            self.criterion, self.max_depth, self.min_samples_split,
        );
        Ok(dtree)
    }
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

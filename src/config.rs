//! Parameter records that can be read from JSON.
//!
//! The builders ([`DecisionTreeBuilder`](crate::DecisionTreeBuilder),
//! [`QLearningSession`](crate::QLearningSession)) are the primary way
//! to configure the engines.
//! The records in this module exist for configurations
//! that arrive from outside, e.g., a presentation layer.
//! String tags such as `"gini"` are resolved to typed values here,
//! and nowhere else.
use serde::{Serialize, Deserialize};

use std::ops::Bound;

use crate::common::checker;
use crate::decision_tree::Criterion;
use crate::{MiniLabError, Result};


/// Hyperparameters of the decision tree.
///
/// ```json
/// { "max_depth": 3, "min_samples_split": 2, "criterion": "gini" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeParams {
    /// Maximal depth of the tree. The root has depth `0`.
    pub max_depth: i64,
    /// A node with fewer samples than this becomes a leaf.
    pub min_samples_split: i64,
    /// Either `"gini"` or `"entropy"`.
    pub criterion: String,
}


impl TreeParams {
    /// The range of `max_depth` a user interface should offer.
    pub const MAX_DEPTH_RANGE: (i64, i64) = (1, 10);
    /// The range of `min_samples_split` a user interface should offer.
    pub const MIN_SAMPLES_SPLIT_RANGE: (i64, i64) = (2, 20);


    /// Parse the parameters from a JSON string and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }


    /// Check the parameters.
    /// Negative depth, `min_samples_split < 1` and
    /// an unknown criterion are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth < 0 {
            return Err(MiniLabError::invalid(
                format!("`max_depth` must be non-negative, got {}", self.max_depth)
            ));
        }
        if self.min_samples_split < 1 {
            return Err(MiniLabError::invalid(
                format!(
                    "`min_samples_split` must be at least 1, got {}",
                    self.min_samples_split
                )
            ));
        }
        self.criterion()?;
        Ok(())
    }


    /// Returns the typed criterion.
    #[inline]
    pub fn criterion(&self) -> Result<Criterion> {
        self.criterion.parse()
    }
}


impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: 3,
            min_samples_split: 2,
            criterion: "gini".into(),
        }
    }
}


/// Hyperparameters of tabular Q-learning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QLearningParams {
    /// Learning rate `α ∈ (0, 1]`.
    pub alpha: f64,
    /// Discount factor `γ ∈ (0, 1)`.
    pub gamma: f64,
    /// Initial exploration rate `ε ∈ [0, 1]`.
    pub epsilon: f64,
    /// Multiplicative decay applied to `ε` after each episode.
    pub epsilon_decay: f64,
    /// Lower bound of `ε`.
    pub epsilon_min: f64,
    /// Step budget of an episode.
    pub max_steps: usize,
}


impl QLearningParams {
    /// Parse the parameters from a JSON string and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }


    /// Check the parameters.
    pub fn validate(&self) -> Result<()> {
        use Bound::*;
        checker::check_range(
            "alpha", self.alpha, (Excluded(0f64), Included(1f64))
        )?;
        checker::check_range(
            "gamma", self.gamma, (Excluded(0f64), Excluded(1f64))
        )?;
        checker::check_range("epsilon", self.epsilon, 0f64..=1f64)?;
        checker::check_range(
            "epsilon_decay", self.epsilon_decay, (Excluded(0f64), Included(1f64))
        )?;
        checker::check_range("epsilon_min", self.epsilon_min, 0f64..=1f64)?;
        if self.max_steps == 0 {
            return Err(MiniLabError::invalid("`max_steps` must be positive"));
        }
        Ok(())
    }
}


impl Default for QLearningParams {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            gamma: 0.9,
            epsilon: 1.0,
            epsilon_decay: 0.995,
            epsilon_min: 0.01,
            max_steps: 50,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_params_from_json() {
        let params = TreeParams::from_json(
            r#"{ "max_depth": 4, "criterion": "entropy" }"#
        ).unwrap();
        assert_eq!(params.max_depth, 4);
        assert_eq!(params.min_samples_split, 2);
        assert_eq!(params.criterion().unwrap(), Criterion::Entropy);
    }


    #[test]
    fn tree_params_reject_bad_values() {
        let bad = [
            r#"{ "max_depth": -1 }"#,
            r#"{ "min_samples_split": 0 }"#,
            r#"{ "criterion": "twoing" }"#,
        ];
        for json in bad {
            let err = TreeParams::from_json(json).unwrap_err();
            assert!(matches!(err, MiniLabError::InvalidArgument(_)), "{json}");
        }
    }


    #[test]
    fn qlearning_params() {
        assert!(QLearningParams::default().validate().is_ok());

        let params = QLearningParams { gamma: 1.0, ..Default::default() };
        assert!(params.validate().is_err());

        let params = QLearningParams { alpha: 0.0, ..Default::default() };
        assert!(params.validate().is_err());

        let params = QLearningParams { max_steps: 0, ..Default::default() };
        assert!(params.validate().is_err());

        let err = QLearningParams::from_json("{ not json").unwrap_err();
        assert!(matches!(err, MiniLabError::Json(_)));
    }
}

//! Impurity measures for growing a decision tree.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::str::FromStr;

use crate::{Label, MiniLabError, Result};
use super::distribution::ClassDistribution;


/// Splitting criteria for growing decision tree.
/// * `Criterion::Gini` measures the impurity with the Gini index.
/// * `Criterion::Entropy` measures the impurity with the Shannon entropy
///     (in bits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    /// Gini index.
    Gini,
    /// Shannon entropy.
    Entropy,
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gini => "Gini index",
            Self::Entropy => "Entropy",
        };

        write!(f, "{name}")
    }
}


impl FromStr for Criterion {
    type Err = MiniLabError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "gini" => Ok(Self::Gini),
            "entropy" => Ok(Self::Entropy),
            _ => Err(MiniLabError::invalid(
                format!("unknown criterion `{s}` (expected `gini` or `entropy`)")
            )),
        }
    }
}


impl Criterion {
    /// Returns the impurity of the given labels.
    #[inline]
    pub fn impurity(&self, labels: &[Label]) -> f64 {
        let dist = ClassDistribution::from_labels(labels.iter().copied());
        self.impurity_of(&dist)
    }


    /// Returns the impurity of the given class distribution.
    #[inline]
    pub(crate) fn impurity_of(&self, dist: &ClassDistribution) -> f64 {
        match self {
            Self::Gini => gini_impurity(dist),
            Self::Entropy => entropic_impurity(dist),
        }
    }
}


/// `H(S) = -Σ p_c log2(p_c)`.
/// The entropy of no labels is `0`.
#[inline]
pub fn entropy(labels: &[Label]) -> f64 {
    Criterion::Entropy.impurity(labels)
}


/// `Gini(S) = 1 - Σ p_c²`.
/// The Gini index of no labels is `0`.
#[inline]
pub fn gini(labels: &[Label]) -> f64 {
    Criterion::Gini.impurity(labels)
}


/// Dispatches on a criterion name, `"gini"` or `"entropy"`.
pub fn impurity(labels: &[Label], criterion: &str) -> Result<f64> {
    let criterion = criterion.parse::<Criterion>()?;
    Ok(criterion.impurity(labels))
}


/// Returns the entropic-impurity of the given distribution.
#[inline(always)]
fn entropic_impurity(dist: &ClassDistribution) -> f64 {
    if dist.total() == 0 { return 0.0; }

    let h = dist.proportions()
        .map(|p| if p <= 0.0 { 0.0 } else { -p * p.log2() })
        .sum::<f64>();

    h.max(0.0)
}


/// Returns the gini-impurity of the given distribution.
#[inline(always)]
fn gini_impurity(dist: &ClassDistribution) -> f64 {
    if dist.total() == 0 { return 0.0; }

    let correct = dist.proportions()
        .map(|p| p.powi(2))
        .sum::<f64>();

    (1.0 - correct).max(0.0)
}


#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn pure_labels() {
        let labels = [0, 0, 0, 0];
        assert_eq!(entropy(&labels), 0.0);
        assert_eq!(gini(&labels), 0.0);
    }


    #[test]
    fn balanced_binary_labels() {
        let labels = [0, 0, 1, 1];
        assert!((entropy(&labels) - 1.0).abs() < TOLERANCE);
        assert!((gini(&labels) - 0.5).abs() < TOLERANCE);
    }


    #[test]
    fn empty_labels_are_pure() {
        assert_eq!(entropy(&[]), 0.0);
        assert_eq!(gini(&[]), 0.0);
    }


    #[test]
    fn dispatch_by_name() {
        let labels = [0, 1, 2, 3];
        assert!((impurity(&labels, "entropy").unwrap() - 2.0).abs() < TOLERANCE);
        assert!((impurity(&labels, "gini").unwrap() - 0.75).abs() < TOLERANCE);

        let err = impurity(&labels, "twoing").unwrap_err();
        assert!(matches!(err, MiniLabError::InvalidArgument(_)));
    }
}

//! This file defines split rules for decision tree
//! and the evaluator that chooses one.
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{Feature, Label, Point, LabeledPoint};
use super::criterion::Criterion;
use super::distribution::ClassDistribution;


/// The output of the function `split` of `Splitter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LR {
    /// `point[feature] <= threshold`
    Left,
    /// `point[feature] > threshold`
    Right,
}


/// An axis-aligned split rule.
/// The left child is inclusive: a point whose feature value equals
/// the threshold goes to the left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Splitter {
    /// The feature to compare.
    pub feature: Feature,
    /// The threshold.
    pub threshold: f64,
}


impl Splitter {
    /// Construct a new rule.
    #[inline]
    pub fn new(feature: Feature, threshold: f64) -> Self {
        Self { feature, threshold }
    }


    /// Defines the splitting.
    #[inline(always)]
    pub fn split(&self, point: &Point) -> LR {
        if point.value(self.feature) <= self.threshold {
            LR::Left
        } else {
            LR::Right
        }
    }


    /// Partition `points` into the left and the right subsets.
    /// The relative order of the points is kept.
    pub fn partition(&self, points: &[LabeledPoint])
        -> (Vec<LabeledPoint>, Vec<LabeledPoint>)
    {
        points.iter()
            .copied()
            .partition(|p| self.split(&p.point()) == LR::Left)
    }
}


/// The best split found by [`find_best_split`].
///
/// `gain == f64::NEG_INFINITY` (and `rule == None`) means
/// that no split with a positive information gain exists.
#[derive(Debug, Clone, PartialEq)]
pub struct BestSplit {
    /// The information gain of the split.
    pub gain: f64,
    /// The split rule, if any.
    pub rule: Option<Splitter>,
    /// The points routed to the left.
    pub left: Vec<LabeledPoint>,
    /// The points routed to the right.
    pub right: Vec<LabeledPoint>,
}


impl BestSplit {
    #[inline]
    fn none() -> Self {
        Self {
            gain: f64::NEG_INFINITY,
            rule: None,
            left: Vec::new(),
            right: Vec::new(),
        }
    }


    /// Returns `true` if this split is worth materializing:
    /// a positive gain with two non-empty children.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.rule.is_some()
            && self.gain > 0.0
            && !self.left.is_empty()
            && !self.right.is_empty()
    }
}


/// `IG = I(parent) - [w_L I(left) + w_R I(right)]`
/// where the weights are the relative sizes of the children.
/// A split with an empty child has no gain.
pub fn information_gain(
    parent: &[Label],
    left: &[Label],
    right: &[Label],
    criterion: Criterion,
) -> f64
{
    if left.is_empty() || right.is_empty() { return 0.0; }

    let n = parent.len() as f64;
    let wl = left.len() as f64 / n;
    let wr = right.len() as f64 / n;

    criterion.impurity(parent)
        - (wl * criterion.impurity(left) + wr * criterion.impurity(right))
}


/// Find the split that maximizes the information gain.
///
/// For each feature, every midpoint between two adjacent distinct values
/// is a candidate threshold.
/// Ties are broken by the scanning order:
/// feature `x` before `y`, then ascending threshold.
/// Only candidates with a positive gain are considered;
/// if there is none, the returned split has gain `-inf`.
pub fn find_best_split(points: &[LabeledPoint], criterion: Criterion)
    -> BestSplit
{
    let labels = points.iter().map(|p| p.class).collect::<Vec<_>>();
    let parent = criterion.impurity_of(
        &ClassDistribution::from_labels(labels.iter().copied())
    );

    // The features are scanned in parallel,
    // `collect` keeps the scanning order for the tie-break.
    let candidates = Feature::ALL[..].par_iter()
        .map(|&feature| best_threshold(points, feature, parent, criterion))
        .collect::<Vec<_>>();

    let best = candidates.into_iter()
        .flatten()
        .fold(None, |best: Option<(f64, Splitter)>, (gain, rule)| {
            match best {
                Some((g, _)) if gain <= g => best,
                _ => Some((gain, rule)),
            }
        });

    match best {
        Some((gain, rule)) => {
            let (left, right) = rule.partition(points);
            BestSplit { gain, rule: Some(rule), left, right }
        },
        None => BestSplit::none(),
    }
}


/// Returns the first threshold on `feature` with the maximal,
/// positive information gain.
fn best_threshold(
    points: &[LabeledPoint],
    feature: Feature,
    parent: f64,
    criterion: Criterion,
) -> Option<(f64, Splitter)>
{
    let mut values = points.iter()
        .map(|p| p.value(feature))
        .collect::<Vec<_>>();
    values.sort_by(f64::total_cmp);
    values.dedup();

    let n = points.len() as f64;
    let mut best: Option<(f64, Splitter)> = None;

    for pair in values.windows(2) {
        let threshold = (pair[0] + pair[1]) / 2.0;
        let rule = Splitter::new(feature, threshold);

        let mut left = Vec::new();
        let mut right = Vec::new();
        for p in points {
            match rule.split(&p.point()) {
                LR::Left => { left.push(p.class); },
                LR::Right => { right.push(p.class); },
            }
        }
        if left.is_empty() || right.is_empty() { continue; }

        let wl = left.len() as f64 / n;
        let wr = right.len() as f64 / n;
        let gain = parent
            - (wl * criterion.impurity(&left) + wr * criterion.impurity(&right));

        let improves = match best {
            Some((g, _)) => gain > g,
            None => gain > 0.0,
        };
        if improves {
            best = Some((gain, rule));
        }
    }
    best
}

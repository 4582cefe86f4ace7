//! Class counts of the points that reach a node.
use serde::{Serialize, Deserialize};

use crate::Label;


/// Pairs of `(label, count)`.
/// The pairs are kept in the order in which each label
/// first occurs in the point sequence,
/// which is also the tie-break order of [`ClassDistribution::majority`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ClassDistribution(Vec<(Label, usize)>);


impl ClassDistribution {
    /// Count the labels.
    pub fn from_labels<I>(labels: I) -> Self
        where I: IntoIterator<Item = Label>
    {
        let mut counts: Vec<(Label, usize)> = Vec::new();
        for label in labels {
            match counts.iter_mut().find(|(l, _)| *l == label) {
                Some((_, count)) => { *count += 1; },
                None => { counts.push((label, 1)); },
            }
        }
        Self(counts)
    }


    /// Returns the number of counted labels.
    #[inline]
    pub fn total(&self) -> usize {
        self.0.iter().map(|(_, c)| c).sum()
    }


    /// Returns the number of distinct labels.
    #[inline]
    pub fn n_classes(&self) -> usize {
        self.0.len()
    }


    /// Returns `true` if there is at most one distinct label.
    #[inline]
    pub fn is_pure(&self) -> bool {
        self.0.len() <= 1
    }


    /// Returns the count of `label`.
    #[inline]
    pub fn get(&self, label: Label) -> usize {
        self.0.iter()
            .find_map(|&(l, c)| (l == label).then_some(c))
            .unwrap_or(0)
    }


    /// Returns the label with the highest count.
    /// Ties go to the label that occurred first.
    /// An empty distribution has no majority.
    pub fn majority(&self) -> Option<Label> {
        let mut best: Option<(Label, usize)> = None;
        for &(label, count) in self.0.iter() {
            match best {
                Some((_, c)) if c >= count => {},
                _ => { best = Some((label, count)); },
            }
        }
        best.map(|(label, _)| label)
    }


    /// Iterate over the `(label, count)` pairs.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Label, usize)> + '_ {
        self.0.iter().copied()
    }


    /// Iterate over the class proportions.
    /// Yields nothing if the distribution is empty.
    #[inline]
    pub(crate) fn proportions(&self) -> impl Iterator<Item = f64> + '_ {
        let total = self.total() as f64;
        self.0.iter().map(move |&(_, c)| c as f64 / total)
    }
}

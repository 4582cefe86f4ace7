use serde::{Serialize, Deserialize};

use std::fmt;


/// The class label of a point.
pub type Label = i64;


/// The two continuous features of a point.
/// The declaration order `X`, `Y` is the order in which
/// the split evaluator scans the features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    /// The horizontal coordinate.
    X,
    /// The vertical coordinate.
    Y,
}


impl Feature {
    /// All features in scanning order.
    pub const ALL: [Feature; 2] = [Feature::X, Feature::Y];


    /// Returns the name of this feature.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}


impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}


/// An unlabeled point in the feature space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// The `x` coordinate.
    pub x: f64,
    /// The `y` coordinate.
    pub y: f64,
}


impl Point {
    /// Construct a new point.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }


    /// Returns the value of `feature`.
    #[inline(always)]
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::X => self.x,
            Feature::Y => self.y,
        }
    }
}


/// A point with a class label.
/// Points are plain values;
/// the tree builder copies them into subsets at each split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    /// The `x` coordinate.
    pub x: f64,
    /// The `y` coordinate.
    pub y: f64,
    /// The class label.
    pub class: Label,
}


impl LabeledPoint {
    /// Construct a new labeled point.
    #[inline]
    pub fn new(x: f64, y: f64, class: Label) -> Self {
        Self { x, y, class }
    }


    /// Returns the feature vector of this point.
    #[inline(always)]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }


    /// Returns the value of `feature`.
    #[inline(always)]
    pub fn value(&self, feature: Feature) -> f64 {
        self.point().value(feature)
    }
}


impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

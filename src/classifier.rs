//! The prediction interface shared by the trained models.
use crate::{Label, Point, LabeledPoint};


/// The label predicted for any point
/// when there is no model to ask.
pub const DEFAULT_LABEL: Label = 0;


/// A trait that defines the prediction functions of a trained classifier.
pub trait Classifier {
    /// Predicts the label of the given point.
    fn predict(&self, point: &Point) -> Label;


    /// Predicts the labels of the given points.
    fn predict_all(&self, points: &[LabeledPoint]) -> Vec<Label> {
        points.iter()
            .map(|p| self.predict(&p.point()))
            .collect()
    }


    /// Returns the fraction of `points` whose prediction
    /// equals their label.
    /// The accuracy over no points is `0`.
    fn accuracy(&self, points: &[LabeledPoint]) -> f64 {
        if points.is_empty() { return 0.0; }

        let correct = points.iter()
            .filter(|p| self.predict(&p.point()) == p.class)
            .count();

        correct as f64 / points.len() as f64
    }


    /// Evaluates the classifier on the lattice
    /// `(i / grid_size, j / grid_size)` for `i, j ∈ [0, grid_size]`,
    /// producing `(grid_size + 1)²` labeled points in row-major order
    /// (outer loop over `i`).
    /// A `grid_size` of `0` yields the single point `(0, 0)`.
    fn grid_predictions(&self, grid_size: usize) -> Vec<LabeledPoint> {
        let scale = grid_size.max(1) as f64;
        (0..=grid_size)
            .flat_map(|i| (0..=grid_size).map(move |j| (i, j)))
            .map(|(i, j)| {
                let point = Point::new(i as f64 / scale, j as f64 / scale);
                LabeledPoint::new(point.x, point.y, self.predict(&point))
            })
            .collect()
    }
}


/// An absent model.
/// Predicting before training is a caller mistake;
/// the fallback keeps the presentation layer alive:
/// every point is [`DEFAULT_LABEL`], the accuracy is `0`
/// and there is no prediction grid.
impl<C: Classifier> Classifier for Option<C> {
    #[inline]
    fn predict(&self, point: &Point) -> Label {
        match self {
            Some(classifier) => classifier.predict(point),
            None => DEFAULT_LABEL,
        }
    }


    fn accuracy(&self, points: &[LabeledPoint]) -> f64 {
        match self {
            Some(classifier) => classifier.accuracy(points),
            None => 0.0,
        }
    }


    fn grid_predictions(&self, grid_size: usize) -> Vec<LabeledPoint> {
        match self {
            Some(classifier) => classifier.grid_predictions(grid_size),
            None => Vec::new(),
        }
    }
}


impl<C: Classifier + ?Sized> Classifier for &C {
    #[inline]
    fn predict(&self, point: &Point) -> Label {
        (**self).predict(point)
    }


    #[inline]
    fn accuracy(&self, points: &[LabeledPoint]) -> f64 {
        (**self).accuracy(points)
    }


    #[inline]
    fn grid_predictions(&self, grid_size: usize) -> Vec<LabeledPoint> {
        (**self).grid_predictions(grid_size)
    }
}

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Uniform};

use std::f64::consts::PI;

use crate::{MiniLabError, Result};
use super::point::LabeledPoint;


/// Default number of points per class for the clustered data.
pub const DEFAULT_POINTS_PER_CLASS: usize = 30;
/// Default number of points per quadrant for the XOR data.
pub const DEFAULT_POINTS_PER_QUADRANT: usize = 15;


/// An axis-aligned rectangle `[x.0, x.1) × [y.0, y.1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Range of the `x` coordinate.
    pub x: (f64, f64),
    /// Range of the `y` coordinate.
    pub y: (f64, f64),
}


impl Region {
    /// The region of class `0` in the clustered data.
    pub const CLASS_0: Region = Region { x: (0.1, 0.5), y: (0.1, 0.5) };
    /// The region of class `1` in the clustered data.
    pub const CLASS_1: Region = Region { x: (0.5, 0.9), y: (0.5, 0.9) };


    /// Construct a new region.
    /// Each range must be finite and non-empty.
    pub fn new(x: (f64, f64), y: (f64, f64)) -> Result<Self> {
        for (name, (lo, hi)) in [("x", x), ("y", y)] {
            if !(lo.is_finite() && hi.is_finite() && lo < hi) {
                return Err(MiniLabError::invalid(
                    format!("empty {name}-range [{lo}, {hi})")
                ));
            }
        }
        Ok(Self { x, y })
    }


    fn sampler(&self) -> (Uniform<f64>, Uniform<f64>) {
        (
            Uniform::new(self.x.0, self.x.1),
            Uniform::new(self.y.0, self.y.1),
        )
    }
}


/// A struct that generates toy datasets for binary classification.
/// # Example
/// ```
/// use minilab::DataGenerator;
///
/// let mut generator = DataGenerator::seed(777);
/// let points = generator.clustered(30);
/// assert_eq!(points.len(), 60);
/// ```
pub struct DataGenerator {
    rng: StdRng,
}


impl DataGenerator {
    /// Construct a generator seeded from the system entropy.
    #[inline]
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }


    /// Construct a generator with a fixed seed.
    #[inline]
    pub fn seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }


    /// Two clusters: class `0` in [`Region::CLASS_0`]
    /// and class `1` in [`Region::CLASS_1`].
    pub fn clustered(&mut self, points_per_class: usize)
        -> Vec<LabeledPoint>
    {
        self.clustered_in(points_per_class, Region::CLASS_0, Region::CLASS_1)
    }


    /// Two clusters drawn uniformly from the given regions.
    pub fn clustered_in(
        &mut self,
        points_per_class: usize,
        class0: Region,
        class1: Region,
    ) -> Vec<LabeledPoint>
    {
        let mut points = Vec::with_capacity(2 * points_per_class);
        for (class, region) in [(0, class0), (1, class1)] {
            let (xs, ys) = region.sampler();
            for _ in 0..points_per_class {
                let x = xs.sample(&mut self.rng);
                let y = ys.sample(&mut self.rng);
                points.push(LabeledPoint::new(x, y, class));
            }
        }
        points
    }


    /// Two rings around `(0.5, 0.5)`.
    /// Class `0` lies at radius `[0.1, 0.3)`,
    /// class `1` at radius `[0.4, 0.6)`.
    pub fn circular(&mut self, points_per_class: usize)
        -> Vec<LabeledPoint>
    {
        let angle = Uniform::new(0.0, 2.0 * PI);
        let rings = [
            (0, Uniform::new(0.1, 0.3)),
            (1, Uniform::new(0.4, 0.6)),
        ];

        let mut points = Vec::with_capacity(2 * points_per_class);
        for (class, radius) in rings {
            for _ in 0..points_per_class {
                let theta = angle.sample(&mut self.rng);
                let r = radius.sample(&mut self.rng);
                let x = 0.5 + r * theta.cos();
                let y = 0.5 + r * theta.sin();
                points.push(LabeledPoint::new(x, y, class));
            }
        }
        points
    }


    /// The XOR pattern.
    /// Top-left and bottom-right quadrants are class `0`,
    /// top-right and bottom-left quadrants are class `1`.
    pub fn xor(&mut self, points_per_quadrant: usize)
        -> Vec<LabeledPoint>
    {
        let low  = Uniform::new(0.1, 0.5);
        let high = Uniform::new(0.5, 0.9);

        let quadrants = [
            (0, (low, high)),
            (0, (high, low)),
            (1, (high, high)),
            (1, (low, low)),
        ];

        let mut points = Vec::with_capacity(4 * points_per_quadrant);
        for pair in quadrants.chunks(2) {
            for _ in 0..points_per_quadrant {
                for &(class, (xs, ys)) in pair {
                    let x = xs.sample(&mut self.rng);
                    let y = ys.sample(&mut self.rng);
                    points.push(LabeledPoint::new(x, y, class));
                }
            }
        }
        points
    }
}


impl Default for DataGenerator {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clustered_points_stay_in_their_regions() {
        let points = DataGenerator::seed(1).clustered(DEFAULT_POINTS_PER_CLASS);
        assert_eq!(points.len(), 60);
        for p in points {
            let region = if p.class == 0 { Region::CLASS_0 } else { Region::CLASS_1 };
            assert!((region.x.0..region.x.1).contains(&p.x));
            assert!((region.y.0..region.y.1).contains(&p.y));
        }
    }


    #[test]
    fn circular_rings() {
        let points = DataGenerator::seed(2).circular(50);
        for p in points {
            let r = ((p.x - 0.5).powi(2) + (p.y - 0.5).powi(2)).sqrt();
            if p.class == 0 {
                assert!(r < 0.3 + 1e-9);
            } else {
                assert!(r >= 0.4 - 1e-9);
            }
        }
    }


    #[test]
    fn xor_quadrants() {
        let points = DataGenerator::seed(3).xor(DEFAULT_POINTS_PER_QUADRANT);
        assert_eq!(points.len(), 60);
        for p in points {
            let same_side = (p.x < 0.5) == (p.y < 0.5);
            assert_eq!(p.class == 1, same_side);
        }
    }


    #[test]
    fn same_seed_same_data() {
        let a = DataGenerator::seed(42).xor(5);
        let b = DataGenerator::seed(42).xor(5);
        assert_eq!(a, b);
    }


    #[test]
    fn empty_region_is_rejected() {
        assert!(Region::new((0.5, 0.5), (0.0, 1.0)).is_err());
        assert!(Region::new((0.0, 1.0), (0.0, 1.0)).is_ok());
    }
}

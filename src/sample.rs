//! Labeled 2-D points and the routines that generate them.

/// Provides the point structs.
pub(crate) mod point;
/// Provides a seeded data generator.
pub(crate) mod generator;


pub use point::{Feature, Label, Point, LabeledPoint};
pub use generator::{DataGenerator, Region};

//! Defines the decision tree classifier.
use rayon::prelude::*;
use serde::{Serialize, Deserialize};

use crate::{Classifier, Label, LabeledPoint, Point, Result};
use super::node::*;

use std::path::Path;
use std::fs::File;
use std::io::prelude::*;


/// Decision tree classifier.
/// This struct is just a wrapper of `Node`.
/// A trained tree is never modified; retraining yields a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root: Node
}


impl From<Node> for DecisionTreeClassifier {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl Classifier for DecisionTreeClassifier {
    #[inline]
    fn predict(&self, point: &Point) -> Label {
        self.root.predict(point)
    }


    fn grid_predictions(&self, grid_size: usize) -> Vec<LabeledPoint> {
        let scale = grid_size.max(1) as f64;
        (0..=grid_size).into_par_iter()
            .flat_map_iter(|i| (0..=grid_size).map(move |j| (i, j)))
            .map(|(i, j)| {
                let point = Point::new(i as f64 / scale, j as f64 / scale);
                LabeledPoint::new(point.x, point.y, self.predict(&point))
            })
            .collect()
    }
}


impl DecisionTreeClassifier {
    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the depth, the number of nodes
    /// and the number of leaves of this tree.
    #[inline]
    pub fn stats(&self) -> TreeStats {
        self.root.stats()
    }


    /// Serialize this tree to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }


    /// Deserialize a tree from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;


        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}

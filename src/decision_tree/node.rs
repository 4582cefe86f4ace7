//! Defines the inner representation
//! of the Decision Tree class.
use serde::{Serialize, Deserialize};

use crate::{Classifier, Feature, Label, Point};
use super::distribution::ClassDistribution;
use super::split_rule::{LR, Splitter};


/// Bookkeeping shared by both node kinds.
/// All values are computed on the points that reached the node,
/// before the node is split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Number of points that reached this node.
    pub samples: usize,
    /// Class counts of those points.
    pub distribution: ClassDistribution,
    /// Impurity of those points.
    pub impurity: f64,
    /// Depth of this node. The root has depth `0`.
    pub depth: usize,
}


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` must have two childrens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    #[serde(flatten)]
    pub(super) rule: Splitter,
    pub(super) gain: f64,
    #[serde(flatten)]
    pub(super) info: NodeInfo,
    pub(super) left: Box<Node>,
    pub(super) right: Box<Node>,
}


/// Represents the leaf nodes of decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    pub(super) class: Label,
    #[serde(flatten)]
    pub(super) info: NodeInfo,
}


/// Size statistics of a (sub-)tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// The largest leaf depth. A single leaf has depth `0`.
    pub depth: usize,
    /// Number of nodes.
    pub nodes: usize,
    /// Number of leaves.
    pub leaves: usize,
}


impl TreeStats {
    /// Depth counted in levels,
    /// i.e., `depth + 1`, which is what a user interface reports.
    #[inline]
    pub fn display_depth(&self) -> usize {
        self.depth + 1
    }
}


impl BranchNode {
    #[inline]
    pub(super) fn from_raw(
        rule: Splitter,
        gain: f64,
        info: NodeInfo,
        left: Box<Node>,
        right: Box<Node>,
    ) -> Self
    {
        Self { rule, gain, info, left, right, }
    }


    /// Returns the split rule.
    #[inline]
    pub fn rule(&self) -> &Splitter {
        &self.rule
    }


    /// Returns the split feature.
    #[inline]
    pub fn feature(&self) -> Feature {
        self.rule.feature
    }


    /// Returns the split threshold.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.rule.threshold
    }


    /// Returns the information gain of the split.
    #[inline]
    pub fn gain(&self) -> f64 {
        self.gain
    }


    /// Returns the left child (`point[feature] <= threshold`).
    #[inline]
    pub fn left(&self) -> &Node {
        &self.left
    }


    /// Returns the right child (`point[feature] > threshold`).
    #[inline]
    pub fn right(&self) -> &Node {
        &self.right
    }
}


impl LeafNode {
    #[inline]
    pub(super) fn from_raw(class: Label, info: NodeInfo) -> Self {
        Self { class, info }
    }


    /// Returns the predicted class.
    #[inline]
    pub fn class(&self) -> Label {
        self.class
    }
}


impl Node {
    /// Returns the bookkeeping of this node.
    #[inline]
    pub fn info(&self) -> &NodeInfo {
        match self {
            Node::Branch(ref node) => &node.info,
            Node::Leaf(ref node) => &node.info,
        }
    }


    /// Returns the number of points that reached this node.
    #[inline]
    pub fn samples(&self) -> usize {
        self.info().samples
    }


    /// Returns the depth of this node.
    #[inline]
    pub fn depth(&self) -> usize {
        self.info().depth
    }


    /// Returns the impurity of this node.
    #[inline]
    pub fn impurity(&self) -> f64 {
        self.info().impurity
    }


    /// Returns the class distribution of this node.
    #[inline]
    pub fn distribution(&self) -> &ClassDistribution {
        &self.info().distribution
    }


    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }


    /// Returns the size statistics of the sub-tree rooted at this node.
    pub fn stats(&self) -> TreeStats {
        match self {
            Node::Leaf(ref leaf) => {
                TreeStats { depth: leaf.info.depth, nodes: 1, leaves: 1 }
            },
            Node::Branch(ref branch) => {
                let l = branch.left.stats();
                let r = branch.right.stats();
                TreeStats {
                    depth: l.depth.max(r.depth),
                    nodes: 1 + l.nodes + r.nodes,
                    leaves: l.leaves + r.leaves,
                }
            },
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"{feat} <= {thr:.3} ?\\n\
                     samples = {n}\" ];\n",
                    feat = b.rule.feature,
                    thr = b.rule.threshold,
                    n = b.info.samples,
                );

                let left_id = id + 1;
                let (l_info, right_id) = b.left.to_dot_info(left_id);
                let (mut r_info, ret_id) = b.right.to_dot_info(right_id);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{left_id} [ label = \"Yes\" ];\n",
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{right_id} [ label = \"No\" ];\n",
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ \
                     label = \"class {c}\\nsamples = {n}\", \
                     shape = box, \
                     ];\n",
                    c = l.class,
                    n = l.info.samples,
                );

                (vec![info], id + 1)
            }
        }
    }
}


impl Classifier for LeafNode {
    #[inline]
    fn predict(&self, _point: &Point) -> Label {
        self.class
    }
}


impl Classifier for BranchNode {
    #[inline]
    fn predict(&self, point: &Point) -> Label {
        match self.rule.split(point) {
            LR::Left => self.left.predict(point),
            LR::Right => self.right.predict(point),
        }
    }
}


impl Classifier for Node {
    #[inline]
    fn predict(&self, point: &Point) -> Label {
        match self {
            Node::Branch(ref node) => node.predict(point),
            Node::Leaf(ref node) => node.predict(point),
        }
    }
}

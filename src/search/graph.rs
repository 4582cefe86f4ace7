//! Directed graphs with positive edge costs and per-node heuristics.
use rand::prelude::*;
use serde::{Serialize, Deserialize};

use std::collections::HashMap;

use crate::common::checker;
use crate::{MiniLabError, Result};


/// Index of a node in a [`Graph`].
pub type NodeIndex = usize;


/// A node of the search graph.
/// `x` and `y` are layout coordinates for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// A unique name.
    pub id: String,
    /// Horizontal layout coordinate.
    pub x: f64,
    /// Vertical layout coordinate.
    pub y: f64,
    /// Estimated cost to the goal. Must be non-negative.
    pub heuristic: f64,
}


/// A directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node.
    pub from: NodeIndex,
    /// Target node.
    pub to: NodeIndex,
    /// Positive cost.
    pub cost: f64,
}


/// A directed graph.
/// Nodes and edges are kept in insertion order,
/// which is the order in which the neighbors of a node are expanded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<Edge>,
    index: HashMap<String, NodeIndex>,
}


impl Graph {
    /// Construct an empty graph.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// The 9-node example graph.
    /// Start at `S`, the goal is `Z`.
    /// Its heuristic is admissible.
    pub fn example() -> Self {
        let nodes = [
            ("S", 100.0, 250.0, 7.0),
            ("A", 250.0, 150.0, 6.0),
            ("B", 250.0, 350.0, 5.0),
            ("C", 400.0, 100.0, 4.0),
            ("D", 400.0, 250.0, 3.0),
            ("E", 400.0, 400.0, 4.0),
            ("F", 550.0, 150.0, 2.0),
            ("G", 550.0, 350.0, 1.0),
            ("Z", 700.0, 250.0, 0.0),
        ];
        let edges = [
            ("S", "A", 2.0), ("S", "B", 3.0),
            ("A", "C", 2.0), ("A", "D", 3.0),
            ("B", "D", 1.0), ("B", "E", 4.0),
            ("C", "F", 2.0),
            ("D", "F", 3.0), ("D", "G", 2.0),
            ("E", "G", 2.0),
            ("F", "Z", 3.0),
            ("G", "Z", 2.0),
        ];

        let mut graph = Self::new();
        for (id, x, y, h) in nodes {
            graph.push_node(GraphNode { id: id.into(), x, y, heuristic: h });
        }
        for (from, to, cost) in edges {
            let from = graph.index[from];
            let to = graph.index[to];
            graph.edges.push(Edge { from, to, cost });
        }
        graph
    }


    /// A random 8-node graph, `A` to `H`,
    /// laid out on a 4 x 2 grid.
    /// Every node but the last gets one or two forward edges
    /// to one of the next three nodes, with costs in `1..=5`,
    /// so the graph is acyclic.
    /// Search it from the first to the last node.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        const N_NODES: usize = 8;

        let mut graph = Self::new();
        for i in 0..N_NODES {
            let x = 150.0 + (i % 4) as f64 * 180.0;
            let y = 150.0 + (i / 4) as f64 * 200.0
                + (rng.gen::<f64>() - 0.5) * 50.0;
            let id = char::from(b'A' + i as u8).to_string();
            let heuristic = rng.gen_range(0..10) as f64;
            graph.push_node(GraphNode { id, x, y, heuristic });
        }

        for from in 0..N_NODES - 1 {
            let connections = rng.gen_range(1..=2);
            let reach = 3.min(N_NODES - from - 1);
            for _ in 0..connections {
                let to = from + 1 + rng.gen_range(0..reach);
                let cost = rng.gen_range(1..=5) as f64;
                graph.edges.push(Edge { from, to, cost });
            }
        }
        graph
    }


    /// Add a node and return its index.
    /// The id must be unique and the heuristic non-negative.
    pub fn add_node<S>(&mut self, id: S, x: f64, y: f64, heuristic: f64)
        -> Result<NodeIndex>
        where S: Into<String>
    {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(MiniLabError::invalid(format!("duplicate node `{id}`")));
        }
        checker::check_non_negative("heuristic", heuristic)?;
        Ok(self.push_node(GraphNode { id, x, y, heuristic }))
    }


    /// Add a directed edge between two existing nodes.
    /// The cost must be positive.
    pub fn add_edge(&mut self, from: &str, to: &str, cost: f64) -> Result<()> {
        let from = self.require(from)?;
        let to = self.require(to)?;
        checker::check_positive("cost", cost)?;
        self.edges.push(Edge { from, to, cost });
        Ok(())
    }


    #[inline]
    fn push_node(&mut self, node: GraphNode) -> NodeIndex {
        let ix = self.nodes.len();
        self.index.insert(node.id.clone(), ix);
        self.nodes.push(node);
        ix
    }


    /// Returns the index of the node named `id`.
    #[inline]
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }


    /// Same as `node_index` but fails on an unknown id.
    pub(crate) fn require(&self, id: &str) -> Result<NodeIndex> {
        self.node_index(id)
            .ok_or_else(|| MiniLabError::invalid(format!("unknown node `{id}`")))
    }


    /// Returns the node at `ix`, or `None` if there is no such node.
    #[inline]
    pub fn node(&self, ix: NodeIndex) -> Option<&GraphNode> {
        self.nodes.get(ix)
    }


    /// Returns all nodes.
    #[inline]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes[..]
    }


    /// Returns all edges.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges[..]
    }


    /// Returns the number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }


    /// Returns `true` if the graph has no node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }


    /// Iterate over the outgoing edges of `ix` in insertion order.
    #[inline]
    pub fn neighbors(&self, ix: NodeIndex) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.from == ix)
    }


    /// Map node indices to node ids.
    /// Every index must be a node of this graph.
    pub fn ids(&self, path: &[NodeIndex]) -> Vec<String> {
        path.iter()
            .map(|&ix| self.nodes[ix].id.clone())
            .collect()
    }


    /// Returns the total cost of walking `path`.
    /// `None` if two consecutive nodes are not connected.
    /// Parallel edges count with their cheapest cost.
    pub fn path_cost(&self, path: &[NodeIndex]) -> Option<f64> {
        path.windows(2)
            .map(|w| {
                self.neighbors(w[0])
                    .filter(|e| e.to == w[1])
                    .map(|e| e.cost)
                    .min_by(f64::total_cmp)
            })
            .sum()
    }
}

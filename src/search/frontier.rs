//! The frontier of a graph search.
use serde::{Serialize, Deserialize};

use super::graph::NodeIndex;
use super::strategy::Strategy;


/// A not-yet-expanded node together with the path that reached it.
/// Which of the optional fields are set depends on the strategy:
/// BFS and DFS set none, UCS sets `cost`, GBFS sets `heuristic`,
/// A* sets all three with `estimate = cost + heuristic`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontierEntry {
    /// The node.
    pub node: NodeIndex,
    /// Accumulated path cost `g`.
    pub cost: Option<f64>,
    /// Heuristic `h` of the node.
    pub heuristic: Option<f64>,
    /// Total estimate `f = g + h`.
    pub estimate: Option<f64>,
    /// Nodes from the start to `node`, both inclusive.
    pub path: Vec<NodeIndex>,
}


impl FrontierEntry {
    /// Construct an entry, keeping the fields `strategy` uses.
    pub fn new(
        strategy: Strategy,
        node: NodeIndex,
        cost: f64,
        heuristic: f64,
        path: Vec<NodeIndex>,
    ) -> Self
    {
        let cost = strategy.tracks_cost().then_some(cost);
        let heuristic = strategy.tracks_heuristic().then_some(heuristic);
        let estimate = match (strategy, cost, heuristic) {
            (Strategy::AStar, Some(g), Some(h)) => Some(g + h),
            _ => None,
        };
        Self { node, cost, heuristic, estimate, path }
    }
}


/// The frontier.
/// Entries are stored in insertion order;
/// the strategy decides which one to pop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontier {
    entries: Vec<FrontierEntry>,
}


impl Frontier {
    /// Construct an empty frontier.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }


    /// Append an entry.
    #[inline]
    pub fn push(&mut self, entry: FrontierEntry) {
        self.entries.push(entry);
    }


    /// Remove and return the entry `strategy` expands next.
    #[inline]
    pub fn pop(&mut self, strategy: Strategy) -> Option<FrontierEntry> {
        strategy.select(&self.entries[..])
            .map(|i| self.entries.remove(i))
    }


    /// Returns the entry of `node`, if any.
    #[inline]
    pub fn get(&self, node: NodeIndex) -> Option<&FrontierEntry> {
        self.entries.iter().find(|e| e.node == node)
    }


    /// Returns `true` if `node` is in the frontier.
    #[inline]
    pub fn contains(&self, node: NodeIndex) -> bool {
        self.get(node).is_some()
    }


    /// Replace the entry of `entry.node`.
    /// The replacement moves to the back, as a fresh insertion.
    pub fn replace(&mut self, entry: FrontierEntry) {
        self.entries.retain(|e| e.node != entry.node);
        self.entries.push(entry);
    }


    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }


    /// Returns `true` if there is no entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }


    /// Iterate over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &FrontierEntry> {
        self.entries.iter()
    }


    /// Drop all entries.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

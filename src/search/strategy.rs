//! Search strategies and the frontier ordering each one induces.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::str::FromStr;

use crate::{MiniLabError, Result};
use super::frontier::FrontierEntry;


/// The five search strategies.
/// They differ only in which frontier entry is expanded next
/// and in how a newly reached node is admitted to the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Breadth-first search. The frontier is a FIFO queue.
    #[serde(rename = "BFS")]
    Bfs,
    /// Depth-first search. The frontier is a LIFO stack.
    #[serde(rename = "DFS")]
    Dfs,
    /// Uniform-cost search. Expands the minimal path cost `g`.
    #[serde(rename = "UCS")]
    Ucs,
    /// Greedy best-first search. Expands the minimal heuristic `h`.
    #[serde(rename = "GBFS")]
    Gbfs,
    /// A* search. Expands the minimal `f = g + h`.
    #[serde(rename = "A*")]
    AStar,
}


impl Strategy {
    /// All strategies.
    pub const ALL: [Strategy; 5] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Ucs,
        Strategy::Gbfs,
        Strategy::AStar,
    ];


    /// Returns the short name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Ucs => "UCS",
            Self::Gbfs => "GBFS",
            Self::AStar => "A*",
        }
    }


    /// Returns `true` if the entries carry the path cost `g`.
    #[inline]
    pub fn tracks_cost(&self) -> bool {
        matches!(self, Self::Ucs | Self::AStar)
    }


    /// Returns `true` if the entries carry the heuristic `h`.
    #[inline]
    pub fn tracks_heuristic(&self) -> bool {
        matches!(self, Self::Gbfs | Self::AStar)
    }


    /// The priority of an entry; smaller is expanded first.
    /// `None` for the uninformed, order-based strategies.
    #[inline]
    fn priority(&self, entry: &FrontierEntry) -> Option<f64> {
        match self {
            Self::Bfs | Self::Dfs => None,
            Self::Ucs => entry.cost,
            Self::Gbfs => entry.heuristic,
            Self::AStar => entry.estimate,
        }
    }


    /// Returns the position of the entry to expand next.
    /// Among entries with the same priority, the earliest inserted wins.
    pub(crate) fn select(&self, entries: &[FrontierEntry]) -> Option<usize> {
        if entries.is_empty() { return None; }

        match self {
            Self::Bfs => Some(0),
            Self::Dfs => Some(entries.len() - 1),
            _ => {
                let mut best = 0;
                let mut best_key = self.priority(&entries[0]);
                for (i, entry) in entries.iter().enumerate().skip(1) {
                    let key = self.priority(entry);
                    if key < best_key {
                        best = i;
                        best_key = key;
                    }
                }
                Some(best)
            },
        }
    }
}


impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}


impl FromStr for Strategy {
    type Err = MiniLabError;
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| MiniLabError::invalid(
                format!("unknown strategy `{s}` (expected BFS, DFS, UCS, GBFS or A*)")
            ))
    }
}

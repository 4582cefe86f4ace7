//! A step-wise graph search session.
use fixedbitset::FixedBitSet;
use serde::{Serialize, Deserialize};

use crate::{MiniLabError, Result};
use super::frontier::{Frontier, FrontierEntry};
use super::graph::{Graph, NodeIndex};
use super::strategy::Strategy;


/// The lifecycle of a [`SearchSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchStatus {
    /// Created, the frontier is empty.
    Uninitialized,
    /// The frontier holds the start node only.
    FrontierPopulated,
    /// At least one node has been popped.
    Stepping,
    /// The goal has been popped.
    Complete,
    /// The frontier ran empty before reaching the goal.
    Exhausted,
}


impl SearchStatus {
    /// Returns `true` for `Complete` and `Exhausted`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete | Self::Exhausted)
    }
}


/// The result of one call to [`SearchSession::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// `current` was popped and its neighbors were expanded.
    Expanded {
        /// The popped node.
        current: NodeIndex,
    },
    /// `current` is the goal.
    GoalReached {
        /// The popped node.
        current: NodeIndex,
    },
    /// The frontier is empty; there is no path.
    Exhausted,
}


/// The summary of a finished search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Node ids from the start to the goal, or `None` if there is no path.
    pub path: Option<Vec<String>>,
    /// Total edge cost of `path`.
    pub cost: Option<f64>,
    /// Number of nodes popped from the frontier.
    pub steps_taken: usize,
    /// Number of insertions into the frontier, the start node included.
    pub nodes_generated: usize,
    /// Number of popped nodes whose neighbors were expanded.
    pub nodes_expanded: usize,
}


/// A graph search that runs one pop per [`step`](SearchSession::step).
///
/// The session owns the frontier and the explored set;
/// the caller decides when to call the next step,
/// and stops simply by not calling it.
///
/// Explored nodes are never re-opened.
/// This is correct for UCS and A* as long as edge costs are positive
/// and, for A*, the heuristic is consistent.
///
/// ```
/// use minilab::prelude::*;
///
/// let graph = Graph::example();
/// let mut session = SearchSession::new(&graph, "S", "Z", Strategy::AStar).unwrap();
/// session.initialize();
/// while !session.status().is_terminal() {
///     session.step().unwrap();
/// }
/// let outcome = session.outcome();
/// assert_eq!(outcome.cost, Some(8.0));
/// ```
#[derive(Debug, Clone)]
pub struct SearchSession<'g> {
    graph: &'g Graph,
    strategy: Strategy,
    start: NodeIndex,
    goal: NodeIndex,

    status: SearchStatus,
    frontier: Frontier,
    explored: FixedBitSet,
    best_cost: Vec<f64>,
    current: Option<NodeIndex>,
    path: Option<Vec<NodeIndex>>,
    path_cost: Option<f64>,

    steps: usize,
    generated: usize,
    expanded: usize,
}


impl<'g> SearchSession<'g> {
    /// Construct an uninitialized session.
    /// Fails if `start` or `goal` is not a node of `graph`.
    pub fn new(graph: &'g Graph, start: &str, goal: &str, strategy: Strategy)
        -> Result<Self>
    {
        let start = graph.require(start)?;
        let goal = graph.require(goal)?;
        let n_nodes = graph.len();

        Ok(Self {
            graph,
            strategy,
            start,
            goal,

            status: SearchStatus::Uninitialized,
            frontier: Frontier::new(),
            explored: FixedBitSet::with_capacity(n_nodes),
            best_cost: vec![f64::INFINITY; n_nodes],
            current: None,
            path: None,
            path_cost: None,

            steps: 0,
            generated: 0,
            expanded: 0,
        })
    }


    /// Clear all progress and seed the frontier with the start node.
    pub fn initialize(&mut self) {
        self.frontier.clear();
        self.explored.clear();
        self.best_cost.iter_mut().for_each(|c| *c = f64::INFINITY);
        self.path = None;
        self.path_cost = None;
        self.steps = 0;
        self.expanded = 0;

        let h = self.graph.nodes()[self.start].heuristic;
        let entry = FrontierEntry::new(
            self.strategy, self.start, 0.0, h, vec![self.start]
        );
        self.frontier.push(entry);
        self.best_cost[self.start] = 0.0;
        self.generated = 1;
        self.current = Some(self.start);
        self.status = SearchStatus::FrontierPopulated;
    }


    /// Pop exactly one node and expand it.
    ///
    /// On a finished session this returns the terminal outcome again
    /// without doing any work.
    pub fn step(&mut self) -> Result<StepOutcome> {
        match self.status {
            SearchStatus::Uninitialized => {
                return Err(MiniLabError::InvalidState(
                    "the search session is not initialized"
                ));
            },
            SearchStatus::Complete => {
                return Ok(StepOutcome::GoalReached { current: self.goal });
            },
            SearchStatus::Exhausted => {
                return Ok(StepOutcome::Exhausted);
            },
            _ => {},
        }

        let entry = match self.frontier.pop(self.strategy) {
            Some(entry) => entry,
            None => {
                self.status = SearchStatus::Exhausted;
                return Ok(StepOutcome::Exhausted);
            },
        };

        let current = entry.node;
        self.explored.insert(current);
        self.current = Some(current);
        self.steps += 1;
        self.status = SearchStatus::Stepping;


        if current == self.goal {
            self.path_cost = match entry.cost {
                Some(cost) => Some(cost),
                None => self.graph.path_cost(&entry.path[..]),
            };
            self.path = Some(entry.path);
            self.status = SearchStatus::Complete;
            return Ok(StepOutcome::GoalReached { current });
        }


        self.expanded += 1;
        let g = entry.cost.unwrap_or(0.0);
        for edge in self.graph.neighbors(current) {
            let next = edge.to;
            if self.explored.contains(next) { continue; }

            let cost = g + edge.cost;
            let h = self.graph.nodes()[next].heuristic;

            if self.strategy.tracks_cost() {
                // Relax the edge: admit only a strictly cheaper path.
                if let Some(known) = self.frontier.get(next).and_then(|e| e.cost) {
                    if cost >= known { continue; }
                }
                let mut path = entry.path.clone();
                path.push(next);
                let entry = FrontierEntry::new(self.strategy, next, cost, h, path);
                self.frontier.replace(entry);
            } else {
                if self.frontier.contains(next) { continue; }
                let mut path = entry.path.clone();
                path.push(next);
                let entry = FrontierEntry::new(self.strategy, next, cost, h, path);
                self.frontier.push(entry);
            }
            self.best_cost[next] = self.best_cost[next].min(cost);
            self.generated += 1;
        }

        Ok(StepOutcome::Expanded { current })
    }


    /// Initialize if needed and step until the search terminates.
    pub fn run(&mut self) -> SearchOutcome {
        if self.status == SearchStatus::Uninitialized {
            self.initialize();
        }
        while !self.status.is_terminal() {
            // The session is initialized, `step` cannot fail.
            if self.step().is_err() { break; }
        }
        self.outcome()
    }


    /// Returns the summary of the search so far.
    pub fn outcome(&self) -> SearchOutcome {
        SearchOutcome {
            path: self.path.as_ref().map(|p| self.graph.ids(&p[..])),
            cost: self.path_cost,
            steps_taken: self.steps,
            nodes_generated: self.generated,
            nodes_expanded: self.expanded,
        }
    }


    /// Returns the current lifecycle state.
    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }


    /// Returns the strategy.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }


    /// Returns the frontier.
    #[inline]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }


    /// Returns `true` if `node` has been popped.
    #[inline]
    pub fn is_explored(&self, node: NodeIndex) -> bool {
        self.explored.contains(node)
    }


    /// Iterate over the popped nodes in index order.
    #[inline]
    pub fn explored(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.explored.ones()
    }


    /// Returns the cheapest path cost seen so far for `node`.
    /// Infinite if the node has not been reached,
    /// `None` if the graph has no such node.
    #[inline]
    pub fn best_cost(&self, node: NodeIndex) -> Option<f64> {
        self.best_cost.get(node).copied()
    }


    /// Returns the node popped last (the start node right after `initialize`).
    #[inline]
    pub fn current(&self) -> Option<NodeIndex> {
        self.current
    }


    /// Returns the path found, as node indices.
    #[inline]
    pub fn path(&self) -> Option<&[NodeIndex]> {
        self.path.as_deref()
    }
}


/// Run a complete search from `start` to `goal`.
/// "No path" is reported as `path: None`, not as an error.
pub fn search(graph: &Graph, start: &str, goal: &str, strategy: Strategy)
    -> Result<SearchOutcome>
{
    let mut session = SearchSession::new(graph, start, goal, strategy)?;
    Ok(session.run())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> Graph {
        let mut graph = Graph::new();
        for id in ["a", "b", "c"] {
            graph.add_node(id, 0.0, 0.0, 0.0).unwrap();
        }
        graph.add_edge("a", "b", 1.0).unwrap();
        graph
    }


    #[test]
    fn step_before_initialize_fails() {
        let graph = Graph::example();
        let mut session = SearchSession::new(&graph, "S", "Z", Strategy::Bfs)
            .unwrap();
        assert!(matches!(session.step(), Err(MiniLabError::InvalidState(_))));
    }


    #[test]
    fn unknown_endpoints_are_rejected() {
        let graph = Graph::example();
        assert!(SearchSession::new(&graph, "S", "Q", Strategy::Bfs).is_err());
        assert!(search(&graph, "Q", "Z", Strategy::Ucs).is_err());
    }


    #[test]
    fn start_is_goal() {
        let graph = Graph::example();
        let outcome = search(&graph, "S", "S", Strategy::AStar).unwrap();
        assert_eq!(outcome.path, Some(vec!["S".to_string()]));
        assert_eq!(outcome.cost, Some(0.0));
        assert_eq!(outcome.steps_taken, 1);
        assert_eq!(outcome.nodes_expanded, 0);
    }


    #[test]
    fn unreachable_goal_exhausts() {
        let graph = line_graph();
        let mut session = SearchSession::new(&graph, "a", "c", Strategy::Ucs)
            .unwrap();
        let outcome = session.run();
        assert_eq!(session.status(), SearchStatus::Exhausted);
        assert_eq!(outcome.path, None);
        assert_eq!(outcome.cost, None);
        assert_eq!(outcome.steps_taken, 2);

        // Stepping a finished session does nothing.
        assert_eq!(session.step().unwrap(), StepOutcome::Exhausted);
        assert_eq!(session.outcome().steps_taken, 2);
    }


    #[test]
    fn first_step_expands_the_start() {
        let graph = Graph::example();
        let mut session = SearchSession::new(&graph, "S", "Z", Strategy::Ucs)
            .unwrap();
        session.initialize();
        assert_eq!(session.status(), SearchStatus::FrontierPopulated);
        assert_eq!(session.frontier().len(), 1);

        let s = graph.node_index("S").unwrap();
        assert_eq!(session.step().unwrap(), StepOutcome::Expanded { current: s });
        assert!(session.is_explored(s));
        let nodes = session.frontier().iter()
            .map(|e| graph.nodes()[e.node].id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(nodes, vec!["A", "B"]);
    }


    #[test]
    fn ucs_relaxes_a_cheaper_path() {
        let graph = Graph::example();
        let mut session = SearchSession::new(&graph, "S", "Z", Strategy::Ucs)
            .unwrap();
        session.initialize();
        // S, then A (g = 2) reaches D with g = 5,
        // then B (g = 3) reaches D with g = 4.
        for _ in 0..3 {
            session.step().unwrap();
        }
        let d = graph.node_index("D").unwrap();
        let entry = session.frontier().get(d).unwrap();
        assert_eq!(entry.cost, Some(4.0));
        assert_eq!(graph.ids(&entry.path[..]), vec!["S", "B", "D"]);
        assert_eq!(session.best_cost(d), Some(4.0));
        let z = graph.node_index("Z").unwrap();
        assert_eq!(session.best_cost(z), Some(f64::INFINITY));
        assert_eq!(session.best_cost(graph.len()), None);
    }


    #[test]
    fn dfs_follows_the_last_neighbor() {
        let graph = Graph::example();
        let outcome = search(&graph, "S", "Z", Strategy::Dfs).unwrap();
        let path = outcome.path.unwrap();
        assert_eq!(path, vec!["S", "B", "E", "G", "Z"]);
        assert_eq!(outcome.cost, Some(11.0));
    }
}

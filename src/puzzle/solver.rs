//! A* over sliding tile puzzle boards.
use serde::{Serialize, Deserialize};

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use super::branching::effective_branching_factor;
use super::heuristic::PuzzleHeuristic;
use super::state::{Move, PuzzleState};


/// A node of the search tree.
/// Nodes live in an arena owned by the solver and point to their parent by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// The board.
    pub state: PuzzleState,
    /// Moves from the initial board.
    pub g: u32,
    /// Heuristic estimate.
    pub h: u32,
    /// Arena index of the parent, `None` at the root.
    pub parent: Option<usize>,
    /// The move that led here and the tile it slid.
    pub action: Option<(Move, u8)>,
    seq: usize,
}


impl SearchNode {
    /// `g + h`
    #[inline]
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}


/// The lifecycle of a [`PuzzleSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverStatus {
    /// The open list is not empty.
    Searching,
    /// The solved board was reached.
    Solved,
    /// The initial board is unsolvable, or the open list ran empty.
    NoSolution,
}


impl SolverStatus {
    /// Returns `true` unless the search is still running.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Searching)
    }
}


/// The result of a finished search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Boards from the initial one to the solved one,
    /// `None` if there is no solution.
    pub path: Option<Vec<PuzzleState>>,
    /// The moves along `path`, with the tile each one slid.
    pub moves: Vec<(Move, u8)>,
    /// Number of boards put on the open list, the initial one included.
    pub nodes_generated: usize,
    /// Number of boards taken off the open list.
    pub nodes_expanded: usize,
    /// Number of moves of the solution.
    pub depth: Option<usize>,
    /// Effective branching factor of the search.
    pub effective_branching_factor: Option<f64>,
}


/// A step-wise A* solver.
///
/// Among open boards with equal `f`, the one generated first is expanded first.
/// A cheaper path to an open board replaces its entry in place.
/// Closed boards are never re-opened,
/// see [`PuzzleHeuristic`] for what this requires of the heuristic.
///
/// ```
/// use minilab::prelude::*;
///
/// let start = PuzzleState::new([1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
/// let mut solver = PuzzleSolver::new(start, HeuristicKind::Manhattan);
/// while !solver.status().is_terminal() {
///     solver.step();
/// }
/// assert_eq!(solver.solution().depth, Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleSolver<H> {
    heuristic: H,
    status: SolverStatus,

    nodes: Vec<SearchNode>,
    open: BinaryHeap<Reverse<(u32, usize, usize)>>,
    open_index: HashMap<PuzzleState, usize>,
    closed: HashSet<PuzzleState>,
    current: Option<usize>,
    goal: Option<usize>,

    generated: usize,
    expanded: usize,
}


impl<H> PuzzleSolver<H>
    where H: PuzzleHeuristic
{
    /// Construct a solver with `initial` on the open list.
    /// An unsolvable board finishes immediately with no solution.
    pub fn new(initial: PuzzleState, heuristic: H) -> Self {
        let mut solver = Self {
            heuristic,
            status: SolverStatus::Searching,

            nodes: Vec::new(),
            open: BinaryHeap::new(),
            open_index: HashMap::new(),
            closed: HashSet::new(),
            current: None,
            goal: None,

            generated: 0,
            expanded: 0,
        };

        if !initial.is_solvable() {
            solver.status = SolverStatus::NoSolution;
            return solver;
        }

        let h = solver.heuristic.estimate(&initial);
        let root = SearchNode {
            state: initial, g: 0, h, parent: None, action: None, seq: 0,
        };
        solver.push(root);
        solver.generated = 1;
        solver
    }


    /// Put `node` on the open list, superseding any open node
    /// with the same board.
    fn push(&mut self, node: SearchNode) {
        let ix = self.nodes.len();
        self.open.push(Reverse((node.f(), node.seq, ix)));
        self.open_index.insert(node.state, ix);
        self.nodes.push(node);
    }


    /// Take the best open node off the open list,
    /// skipping superseded entries.
    fn pop(&mut self) -> Option<usize> {
        while let Some(Reverse((_, _, ix))) = self.open.pop() {
            let state = self.nodes[ix].state;
            if self.open_index.get(&state) == Some(&ix) {
                self.open_index.remove(&state);
                return Some(ix);
            }
        }
        None
    }


    /// Expand one board.
    /// Returns the status afterwards;
    /// on a finished search this does nothing.
    pub fn step(&mut self) -> SolverStatus {
        if self.status.is_terminal() { return self.status; }

        let Some(ix) = self.pop() else {
            self.status = SolverStatus::NoSolution;
            return self.status;
        };

        let (state, g) = (self.nodes[ix].state, self.nodes[ix].g);
        self.closed.insert(state);
        self.current = Some(ix);
        self.expanded += 1;

        if state.is_goal() {
            self.goal = Some(ix);
            self.status = SolverStatus::Solved;
            return self.status;
        }

        for successor in state.successors() {
            if self.closed.contains(&successor.state) { continue; }

            let g = g + 1;
            let seq = match self.open_index.get(&successor.state) {
                Some(&open) if g < self.nodes[open].g => self.nodes[open].seq,
                Some(_) => continue,
                None => {
                    self.generated += 1;
                    self.generated - 1
                },
            };

            let node = SearchNode {
                state: successor.state,
                g,
                h: self.heuristic.estimate(&successor.state),
                parent: Some(ix),
                action: Some((successor.action, successor.tile)),
                seq,
            };
            self.push(node);
        }

        if self.open_index.is_empty() {
            self.status = SolverStatus::NoSolution;
        }
        self.status
    }


    /// Step until the search terminates and return the solution.
    pub fn run(&mut self) -> Solution {
        while !self.status.is_terminal() {
            self.step();
        }
        self.solution()
    }


    /// Returns the solution found so far.
    pub fn solution(&self) -> Solution {
        let chain = self.goal.map(|ix| self.chain(ix));
        let depth = chain.as_ref().map(|c| c.len() - 1);
        let moves = chain.iter()
            .flatten()
            .filter_map(|&ix| self.nodes[ix].action)
            .collect();
        let path = chain.map(|c| {
            c.into_iter().map(|ix| self.nodes[ix].state).collect()
        });

        Solution {
            path,
            moves,
            nodes_generated: self.generated,
            nodes_expanded: self.expanded,
            depth,
            effective_branching_factor: depth
                .map(|d| effective_branching_factor(self.generated, d)),
        }
    }


    /// Arena indices from the root to `ix`.
    fn chain(&self, mut ix: usize) -> Vec<usize> {
        let mut chain = vec![ix];
        while let Some(parent) = self.nodes[ix].parent {
            chain.push(parent);
            ix = parent;
        }
        chain.reverse();
        chain
    }


    /// Returns the current status.
    #[inline]
    pub fn status(&self) -> SolverStatus {
        self.status
    }


    /// Returns the node expanded last.
    #[inline]
    pub fn current(&self) -> Option<&SearchNode> {
        self.current.map(|ix| &self.nodes[ix])
    }


    /// Returns the open nodes in expansion order.
    pub fn open_list(&self) -> Vec<&SearchNode> {
        let mut open = self.open_index.values()
            .map(|&ix| &self.nodes[ix])
            .collect::<Vec<_>>();
        open.sort_by_key(|node| (node.f(), node.seq));
        open
    }


    /// Returns the number of closed boards.
    #[inline]
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }


    /// Returns `true` if `state` has been expanded.
    #[inline]
    pub fn is_closed(&self, state: &PuzzleState) -> bool {
        self.closed.contains(state)
    }
}


/// Solve `initial` with A* and `heuristic`.
/// An unsolvable board yields `path: None`.
pub fn solve<H>(initial: PuzzleState, heuristic: H) -> Solution
    where H: PuzzleHeuristic
{
    PuzzleSolver::new(initial, heuristic).run()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::HeuristicKind;

    #[test]
    fn already_solved() {
        let solution = solve(PuzzleState::goal(), HeuristicKind::Hamming);
        assert_eq!(solution.depth, Some(0));
        assert_eq!(solution.path.unwrap().len(), 1);
        assert_eq!(solution.effective_branching_factor, Some(0.0));
        assert_eq!(solution.nodes_generated, 1);
    }


    #[test]
    fn unsolvable_board_is_not_searched() {
        let state = PuzzleState::new([2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
        let mut solver = PuzzleSolver::new(state, HeuristicKind::Manhattan);
        assert_eq!(solver.status(), SolverStatus::NoSolution);
        let solution = solver.run();
        assert_eq!(solution.path, None);
        assert_eq!(solution.nodes_generated, 0);
        assert_eq!(solution.effective_branching_factor, None);
    }


    #[test]
    fn records_slid_tiles() {
        let state = PuzzleState::new([1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
        let solution = solve(state, HeuristicKind::Manhattan);
        assert_eq!(solution.moves, vec![(Move::Right, 7), (Move::Right, 8)]);
        let path = solution.path.unwrap();
        assert_eq!(path.first(), Some(&state));
        assert!(path.last().unwrap().is_goal());
    }


    #[test]
    fn open_list_is_ordered_by_f() {
        let state = PuzzleState::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
        let mut solver = PuzzleSolver::new(state, HeuristicKind::Manhattan);
        solver.step();
        let open = solver.open_list();
        assert_eq!(open.len(), 4);
        assert!(open.windows(2).all(|w| w[0].f() <= w[1].f()));
        assert_eq!(solver.closed_len(), 1);
        assert!(solver.is_closed(&state));
    }
}

//! Board states of the 3 x 3 sliding tile puzzle.
use rand::prelude::*;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{MiniLabError, Result};


/// Side length of the board.
pub const SIDE: usize = 3;
/// Number of cells.
pub const CELLS: usize = SIDE * SIDE;
/// Number of random blank moves `PuzzleState::shuffled` makes by default.
pub const DEFAULT_SHUFFLE_MOVES: usize = 50;

/// The solved board. `0` is the blank.
pub const GOAL: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 0];


/// The direction the blank moves.
/// The tile on the target cell slides the opposite way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Move {
    /// The blank moves one row up.
    Up,
    /// The blank moves one row down.
    Down,
    /// The blank moves one column left.
    Left,
    /// The blank moves one column right.
    Right,
}


impl Move {
    /// All moves, in successor generation order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];


    /// Returns the name of this move.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }


    /// Returns the cell the blank at `blank` moves to,
    /// or `None` if that would leave the board.
    #[inline]
    fn target(&self, blank: usize) -> Option<usize> {
        let (row, col) = (blank / SIDE, blank % SIDE);
        match self {
            Self::Up => (row > 0).then(|| blank - SIDE),
            Self::Down => (row < SIDE - 1).then(|| blank + SIDE),
            Self::Left => (col > 0).then(|| blank - 1),
            Self::Right => (col < SIDE - 1).then(|| blank + 1),
        }
    }
}


impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}


/// A state reachable by one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Successor {
    /// The resulting board.
    pub state: PuzzleState,
    /// The move of the blank.
    pub action: Move,
    /// The tile that slid.
    pub tile: u8,
}


/// A board, stored row by row.
/// Always a permutation of `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; CELLS]", into = "[u8; CELLS]")]
pub struct PuzzleState([u8; CELLS]);


impl PuzzleState {
    /// Construct a board from its tiles.
    /// Fails unless `tiles` is a permutation of `0..=8`.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self> {
        let mut seen = [false; CELLS];
        for &tile in tiles.iter() {
            let t = tile as usize;
            if t >= CELLS || seen[t] {
                return Err(MiniLabError::invalid(
                    format!("{tiles:?} is not a permutation of 0..=8")
                ));
            }
            seen[t] = true;
        }
        Ok(Self(tiles))
    }


    /// The solved board.
    #[inline]
    pub fn goal() -> Self {
        Self(GOAL)
    }


    /// Shuffle the solved board by `moves` random blank moves.
    /// The result is always solvable.
    pub fn shuffled<R: Rng>(rng: &mut R, moves: usize) -> Self {
        let mut state = Self::goal();
        for _ in 0..moves {
            let successors = state.successors();
            let k = rng.gen_range(0..successors.len());
            state = successors[k].state;
        }
        state
    }


    /// Returns the tiles row by row.
    #[inline]
    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.0
    }


    /// Returns `true` if this is the solved board.
    #[inline]
    pub fn is_goal(&self) -> bool {
        self.0 == GOAL
    }


    /// Returns the cell of `tile`.
    #[inline]
    pub fn position(&self, tile: u8) -> usize {
        self.0.iter()
            .position(|&t| t == tile)
            .unwrap_or(CELLS)
    }


    /// Returns the cell of the blank.
    #[inline]
    pub fn blank(&self) -> usize {
        self.position(0)
    }


    /// Apply `action`, or return `None` if the blank would leave the board.
    pub fn apply(&self, action: Move) -> Option<Successor> {
        let blank = self.blank();
        let target = action.target(blank)?;
        let mut tiles = self.0;
        tiles.swap(blank, target);
        Some(Successor { state: Self(tiles), action, tile: self.0[target] })
    }


    /// Returns the two to four neighbors of this board,
    /// ordered Up, Down, Left, Right.
    pub fn successors(&self) -> Vec<Successor> {
        Move::ALL.into_iter()
            .filter_map(|action| self.apply(action))
            .collect()
    }


    /// Returns the number of tile pairs in the wrong relative order,
    /// ignoring the blank.
    pub fn inversions(&self) -> usize {
        let tiles = self.0.iter()
            .copied()
            .filter(|&t| t != 0)
            .collect::<Vec<_>>();

        tiles.iter()
            .enumerate()
            .map(|(i, &a)| tiles[i + 1..].iter().filter(|&&b| b < a).count())
            .sum()
    }


    /// Returns `true` if the solved board is reachable.
    /// On an odd-width board this holds iff the inversion count is even.
    #[inline]
    pub fn is_solvable(&self) -> bool {
        self.inversions() % 2 == 0
    }
}


impl Default for PuzzleState {
    fn default() -> Self {
        Self::goal()
    }
}


impl TryFrom<[u8; CELLS]> for PuzzleState {
    type Error = MiniLabError;
    fn try_from(tiles: [u8; CELLS]) -> Result<Self> {
        Self::new(tiles)
    }
}


impl From<PuzzleState> for [u8; CELLS] {
    fn from(state: PuzzleState) -> Self {
        state.0
    }
}


impl fmt::Display for PuzzleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.chunks(SIDE) {
            let line = row.iter()
                .map(|&t| if t == 0 { "_".to_string() } else { t.to_string() })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

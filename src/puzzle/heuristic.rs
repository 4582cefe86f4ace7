//! Heuristics for the sliding tile puzzle.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::str::FromStr;

use crate::{MiniLabError, Result};
use super::state::{PuzzleState, SIDE};


/// An estimate of the number of moves left to the solved board.
///
/// The solver never re-opens a closed board,
/// so it returns optimal solutions only if the estimate is
/// *consistent*: `h(s) <= 1 + h(s')` for every move `s -> s'`,
/// and `h(goal) = 0`.
/// This is not checked.
///
/// Any `Fn(&PuzzleState) -> u32` is a heuristic.
pub trait PuzzleHeuristic {
    /// Returns the estimate for `state`.
    fn estimate(&self, state: &PuzzleState) -> u32;
}


impl<F> PuzzleHeuristic for F
    where F: Fn(&PuzzleState) -> u32
{
    #[inline]
    fn estimate(&self, state: &PuzzleState) -> u32 {
        self(state)
    }
}


/// The two built-in heuristics. Both are consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicKind {
    /// Number of misplaced tiles.
    Hamming,
    /// Sum of the Manhattan distances of the tiles to their goal cells.
    Manhattan,
}


impl HeuristicKind {
    /// Returns the name of this heuristic.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hamming => "hamming",
            Self::Manhattan => "manhattan",
        }
    }
}


impl Default for HeuristicKind {
    fn default() -> Self {
        Self::Manhattan
    }
}


impl PuzzleHeuristic for HeuristicKind {
    #[inline]
    fn estimate(&self, state: &PuzzleState) -> u32 {
        match self {
            Self::Hamming => hamming(state),
            Self::Manhattan => manhattan(state),
        }
    }
}


impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}


impl FromStr for HeuristicKind {
    type Err = MiniLabError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hamming" => Ok(Self::Hamming),
            "manhattan" => Ok(Self::Manhattan),
            _ => Err(MiniLabError::invalid(
                format!("unknown heuristic `{s}` (expected hamming or manhattan)")
            )),
        }
    }
}


/// Returns the goal cell of a non-blank tile.
#[inline]
fn goal_cell(tile: u8) -> usize {
    tile as usize - 1
}


/// Number of non-blank tiles off their goal cell.
pub fn hamming(state: &PuzzleState) -> u32 {
    state.tiles()
        .iter()
        .enumerate()
        .filter(|&(i, &t)| t != 0 && goal_cell(t) != i)
        .count() as u32
}


/// Sum over the non-blank tiles of `|Δrow| + |Δcol|`
/// to their goal cells.
pub fn manhattan(state: &PuzzleState) -> u32 {
    state.tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &t)| t != 0)
        .map(|(i, &t)| {
            let goal = goal_cell(t);
            let dr = (i / SIDE).abs_diff(goal / SIDE);
            let dc = (i % SIDE).abs_diff(goal % SIDE);
            (dr + dc) as u32
        })
        .sum()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_is_zero() {
        let goal = PuzzleState::goal();
        assert_eq!(hamming(&goal), 0);
        assert_eq!(manhattan(&goal), 0);
    }


    #[test]
    fn two_moves_from_goal() {
        let state = PuzzleState::new([1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
        assert_eq!(hamming(&state), 2);
        assert_eq!(manhattan(&state), 2);
    }


    #[test]
    fn manhattan_counts_distance() {
        // 8 and 1 swapped across the board.
        let state = PuzzleState::new([8, 2, 3, 4, 5, 6, 7, 1, 0]).unwrap();
        assert_eq!(hamming(&state), 2);
        assert_eq!(manhattan(&state), 3 + 3);
    }


    #[test]
    fn closures_are_heuristics() {
        let zero = |_: &PuzzleState| 0u32;
        assert_eq!(zero.estimate(&PuzzleState::goal()), 0);
        assert_eq!("manhattan".parse::<HeuristicKind>().unwrap(), HeuristicKind::Manhattan);
        assert!("euclid".parse::<HeuristicKind>().is_err());
    }
}

//! A deterministic grid world with obstacles.
use fixedbitset::FixedBitSet;
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{MiniLabError, Result};


/// A cell of the grid. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}


impl Cell {
    /// Construct a cell.
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}


impl From<(usize, usize)> for Cell {
    #[inline]
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}


impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}


/// The four actions of the agent.
/// The discriminants index the columns of the Q-table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// One row up.
    Up = 0,
    /// One column right.
    Right = 1,
    /// One row down.
    Down = 2,
    /// One column left.
    Left = 3,
}


impl Action {
    /// All actions. Greedy ties are broken in this order.
    pub const ALL: [Action; 4] = [
        Action::Up,
        Action::Right,
        Action::Down,
        Action::Left,
    ];


    /// Returns the column of this action in the Q-table.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }


    /// Returns an arrow for this action.
    pub fn arrow(&self) -> char {
        match self {
            Self::Up => '↑',
            Self::Right => '→',
            Self::Down => '↓',
            Self::Left => '←',
        }
    }


    /// Returns `(dx, dy)`.
    #[inline]
    fn delta(&self) -> (isize, isize) {
        match self {
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
        }
    }
}


/// The reward function.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rewards {
    /// Entering the goal.
    pub goal: f64,
    /// Bumping into a wall or an obstacle. The agent stays put.
    pub collision: f64,
    /// Any other move.
    pub step: f64,
}


impl Default for Rewards {
    fn default() -> Self {
        Self { goal: 100.0, collision: -100.0, step: -1.0 }
    }
}


/// The outcome of one action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// The cell after the action.
    pub next: Cell,
    /// The reward received.
    pub reward: f64,
    /// `true` if `next` is the goal.
    pub done: bool,
    /// `true` if the action hit a wall or an obstacle.
    pub collided: bool,
}


/// A rectangular grid with a start, a goal and obstacle cells.
#[derive(Debug, Clone, PartialEq)]
pub struct GridWorld {
    width: usize,
    height: usize,
    start: Cell,
    goal: Cell,
    obstacles: FixedBitSet,
    rewards: Rewards,
}


impl GridWorld {
    /// Construct an empty `width x height` world.
    /// Both cells must be inside the grid and distinct.
    pub fn new(width: usize, height: usize, start: Cell, goal: Cell)
        -> Result<Self>
    {
        if width == 0 || height == 0 {
            return Err(MiniLabError::invalid(
                format!("the grid must not be empty, got {width} x {height}")
            ));
        }
        let world = Self {
            width,
            height,
            start,
            goal,
            obstacles: FixedBitSet::with_capacity(width * height),
            rewards: Rewards::default(),
        };
        world.check_inside("start", start)?;
        world.check_inside("goal", goal)?;
        if start == goal {
            return Err(MiniLabError::invalid("start and goal must differ"));
        }
        Ok(world)
    }


    /// The 5 x 5 world from `(0, 0)` to `(4, 4)`
    /// with obstacles at `(1, 1)`, `(2, 2)` and `(3, 1)`.
    pub fn example() -> Self {
        let mut obstacles = FixedBitSet::with_capacity(25);
        for (x, y) in [(1, 1), (2, 2), (3, 1)] {
            obstacles.insert(y * 5 + x);
        }
        Self {
            width: 5,
            height: 5,
            start: Cell::new(0, 0),
            goal: Cell::new(4, 4),
            obstacles,
            rewards: Rewards::default(),
        }
    }


    /// Put an obstacle on `cell`.
    /// The start and the goal cannot be blocked.
    pub fn add_obstacle(&mut self, cell: Cell) -> Result<()> {
        self.check_inside("obstacle", cell)?;
        if cell == self.start || cell == self.goal {
            return Err(MiniLabError::invalid(
                format!("cannot put an obstacle on {cell}")
            ));
        }
        let ix = self.index(cell);
        self.obstacles.insert(ix);
        Ok(())
    }


    /// Replace the reward function.
    pub fn rewards(mut self, rewards: Rewards) -> Self {
        self.rewards = rewards;
        self
    }


    fn check_inside(&self, name: &str, cell: Cell) -> Result<()> {
        if cell.x < self.width && cell.y < self.height {
            return Ok(());
        }
        Err(MiniLabError::invalid(format!(
            "{name} {cell} is outside the {} x {} grid", self.width, self.height
        )))
    }


    /// Returns the row-major index of `cell`.
    #[inline]
    pub fn index(&self, cell: Cell) -> usize {
        cell.y * self.width + cell.x
    }


    /// Returns the number of cells.
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.width * self.height
    }


    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }


    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }


    /// Returns the start cell.
    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }


    /// Returns the goal cell.
    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }


    /// Returns the reward function.
    #[inline]
    pub fn reward_function(&self) -> &Rewards {
        &self.rewards
    }


    /// Returns `true` if `cell` is an obstacle.
    #[inline]
    pub fn is_obstacle(&self, cell: Cell) -> bool {
        self.obstacles.contains(self.index(cell))
    }


    /// Iterate over the obstacles in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.obstacles.ones()
            .map(|ix| Cell::new(ix % self.width, ix / self.width))
    }


    /// Take `action` in `cell`.
    pub fn step(&self, cell: Cell, action: Action) -> Transition {
        let (dx, dy) = action.delta();
        let target = cell.x.checked_add_signed(dx)
            .zip(cell.y.checked_add_signed(dy))
            .map(|(x, y)| Cell::new(x, y))
            .filter(|&c| c.x < self.width && c.y < self.height)
            .filter(|&c| !self.is_obstacle(c));

        match target {
            None => Transition {
                next: cell,
                reward: self.rewards.collision,
                done: false,
                collided: true,
            },
            Some(next) if next == self.goal => Transition {
                next,
                reward: self.rewards.goal,
                done: true,
                collided: false,
            },
            Some(next) => Transition {
                next,
                reward: self.rewards.step,
                done: false,
                collided: false,
            },
        }
    }
}


impl Default for GridWorld {
    fn default() -> Self {
        Self::example()
    }
}

//! The tabular action-value function.
use serde::{Serialize, Deserialize};

use super::grid_world::{Action, Cell, GridWorld};


/// `Q(s, a)` for every cell `s` of a grid and every action `a`.
/// Rows are cells in row-major order, columns follow [`Action::ALL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QTable {
    width: usize,
    values: Vec<[f64; 4]>,
}


impl QTable {
    /// Construct a zero table for a `width x height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            values: vec![[0f64; 4]; width * height],
        }
    }


    /// Construct a zero table shaped like `world`.
    #[inline]
    pub fn for_world(world: &GridWorld) -> Self {
        Self::new(world.width(), world.height())
    }


    /// Returns `true` if this table has one row per cell of `world`.
    #[inline]
    pub fn fits(&self, world: &GridWorld) -> bool {
        self.width == world.width() && self.values.len() == world.n_cells()
    }


    /// Returns `true` if `cell` has a row in this table.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && self.row(cell) < self.values.len()
    }


    #[inline]
    fn row(&self, cell: Cell) -> usize {
        cell.y * self.width + cell.x
    }


    /// Returns `Q(cell, action)`.
    /// `cell` must have a row in this table, see [`contains`](QTable::contains).
    #[inline]
    pub fn get(&self, cell: Cell, action: Action) -> f64 {
        self.values[self.row(cell)][action.index()]
    }


    /// Set `Q(cell, action)`.
    /// `cell` must have a row in this table.
    #[inline]
    pub fn set(&mut self, cell: Cell, action: Action, value: f64) {
        let row = self.row(cell);
        self.values[row][action.index()] = value;
    }


    /// Returns the action values of `cell`.
    #[inline]
    pub fn values(&self, cell: Cell) -> &[f64; 4] {
        &self.values[self.row(cell)]
    }


    /// Returns `argmax_a Q(cell, a)`.
    /// Ties go to the first action in `Up, Right, Down, Left`.
    pub fn best_action(&self, cell: Cell) -> Action {
        let values = self.values(cell);
        let mut best = 0;
        for a in 1..values.len() {
            if values[a] > values[best] { best = a; }
        }
        Action::ALL[best]
    }


    /// Returns `max_a Q(cell, a)`.
    #[inline]
    pub fn max_value(&self, cell: Cell) -> f64 {
        self.values(cell)[self.best_action(cell).index()]
    }


    /// Returns the greedy action of `cell`
    /// if its value is positive, i.e., if something has been learned there.
    pub fn policy(&self, cell: Cell) -> Option<Action> {
        let action = self.best_action(cell);
        (self.get(cell, action) > 0f64).then_some(action)
    }


    /// Returns [`policy`](QTable::policy) of every cell in row-major order.
    pub fn policy_grid(&self) -> Vec<Option<Action>> {
        let height = self.values.len() / self.width.max(1);
        (0..height)
            .flat_map(|y| (0..self.width).map(move |x| Cell::new(x, y)))
            .map(|cell| self.policy(cell))
            .collect()
    }


    /// Set every value to `0`.
    pub fn reset(&mut self) {
        self.values.iter_mut()
            .for_each(|row| *row = [0f64; 4]);
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_go_to_the_first_action() {
        let mut table = QTable::new(2, 2);
        let cell = Cell::new(1, 0);
        assert_eq!(table.best_action(cell), Action::Up);
        assert_eq!(table.policy(cell), None);

        table.set(cell, Action::Down, 1.0);
        table.set(cell, Action::Left, 1.0);
        assert_eq!(table.best_action(cell), Action::Down);
        assert_eq!(table.max_value(cell), 1.0);
        assert_eq!(table.policy(cell), Some(Action::Down));
    }


    #[test]
    fn negative_values_have_no_policy() {
        let mut table = QTable::new(2, 1);
        for a in Action::ALL {
            table.set(Cell::new(0, 0), a, -1.0);
        }
        table.set(Cell::new(1, 0), Action::Left, 2.0);
        assert_eq!(table.policy_grid(), vec![None, Some(Action::Left)]);

        table.reset();
        assert_eq!(table.values(Cell::new(1, 0)), &[0.0; 4]);
    }


    #[test]
    fn shape_checks() {
        let world = GridWorld::example();
        assert!(QTable::for_world(&world).fits(&world));
        assert!(!QTable::new(2, 2).fits(&world));
        assert!(!QTable::new(5, 4).fits(&world));

        let table = QTable::new(2, 2);
        assert!(table.contains(Cell::new(1, 1)));
        assert!(!table.contains(Cell::new(2, 0)));
        assert!(!table.contains(Cell::new(0, 2)));
    }
}

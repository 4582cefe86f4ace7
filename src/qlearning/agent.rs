//! Epsilon-greedy action selection and the Q-learning update.
use rand::prelude::*;
use serde::{Serialize, Deserialize};

use crate::common::checker;
use crate::{MiniLabError, QLearningParams, Result};
use super::grid_world::{Action, Cell, GridWorld, Transition};
use super::q_table::QTable;


/// The summary of one episode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpisodeReport {
    /// Sum of the rewards.
    pub total_reward: f64,
    /// Number of actions taken.
    pub steps_taken: usize,
    /// `true` if the agent reached the goal within the step budget.
    pub reached_goal: bool,
    /// The exploration rate used during the episode.
    pub epsilon: f64,
    /// The exploration rate for the next episode.
    pub next_epsilon: f64,
}


/// With probability `epsilon` pick an action uniformly at random,
/// otherwise the greedy one.
///
/// Fails if `epsilon` is outside `[0, 1]`
/// or if `cell` has no row in `table`.
pub fn choose_action<R>(table: &QTable, cell: Cell, epsilon: f64, rng: &mut R)
    -> Result<Action>
    where R: Rng + ?Sized
{
    checker::check_range("epsilon", epsilon, 0f64..=1f64)?;
    if !table.contains(cell) {
        return Err(MiniLabError::invalid(
            format!("cell {cell} has no row in the Q-table")
        ));
    }
    Ok(epsilon_greedy(table, cell, epsilon, rng))
}


#[inline]
fn epsilon_greedy<R>(table: &QTable, cell: Cell, epsilon: f64, rng: &mut R)
    -> Action
    where R: Rng + ?Sized
{
    if rng.gen::<f64>() < epsilon {
        Action::ALL[rng.gen_range(0..Action::ALL.len())]
    } else {
        table.best_action(cell)
    }
}


/// Apply `Q(s,a) ← Q(s,a) + α·[r + γ·max_a' Q(s',a') - Q(s,a)]`
/// and return the temporal-difference error.
///
/// `cell` and `transition.next` must have a row in `table`.
pub fn update(
    table: &mut QTable,
    cell: Cell,
    action: Action,
    transition: &Transition,
    alpha: f64,
    gamma: f64,
) -> f64
{
    let q = table.get(cell, action);
    let target = transition.reward + gamma * table.max_value(transition.next);
    let td_error = target - q;
    table.set(cell, action, q + alpha * td_error);
    td_error
}


/// Returns `max(ε_min, ε · decay)`.
#[inline]
pub fn decay_epsilon(params: &QLearningParams, epsilon: f64) -> f64 {
    params.epsilon_min.max(epsilon * params.epsilon_decay)
}


/// Fails unless `params` are valid, `table` fits `world`
/// and `cell` lies in `world`.
fn check_inputs(
    table: &QTable,
    world: &GridWorld,
    cell: Cell,
    params: &QLearningParams,
) -> Result<()>
{
    params.validate()?;
    if !table.fits(world) {
        return Err(MiniLabError::invalid(format!(
            "the Q-table does not fit the {} x {} grid",
            world.width(), world.height(),
        )));
    }
    if cell.x >= world.width() || cell.y >= world.height() {
        return Err(MiniLabError::invalid(format!(
            "cell {cell} is outside the {} x {} grid",
            world.width(), world.height(),
        )));
    }
    Ok(())
}


/// Choose an action in `cell`, take it and learn from it.
pub fn act<R>(
    table: &mut QTable,
    world: &GridWorld,
    cell: Cell,
    params: &QLearningParams,
    rng: &mut R,
) -> Result<(Action, Transition)>
    where R: Rng + ?Sized
{
    check_inputs(table, world, cell, params)?;
    Ok(learn(table, world, cell, params, rng))
}


/// Same as [`act`] without the input checks.
/// The caller guarantees what `check_inputs` verifies.
pub(crate) fn learn<R>(
    table: &mut QTable,
    world: &GridWorld,
    cell: Cell,
    params: &QLearningParams,
    rng: &mut R,
) -> (Action, Transition)
    where R: Rng + ?Sized
{
    let action = epsilon_greedy(table, cell, params.epsilon, rng);
    let transition = world.step(cell, action);
    update(table, cell, action, &transition, params.alpha, params.gamma);
    (action, transition)
}


/// Run one episode from the start cell until the goal is reached
/// or `params.max_steps` actions were taken,
/// exploring with `params.epsilon`.
///
/// The table is updated in place.
/// The decayed exploration rate is returned in the report;
/// `params` is not modified.
///
/// Fails with [`MiniLabError::InvalidArgument`]
/// if `params` are malformed or `table` is not shaped like `world`.
///
/// ```
/// use minilab::prelude::*;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let world = GridWorld::example();
/// let mut table = QTable::for_world(&world);
/// let params = QLearningParams::default();
/// let mut rng = StdRng::seed_from_u64(0);
///
/// let report = train_episode(&mut table, &world, &params, &mut rng).unwrap();
/// assert!(report.steps_taken <= params.max_steps);
/// assert_eq!(report.next_epsilon, 0.995);
/// ```
pub fn train_episode<R>(
    table: &mut QTable,
    world: &GridWorld,
    params: &QLearningParams,
    rng: &mut R,
) -> Result<EpisodeReport>
    where R: Rng + ?Sized
{
    let mut cell = world.start();
    check_inputs(table, world, cell, params)?;

    let mut total_reward = 0f64;
    let mut steps_taken = 0;
    let mut reached_goal = false;

    while steps_taken < params.max_steps {
        let (_, transition) = learn(table, world, cell, params, rng);
        total_reward += transition.reward;
        steps_taken += 1;
        cell = transition.next;
        if transition.done {
            reached_goal = true;
            break;
        }
    }

    Ok(EpisodeReport {
        total_reward,
        steps_taken,
        reached_goal,
        epsilon: params.epsilon,
        next_epsilon: decay_epsilon(params, params.epsilon),
    })
}

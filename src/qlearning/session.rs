//! A Q-learning training session.
use rand::prelude::*;
use serde::{Serialize, Deserialize};

use std::collections::VecDeque;

use crate::{QLearningParams, Result};
use super::agent::{self, EpisodeReport};
use super::grid_world::{Action, Cell, GridWorld, Transition};
use super::q_table::QTable;


/// Number of episode rewards kept in the history.
pub const REWARD_HISTORY_LEN: usize = 20;


/// The result of [`QLearningSession::step`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentStep {
    /// The action taken.
    pub action: Action,
    /// Where it led.
    pub transition: Transition,
    /// The report of the episode this step finished, if any.
    pub episode: Option<EpisodeReport>,
}


/// Owns a world, its Q-table and the progress of training.
///
/// Training can be driven one action at a time with [`step`](Self::step)
/// or one episode at a time with [`train_episode`](Self::train_episode).
/// The exploration rate decays once per finished episode.
///
/// ```
/// use minilab::prelude::*;
///
/// let mut session = QLearningSession::new(
///     GridWorld::example(), QLearningParams::default()
/// ).unwrap().seed(42);
/// let reports = session.train(10);
/// assert_eq!(reports.len(), 10);
/// assert_eq!(session.episode(), 10);
/// assert!(session.epsilon() < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct QLearningSession {
    world: GridWorld,
    table: QTable,
    params: QLearningParams,
    initial_epsilon: f64,
    rng: StdRng,

    agent: Cell,
    episode_reward: f64,
    episode_steps: usize,
    last_action: Option<Action>,

    episode: usize,
    reward_history: VecDeque<f64>,
}


impl QLearningSession {
    /// Construct a session with a zero table.
    /// Fails if `params` is out of range.
    pub fn new(world: GridWorld, params: QLearningParams) -> Result<Self> {
        params.validate()?;
        let table = QTable::for_world(&world);
        let agent = world.start();
        Ok(Self {
            world,
            table,
            params,
            initial_epsilon: params.epsilon,
            rng: StdRng::from_entropy(),

            agent,
            episode_reward: 0f64,
            episode_steps: 0,
            last_action: None,

            episode: 0,
            reward_history: VecDeque::with_capacity(REWARD_HISTORY_LEN),
        })
    }


    /// Seed the random number generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }


    /// Take one action of the current episode and learn from it.
    /// If it ends the episode, the agent goes back to the start.
    pub fn step(&mut self) -> AgentStep {
        let (action, transition) = agent::learn(
            &mut self.table, &self.world, self.agent, &self.params, &mut self.rng
        );
        self.agent = transition.next;
        self.episode_reward += transition.reward;
        self.episode_steps += 1;
        self.last_action = Some(action);

        let episode = (transition.done || self.episode_steps >= self.params.max_steps)
            .then(|| self.finish_episode(transition.done));

        AgentStep { action, transition, episode }
    }


    fn finish_episode(&mut self, reached_goal: bool) -> EpisodeReport {
        let epsilon = self.params.epsilon;
        let next_epsilon = agent::decay_epsilon(&self.params, epsilon);
        let report = EpisodeReport {
            total_reward: self.episode_reward,
            steps_taken: self.episode_steps,
            reached_goal,
            epsilon,
            next_epsilon,
        };

        self.params.epsilon = next_epsilon;
        self.episode += 1;
        if self.reward_history.len() == REWARD_HISTORY_LEN {
            self.reward_history.pop_front();
        }
        self.reward_history.push_back(report.total_reward);

        self.agent = self.world.start();
        self.episode_reward = 0f64;
        self.episode_steps = 0;
        report
    }


    /// Step until the current episode ends.
    pub fn train_episode(&mut self) -> EpisodeReport {
        loop {
            if let Some(report) = self.step().episode {
                return report;
            }
        }
    }


    /// Run `episodes` episodes.
    pub fn train(&mut self, episodes: usize) -> Vec<EpisodeReport> {
        (0..episodes).map(|_| self.train_episode())
            .collect()
    }


    /// Zero the table, restore the initial exploration rate
    /// and forget all episodes.
    pub fn reset(&mut self) {
        self.table.reset();
        self.params.epsilon = self.initial_epsilon;
        self.agent = self.world.start();
        self.episode_reward = 0f64;
        self.episode_steps = 0;
        self.last_action = None;
        self.episode = 0;
        self.reward_history.clear();
    }


    /// Returns the name of the algorithm.
    pub fn name(&self) -> &str {
        "Q-Learning"
    }


    /// Returns the hyperparameters as `(name, value)` pairs.
    pub fn info(&self) -> Vec<(&str, String)> {
        vec![
            ("Grid", format!("{} x {}", self.world.width(), self.world.height())),
            ("Alpha", format!("{}", self.params.alpha)),
            ("Gamma", format!("{}", self.params.gamma)),
            ("Epsilon (init.)", format!("{}", self.initial_epsilon)),
            ("Epsilon decay", format!("{}", self.params.epsilon_decay)),
            ("Epsilon min.", format!("{}", self.params.epsilon_min)),
            ("Max. steps", format!("{}", self.params.max_steps)),
        ]
    }


    /// Returns the world.
    #[inline]
    pub fn world(&self) -> &GridWorld {
        &self.world
    }


    /// Returns the Q-table.
    #[inline]
    pub fn table(&self) -> &QTable {
        &self.table
    }


    /// Returns the current hyperparameters.
    /// `epsilon` is the current exploration rate.
    #[inline]
    pub fn params(&self) -> &QLearningParams {
        &self.params
    }


    /// Returns the current exploration rate.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.params.epsilon
    }


    /// Returns the number of finished episodes.
    #[inline]
    pub fn episode(&self) -> usize {
        self.episode
    }


    /// Returns the cell of the agent.
    #[inline]
    pub fn agent(&self) -> Cell {
        self.agent
    }


    /// Returns the reward and the number of steps of the running episode.
    #[inline]
    pub fn episode_progress(&self) -> (f64, usize) {
        (self.episode_reward, self.episode_steps)
    }


    /// Returns the action taken last.
    #[inline]
    pub fn last_action(&self) -> Option<Action> {
        self.last_action
    }


    /// Iterate over the rewards of the last episodes, oldest first.
    #[inline]
    pub fn reward_history(&self) -> impl Iterator<Item = f64> + '_ {
        self.reward_history.iter().copied()
    }


    /// Returns the mean reward of the history, `None` if it is empty.
    pub fn average_reward(&self) -> Option<f64> {
        if self.reward_history.is_empty() { return None; }
        let n = self.reward_history.len() as f64;
        Some(self.reward_history.iter().sum::<f64>() / n)
    }
}

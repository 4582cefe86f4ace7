//! Tabular Q-learning on a grid world.
//!
//! ```
//! use minilab::prelude::*;
//!
//! let mut session = QLearningSession::new(
//!     GridWorld::example(),
//!     QLearningParams::default(),
//! ).unwrap().seed(0);
//!
//! session.train(300);
//! let policy = session.table().policy_grid();
//! assert_eq!(policy.len(), 25);
//! ```

/// Defines the grid world.
pub mod grid_world;
/// Defines the Q-table.
pub mod q_table;
/// Defines action selection, the update rule and a single episode.
pub mod agent;
/// Defines the training session.
pub mod session;


pub use grid_world::{Action, Cell, GridWorld, Rewards, Transition};
pub use q_table::QTable;
pub use agent::{
    EpisodeReport,
    choose_action,
    act,
    update,
    decay_epsilon,
    train_episode,
};
pub use session::{QLearningSession, AgentStep, REWARD_HISTORY_LEN};

//! This directory provides some features for experiments.
//! Measure the followings of Q-learning per episode
//! - Total reward
//! - Number of steps
//! - Exploration rate
//! - Running time

/// Defines the episode logger.
pub mod logger;

pub use logger::Logger;

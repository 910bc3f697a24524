//! Tic-tac-toe agents with a persisted per-state value cache
//!
//! This crate provides:
//! - [`State`]: a board plus one value estimate per legal move
//! - [`CpuAgent`]: random, greedy and ε-greedy move selection over a
//!   sequence-keyed [`StateCache`], saved to and loaded from JSON
//! - [`HumanAgent`]: move entry from any [`ports::MoveInput`], retried until legal
//! - A small [`game::Game`] loop and the `ttt` command-line tool

pub mod adapters;
pub mod agent;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod grid;
pub mod logging;
pub mod ports;
pub mod state;

pub use agent::{Agent, BaseAgent, CpuAgent, HumanAgent, MovePolicy};
pub use cache::{SequenceKey, SerializedAgent, SerializedState, StateCache};
pub use config::AgentConfig;
pub use error::{Error, Result};
pub use game::{Game, GameRecord};
pub use grid::{Cell, GameOutcome, Grid, Player};
pub use state::State;

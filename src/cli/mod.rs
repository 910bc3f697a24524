//! Command-line interface for playing against, training and inspecting
//! cached agents.

pub mod commands;
pub mod output;

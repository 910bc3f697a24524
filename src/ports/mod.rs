//! Ports (trait boundaries) for external dependencies.
//!
//! The agents never touch stdin or the filesystem directly. Human move entry
//! goes through [`MoveInput`] and cache persistence through
//! [`StateRepository`]; adapters in [`crate::adapters`] implement both.

pub mod input;
pub mod repository;

pub use input::MoveInput;
pub use repository::StateRepository;

//! Commonly used types and utilities for ease of import.

pub use crate::{Board, BoardError, Cell, Command, CommandOutcome, GameSession, LifecycleState, Player, Snapshot, StatusSink};

#[cfg(feature = "std")]
pub use crate::{cli::render, init_logging, SharedSession};

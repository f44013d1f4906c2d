//! Port contracts for the board's external collaborators.
//!
//! Ports define infrastructure-agnostic interfaces used by the board
//! controllers and seeding flow.

pub mod collaborators;

pub use collaborators::{
    BoardSeed, CollaboratorError, CollaboratorResult, TaskCreator, TaskRemover, TaskSource,
    TaskUpdater,
};

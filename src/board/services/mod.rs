//! Application services orchestrating board state and collaborators.

mod drag;
mod quick_create;

pub use drag::{DragTransitionService, DropOutcome, DropRequest};
pub use quick_create::{QuickCreateService, SubmitOutcome};

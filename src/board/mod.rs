//! Task board engine: columns, drag transitions, and quick-creation.
//!
//! The board renders work items grouped by status into four fixed
//! columns, applies drag-and-drop status transitions optimistically with
//! rollback on persistence failure, stages per-column quick-create
//! drafts, and narrows the visible set with pure project/assignee
//! filters. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The shared task collection in [`store`]
//! - Orchestration services in [`services`]
//!
//! The store is seeded once from a [`ports::TaskSource`]; the services
//! mutate it directly and delegate persistence to the update and create
//! collaborators, reverting or preserving drafts on failure. Nothing a
//! collaborator reports is fatal to the board.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod store;

//! Eames: task board engine for the agency operations dashboard.
//!
//! This crate is the headless core of the dashboard's Kanban view: the
//! state and transition logic behind status columns, drag-and-drop moves,
//! and inline quick-creation. Rendering, routing, authentication, and the
//! persistence schema live elsewhere and are reached through narrow
//! collaborator traits.
//!
//! # Architecture
//!
//! Eames follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (stand-in backends)
//!
//! # Modules
//!
//! - [`board`]: Column state, drag transitions, quick-create, filtering

pub mod board;

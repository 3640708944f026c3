//! Core fetch orchestration for a paginated SWAPI character browser.
//!
//! This crate owns the network-facing half of the application: a typed HTTP
//! client over the SWAPI REST schema, the orchestration that joins paginated
//! character results with their resolved homeworlds and filmographies, and
//! the paginated feed state machine a list consumer drives. Presentation,
//! rendering, and navigation live outside this crate and consume these
//! modules through their async operations and value types.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;

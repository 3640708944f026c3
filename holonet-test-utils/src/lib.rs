//! Shared test utilities for the holonet workspace.
//!
//! Provides a mock-server test setup, fixture factories for the upstream
//! entity types, and mock endpoint builders that assert expected request
//! counts.

pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use error::TestError;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{fixtures::factory, TestError, TestSetup};
}

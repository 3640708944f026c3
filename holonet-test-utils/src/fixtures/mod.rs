//! Test fixture modules for entity data and HTTP mock creation.
//!
//! - `factory` - upstream entity records populated with standard test data
//! - `mockito` - mock HTTP endpoints that verify expected request counts

pub mod factory;
pub mod mockito;

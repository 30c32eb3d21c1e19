//! Common test utilities and infrastructure
//!
//! Fixtures and helpers shared by the router-level test suites.

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{TestApp, TestHelpers};

//! Service tests for the conference server
//!
//! This module contains tests for all real service implementations.

pub mod helpers;

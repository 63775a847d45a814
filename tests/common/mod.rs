//! Common test infrastructure for betafeed tests
//!
//! This module provides shared constants, builders, and helper functions
//! to reduce duplication across test files.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Modules
//!
//! - `constants`: Slugs, version strings, tag names, test data
//! - `builders`: Fluent builder for tag listing JSON bodies
//! - `mock_server`: Wiremock setup helpers for the tag listing endpoint
//! - `assertions`: Semantic assertion functions for update offers
//! - `fixtures`: YAML fixture loading helpers
//! - `host_helpers`: Plugin descriptors on disk and host capability doubles

// Allow unused code in test infrastructure - these are scaffolded for future tests
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod builders;
pub mod constants;
pub mod mock_server;

// Re-export all public items for convenience
pub use assertions::*;
pub use builders::*;
pub use constants::*;
pub use fixtures::*;
pub use host_helpers::*;
pub use mock_server::*;

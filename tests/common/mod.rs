//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Relay connection helpers
//! - Test server construction
//! - Custom assertion macros

pub mod relay_helpers;
pub mod server_helpers;

pub use relay_helpers::*;
pub use server_helpers::*;

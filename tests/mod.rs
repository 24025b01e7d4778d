//! Test suite for the HTH server
//!
//! This module organizes all tests

pub mod common;

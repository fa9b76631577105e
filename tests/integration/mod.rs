//! Integration tests for riddlerun
//!
//! These tests drive the game through its public API, render it to a test
//! backend and run the binary.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod properties;
pub mod render;
pub mod session_flow;

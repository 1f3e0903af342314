//! Common utilities for sprig.
//!
//! This crate provides shared infrastructure used by the sprig front ends:
//! - **Warning System** - colored terminal output, printed once per message

pub mod warning;

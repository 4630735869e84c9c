//! Articula CLI library
//!
//! Command definitions and output helpers behind the `articula` binary.

pub mod cli;
pub mod commands;
pub mod utils;

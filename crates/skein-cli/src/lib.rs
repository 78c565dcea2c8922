//! Library surface of the skein CLI.
//!
//! Exposed as a library so integration tests can exercise argument parsing,
//! config merging, and error conversion without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

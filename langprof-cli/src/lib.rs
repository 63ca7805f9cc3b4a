//! langprof CLI library
//!
//! This library provides the command-line interface for inspecting and
//! applying langprof language profiles.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod profile_source;

pub use error::{CliError, CliResult};

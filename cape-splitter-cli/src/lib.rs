//! cape-split CLI library
//!
//! This library provides the command-line interface for splitting document
//! batches into sentence-aligned groups and word-balanced chunks.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

//! CLI module for tooldir - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for printing the catalog,
//! plus the plain-text renderers they share.

pub mod commands;
pub mod output;

pub use commands::Cli;

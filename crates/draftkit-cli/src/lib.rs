//! Command-line interface for Draftkit.
//!
//! # Modules
//!
//! - [`cli`]: clap argument and subcommand definitions
//! - [`config`]: [`DraftkitConfig`] loading from file, environment and defaults
//! - [`app`]: [`DraftkitCli`], which runs a parsed command line
//! - `*_handlers`: one module per command group
//! - [`io`]: input reading and JSON rendering

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod draft_handlers;
pub mod form_handlers;
pub mod io;
pub mod taxonomy_handlers;
pub mod titles_handlers;

pub use app::DraftkitCli;
pub use cli::CliArgs;
pub use config::DraftkitConfig;

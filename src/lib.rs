//! # env-secrets
//!
//! A command-line tool for uploading `.env` secrets to a GitHub repository.
//!
//! This library provides functionality to:
//! - Parse `.env`-style files into key/value pairs
//! - Upload each pair as a repository secret via the `gh` CLI
//! - Fall back to an interactive prompt loop when no file is present
//!
//! ## Modules
//!
//! - [`cli`] - Command-line argument parsing
//! - [`env_file`] - Lazy `.env` file parsing
//! - [`github`] - `gh` subprocess invocation for secret writes
//! - [`app`] - Mode selection and the upload loop
//! - [`app_deps`] - Dependency seams for testing
//! - [`prompt`] - Terminal prompting, including hidden value input
//! - [`error`] - Error formatting utilities
//! - [`errors`] - Structured error types
//! - [`constants`] - Application constants

pub mod app;
pub mod app_deps;
pub mod cli;
pub mod constants;
pub mod env_file;
pub mod error;
pub mod errors;
pub mod github;
pub mod prompt;

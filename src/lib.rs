//! # salah-cli library
//!
//! Internal library for the salah-cli binary, split out so the logic is
//! testable behind a thin CLI dispatch layer.
//!
//! ## Architecture
//!
//! - **`args`**: command-line parsing into a [`args::CliAction`]
//! - **`config`**: JSON settings with strict decoding, validation, atomic
//!   persistence, and interactive setup
//! - **`params`**: translation of settings into the `salah` crate's
//!   calculation parameters
//! - **`prayers`**: daily schedule retrieval and next/current-prayer
//!   resolution against an injected clock
//! - **`display`**: countdowns, highlighting, and the rendered output lines
//! - **`commands`**: one submodule per CLI command
//! - **`logger`**: structured diagnostic output macros

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod clock;
pub mod commands;
pub mod config;
pub mod display;
pub mod params;
pub mod prayers;

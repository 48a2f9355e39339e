//! Command line front end for the checkers engine
//!
//! This crate provides:
//! - Loading boards from JSON files and reporting moves
//! - TOML configuration for search depth, analysis policy and logging
//! - A self-play game runner for pitting engines against each other
//!
//! # Usage
//!
//! ```bash
//! # Which black move turned before.json into after.json?
//! cargo run -p checkers_cli -- analyse before.json after.json black
//!
//! # Let the lookahead engine pick a white move
//! cargo run -p checkers_cli -- recommend board.json white --depth 5
//! ```

pub mod board_file;
pub mod config;
pub mod game;
pub mod logging;

pub use board_file::*;
pub use config::*;
pub use game::*;

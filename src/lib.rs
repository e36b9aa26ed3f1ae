//! Tilematch game library.
//!
//! Exposes the board engine, the move and match rules, configuration and
//! catalogs, presentation adapters, the line protocol, and random-agent
//! autoplay for use by integration tests and the binaries.

pub mod autoplay;
pub mod board;
pub mod catalog;
pub mod config;
pub mod game;
pub mod protocol;
pub mod rules;
pub mod ui;

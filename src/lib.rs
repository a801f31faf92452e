//! Tile-board Pac-Man library crate.
//!
//! [`map`] holds the board and its loaders, [`game`] the move rules and the match state
//! machine, and [`systems`] the timer-driven ghost mover and animator.

pub mod app;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod game;
pub mod input;
pub mod logging;
pub mod map;
pub mod systems;

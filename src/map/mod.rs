//! This module defines the board and how one gets built from a map file.

pub mod board;
pub mod level;
pub mod parser;
pub mod tile;

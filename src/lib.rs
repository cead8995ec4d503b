//! A terminal snake game.
//!
//! The engine (`board`, `snake`, `apple`, `game`) is independent of the
//! terminal; `session` runs it with an input actor and a clock actor, and
//! `term` provides the crossterm front end.

pub mod apple;
pub mod audio;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod render;
pub mod session;
pub mod snake;
pub mod state;
pub mod term;

pub use error::{GameError, Result};
pub use geometry::{Coords, TermInt};

//! Pac-Man simulation library crate.
//!
//! A deterministic, tile-based simulation of Pac-Man and four patrolling ghosts.
//! Build a [`game::GameStore`] and call [`game::on_time_elapsed`] once per frame.

pub mod constants;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod game;
pub mod input;
pub mod logging;
pub mod map;

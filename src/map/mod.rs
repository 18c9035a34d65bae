//! This module defines the maze and the coordinate system entities move in.

pub mod coords;
pub mod direction;
pub mod maze;

pub use coords::{is_tile_center, runs_along, screen_from_tile, screen_from_tile_coordinate, tile_from_screen};
pub use maze::{is_on_track, is_way_free_at};

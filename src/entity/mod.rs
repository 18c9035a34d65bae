//! The moving entities: Pac-Man, the ghosts, and the collision test between them.

pub mod collision;
pub mod ghost;
pub mod pacman;

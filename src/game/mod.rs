//! This module contains the game store and the tick that drives it.

pub mod events;
pub mod state;
pub mod tick;

pub use events::{GameEvent, TickEvents};
pub use state::GameStore;
pub use tick::{ghost_collides_with_pac_man, on_time_elapsed};

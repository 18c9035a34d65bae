#![allow(dead_code)]

use std::ops::Range;

use glam::IVec2;
use pacman_sim::{
    constants::MILLISECONDS_PER_FRAME,
    game::{on_time_elapsed, GameEvent, GameStore},
    map::{direction::Direction, screen_from_tile},
};

/// Runs `frames` ticks at the nominal frame rate, starting at timestamp 1.
/// Returns every event produced, in order.
pub fn simulate_frames(store: &mut GameStore, frames: u64) -> Vec<GameEvent> {
    simulate_frame_range(store, 0..frames)
}

/// Runs the ticks of frames `frames`, frame `n` happening at `1 + n * 17`.
pub fn simulate_frame_range(store: &mut GameStore, frames: Range<u64>) -> Vec<GameEvent> {
    frames
        .flat_map(|frame| on_time_elapsed(store, 1 + frame * MILLISECONDS_PER_FRAME))
        .collect()
}

/// A fresh store with Pac-Man placed on `tile`, heading `direction`.
pub fn store_with_pac_man_at(tile: IVec2, direction: Direction) -> GameStore {
    let mut store = GameStore::new();
    let pac_man = store.pac_man_mut();
    pac_man.place_at(screen_from_tile(tile));
    pac_man.head(direction);
    store
}


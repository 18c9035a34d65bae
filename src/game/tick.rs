//! The per-frame simulation step.

use strum::IntoEnumIterator;
use tracing::{debug, trace};

use crate::{
    entity::{collision::collides_with, ghost::GhostId, pacman::PacManEvent},
    game::{
        events::{GameEvent, TickEvents},
        state::GameStore,
    },
};

/// Advances the simulation to `timestamp`.
///
/// Within a tick Pac-Man moves first, then the ghosts, then collisions are
/// checked. The result depends only on the store contents and `timestamp`, so
/// replaying the same timestamps against equal stores yields equal stores.
///
/// Timestamps are expected to never decrease. Does nothing while the game is stopped.
pub fn on_time_elapsed(store: &mut GameStore, timestamp: u64) -> TickEvents {
    let mut events = TickEvents::new();
    if !store.game_running {
        return events;
    }

    trace!(timestamp, "Tick");
    store.pac_man.set_timestamp(timestamp);
    if store.pac_man.send(PacManEvent::TimeElapsed, timestamp) && store.pac_man.state().is_dead() {
        events.push(GameEvent::PacManDied);
    }

    if let Some(tile) = store.pac_man.advance(&mut store.maze) {
        let score = store.add_pill_score();
        debug!(?tile, score, "Pill eaten");
        events.push(GameEvent::PillEaten { tile, score });
    }

    for ghost in store.ghosts.iter_mut() {
        ghost.advance(&store.maze);
    }

    for id in GhostId::iter() {
        if collides_with(store.ghost(id), &store.pac_man) && ghost_collides_with_pac_man(store, id) {
            events.push(GameEvent::PacManCaught { ghost: id });
        }
    }

    events
}

/// Reports that ghost `id` has caught Pac-Man.
///
/// This is the only path by which a ghost kills Pac-Man; both the tick and
/// debug controls go through it. Returns whether Pac-Man started dying.
pub fn ghost_collides_with_pac_man(store: &mut GameStore, id: GhostId) -> bool {
    let timestamp = store.timestamp();
    let caught = store.pac_man.send(PacManEvent::CollisionWithGhost, timestamp);
    if caught {
        debug!(ghost = %id, position = ?store.pac_man.position(), timestamp, "Pac-Man caught");
    }
    caught
}

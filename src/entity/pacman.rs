//! Pac-Man entity implementation.
//!
//! Pac-Man's life cycle is an explicit transition table over [`PacManState`] and
//! [`PacManEvent`]. Movement is tile based: turns are only taken at tile centers,
//! and walls stop him dead at the center of the last open tile.

use std::str::FromStr;

use glam::IVec2;
use strum_macros::{AsRefStr, Display};
use tracing::{debug, trace};

use crate::constants::{DYING_DURATION_MS, DYING_PHASE_COUNT, DYING_PHASE_MS, PACMAN_SPAWN_TILE};
use crate::entity::collision::Collidable;
use crate::map::direction::Direction;
use crate::map::maze::Maze;
use crate::map::{is_on_track, is_tile_center, runs_along, screen_from_tile, tile_from_screen};

/// Pac-Man's life-cycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum PacManState {
    Alive,
    /// Caught by a ghost; the death animation is playing.
    Dying { since: u64 },
    /// The death animation has finished. Only a revive leaves this state.
    Dead { since: u64 },
}

/// Events driving Pac-Man's life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PacManEvent {
    CollisionWithGhost,
    /// Sent once per tick so timers can expire.
    TimeElapsed,
    Revive,
}

impl PacManState {
    /// The transition table. `None` means the event is ignored in this state.
    pub const fn transition(self, event: PacManEvent, timestamp: u64) -> Option<PacManState> {
        match (self, event) {
            (PacManState::Alive, PacManEvent::CollisionWithGhost) => Some(PacManState::Dying { since: timestamp }),
            (PacManState::Alive, PacManEvent::TimeElapsed) => None,
            (PacManState::Alive, PacManEvent::Revive) => None,

            (PacManState::Dying { .. }, PacManEvent::CollisionWithGhost) => None,
            (PacManState::Dying { since }, PacManEvent::TimeElapsed) => {
                if timestamp.saturating_sub(since) > DYING_DURATION_MS {
                    Some(PacManState::Dead { since })
                } else {
                    None
                }
            }
            (PacManState::Dying { .. }, PacManEvent::Revive) => None,

            (PacManState::Dead { .. }, PacManEvent::CollisionWithGhost) => None,
            (PacManState::Dead { .. }, PacManEvent::TimeElapsed) => None,
            (PacManState::Dead { .. }, PacManEvent::Revive) => Some(PacManState::Alive),
        }
    }

    pub const fn is_alive(self) -> bool {
        matches!(self, PacManState::Alive)
    }

    pub const fn is_dying(self) -> bool {
        matches!(self, PacManState::Dying { .. })
    }

    pub const fn is_dead(self) -> bool {
        matches!(self, PacManState::Dead { .. })
    }

    /// The timestamp Pac-Man was caught at, if he has been.
    pub const fn died_at(self) -> Option<u64> {
        match self {
            PacManState::Alive => None,
            PacManState::Dying { since } | PacManState::Dead { since } => Some(since),
        }
    }
}

/// The player character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacMan {
    position: IVec2,
    velocity: IVec2,
    /// The direction currently travelled.
    direction: Direction,
    /// The direction the player asked for, taken at the next tile center that allows it.
    next_direction: Direction,
    state: PacManState,
    /// The last tick timestamp seen.
    timestamp: u64,
    spawn_tile: IVec2,
}

impl Default for PacMan {
    fn default() -> Self {
        Self::new(PACMAN_SPAWN_TILE, Direction::Left)
    }
}

impl Collidable for PacMan {
    fn position(&self) -> IVec2 {
        self.position
    }
}

impl PacMan {
    /// Creates a living Pac-Man at the center of `spawn_tile`, heading `direction`.
    pub fn new(spawn_tile: IVec2, direction: Direction) -> Self {
        Self {
            position: screen_from_tile(spawn_tile),
            velocity: direction.velocity(),
            direction,
            next_direction: direction,
            state: PacManState::Alive,
            timestamp: 0,
            spawn_tile,
        }
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// The tile Pac-Man is currently in.
    pub fn tile(&self) -> IVec2 {
        tile_from_screen(self.position)
    }

    pub fn velocity(&self) -> IVec2 {
        self.velocity
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn state(&self) -> PacManState {
        self.state
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn spawn_tile(&self) -> IVec2 {
        self.spawn_tile
    }

    pub fn died_at(&self) -> Option<u64> {
        self.state.died_at()
    }

    /// The current frame of the death animation, derived from the time since death.
    ///
    /// Always 0 while alive, and the final frame once dead.
    pub fn dying_phase(&self) -> u64 {
        match self.state {
            PacManState::Alive => 0,
            PacManState::Dying { since } => {
                (self.timestamp.saturating_sub(since) / DYING_PHASE_MS).min(DYING_PHASE_COUNT - 1)
            }
            PacManState::Dead { .. } => DYING_PHASE_COUNT - 1,
        }
    }

    /// Moves Pac-Man to a screen position, keeping his heading.
    ///
    /// The position must be on track in the classic layout and his direction must
    /// run along it; otherwise nothing changes and `false` is returned.
    pub fn place_at(&mut self, position: IVec2) -> bool {
        if !is_on_track(position) || !runs_along(position, self.direction) {
            debug!(?position, direction = %self.direction, "Rejected Pac-Man placement");
            return false;
        }

        self.position = position;
        if self.state.is_alive() {
            self.velocity = self.direction.velocity();
        }
        true
    }

    /// Sets both the travelled and the queued direction.
    ///
    /// Between two tile centers only a reversal can take effect at once; any other
    /// direction is queued for the next center and `false` is returned.
    pub fn head(&mut self, direction: Direction) -> bool {
        if !runs_along(self.position, direction) {
            self.queue_direction(direction);
            return false;
        }

        self.direction = direction;
        self.next_direction = direction;
        if self.state.is_alive() {
            self.velocity = direction.velocity();
        }
        true
    }

    /// Queues a direction to turn into at the next opportunity.
    pub fn queue_direction(&mut self, direction: Direction) {
        self.next_direction = direction;
    }

    /// Maps an already-decoded key name to a queued direction.
    ///
    /// Returns whether the key was recognised; unknown keys leave Pac-Man untouched.
    pub fn set_pressed_key(&mut self, key: &str) -> bool {
        match Direction::from_str(key) {
            Ok(direction) => {
                trace!(key, %direction, "Queued direction");
                self.queue_direction(direction);
                true
            }
            Err(_) => {
                trace!(key, "Ignoring unrecognised key");
                false
            }
        }
    }

    /// Feeds an event to the life-cycle state machine, applying the side effects
    /// of any transition. Returns whether the state changed.
    pub fn send(&mut self, event: PacManEvent, timestamp: u64) -> bool {
        self.timestamp = self.timestamp.max(timestamp);

        let Some(next) = self.state.transition(event, timestamp) else {
            return false;
        };

        let (from, to): (&str, &str) = (self.state.as_ref(), next.as_ref());
        debug!(%event, from, to, timestamp, "Pac-Man state transition");
        match next {
            PacManState::Dying { .. } => {
                self.velocity = IVec2::ZERO;
            }
            PacManState::Alive => {
                self.position = screen_from_tile(self.spawn_tile);
                self.velocity = self.direction.velocity();
            }
            PacManState::Dead { .. } => {}
        }
        self.state = next;
        true
    }

    pub(crate) fn set_timestamp(&mut self, timestamp: u64) {
        self.timestamp = timestamp;
    }

    /// Advances Pac-Man by one tick through `maze`, eating the pill he lands on.
    ///
    /// Returns the tile of the pill eaten, if any. Does nothing unless alive.
    pub(crate) fn advance(&mut self, maze: &mut Maze) -> Option<IVec2> {
        if !self.state.is_alive() {
            return None;
        }

        if is_tile_center(self.position) {
            let tile = self.tile();
            // A queued turn wins over stopping at a wall.
            if self.next_direction != self.direction && maze.is_way_free_at(tile + self.next_direction.as_ivec2()) {
                trace!(from = %self.direction, to = %self.next_direction, ?tile, "Pac-Man turns");
                self.direction = self.next_direction;
                self.velocity = self.direction.velocity();
            } else if !maze.is_way_free_at(tile + self.direction.as_ivec2()) {
                if self.velocity != IVec2::ZERO {
                    trace!(direction = %self.direction, ?tile, "Pac-Man stopped by a wall");
                }
                self.velocity = IVec2::ZERO;
            } else {
                self.velocity = self.direction.velocity();
            }
        }

        self.position += self.velocity;

        if !is_tile_center(self.position) {
            return None;
        }
        let tile = self.tile();
        maze.consume_pill_at(tile).consumed.then_some(tile)
    }
}

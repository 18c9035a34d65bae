//! Ghost entity implementation.
//!
//! Ghosts patrol back and forth inside a rectangular box, reversing when they
//! reach an edge of it or run into a wall. Their scatter/chase phase is derived
//! from the clock and never stored.

use glam::IVec2;
use strum_macros::{AsRefStr, Display, EnumIter};
use tracing::{debug, trace};

use crate::constants::{GHOST_PHASE_MS, GHOST_PHASE_OFFSET_MS};
use crate::entity::collision::Collidable;
use crate::map::direction::Direction;
use crate::map::maze::Maze;
use crate::map::{is_on_track, is_tile_center, runs_along, screen_from_tile, tile_from_screen};

/// The four ghosts, in ghost-number order (also the order of `GhostId::iter()`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum GhostId {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl GhostId {
    pub const ALL: [GhostId; 4] = [GhostId::Blinky, GhostId::Pinky, GhostId::Inky, GhostId::Clyde];

    /// The ghost's number (0-3), which offsets its phase clock.
    pub const fn number(self) -> u8 {
        match self {
            GhostId::Blinky => 0,
            GhostId::Pinky => 1,
            GhostId::Inky => 2,
            GhostId::Clyde => 3,
        }
    }

    pub const fn index(self) -> usize {
        self.number() as usize
    }

    /// Display colour; purely cosmetic.
    pub const fn color(self) -> &'static str {
        match self {
            GhostId::Blinky => "red",
            GhostId::Pinky => "pink",
            GhostId::Inky => "cyan",
            GhostId::Clyde => "orange",
        }
    }
}

/// The two alternating behavioural phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum GhostPhase {
    Scatter,
    /// Reserved for pursuit behaviour; ghosts currently patrol in both phases.
    Chase,
}

/// The phase of ghost `ghost_number` at `timestamp`.
pub const fn ghost_phase(timestamp: u64, ghost_number: u8) -> GhostPhase {
    let clock = timestamp + ghost_number as u64 * GHOST_PHASE_OFFSET_MS;
    if (clock / GHOST_PHASE_MS) % 2 == 0 {
        GhostPhase::Scatter
    } else {
        GhostPhase::Chase
    }
}

/// The rectangle a ghost patrols, in screen coordinates (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatrolBounds {
    pub min: IVec2,
    pub max: IVec2,
}

impl PatrolBounds {
    /// Bounds spanning the centers of tiles `min` through `max`.
    pub const fn from_tiles(min: IVec2, max: IVec2) -> Self {
        Self {
            min: screen_from_tile(min),
            max: screen_from_tile(max),
        }
    }

    pub fn contains(&self, position: IVec2) -> bool {
        position.cmpge(self.min).all() && position.cmple(self.max).all()
    }
}

/// A patrolling ghost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ghost {
    id: GhostId,
    position: IVec2,
    velocity: IVec2,
    bounds: PatrolBounds,
}

impl Collidable for Ghost {
    fn position(&self) -> IVec2 {
        self.position
    }
}

impl Ghost {
    pub fn new(id: GhostId, position: IVec2, velocity: IVec2, bounds: PatrolBounds) -> Self {
        Self {
            id,
            position,
            velocity,
            bounds,
        }
    }

    /// The ghost at its fixed starting point, patrolling its fixed box.
    pub fn spawn(id: GhostId) -> Self {
        let (tile, direction, bounds) = match id {
            GhostId::Blinky => (
                IVec2::new(1, 29),
                Direction::Right,
                PatrolBounds::from_tiles(IVec2::new(1, 1), IVec2::new(26, 30)),
            ),
            GhostId::Pinky => (
                IVec2::new(15, 20),
                Direction::Right,
                PatrolBounds::from_tiles(IVec2::new(15, 1), IVec2::new(26, 29)),
            ),
            GhostId::Inky => (
                IVec2::new(21, 23),
                Direction::Down,
                PatrolBounds::from_tiles(IVec2::new(1, 17), IVec2::new(30, 26)),
            ),
            GhostId::Clyde => (
                IVec2::new(7, 5),
                Direction::Right,
                PatrolBounds::from_tiles(IVec2::new(1, 1), IVec2::new(26, 30)),
            ),
        };
        Self::new(id, screen_from_tile(tile), direction.velocity(), bounds)
    }

    pub fn id(&self) -> GhostId {
        self.id
    }

    pub fn ghost_number(&self) -> u8 {
        self.id.number()
    }

    pub fn color(&self) -> &'static str {
        self.id.color()
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn velocity(&self) -> IVec2 {
        self.velocity
    }

    pub fn bounds(&self) -> PatrolBounds {
        self.bounds
    }

    /// The ghost's phase at `timestamp`.
    pub fn phase(&self, timestamp: u64) -> GhostPhase {
        ghost_phase(timestamp, self.ghost_number())
    }

    /// The direction the ghost faces, derived from its velocity.
    /// A stationary ghost faces up.
    pub fn direction(&self) -> Direction {
        Direction::from_velocity(self.velocity).unwrap_or(Direction::Up)
    }

    /// Moves the ghost to a screen position, keeping its velocity.
    ///
    /// Refused, returning `false`, unless the position is on track in the classic
    /// layout, inside the patrol bounds, and lies along the current velocity.
    pub fn place_at(&mut self, position: IVec2) -> bool {
        let aligned = Direction::from_velocity(self.velocity).is_none_or(|direction| runs_along(position, direction));
        if !is_on_track(position) || !self.bounds.contains(position) || !aligned {
            debug!(ghost = %self.id, ?position, "Rejected ghost placement");
            return false;
        }

        self.position = position;
        true
    }

    /// Sets the ghost moving `direction` at the standard speed.
    ///
    /// Between two tile centers only the axis joining them is allowed; other
    /// directions are refused and `false` is returned.
    pub fn head(&mut self, direction: Direction) -> bool {
        if !runs_along(self.position, direction) {
            return false;
        }

        self.velocity = direction.velocity();
        true
    }

    /// Stops the ghost in place.
    pub fn halt(&mut self) {
        self.velocity = IVec2::ZERO;
    }

    /// Advances the ghost by one tick.
    pub(crate) fn advance(&mut self, maze: &Maze) {
        if self.velocity == IVec2::ZERO {
            return;
        }

        if is_tile_center(self.position) {
            let ahead = tile_from_screen(self.position) + self.velocity.signum();
            if !maze.is_way_free_at(ahead) {
                trace!(ghost = %self.id, ?ahead, "Ghost reverses at a wall");
                self.velocity = -self.velocity;
            }
        }

        let next = self.position + self.velocity;
        let PatrolBounds { min, max } = self.bounds;
        if (self.velocity.x > 0 && next.x >= max.x) || (self.velocity.x < 0 && next.x <= min.x) {
            self.velocity.x = -self.velocity.x;
        }
        if (self.velocity.y > 0 && next.y >= max.y) || (self.velocity.y < 0 && next.y <= min.y) {
            self.velocity.y = -self.velocity.y;
        }
        self.position = next.clamp(min, max);
    }
}

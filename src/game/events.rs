use glam::IVec2;
use smallvec::SmallVec;

use crate::entity::ghost::GhostId;

/// Something observable that happened during a tick.
///
/// The tick returns these so a presentation layer can react without watching
/// individual fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Pac-Man ate the basic pill on `tile`; `score` is the new total.
    PillEaten { tile: IVec2, score: u32 },
    /// A ghost caught Pac-Man, who is now dying.
    PacManCaught { ghost: GhostId },
    /// Pac-Man's death animation finished.
    PacManDied,
}

/// The events of a single tick. Rarely more than a couple.
pub type TickEvents = SmallVec<[GameEvent; 4]>;

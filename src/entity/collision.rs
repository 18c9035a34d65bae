use glam::IVec2;

use crate::constants::COLLISION_DISTANCE;
use crate::entity::{ghost::Ghost, pacman::PacMan};

/// Trait for entities that can participate in collision detection.
pub trait Collidable {
    /// Returns the current screen position of this entity.
    fn position(&self) -> IVec2;

    /// Checks if this entity overlaps another entity.
    fn is_colliding_with(&self, other: &dyn Collidable) -> bool {
        positions_overlap(self.position(), other.position())
    }
}

/// Two entities overlap when they are closer than [`COLLISION_DISTANCE`] on both axes.
fn positions_overlap(a: IVec2, b: IVec2) -> bool {
    let delta = (a - b).abs();
    delta.x < COLLISION_DISTANCE && delta.y < COLLISION_DISTANCE
}

/// Whether `ghost` has caught `pac_man`.
///
/// This is a pure geometric test; reacting to a hit is up to the caller.
pub fn collides_with(ghost: &Ghost, pac_man: &PacMan) -> bool {
    ghost.is_colliding_with(pac_man)
}

use glam::IVec2;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::constants::SPEED;

/// The four cardinal directions.
///
/// Parsing accepts the decoded key names a UI layer is likely to hand over
/// (`"up"`, `"ArrowUp"`, `"w"`, ...), case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(to_string = "UP", serialize = "ArrowUp", serialize = "w")]
    Up,
    #[strum(to_string = "DOWN", serialize = "ArrowDown", serialize = "s")]
    Down,
    #[default]
    #[strum(to_string = "LEFT", serialize = "ArrowLeft", serialize = "a")]
    Left,
    #[strum(to_string = "RIGHT", serialize = "ArrowRight", serialize = "d")]
    Right,
}

impl Direction {
    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the direction as a unit IVec2 (screen space, y grows downwards).
    pub fn as_ivec2(self) -> IVec2 {
        self.into()
    }

    /// The per-tick velocity of an entity heading this way.
    pub fn velocity(self) -> IVec2 {
        self.as_ivec2() * SPEED
    }

    /// Recovers the direction of a velocity, horizontal motion taking precedence.
    /// Returns `None` for a stationary velocity.
    pub fn from_velocity(velocity: IVec2) -> Option<Direction> {
        match (velocity.x.signum(), velocity.y.signum()) {
            (1, _) => Some(Direction::Right),
            (-1, _) => Some(Direction::Left),
            (0, 1) => Some(Direction::Down),
            (0, -1) => Some(Direction::Up),
            _ => None,
        }
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -IVec2::Y,
            Direction::Down => IVec2::Y,
            Direction::Left => -IVec2::X,
            Direction::Right => IVec2::X,
        }
    }
}

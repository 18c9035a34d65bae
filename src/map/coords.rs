//! Conversions between tile indices and screen (pixel) positions.

use glam::IVec2;

use crate::constants::{HALF_TILE, TILE_SIZE};
use crate::map::direction::Direction;

/// Returns the screen coordinate of the center of tile index `t` along one axis.
pub const fn screen_from_tile_coordinate(t: i32) -> i32 {
    t * TILE_SIZE + HALF_TILE
}

/// Returns the screen position of the center of `tile`.
pub const fn screen_from_tile(tile: IVec2) -> IVec2 {
    IVec2::new(screen_from_tile_coordinate(tile.x), screen_from_tile_coordinate(tile.y))
}

/// Returns the tile containing the screen position `screen`.
pub fn tile_from_screen(screen: IVec2) -> IVec2 {
    IVec2::new(screen.x.div_euclid(TILE_SIZE), screen.y.div_euclid(TILE_SIZE))
}

/// Whether `v` lies exactly on a tile center along one axis.
const fn is_center_coordinate(v: i32) -> bool {
    v >= HALF_TILE && (v - HALF_TILE) % TILE_SIZE == 0
}

/// Whether `screen` is exactly the center of a tile.
///
/// Tile centers are the only places where entities may change direction and
/// where pills are collected.
pub const fn is_tile_center(screen: IVec2) -> bool {
    is_center_coordinate(screen.x) && is_center_coordinate(screen.y)
}

/// How far `screen` lies past the center of the tile it is in, per axis, in `0..TILE_SIZE`.
pub fn offset_from_center(screen: IVec2) -> IVec2 {
    let offset = screen.saturating_sub(IVec2::splat(HALF_TILE));
    IVec2::new(offset.x.rem_euclid(TILE_SIZE), offset.y.rem_euclid(TILE_SIZE))
}

/// Whether heading `direction` from `screen` keeps to the line between tile centers.
///
/// Always true on a tile center. Between two centers only the axis joining them works.
pub fn runs_along(screen: IVec2, direction: Direction) -> bool {
    let offset = offset_from_center(screen);
    let step = direction.as_ivec2();
    (offset.x == 0 || step.x != 0) && (offset.y == 0 || step.y != 0)
}

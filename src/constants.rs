//! This module contains all the constants used by the simulation.

use glam::{IVec2, UVec2};

/// The nominal interval between two animation frames, in milliseconds.
pub const MILLISECONDS_PER_FRAME: u64 = 17;

/// The size of each tile, in pixels.
pub const TILE_SIZE: i32 = 20;
/// Half of [`TILE_SIZE`]; the offset of a tile's center from its top-left corner.
pub const HALF_TILE: i32 = TILE_SIZE / 2;

/// Distance travelled per tick by every moving entity, in pixels.
pub const SPEED: i32 = 2;

/// The size of the game board, in tiles.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(28, 31);
pub const BOARD_WIDTH: usize = BOARD_CELL_SIZE.x as usize;
pub const BOARD_HEIGHT: usize = BOARD_CELL_SIZE.y as usize;

/// Score awarded for each basic pill.
pub const BASIC_PILL_SCORE: u32 = 10;

/// Length of one phase of Pac-Man's death animation, in milliseconds.
pub const DYING_PHASE_MS: u64 = 300;
/// Number of discrete phases in Pac-Man's death animation.
pub const DYING_PHASE_COUNT: u64 = 10;
/// Time Pac-Man spends dying before he is dead, in milliseconds.
pub const DYING_DURATION_MS: u64 = DYING_PHASE_MS * DYING_PHASE_COUNT;

/// Period of the ghosts' scatter/chase alternation, in milliseconds.
pub const GHOST_PHASE_MS: u64 = 300;
/// Per-ghost offset applied to the phase clock, so ghosts don't switch together.
pub const GHOST_PHASE_OFFSET_MS: u64 = 100;

/// Per-axis distance under which a ghost catches Pac-Man, in pixels.
pub const COLLISION_DISTANCE: i32 = TILE_SIZE / 2;

/// The tile Pac-Man spawns (and revives) on. Marked `0` in [`RAW_BOARD`].
pub const PACMAN_SPAWN_TILE: IVec2 = IVec2::new(13, 23);

/// The raw layout of the game board, as a 2D array of characters.
///
/// `#` wall, `.` pill, `o` power pill, ` ` empty, `T` tunnel mouth,
/// `=` ghost house door (a wall), `0` Pac-Man's spawn.
pub const RAW_BOARD: [&str; BOARD_HEIGHT] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "     #.##### ## #####.#     ",
    "     #.##    ==    ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "T     .   ########   .     T",
    "######.## ######## ##.######",
    "     #.## ######## ##.#     ",
    "     #.##          ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......0 .......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];

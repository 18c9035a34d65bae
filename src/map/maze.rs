//! The maze: fixed wall topology with a mutable overlay of pills.

use glam::IVec2;

use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, HALF_TILE, RAW_BOARD, SPEED, TILE_SIZE};
use crate::map::coords::offset_from_center;

/// The contents of a single maze tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MazeCell {
    Wall,
    Empty,
    BasicPill,
    /// Reserved; power pills are never consumed by the simulation.
    PowerPill,
}

impl MazeCell {
    /// Parses a single board character. Constant time, usable at compile time.
    pub const fn from_char(c: u8) -> Option<MazeCell> {
        match c {
            b'#' | b'=' => Some(MazeCell::Wall),
            b'.' => Some(MazeCell::BasicPill),
            b'o' => Some(MazeCell::PowerPill),
            b' ' | b'T' | b'0' => Some(MazeCell::Empty),
            _ => None,
        }
    }

    pub const fn is_wall(self) -> bool {
        matches!(self, MazeCell::Wall)
    }
}

/// The outcome of trying to eat whatever lies on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillConsumption {
    /// Whether a pill was removed from the maze.
    pub consumed: bool,
    /// What the tile held before the attempt; `None` outside the maze.
    pub kind: Option<MazeCell>,
}

/// The classic layout, converted at compile time.
pub const CLASSIC_MAZE: Maze = Maze::from_raw(&RAW_BOARD);

/// The maze grid, indexed `[row][column]`.
///
/// Walls never change; only pills disappear as they are eaten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: [[MazeCell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Maze {
    fn default() -> Self {
        Self::classic()
    }
}

impl Maze {
    /// The classic layout, with every pill in place.
    pub const fn classic() -> Maze {
        CLASSIC_MAZE
    }

    /// Builds a maze from a raw board layout.
    ///
    /// # Panics
    ///
    /// Panics if a row has the wrong width or contains an unknown character.
    /// When evaluated in a constant (as [`CLASSIC_MAZE`] is) this is a compile error.
    pub const fn from_raw(raw: &[&str; BOARD_HEIGHT]) -> Maze {
        let mut cells = [[MazeCell::Wall; BOARD_WIDTH]; BOARD_HEIGHT];
        let mut y = 0;
        while y < BOARD_HEIGHT {
            let row = raw[y].as_bytes();
            assert!(row.len() == BOARD_WIDTH, "board row has the wrong width");
            let mut x = 0;
            while x < BOARD_WIDTH {
                cells[y][x] = match MazeCell::from_char(row[x]) {
                    Some(cell) => cell,
                    None => panic!("unknown character in board"),
                };
                x += 1;
            }
            y += 1;
        }
        Maze { cells }
    }

    fn index(tile: IVec2) -> Option<(usize, usize)> {
        let x = usize::try_from(tile.x).ok().filter(|&x| x < BOARD_WIDTH)?;
        let y = usize::try_from(tile.y).ok().filter(|&y| y < BOARD_HEIGHT)?;
        Some((x, y))
    }

    /// Returns the cell at `tile`, or `None` outside the maze.
    pub fn cell_at(&self, tile: IVec2) -> Option<MazeCell> {
        Self::index(tile).map(|(x, y)| self.cells[y][x])
    }

    /// Whether an entity may occupy `tile`. Anything outside the maze counts as wall.
    pub fn is_way_free_at(&self, tile: IVec2) -> bool {
        self.cell_at(tile).is_some_and(|cell| !cell.is_wall())
    }

    /// Whether an entity may stand on screen position `screen`.
    ///
    /// Entities move in steps of [`SPEED`] along the lines joining the centers of
    /// open tiles. Anything off those lines would never reach a tile center again,
    /// where walls are checked, so it is not a valid position.
    pub fn is_on_track(&self, screen: IVec2) -> bool {
        let from_first_center = screen.saturating_sub(IVec2::splat(HALF_TILE));
        if from_first_center.x % SPEED != 0 || from_first_center.y % SPEED != 0 {
            return false;
        }

        let tile = IVec2::new(
            from_first_center.x.div_euclid(TILE_SIZE),
            from_first_center.y.div_euclid(TILE_SIZE),
        );
        match offset_from_center(screen).to_array() {
            [0, 0] => self.is_way_free_at(tile),
            [_, 0] => self.is_way_free_at(tile) && self.is_way_free_at(tile + IVec2::X),
            [0, _] => self.is_way_free_at(tile) && self.is_way_free_at(tile + IVec2::Y),
            _ => false,
        }
    }

    /// Eats the pill on `tile`, if there is a basic one.
    pub fn consume_pill_at(&mut self, tile: IVec2) -> PillConsumption {
        let Some((x, y)) = Self::index(tile) else {
            return PillConsumption {
                consumed: false,
                kind: None,
            };
        };

        let kind = self.cells[y][x];
        let consumed = kind == MazeCell::BasicPill;
        if consumed {
            self.cells[y][x] = MazeCell::Empty;
        }

        PillConsumption {
            consumed,
            kind: Some(kind),
        }
    }

    /// Number of basic pills still on the board.
    pub fn remaining_pills(&self) -> usize {
        self.rows()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == MazeCell::BasicPill)
            .count()
    }

    /// The rows of the grid, top to bottom, for presentation layers.
    pub fn rows(&self) -> impl Iterator<Item = &[MazeCell; BOARD_WIDTH]> {
        self.cells.iter()
    }
}

/// Whether tile `(tx, ty)` of the classic layout is open.
pub fn is_way_free_at(tx: i32, ty: i32) -> bool {
    CLASSIC_MAZE.is_way_free_at(IVec2::new(tx, ty))
}

/// Whether screen position `screen` is on track in the classic layout. See [`Maze::is_on_track`].
pub fn is_on_track(screen: IVec2) -> bool {
    CLASSIC_MAZE.is_on_track(screen)
}

use tracing::{debug, info};

use crate::{
    constants::BASIC_PILL_SCORE,
    entity::{
        ghost::{Ghost, GhostId, GhostPhase},
        pacman::{PacMan, PacManEvent},
    },
    map::maze::Maze,
};

/// The `GameStore` holds the whole simulation state.
///
/// It is mutated only by [`on_time_elapsed`](crate::game::on_time_elapsed) and
/// the few designated operations below; everything else reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStore {
    pub(crate) maze: Maze,
    pub(crate) score: u32,
    pub(crate) game_running: bool,
    pub(crate) pac_man: PacMan,
    pub(crate) ghosts: [Ghost; 4],
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore {
    /// A fresh game: the classic maze full of pills, every entity at its spawn.
    pub fn new() -> Self {
        Self {
            maze: Maze::default(),
            score: 0,
            game_running: true,
            pac_man: PacMan::default(),
            ghosts: GhostId::ALL.map(Ghost::spawn),
        }
    }

    /// The maze, including which pills are left.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_running(&self) -> bool {
        self.game_running
    }

    pub fn pac_man(&self) -> &PacMan {
        &self.pac_man
    }

    /// Pac-Man, for drivers that need to place him or queue a direction.
    pub fn pac_man_mut(&mut self) -> &mut PacMan {
        &mut self.pac_man
    }

    pub fn ghosts(&self) -> &[Ghost; 4] {
        &self.ghosts
    }

    pub fn ghost(&self, id: GhostId) -> &Ghost {
        &self.ghosts[id.index()]
    }

    pub fn ghost_mut(&mut self, id: GhostId) -> &mut Ghost {
        &mut self.ghosts[id.index()]
    }

    /// The timestamp of the last tick.
    pub fn timestamp(&self) -> u64 {
        self.pac_man.timestamp()
    }

    /// The current phase of ghost `id`.
    pub fn ghost_phase(&self, id: GhostId) -> GhostPhase {
        self.ghost(id).phase(self.timestamp())
    }

    /// Queues the direction named by an already-decoded key. Unknown keys are ignored.
    pub fn set_pressed_key(&mut self, key: &str) -> bool {
        self.pac_man.set_pressed_key(key)
    }

    /// Idles the simulation: every later tick is a no-op.
    pub fn stop_game(&mut self) {
        if self.game_running {
            info!(score = self.score, "Game stopped");
        }
        self.game_running = false;
    }

    /// Brings a dead Pac-Man back at his spawn. Does nothing in any other state.
    pub fn revive_pac_man(&mut self) -> bool {
        let timestamp = self.timestamp();
        self.pac_man.send(PacManEvent::Revive, timestamp)
    }

    /// Debug control: has ghost `id` catch Pac-Man wherever they both are.
    pub fn kill_pac_man(&mut self, id: GhostId) -> bool {
        crate::game::tick::ghost_collides_with_pac_man(self, id)
    }

    /// Credits one basic pill.
    pub(crate) fn add_pill_score(&mut self) -> u32 {
        self.score += BASIC_PILL_SCORE;
        debug!(score = self.score, "Score increased");
        self.score
    }
}

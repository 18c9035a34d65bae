use std::str::FromStr;

use crate::{
    entity::ghost::GhostId,
    error::ScriptError,
    game::GameStore,
    map::direction::Direction,
};

/// An outside request to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    MovePlayer(Direction),
    /// Debug control: the first ghost catches Pac-Man.
    KillPacMan,
    RevivePacMan,
    StopGame,
}

impl FromStr for GameCommand {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kill" => Ok(GameCommand::KillPacMan),
            "revive" => Ok(GameCommand::RevivePacMan),
            "stop" => Ok(GameCommand::StopGame),
            _ => Direction::from_str(s)
                .map(GameCommand::MovePlayer)
                .map_err(|_| ScriptError::UnknownDirection(s.to_string())),
        }
    }
}

impl GameCommand {
    /// Applies the command to `store`. Returns whether anything changed.
    pub fn apply(self, store: &mut GameStore) -> bool {
        match self {
            GameCommand::MovePlayer(direction) => store.set_pressed_key(direction.as_ref()),
            GameCommand::KillPacMan => store.kill_pac_man(GhostId::Blinky),
            GameCommand::RevivePacMan => store.revive_pac_man(),
            GameCommand::StopGame => {
                let was_running = store.is_game_running();
                store.stop_game();
                was_running
            }
        }
    }
}

use tracing::{debug, info};
use crate::core::Direction;
use crate::engine::{render_game_to_string, step, GameChangeType, GameState, GameUpdate, MoveBlocked};
use crate::level::Level;

/// Owns the live state of one play session. Callers serialize their requests;
/// every call runs to completion before the next one is issued.
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    pub fn new(level: &Level) -> GameEngine {
        info!(level = %level.name(), "starting level");
        GameEngine {
            state: GameState::from_level(level),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn level_name(&self) -> &str {
        &self.state.level_name
    }

    pub fn move_count(&self) -> u32 {
        self.state.move_count
    }

    pub fn boxes_on_goals(&self) -> usize {
        self.state.boxes_on_goals()
    }

    /// Attempts a single step, committing it only when it is legal.
    pub fn try_move(&mut self, direction: Direction) -> Result<GameChangeType, MoveBlocked> {
        match step(&self.state, direction) {
            GameUpdate::NextState(next, change) => {
                self.state = next;
                if self.is_level_complete() {
                    info!(level = %self.state.level_name, moves = self.state.move_count, "level complete");
                }
                Ok(change)
            }
            GameUpdate::Blocked(reason) => {
                debug!(?direction, %reason, "move blocked");
                Err(reason)
            }
        }
    }

    /// Returns true iff the player moved.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        self.try_move(direction).is_ok()
    }

    pub fn is_level_complete(&self) -> bool {
        self.state.is_won()
    }

    /// Discards the current session and starts `level` from scratch.
    pub fn reset(&mut self, level: &Level) {
        info!(level = %level.name(), previous_moves = self.state.move_count, "resetting level");
        self.state = GameState::from_level(level);
    }

    pub fn render(&self) -> String {
        render_game_to_string(&self.state)
    }
}

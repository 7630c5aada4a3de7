use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use crate::core::{BoundedGrid, Cell, Vec2};
use crate::level::Level;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub grid: Arc<BoundedGrid<Cell>>,
    pub player: Vec2,
    pub boxes: HashSet<Vec2>,
    pub goals: HashSet<Vec2>,
    pub move_count: u32,
    pub level_name: String,
}

impl GameState {
    /// Fresh state for `level`. Terrain is shared, every mutable set is copied.
    pub fn from_level(level: &Level) -> GameState {
        GameState {
            grid: Arc::clone(level.grid()),
            player: level.player_start(),
            boxes: level.boxes().clone(),
            goals: level.goals().clone(),
            move_count: 0,
            level_name: level.name().to_string(),
        }
    }

    pub fn terrain_at(&self, pos: &Vec2) -> Option<Cell> {
        self.grid.get(pos).copied()
    }

    pub fn is_won(&self) -> bool {
        self.boxes.is_subset(&self.goals)
    }

    pub fn boxes_on_goals(&self) -> usize {
        self.boxes.intersection(&self.goals).count()
    }
}

#[derive(Debug, Clone)]
pub enum GameUpdate {
    NextState(GameState, GameChangeType),
    Blocked(MoveBlocked),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveBlocked {
    #[error("Cannot move out of bounds")]
    OutOfBounds,
    #[error("Cannot walk into a wall")]
    Wall,
    #[error("Cannot push box out of bounds")]
    BoxOutOfBounds,
    #[error("Cannot push box into a wall")]
    BoxIntoWall,
    #[error("Cannot push box into another box")]
    BoxIntoBox,
}

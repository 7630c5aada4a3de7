mod error;
mod json_export;
mod parser;

use std::collections::HashSet;
use std::sync::Arc;
use crate::core::{BoundedGrid, Cell, Vec2};

pub use error::{LevelError, LevelErrorKind};
pub use json_export::{get_level_json, get_state_json};
pub use parser::{parse_level, parse_level_file, BUILTIN_LEVEL};

/// A parsed level. Immutable once built: the terrain is shared read-only and the
/// starting entities are handed out as references only.
#[derive(Clone, Debug)]
pub struct Level {
    grid: Arc<BoundedGrid<Cell>>,
    player_start: Vec2,
    boxes: HashSet<Vec2>,
    goals: HashSet<Vec2>,
    name: String,
}

impl Level {
    pub fn grid(&self) -> &Arc<BoundedGrid<Cell>> {
        &self.grid
    }

    pub fn player_start(&self) -> Vec2 {
        self.player_start
    }

    pub fn boxes(&self) -> &HashSet<Vec2> {
        &self.boxes
    }

    pub fn goals(&self) -> &HashSet<Vec2> {
        &self.goals
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }
}

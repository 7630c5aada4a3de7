use std::collections::HashSet;
use serde::Serialize;
use crate::core::Vec2;
use crate::engine::{render_game_to_string, GameState};
use crate::level::Level;

#[derive(Serialize, Debug)]
struct JsonBoard {
    name: String,
    width: i32,
    height: i32,
    player: Vec2,
    boxes: Vec<Vec2>,
    goals: Vec<Vec2>,
    #[serde(skip_serializing_if = "Option::is_none")]
    move_count: Option<u32>,
    complete: bool,
    rows: Vec<String>,
}

fn sorted(positions: &HashSet<Vec2>) -> Vec<Vec2> {
    let mut positions: Vec<Vec2> = positions.iter().copied().collect();
    positions.sort();
    positions
}

fn board_from_state(state: &GameState, move_count: Option<u32>) -> JsonBoard {
    JsonBoard {
        name: state.level_name.clone(),
        width: state.grid.width(),
        height: state.grid.height(),
        player: state.player,
        boxes: sorted(&state.boxes),
        goals: sorted(&state.goals),
        move_count,
        complete: state.is_won(),
        rows: render_game_to_string(state).lines().map(str::to_string).collect(),
    }
}

/// Starting layout of a level, positions as `{ "i": row, "j": column }`.
pub fn get_level_json(level: &Level) -> Result<String, serde_json::Error> {
    let initial = GameState::from_level(level);
    serde_json::to_string_pretty(&board_from_state(&initial, None))
}

pub fn get_state_json(state: &GameState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&board_from_state(state, Some(state.move_count)))
}

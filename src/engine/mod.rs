mod game_engine;
mod models;
mod render;
mod update;

pub use game_engine::GameEngine;
pub use models::{GameChangeType, GameState, GameUpdate, MoveBlocked};
pub use render::render_game_to_string;
pub use update::step;

use crate::core::Cell::{Floor, Goal, Wall};
use crate::core::Vec2;
use crate::engine::GameState;

/// Draws the board with the classic Sokoban alphabet, one line per row and no
/// trailing newline. The player glyph wins over everything at its cell, a box
/// glyph wins over bare terrain.
pub fn render_game_to_string(game: &GameState) -> String {
    let mut lines = Vec::with_capacity(game.grid.height().max(0) as usize);
    for (i, row) in game.grid.rows().enumerate() {
        let mut line = String::with_capacity(row.len());
        for (j, c) in row.iter().enumerate() {
            let pos = Vec2 {
                i: i as i32,
                j: j as i32,
            };
            let has_player = pos == game.player;
            let has_box = game.boxes.contains(&pos);
            let ch = match c {
                Wall => '#',
                Floor => if has_player { '@' } else if has_box { '$' } else { ' ' },
                Goal => if has_player { '+' } else if has_box { '*' } else { '.' },
            };
            line.push(ch);
        }
        lines.push(line);
    }
    lines.join("\n")
}

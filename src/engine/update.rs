use crate::core::Direction;
use crate::engine::{GameChangeType, GameState, GameUpdate, MoveBlocked};

/// Resolves one player step. The input state is never touched; a blocked move
/// yields no state at all, so a push either happens completely or not at all.
pub fn step(game: &GameState, direction: Direction) -> GameUpdate {
    let dir = direction.delta();
    let dest = game.player + dir;

    match game.terrain_at(&dest) {
        None => return GameUpdate::Blocked(MoveBlocked::OutOfBounds),
        Some(cell) if !cell.is_walkable() => return GameUpdate::Blocked(MoveBlocked::Wall),
        Some(_) => {}
    }

    let pushing = game.boxes.contains(&dest);
    let mut new_state = game.clone();

    if pushing {
        let beyond = dest + dir;
        match game.terrain_at(&beyond) {
            None => return GameUpdate::Blocked(MoveBlocked::BoxOutOfBounds),
            Some(cell) if !cell.is_walkable() => return GameUpdate::Blocked(MoveBlocked::BoxIntoWall),
            Some(_) if game.boxes.contains(&beyond) => {
                return GameUpdate::Blocked(MoveBlocked::BoxIntoBox);
            }
            Some(_) => {}
        }

        new_state.boxes.remove(&dest);
        new_state.boxes.insert(beyond);
    }

    new_state.player = dest;
    new_state.move_count += 1;

    GameUpdate::NextState(
        new_state,
        if pushing {
            GameChangeType::PlayerAndBoxMove
        } else {
            GameChangeType::PlayerMove
        },
    )
}

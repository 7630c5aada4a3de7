use serde::Serialize;

/// Static terrain of a single grid cell. Boxes and the player are never stored here.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Wall,
    Floor,
    Goal,
}

/// A grid position: `i` is the row (growing downwards), `j` is the column.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
    Restart,
}

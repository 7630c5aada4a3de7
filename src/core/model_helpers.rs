use std::ops::Add;
use crate::core::{Cell, Direction, Vec2};

impl Vec2 {
    pub fn new(i: i32, j: i32) -> Vec2 {
        Vec2 { i, j }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit step in `[row][col]` space.
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

impl Cell {
    pub fn is_walkable(self) -> bool {
        self != Cell::Wall
    }
}

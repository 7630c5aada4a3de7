use crate::core::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent.
/// `extent.i` is the number of rows, `extent.j` the number of columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub extent: Vec2,
}

impl BoundsOriginRoot {
    pub fn new(height: i32, width: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Vec2 { i: height, j: width },
        }
    }

    pub fn height(&self) -> i32 {
        self.extent.i
    }

    pub fn width(&self) -> i32 {
        self.extent.j
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.i < self.extent.i && pos.j >= 0 && pos.j < self.extent.j
    }

    pub fn area(&self) -> i32 {
        self.extent.i * self.extent.j
    }
}

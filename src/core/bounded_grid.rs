use crate::core::bounds::BoundsOriginRoot;
use crate::core::Vec2;

/// Row-major flat storage for a rectangular grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn new(bounds: BoundsOriginRoot, default: T) -> Self
    where
        T: Clone,
    {
        let cells = vec![default; bounds.area().max(0) as usize];
        BoundedGrid {
            bounds,
            cells,
        }
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.bounds.width().max(1) as usize)
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[(index.i * self.bounds.width() + index.j) as usize]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.cells[(index.i * self.bounds.width() + index.j) as usize]
    }
}

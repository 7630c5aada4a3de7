mod bounded_grid;
mod bounds;
mod consts;
mod model_helpers;
mod models;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use models::{Cell, Direction, UserAction, Vec2};

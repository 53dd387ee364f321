mod point;
mod cell;
mod sparse_grid;
mod life;
mod patterns;
mod soup;

pub use point::Point;
pub use cell::Cell;
pub use sparse_grid::SparseGrid;
pub use life::Life;
pub use patterns::{Pattern, presets};
pub use soup::random_soup;

pub mod grid;
pub mod object;

pub use grid::Grid;
pub use object::Object;

mod elementary;
mod grid;

pub use elementary::Ruleset;
pub use grid::Grid;

pub mod core;
pub mod detect;
pub mod solver;
pub mod io;
pub mod eval;

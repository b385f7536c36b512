pub mod task;
pub mod predict;

pub use task::{Task, TestCase, TrainPair};

pub mod alphabet;
pub mod error;
pub mod grid;
pub mod mask;
pub mod scoring;
pub mod seq;
pub mod solver;

pub use alphabet::Symbol;
pub use error::{MsaError, MsaResult};
pub use seq::Sequence;
pub use solver::{solve, solve_sequences, solve_with, Solution, SolveOptions, Strategy};

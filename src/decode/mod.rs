//! Solver output handling and pairing reconstruction

pub mod decoder;
pub mod solution;

pub use decoder::Decoder;
pub use solution::{load_solution_from_file, parse_solution_from_string, SolverSolution};

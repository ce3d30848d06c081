//! Non-crossing bipartite wiring as SAT
//!
//! This library reduces the non-crossing wiring problem (place `n`
//! components on each side of a board so that every matrix-mandated
//! connection can be drawn without two wires crossing) to a DIMACS CNF
//! instance for an external SAT solver, and decodes the solver's
//! satisfying assignment back into a per-position pairing.

pub mod config;
pub mod decode;
pub mod error;
pub mod sat;
pub mod utils;
pub mod wiring;

pub use config::Settings;
pub use decode::{Decoder, SolverSolution};
pub use error::WiringError;
pub use sat::{Cnf, Encoder, VariableScheme};
pub use wiring::{ConnectivityMatrix, Pairing};

use anyhow::Result;

/// Encode a connectivity matrix into a CNF instance
pub fn encode_instance(matrix: &ConnectivityMatrix) -> Result<Cnf> {
    Encoder::for_matrix(matrix).encode(matrix)
}

/// Decode a solver's true-literal set for an instance of the given size
pub fn decode_solution(size: usize, solution: &SolverSolution) -> Result<Pairing> {
    Decoder::new(VariableScheme::new(size)).decode(solution)
}

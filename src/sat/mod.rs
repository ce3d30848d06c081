//! SAT encoding components for the wiring problem

pub mod clauses;
pub mod dimacs;
pub mod encoder;
pub mod variables;

pub use clauses::{Clause, Cnf};
pub use dimacs::{dimacs_to_string, save_dimacs_to_file, write_dimacs};
pub use encoder::{Encoder, EncodingStatistics};
pub use variables::VariableScheme;

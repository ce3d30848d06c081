//! Wiring problem domain types

pub mod matrix;
pub mod pairing;

pub use matrix::{
    create_example_instances, load_instance_from_file, parse_instance_from_string,
    ConnectivityMatrix,
};
pub use pairing::{save_pairing_to_file, Pairing, PositionPair};

//! Configuration management for the wiring encoder and decoder

pub mod settings;

pub use settings::{
    CliOverrides, DecodeConfig, InputConfig, OutputConfig, OutputFormat, Settings,
};

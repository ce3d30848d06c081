//! Typed failures for the encoding and decoding pipeline

use thiserror::Error;

/// Errors produced by the wiring encoder and decoder
///
/// Every failure here is fatal for the operation that raised it: the
/// pipeline is a chain of single-shot transforms with no retry or
/// fallback behavior.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WiringError {
    /// A component or position index outside `[0, n)` was passed to the
    /// variable scheme. No partial CNF is emitted when this fires.
    #[error("index {index} out of range for instance size {size}")]
    Range { index: usize, size: usize },

    /// A connectivity matrix entry that is neither 0 nor 1, caught while
    /// generating the singleton clauses.
    #[error("connectivity matrix entry ({row}, {col}) is {value}, must be 0 or 1")]
    Matrix { row: usize, col: usize, value: u8 },

    /// An instance file with no rows.
    #[error("instance has no rows")]
    EmptyInstance,

    /// A matrix row whose width differs from the row count.
    #[error("row {row} has width {width}, expected {size} (matrix must be square)")]
    Ragged { row: usize, width: usize, size: usize },

    /// The solver output does not describe one left and one right
    /// component per position. Signals a malformed or non-satisfying
    /// solution rather than mispairing silently.
    #[error("position {position} has {found} {side} component(s), expected exactly 1")]
    Alignment {
        position: usize,
        side: Side,
        found: usize,
    },
}

/// Which side of the wiring board an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

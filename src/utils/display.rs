//! Display and output formatting utilities

use crate::wiring::{ConnectivityMatrix, Pairing};

/// Console rendering for pairings and instances
pub struct PairingFormatter;

impl PairingFormatter {
    /// Format a decoded pairing as a small table
    pub fn format_pairing(pairing: &Pairing) -> String {
        let mut output = String::new();

        output.push_str("Position | Left | Right\n");
        output.push_str("---------|------|------\n");
        for (position, pair) in pairing.pairs().iter().enumerate() {
            output.push_str(&format!(
                "{:8} | {:4} | {:5}\n",
                position + 1,
                pair.left_component,
                pair.right_component
            ));
        }

        output
    }

    /// Format a connectivity matrix in instance notation
    pub fn format_matrix(matrix: &ConnectivityMatrix) -> String {
        let n = matrix.size();
        let mut output = String::new();

        for row in 0..n {
            for col in 0..n {
                output.push(if matrix.get(row, col) == 1 { 't' } else { 'f' });
            }
            output.push('\n');
        }

        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
